use crate::models::expense::Expense;
use std::fs;
use std::io::ErrorKind;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads the whole expense file and returns the records in their stored
/// order. A missing file is a fresh install, not an error. Unparseable
/// content is an error; the caller decides how fatal that is rather than
/// this layer silently discarding history.
pub fn load(path: &Path) -> Result<Vec<Expense>, String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(format!("Failed to read '{}': {}", path.display(), e)),
    };

    serde_json::from_str(&contents)
        .map_err(|e| format!("Expense file '{}' is not valid: {}", path.display(), e))
}

/// Serializes the full sequence and replaces the expense file in one
/// rename, so a reader never observes a partially written file.
pub fn save(path: &Path, expenses: &[Expense]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(expenses)
        .map_err(|e| format!("Failed to serialize expenses: {}", e))?;

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = match dir {
        Some(dir) => NamedTempFile::new_in(dir),
        None => NamedTempFile::new_in("."),
    }
    .map_err(|e| format!("Failed to create temp file: {}", e))?;

    tmp.write_all(json.as_bytes())
        .map_err(|e| format!("Failed to write expenses: {}", e))?;
    tmp.persist(path)
        .map_err(|e| format!("Failed to replace '{}': {}", path.display(), e))?;

    Ok(())
}
