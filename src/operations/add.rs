use crate::models::expense::Expense;
use crate::store::json_store;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

/// Outcome of resolving the user's date input.
pub enum ResolvedDate {
    Parsed(NaiveDate),
    /// Input did not parse as YYYY-MM-DD; today is used instead so a bad
    /// date never blocks recording the expense.
    FellBackToToday(NaiveDate),
}

impl ResolvedDate {
    pub fn date(&self) -> NaiveDate {
        match self {
            ResolvedDate::Parsed(date) => *date,
            ResolvedDate::FellBackToToday(date) => *date,
        }
    }

    pub fn used_fallback(&self) -> bool {
        matches!(self, ResolvedDate::FellBackToToday(_))
    }
}

/// Resolves the date for a new expense. Empty input means "use today"
/// and produces no warning downstream; malformed input also falls back
/// to today but is flagged so the caller can warn.
pub fn resolve_date(input: &str, today: NaiveDate) -> ResolvedDate {
    let input = input.trim();
    if input.is_empty() {
        return ResolvedDate::Parsed(today);
    }
    match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(date) => ResolvedDate::Parsed(date),
        Err(_) => ResolvedDate::FellBackToToday(today),
    }
}

/// Builds one expense from the three raw inputs. Only the amount can
/// fail; the category is taken verbatim and the date always resolves.
/// Negative and zero amounts are accepted.
pub fn create_expense(
    amount_input: &str,
    category: &str,
    resolved_date: &ResolvedDate,
) -> Result<Expense, String> {
    let amount = Decimal::from_str(amount_input.trim()).map_err(|_| {
        format!(
            "Invalid amount '{}'. Please provide a valid decimal number",
            amount_input.trim()
        )
    })?;

    Ok(Expense::new(
        amount,
        category.to_string(),
        resolved_date.date(),
    ))
}

/// Appends the expense to the in-memory sequence and persists the whole
/// sequence, so the add is durable before control returns.
pub fn record_expense(
    expenses: &mut Vec<Expense>,
    expense: Expense,
    data_path: &Path,
) -> Result<(), String> {
    expenses.push(expense);
    json_store::save(data_path, expenses)
}
