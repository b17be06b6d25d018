mod models;
mod operations;
mod store;

use clap::Parser;
use models::expense::{Expense, format_amount};
use operations::add::{create_expense, record_expense, resolve_date};
use operations::summary::{
    parse_granularity, summary_over_time, total_by_category, total_overall,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "spendo", about = "Personal expense tracker")]
struct Cli {
    /// Path of the JSON file the expenses are stored in
    #[arg(long, default_value = "expenses.json")]
    data_file: PathBuf,
}

pub enum UserCommands {
    Add,
    CategoryTotal,
    OverallTotal,
    Summary,
    Exit,
    Unknown,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    println!("Personal Expense Tracker");
    let mut expenses = match store::json_store::load(&cli.data_file) {
        Ok(expenses) => expenses,
        Err(e) => {
            // corrupt history is fatal; do not silently discard it
            eprintln!("Error loading expenses: {}", e);
            return ExitCode::FAILURE;
        }
    };

    loop {
        println!("\nPlease enter a command (add, category, total, summary, exit):");

        let input = match read_user_input() {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("Error reading input: {}", e);
                continue;
            }
        };
        if input.is_empty() {
            continue;
        }

        match check_for_command(&input) {
            UserCommands::Add => {
                if let Err(e) = run_add(&mut expenses, &cli) {
                    println!("Error adding expense: {}", e);
                    println!("Please try again.");
                }
            }
            UserCommands::CategoryTotal => {
                println!("Enter the category to view spending summary:");
                let category = match read_user_input() {
                    Ok(category) => category,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                let total = total_by_category(&expenses, &category);
                println!("Total spending on {}: {}", category, format_amount(total));
            }
            UserCommands::OverallTotal => {
                let total = total_overall(&expenses);
                println!("Total overall spending: {}", format_amount(total));
            }
            UserCommands::Summary => {
                println!("Enter summary type (daily/monthly):");
                let input = match read_user_input() {
                    Ok(input) => input,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                let granularity = match parse_granularity(&input) {
                    Ok(granularity) => granularity,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                println!("Spending {} summary:", input.trim().to_lowercase());
                for (bucket, total) in summary_over_time(&expenses, granularity) {
                    println!("{}: {}", bucket, format_amount(total));
                }
            }
            UserCommands::Exit => {
                if let Err(e) = store::json_store::save(&cli.data_file, &expenses) {
                    eprintln!("Error saving expenses: {}", e);
                    return ExitCode::FAILURE;
                }
                println!("Expenses saved. Goodbye!");
                break;
            }
            UserCommands::Unknown => {
                println!("Invalid choice. Please choose again.");
            }
        }
    }

    ExitCode::SUCCESS
}

fn run_add(expenses: &mut Vec<Expense>, cli: &Cli) -> Result<(), String> {
    println!("Enter the amount in ₹:");
    let amount_input = read_user_input()?;

    println!("Enter the category (e.g., Food, Transport, Entertainment):");
    let category = read_user_input()?;

    println!("Enter the date (YYYY-MM-DD) or press Enter to use today's date:");
    let date_input = read_user_input()?;

    let today = chrono::Local::now().date_naive();
    let resolved = resolve_date(&date_input, today);
    if resolved.used_fallback() {
        println!("Invalid date format. Using today's date instead.");
    }

    let expense = create_expense(&amount_input, &category, &resolved)?;
    let confirmation = format!(
        "Added expense of {} under {} on {}.",
        format_amount(expense.amount),
        expense.category,
        expense.date
    );
    record_expense(expenses, expense, &cli.data_file)?;
    println!("{}", confirmation);
    Ok(())
}

fn read_user_input() -> Result<String, String> {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|_| "Failed to read line".to_string())?;
    Ok(input.trim().to_string())
}

fn check_for_command(input: &str) -> UserCommands {
    match input.to_lowercase().as_str() {
        "add" => UserCommands::Add,
        "category" => UserCommands::CategoryTotal,
        "total" => UserCommands::OverallTotal,
        "summary" => UserCommands::Summary,
        "exit" => UserCommands::Exit,
        _ => UserCommands::Unknown,
    }
}
