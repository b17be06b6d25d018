use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One recorded spending event. The expense file is an ordered JSON array
/// of these; records have no id beyond their position in that array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    // arbitrary_precision keeps the amount a JSON number without going
    // through f64 on either side of the round-trip
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(amount: Decimal, category: String, date: NaiveDate) -> Self {
        Self {
            amount,
            category,
            date,
        }
    }
}

/// Display form used in every total and summary line: rupee symbol,
/// exactly two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    format!("₹{:.2}", amount)
}
