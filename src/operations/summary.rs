use crate::models::expense::Expense;
use rust_decimal::Decimal;

/// Bucket size for the spending-over-time summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Granularity {
    Daily,
    Monthly,
}

pub fn parse_granularity(input: &str) -> Result<Granularity, String> {
    match input.trim().to_lowercase().as_str() {
        "daily" => Ok(Granularity::Daily),
        "monthly" => Ok(Granularity::Monthly),
        other => Err(format!(
            "Invalid summary type '{}'. Choose 'daily' or 'monthly'",
            other
        )),
    }
}

/// Sums the amounts of every expense whose category matches, ignoring
/// case. A category with no expenses totals zero.
pub fn total_by_category(expenses: &[Expense], category: &str) -> Decimal {
    expenses
        .iter()
        .filter(|expense| expense.category.eq_ignore_ascii_case(category))
        .fold(Decimal::ZERO, |acc, expense| acc + expense.amount)
}

pub fn total_overall(expenses: &[Expense]) -> Decimal {
    expenses
        .iter()
        .fold(Decimal::ZERO, |acc, expense| acc + expense.amount)
}

/// Groups expenses by day (full YYYY-MM-DD) or month (YYYY-MM) and sums
/// the amount per bucket. Buckets keep the order in which each key was
/// first seen in the input sequence.
pub fn summary_over_time(
    expenses: &[Expense],
    granularity: Granularity,
) -> Vec<(String, Decimal)> {
    let mut buckets: Vec<(String, Decimal)> = Vec::new();

    for expense in expenses {
        let key = match granularity {
            Granularity::Daily => expense.date.format("%Y-%m-%d").to_string(),
            Granularity::Monthly => expense.date.format("%Y-%m").to_string(),
        };

        match buckets.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, total)) => *total += expense.amount,
            None => buckets.push((key, expense.amount)),
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn expense(amount: &str, category: &str, date: &str) -> Expense {
        Expense::new(
            Decimal::from_str(amount).unwrap(),
            category.to_string(),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }

    #[test]
    fn test_total_overall_single_expense() {
        let expenses = vec![expense("42.37", "Food", "2024-01-05")];
        assert_eq!(
            total_overall(&expenses),
            Decimal::from_str("42.37").unwrap()
        );
    }

    #[test]
    fn test_total_overall_empty_is_zero() {
        assert_eq!(total_overall(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_total_overall_sums_all_categories() {
        let expenses = vec![
            expense("10", "Food", "2024-01-05"),
            expense("20", "Transport", "2024-01-06"),
            expense("0.50", "Food", "2024-01-07"),
        ];
        assert_eq!(
            total_overall(&expenses),
            Decimal::from_str("30.50").unwrap()
        );
    }

    #[test]
    fn test_total_by_category_case_insensitive() {
        let expenses = vec![
            expense("10", "Food", "2024-01-05"),
            expense("5", "food", "2024-01-06"),
            expense("99", "Transport", "2024-01-07"),
        ];

        let expected = Decimal::from_str("15").unwrap();
        assert_eq!(total_by_category(&expenses, "Food"), expected);
        assert_eq!(total_by_category(&expenses, "food"), expected);
        assert_eq!(total_by_category(&expenses, "FOOD"), expected);
    }

    #[test]
    fn test_total_by_category_no_match_is_zero() {
        let expenses = vec![expense("10", "Food", "2024-01-05")];
        assert_eq!(total_by_category(&expenses, "Shopping"), Decimal::ZERO);
    }

    #[test]
    fn test_monthly_summary_groups_by_month() {
        let expenses = vec![
            expense("10", "Food", "2024-01-05"),
            expense("20", "Transport", "2024-01-20"),
            expense("5", "Food", "2024-02-01"),
        ];

        let summary = summary_over_time(&expenses, Granularity::Monthly);
        assert_eq!(
            summary,
            vec![
                ("2024-01".to_string(), Decimal::from_str("30").unwrap()),
                ("2024-02".to_string(), Decimal::from_str("5").unwrap()),
            ]
        );
    }

    #[test]
    fn test_daily_summary_groups_by_full_date() {
        let expenses = vec![
            expense("10", "Food", "2024-01-05"),
            expense("2.50", "Food", "2024-01-05"),
            expense("20", "Transport", "2024-01-20"),
        ];

        let summary = summary_over_time(&expenses, Granularity::Daily);
        assert_eq!(
            summary,
            vec![
                ("2024-01-05".to_string(), Decimal::from_str("12.50").unwrap()),
                ("2024-01-20".to_string(), Decimal::from_str("20").unwrap()),
            ]
        );
    }

    #[test]
    fn test_summary_buckets_keep_first_encounter_order() {
        let expenses = vec![
            expense("1", "Food", "2024-03-01"),
            expense("2", "Food", "2024-01-01"),
            expense("3", "Food", "2024-03-15"),
        ];

        let summary = summary_over_time(&expenses, Granularity::Monthly);
        let keys: Vec<&str> = summary.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["2024-03", "2024-01"]);
    }

    #[test]
    fn test_summary_empty_input() {
        assert!(summary_over_time(&[], Granularity::Daily).is_empty());
    }

    #[test]
    fn test_parse_granularity_valid() {
        assert_eq!(parse_granularity("daily").unwrap(), Granularity::Daily);
        assert_eq!(parse_granularity("MONTHLY").unwrap(), Granularity::Monthly);
        assert_eq!(parse_granularity(" daily ").unwrap(), Granularity::Daily);
    }

    #[test]
    fn test_parse_granularity_invalid() {
        let result = parse_granularity("weekly");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid summary type"));
    }
}
