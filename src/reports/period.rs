//! Date periods and period filtering
//!
//! Dates compare chronologically, which for zero-padded `YYYY-MM-DD` is the
//! same order as comparing the strings.

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

use crate::models::{Transaction, DATE_FORMAT};

/// Inclusive date range chosen for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DatePeriod {
    /// Create a period; an inverted range is allowed and simply matches nothing
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// First through last day of the calendar month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(chrono::Months::new(1))
            .and_then(|next| next.checked_sub_days(Days::new(1)))
            .unwrap_or(date);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for DatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// Whether two dates fall in the same calendar month of the same year
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Keep transactions dated within the period, in their original order
pub fn filter_by_period(transactions: &[Transaction], period: &DatePeriod) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| period.contains(t.date))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, Money, TransactionType};

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn expense(description: &str, on: &str) -> Transaction {
        Transaction::new(
            description,
            Money::from_units(10),
            TransactionType::Expense,
            "Food",
            date(on),
        )
    }

    #[test]
    fn test_month_of() {
        let june = DatePeriod::month_of(date("2024-06-20"));
        assert_eq!(june.start, date("2024-06-01"));
        assert_eq!(june.end, date("2024-06-30"));

        let feb = DatePeriod::month_of(date("2024-02-10"));
        assert_eq!(feb.end, date("2024-02-29"));

        let dec = DatePeriod::month_of(date("2023-12-31"));
        assert_eq!(dec.start, date("2023-12-01"));
        assert_eq!(dec.end, date("2023-12-31"));
    }

    #[test]
    fn test_filter_is_inclusive_and_keeps_order() {
        let transactions = vec![
            expense("c", "2024-06-30"),
            expense("before", "2024-05-31"),
            expense("a", "2024-06-01"),
            expense("after", "2024-07-01"),
            expense("b", "2024-06-15"),
        ];
        let period = DatePeriod::new(date("2024-06-01"), date("2024-06-30"));

        let filtered = filter_by_period(&transactions, &period);
        let names: Vec<_> = filtered.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert!(filtered.iter().all(|t| period.contains(t.date)));
    }

    #[test]
    fn test_inverted_period_is_empty() {
        let transactions = vec![expense("a", "2024-06-10")];
        let period = DatePeriod::new(date("2024-06-30"), date("2024-06-01"));

        assert!(period.is_empty());
        assert!(filter_by_period(&transactions, &period).is_empty());
    }

    #[test]
    fn test_filter_of_empty_input() {
        let period = DatePeriod::month_of(date("2024-06-20"));
        assert!(filter_by_period(&[], &period).is_empty());
    }

    #[test]
    fn test_same_month() {
        assert!(same_month(date("2024-06-01"), date("2024-06-30")));
        assert!(!same_month(date("2024-06-01"), date("2023-06-01")));
        assert!(!same_month(date("2024-06-30"), date("2024-07-01")));
    }
}
