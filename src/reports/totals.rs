//! Balance and period totals

use chrono::NaiveDate;

use crate::models::{Money, Transaction, TransactionType};

/// Income, expense and their difference over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodTotals {
    pub total_income: Money,
    pub total_expense: Money,
    /// `total_income - total_expense`
    pub period_result: Money,
}

/// One bar of the income-versus-expense comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonEntry {
    pub label: &'static str,
    pub kind: TransactionType,
    pub amount: Money,
}

/// All-time signed balance of everything dated on or before `today`
///
/// Provisioned entries (dated after `today`) are money not yet moved and do
/// not count.
pub fn real_balance(transactions: &[Transaction], today: NaiveDate) -> Money {
    transactions
        .iter()
        .filter(|t| t.date <= today)
        .map(Transaction::signed_amount)
        .sum()
}

/// Sum income and expense independently
pub fn period_totals(transactions: &[Transaction]) -> PeriodTotals {
    let mut total_income = Money::zero();
    let mut total_expense = Money::zero();

    for txn in transactions {
        match txn.kind {
            TransactionType::Income => total_income += txn.amount,
            TransactionType::Expense => total_expense += txn.amount,
        }
    }

    PeriodTotals {
        total_income,
        total_expense,
        period_result: total_income - total_expense,
    }
}

/// Income and expense totals side by side, income first
pub fn income_vs_expense(totals: &PeriodTotals) -> [ComparisonEntry; 2] {
    [
        ComparisonEntry {
            label: "Income",
            kind: TransactionType::Income,
            amount: totals.total_income,
        },
        ComparisonEntry {
            label: "Expenses",
            kind: TransactionType::Expense,
            amount: totals.total_expense,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn txn(kind: TransactionType, units: i64, category: &str, on: &str) -> Transaction {
        Transaction::new("test", Money::from_units(units), kind, category, date(on))
    }

    fn scenario() -> Vec<Transaction> {
        vec![
            txn(TransactionType::Expense, 100, "Food", "2024-06-01"),
            txn(TransactionType::Expense, 50, "Food", "2024-06-15"),
            txn(TransactionType::Income, 1000, "Salary", "2024-06-01"),
        ]
    }

    #[test]
    fn test_period_totals_scenario() {
        let totals = period_totals(&scenario());
        assert_eq!(totals.total_income, Money::from_units(1000));
        assert_eq!(totals.total_expense, Money::from_units(150));
        assert_eq!(totals.period_result, Money::from_units(850));
    }

    #[test]
    fn test_real_balance_includes_today() {
        let balance = real_balance(&scenario(), date("2024-06-15"));
        assert_eq!(balance, Money::from_units(850));

        let earlier = real_balance(&scenario(), date("2024-06-14"));
        assert_eq!(earlier, Money::from_units(900));
    }

    #[test]
    fn test_real_balance_ignores_future_entries() {
        let today = date("2024-06-20");
        let mut transactions = scenario();
        let before = real_balance(&transactions, today);

        transactions.push(txn(TransactionType::Expense, 5000, "Travel", "2024-07-01"));
        transactions.push(txn(TransactionType::Income, 70, "Gifts", "2024-06-21"));

        assert_eq!(real_balance(&transactions, today), before);
    }

    #[test]
    fn test_empty_input_yields_zero() {
        assert_eq!(real_balance(&[], date("2024-06-20")), Money::zero());
        assert_eq!(period_totals(&[]), PeriodTotals::default());
    }

    #[test]
    fn test_tolerates_zero_and_negative_amounts() {
        let mut odd = txn(TransactionType::Expense, 0, "Food", "2024-06-01");
        let mut negative = txn(TransactionType::Expense, 0, "Food", "2024-06-02");
        negative.amount = Money::from_cents(-500);
        odd.amount = Money::zero();

        let totals = period_totals(&[odd, negative]);
        assert_eq!(totals.total_expense, Money::from_cents(-500));
        assert_eq!(totals.period_result, Money::from_cents(500));
    }

    #[test]
    fn test_income_vs_expense() {
        let totals = period_totals(&scenario());
        let [income, expense] = income_vs_expense(&totals);
        assert_eq!(income.label, "Income");
        assert_eq!(income.amount, Money::from_units(1000));
        assert_eq!(expense.kind, TransactionType::Expense);
        assert_eq!(expense.amount, Money::from_units(150));
    }

    #[test]
    fn test_extreme_amounts_do_not_overflow() {
        let mut huge = txn(TransactionType::Income, 0, "Salary", "2024-06-01");
        huge.amount = Money::from_cents(i64::MAX);
        let mut cent = txn(TransactionType::Income, 0, "Salary", "2024-06-02");
        cent.amount = Money::from_cents(1);
        let mut lowest = txn(TransactionType::Expense, 0, "Food", "2024-06-03");
        lowest.amount = Money::from_cents(i64::MIN);

        let totals = period_totals(&[huge.clone(), cent.clone()]);
        assert_eq!(totals.total_income, Money::from_cents(i64::MAX));
        assert_eq!(totals.period_result, Money::from_cents(i64::MAX));

        let today = date("2024-06-30");
        assert_eq!(
            real_balance(&[huge.clone(), cent], today),
            Money::from_cents(i64::MAX)
        );
        assert_eq!(real_balance(&[lowest], today), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_period_totals_idempotent() {
        let transactions = scenario();
        assert_eq!(period_totals(&transactions), period_totals(&transactions));
        assert_eq!(
            real_balance(&transactions, date("2024-06-20")),
            real_balance(&transactions, date("2024-06-20"))
        );
    }
}
