//! Expense breakdowns by category and payment method
//!
//! Both breakdowns consider expenses only, group in first-encountered order
//! and then stable-sort by amount, largest first, so equal sums keep the
//! order in which their groups first appeared.

use std::collections::HashMap;

use crate::models::{Money, Transaction};

/// Label used for expenses without a payment method
pub const UNSPECIFIED_METHOD: &str = "unspecified";

/// Expense total for one category and its share of all period expenses
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Fraction in `[0, 1]`; `0.0` when there is no positive expense total
    pub share: f64,
}

/// Expense total for one payment method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethodTotal {
    pub method: String,
    pub amount: Money,
}

/// Sum expense amounts per key, preserving first-encountered key order
fn group_expenses<'a, F>(transactions: &'a [Transaction], key: F) -> Vec<(String, Money)>
where
    F: Fn(&'a Transaction) -> &'a str,
{
    let mut groups: Vec<(String, Money)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let label = key(txn);
        match index.get(label) {
            Some(&i) => groups[i].1 += txn.amount,
            None => {
                index.insert(label, groups.len());
                groups.push((label.to_string(), txn.amount));
            }
        }
    }

    // sort_by is stable: ties stay in first-encountered order
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
}

/// Expenses grouped by category with each group's share of the total
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let groups = group_expenses(transactions, |t| t.category.as_str());
    let total: Money = groups.iter().map(|(_, amount)| *amount).sum();

    groups
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            share: amount.ratio_of(total),
            category,
            amount,
        })
        .collect()
}

/// Expenses grouped by payment method
pub fn payment_method_breakdown(transactions: &[Transaction]) -> Vec<PaymentMethodTotal> {
    group_expenses(transactions, |t| {
        t.payment_method_label().unwrap_or(UNSPECIFIED_METHOD)
    })
    .into_iter()
    .map(|(method, amount)| PaymentMethodTotal { method, amount })
    .collect()
}
