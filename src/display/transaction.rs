//! Transaction display formatting
//!
//! Table and detail views for transactions.

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Transaction, DATE_FORMAT};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format transactions as a table; entries after `today` are marked
pub fn format_transaction_table(
    transactions: &[Transaction],
    today: NaiveDate,
    symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| {
        let sign = if txn.is_income() { "+" } else { "-" };
        let mut date = txn.date.format(DATE_FORMAT).to_string();
        if txn.is_provisioned(today) {
            date.push_str(" *");
        }
        TransactionRow {
            id: txn.id.short(),
            date,
            description: txn.description.clone(),
            category: txn.category.clone(),
            method: txn.payment_method_label().unwrap_or("-").to_string(),
            amount: format!("{}{}", sign, txn.amount.format_with_symbol(symbol)),
        }
    });

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    if transactions.iter().any(|t| t.is_provisioned(today)) {
        output.push_str("* provisioned (dated after today)\n");
    }
    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {} ({})\n", txn.id.short(), txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format(DATE_FORMAT)));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!(
        "Method:      {}\n",
        txn.payment_method_label().unwrap_or("(unspecified)")
    ));

    output
}
