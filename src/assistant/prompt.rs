//! Prompt construction

use serde::Serialize;

use crate::models::{Transaction, DATE_FORMAT};

/// Snapshot row as the model sees it: decimal amounts, readable dates
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PromptTransaction<'a> {
    id: String,
    description: &'a str,
    amount: String,
    #[serde(rename = "type")]
    kind: &'static str,
    category: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_method: Option<&'a str>,
    date: String,
}

impl<'a> From<&'a Transaction> for PromptTransaction<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            id: txn.id.to_string(),
            description: &txn.description,
            amount: txn.amount.to_string(),
            kind: if txn.is_income() { "INCOME" } else { "EXPENSE" },
            category: &txn.category,
            payment_method: txn.payment_method_label(),
            date: txn.date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Build the model prompt from the snapshot and the user's question
pub fn build_prompt(transactions: &[Transaction], query: &str) -> String {
    let rows: Vec<PromptTransaction<'_>> = transactions.iter().map(Into::into).collect();
    let context = serde_json::to_string(&rows).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not serialize transactions for prompt");
        "[]".to_string()
    });

    format!(
        "You are a friendly, expert personal finance assistant.\n\
         \n\
         Here is my current financial transaction data in JSON format:\n\
         {context}\n\
         \n\
         Please answer the following question or request based on this data:\n\
         \"{query}\"\n\
         \n\
         Guidelines:\n\
         1. Be concise but helpful.\n\
         2. Use Markdown formatting (bold, lists) for readability.\n\
         3. If the data is empty, give general tips on how to start organizing finances.\n\
         4. Analyze spending trends if asked.\n",
        context = context,
        query = query.trim(),
    )
}
