//! Transaction CLI commands
//!
//! Implements CLI commands for recording, editing, deleting and listing
//! transactions.

use chrono::Days;
use clap::{Subcommand, ValueEnum};

use super::{local_today, parse_amount_arg, parse_date_arg, resolve_today};
use crate::config::settings::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_table};
use crate::error::{FinanceError, FinanceResult};
use crate::models::TransactionType;
use crate::reports::DatePeriod;
use crate::services::{TransactionInput, TransactionService};
use crate::storage::Storage;

/// Transaction direction as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionType::Income,
            KindArg::Expense => TransactionType::Expense,
        }
    }
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Description (e.g., "Groceries")
        description: String,
        /// Amount (e.g., "89.90" or "89,90")
        amount: String,
        /// Income or expense
        #[arg(short = 't', long = "type", value_enum, default_value = "expense")]
        kind: KindArg,
        /// Category (e.g., "Food"); any label is accepted
        #[arg(short, long, default_value = "Other")]
        category: String,
        /// Payment method (e.g., "Pix", "Credit")
        #[arg(short, long)]
        method: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long, conflicts_with = "provision")]
        date: Option<String>,
        /// Plan the transaction for tomorrow
        #[arg(long)]
        provision: bool,
    },
    /// Replace the fields of an existing transaction
    Edit {
        /// Transaction ID (full or txn-xxxxxxxx)
        id: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New direction
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<KindArg>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New payment method
        #[arg(short, long, conflicts_with = "clear_method")]
        method: Option<String>,
        /// Remove the payment method
        #[arg(long)]
        clear_method: bool,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (full or txn-xxxxxxxx)
        id: String,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (full or txn-xxxxxxxx)
        id: String,
    },
    /// List transactions, newest first
    List {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Reference date for provisioned markers (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            kind,
            category,
            method,
            date,
            provision,
        } => {
            let today = local_today();
            let date = match date {
                Some(date) => parse_date_arg(&date)?,
                None if provision => today.checked_add_days(Days::new(1)).unwrap_or(today),
                None => today,
            };

            let txn = service.add(TransactionInput {
                description,
                amount: parse_amount_arg(&amount)?,
                kind: kind.into(),
                category,
                payment_method: method,
                date,
            })?;

            println!("Recorded transaction {}", txn.id.short());
            print!("{}", format_transaction_details(&txn, symbol));
            if txn.is_provisioned(today) {
                println!("(provisioned: dated after today)");
            }
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            kind,
            category,
            method,
            clear_method,
            date,
        } => {
            let existing = service.resolve(&id)?;
            let mut input = TransactionInput::from(&existing);

            if let Some(description) = description {
                input.description = description;
            }
            if let Some(amount) = amount {
                input.amount = parse_amount_arg(&amount)?;
            }
            if let Some(kind) = kind {
                input.kind = kind.into();
            }
            if let Some(category) = category {
                input.category = category;
            }
            if method.is_some() {
                input.payment_method = method;
            }
            if clear_method {
                input.payment_method = None;
            }
            if let Some(date) = date {
                input.date = parse_date_arg(&date)?;
            }

            let txn = service.update(existing.id, input)?;
            println!("Updated transaction {}", txn.id.short());
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Delete { id } => {
            let existing = service.resolve(&id)?;
            let removed = service.delete(existing.id)?;
            println!(
                "Deleted transaction {}: {}",
                removed.id.short(),
                removed.description
            );
        }

        TransactionCommands::Show { id } => {
            let txn = service.resolve(&id)?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::List {
            from,
            to,
            limit,
            today,
        } => {
            let today = resolve_today(today.as_deref())?;
            let period = match (from, to) {
                (None, None) => None,
                (from, to) => {
                    let start = from.as_deref().map(parse_date_arg).transpose()?;
                    let end = to.as_deref().map(parse_date_arg).transpose()?;
                    Some(DatePeriod::new(
                        start.unwrap_or(chrono::NaiveDate::MIN),
                        end.unwrap_or(chrono::NaiveDate::MAX),
                    ))
                }
            };

            if let Some(period) = period.filter(DatePeriod::is_empty) {
                return Err(FinanceError::Validation(format!(
                    "Start date is after end date ({})",
                    period
                )));
            }

            let mut transactions = service.list_newest_first(period.as_ref())?;
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }
            print!("{}", format_transaction_table(&transactions, today, symbol));
        }
    }

    Ok(())
}
