//! Assistant CLI command

use clap::Args;

use crate::assistant::{Assistant, GeminiAssistant};
use crate::config::settings::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Question for the assistant
#[derive(Args)]
pub struct AskArgs {
    /// Free-text question, e.g. "where did most of my money go?"
    #[arg(required = true, trailing_var_arg = true)]
    pub query: Vec<String>,
}

/// Handle the ask command
pub fn handle_ask_command(
    storage: &Storage,
    settings: &Settings,
    args: AskArgs,
) -> FinanceResult<()> {
    let query = args.query.join(" ");
    if query.trim().is_empty() {
        return Err(FinanceError::Validation("Question must not be empty".into()));
    }

    let transactions = TransactionService::new(storage).snapshot()?;
    let assistant = GeminiAssistant::from_settings(&settings.assistant);

    println!("{}", assistant.ask(&transactions, &query));
    Ok(())
}
