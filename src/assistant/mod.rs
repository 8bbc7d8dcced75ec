//! Conversational assistant gateway
//!
//! Turns a transaction snapshot plus a free-text question into prose from a
//! remote text-generation model. The gateway is total: configuration and
//! transport problems come back as readable fallback messages, never as
//! errors.

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiAssistant;
pub use prompt::build_prompt;

use crate::models::Transaction;

/// Returned when no API key is configured
pub const MISSING_KEY_MESSAGE: &str = "⚠️ Configuration pending: no API key was found for the assistant. \
     Set the environment variable named in the assistant settings (API_KEY by default).";

/// Returned when the remote call fails for any reason
pub const REQUEST_FAILED_MESSAGE: &str =
    "An error occurred while querying the assistant. Check that your API key is valid.";

/// Returned when the model answers with no text
pub const EMPTY_ANSWER_MESSAGE: &str = "Sorry, I could not analyse your data right now.";

/// Something that can answer questions about a transaction snapshot
pub trait Assistant {
    /// Answer `query` about `transactions`; always yields displayable text
    fn ask(&self, transactions: &[Transaction], query: &str) -> String;
}
