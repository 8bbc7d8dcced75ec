//! Configuration module for fintrack
//!
//! - Data directory resolution
//! - User settings persistence (currency symbol, assistant connection)

pub mod paths;
pub mod settings;

pub use paths::FinTrackPaths;
pub use settings::{AssistantSettings, Settings};
