//! fintrack - personal income and expense tracker
//!
//! This library provides the core of the fintrack command-line application:
//! recording income and expense transactions, monthly category budget goals,
//! period dashboards and a language-model assistant that answers questions
//! about the recorded data.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budget goals, money)
//! - `reports`: Pure aggregation engine (balances, breakdowns, budget status)
//! - `storage`: JSON file storage layer
//! - `services`: Validated mutations on top of storage
//! - `assistant`: Remote text-generation gateway
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{paths::FinTrackPaths, settings::Settings};
//!
//! let paths = FinTrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod assistant;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
