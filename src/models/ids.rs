//! Transaction identifier
//!
//! Ids are random v4 UUIDs assigned at creation and never reused.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "txn-";

/// Opaque unique identifier of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short form shown in listings (`txn-` plus the first 8 hex digits)
    pub fn short(&self) -> String {
        format!("{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }

    /// Whether user input (full UUID, short form or bare prefix) refers to this id
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        if let Ok(parsed) = input.parse::<TransactionId>() {
            return parsed == *self;
        }
        let prefix = input.strip_prefix(DISPLAY_PREFIX).unwrap_or(input);
        prefix.len() >= 4 && self.0.simple().to_string().starts_with(&prefix.to_lowercase())
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for TransactionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(TransactionId::new(), TransactionId::new());
    }

    #[test]
    fn test_parse_round_trip() {
        let id = TransactionId::new();
        let parsed: TransactionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);

        let prefixed: TransactionId = format!("txn-{}", id).parse().unwrap();
        assert_eq!(id, prefixed);
    }

    #[test]
    fn test_short_form_matches() {
        let id = TransactionId::new();
        assert!(id.matches(&id.short()));
        assert!(id.matches(&id.to_string()));
        assert!(!id.matches("txn-"));
        assert!(!id.matches("zzzzzzzz"));
    }
}
