//! Error type for the fallible boundary of the crate.
//!
//! Roster operations themselves never fail (invalid mutations are no-ops,
//! uncoverable days stay open). Errors only arise when untrusted input is
//! parsed into the data model: day keys from shared links, JSON
//! configuration files.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while turning external input into roster data.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A day key is not a valid `YYYY-MM-DD` calendar date.
    #[error("malformed day key '{key}': {reason}")]
    MalformedDayKey { key: String, reason: String },

    /// A restored roster does not have the day layout of its year.
    #[error("malformed roster for {year}: {reason}")]
    MalformedRoster { year: i32, reason: String },

    /// The configuration document is not valid JSON for the expected shape.
    #[error("failed to parse roster configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration parsed but failed integrity checks.
    #[error("invalid roster configuration: {}", summarize(.0))]
    InvalidConfig(Vec<ValidationError>),
}

impl RosterError {
    pub(crate) fn malformed_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDayKey {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, RosterError>;
