//! Roster configuration.
//!
//! Persons with their remote-work patterns, blocked days per year and
//! engine tuning, loaded from JSON.
//!
//! ```json
//! {
//!   "persons": [
//!     { "name": "Alice", "role": "OT" },
//!     { "name": "Bob", "remote": { "monday": true } }
//!   ],
//!   "blocked_days": { "2025": ["2025-12-25", "2025-12-26"] },
//!   "thresholds": { "live_margin": 1.0, "target_margin": 2.0 }
//! }
//! ```
//!
//! Every section is optional. Loading validates the document; the roster
//! core never sees unchecked configuration.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::auto_roster::{AutoRoster, LaggingThresholds};
use crate::error::{Result, RosterError};
use crate::models::{BlockedCalendar, Person};
use crate::session::RosterSession;
use crate::validation::validate_config;

/// Roster configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// People available for rostering, in display order.
    pub persons: Vec<Person>,
    /// Blocked days per year.
    pub blocked_days: BlockedCalendar,
    /// Auto-roster tuning.
    pub thresholds: LaggingThresholds,
}

impl RosterConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates JSON from a reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Runs integrity checks.
    pub fn validate(&self) -> Result<()> {
        validate_config(&self.persons, &self.blocked_days).map_err(RosterError::InvalidConfig)
    }

    /// Builds a session from this configuration.
    pub fn into_session(self) -> RosterSession {
        RosterSession::new(self.persons, self.blocked_days)
            .with_engine(AutoRoster::new().with_thresholds(self.thresholds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use chrono::Weekday;

    const SAMPLE: &str = r#"{
        "persons": [
            { "name": "Alice", "role": "OT" },
            { "name": "Bob", "remote": { "monday": true } }
        ],
        "blocked_days": { "2025": ["2025-12-25", "2025-12-26"] },
        "thresholds": { "target_margin": 3.0 }
    }"#;

    #[test]
    fn test_load_sample() {
        let config = RosterConfig::from_json_str(SAMPLE).unwrap();
        assert_eq!(config.persons.len(), 2);
        assert!(config.persons[1].is_remote_on(Weekday::Mon));
        assert!(config.blocked_days.for_year(2025).contains("2025-12-26"));
        assert!((config.thresholds.live_margin - 1.0).abs() < 1e-10);
        assert!((config.thresholds.target_margin - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_document() {
        let config = RosterConfig::from_json_str("{}").unwrap();
        assert!(config.persons.is_empty());
        assert_eq!(config.thresholds, LaggingThresholds::default());
    }

    #[test]
    fn test_malformed_key_rejected() {
        let err = RosterConfig::from_json_str(r#"{"blocked_days":{"2025":["2025-2-30"]}}"#)
            .unwrap_err();
        assert!(matches!(err, RosterError::Json(_)));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = RosterConfig::from_json_str(r#"{"persons":[{"name":"A"},{"name":"A"}]}"#)
            .unwrap_err();
        match err {
            RosterError::InvalidConfig(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::DuplicatePerson);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let config = RosterConfig::from_json_str(SAMPLE).unwrap();
        let text = config.to_json_string().unwrap();
        let again = RosterConfig::from_json_reader(text.as_bytes()).unwrap();
        assert_eq!(config, again);
    }

    #[test]
    fn test_into_session() {
        let session = RosterConfig::from_json_str(SAMPLE).unwrap().into_session();
        assert_eq!(session.persons().len(), 2);
        assert!((session.engine().thresholds().target_margin - 3.0).abs() < 1e-10);
    }
}
