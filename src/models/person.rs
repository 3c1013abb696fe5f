//! Person model.
//!
//! A person is anyone who can be rostered onto a day (therapist, clinician,
//! duty officer). Identity is the name, which must be unique within a roster.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A rosterable person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique name within the roster.
    pub name: String,
    /// Optional role or group tag (e.g., "OT", "Physio").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Weekly remote-work pattern.
    #[serde(default)]
    pub remote: RemotePattern,
}

/// Weekly remote-work pattern.
///
/// A total function from weekday to "working remotely". Only Monday through
/// Friday can be set; Saturday and Sunday always report `false` because
/// weekends are excluded from rostering before the pattern is consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemotePattern {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
}

impl Person {
    /// Creates a person who is on site every weekday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: None,
            remote: RemotePattern::default(),
        }
    }

    /// Sets the role tag.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Marks a weekday as a remote day.
    pub fn with_remote_day(mut self, weekday: Weekday) -> Self {
        self.remote.set(weekday, true);
        self
    }

    /// Replaces the whole remote pattern.
    pub fn with_remote(mut self, remote: RemotePattern) -> Self {
        self.remote = remote;
        self
    }

    /// Whether this person works remotely on the given weekday.
    #[inline]
    pub fn is_remote_on(&self, weekday: Weekday) -> bool {
        self.remote.is_remote(weekday)
    }
}

impl RemotePattern {
    /// Pattern with every business weekday remote.
    pub fn all_remote() -> Self {
        Self {
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
        }
    }

    /// Whether the weekday is a remote day. Weekends are always `false`.
    pub fn is_remote(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat | Weekday::Sun => false,
        }
    }

    /// Sets a business weekday. Weekend days are ignored.
    pub fn set(&mut self, weekday: Weekday, remote: bool) {
        let slot = match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat | Weekday::Sun => return,
        };
        *slot = remote;
    }

    /// Number of remote business days per week.
    pub fn remote_days(&self) -> usize {
        [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
        ]
        .iter()
        .filter(|&&r| r)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_builder() {
        let p = Person::new("Alice")
            .with_role("OT")
            .with_remote_day(Weekday::Mon)
            .with_remote_day(Weekday::Fri);

        assert_eq!(p.name, "Alice");
        assert_eq!(p.role.as_deref(), Some("OT"));
        assert!(p.is_remote_on(Weekday::Mon));
        assert!(!p.is_remote_on(Weekday::Tue));
        assert!(p.is_remote_on(Weekday::Fri));
        assert_eq!(p.remote.remote_days(), 2);
    }

    #[test]
    fn test_default_pattern_is_on_site() {
        let pattern = RemotePattern::default();
        for wd in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri] {
            assert!(!pattern.is_remote(wd));
        }
    }

    #[test]
    fn test_weekend_never_remote() {
        let mut pattern = RemotePattern::all_remote();
        pattern.set(Weekday::Sat, true);
        assert!(!pattern.is_remote(Weekday::Sat));
        assert!(!pattern.is_remote(Weekday::Sun));
        assert_eq!(pattern.remote_days(), 5);
    }

    #[test]
    fn test_partial_pattern_deserializes_with_defaults() {
        let p: Person =
            serde_json::from_str(r#"{"name":"Bob","remote":{"wednesday":true}}"#).unwrap();
        assert!(p.is_remote_on(Weekday::Wed));
        assert!(!p.is_remote_on(Weekday::Thu));
        assert!(p.role.is_none());

        let bare: Person = serde_json::from_str(r#"{"name":"Cara"}"#).unwrap();
        assert_eq!(bare.remote, RemotePattern::default());
    }
}
