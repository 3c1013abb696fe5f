//! Input validation for roster configuration.
//!
//! The roster core assumes well-formed input. These checks run at the
//! boundary, when configuration or a shared roster is loaded, and report
//! every problem at once. Detects:
//! - Duplicate person names
//! - Empty person names
//! - Blocked day keys filed under the wrong year
//! - Roster days listing people who are not configured

use std::collections::HashSet;

use crate::models::{BlockedCalendar, Person, Roster};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two persons share the same name.
    DuplicatePerson,
    /// A person has an empty or whitespace-only name.
    EmptyName,
    /// A blocked key's year differs from the year it is filed under.
    BlockedKeyYearMismatch,
    /// A roster day lists a name that is not a configured person.
    UnknownPerson,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates persons and blocked-day configuration.
///
/// Checks:
/// 1. No person has an empty name
/// 2. No two persons share a name
/// 3. Every blocked key belongs to the year it is listed under
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(persons: &[Person], blocked: &BlockedCalendar) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for person in persons {
        if person.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Person with empty name",
            ));
            continue;
        }
        if !names.insert(person.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePerson,
                format!("Duplicate person name: {}", person.name),
            ));
        }
    }

    for (year, set) in blocked.years() {
        for key in set.iter() {
            if key.year() != Some(year) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BlockedKeyYearMismatch,
                    format!("Blocked day '{key}' listed under year {year}"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a restored roster against the configured persons.
///
/// Every name on every day must be a configured person.
pub fn validate_roster(roster: &Roster, persons: &[Person]) -> ValidationResult {
    let known: HashSet<&str> = persons.iter().map(|p| p.name.as_str()).collect();

    let mut errors = Vec::new();
    for day in roster.days() {
        for name in day.therapists() {
            if !known.contains(name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPerson,
                    format!("Day '{}' lists unknown person '{name}'", day.key()),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockedDateSet, DayKey};

    fn sample_persons() -> Vec<Person> {
        vec![Person::new("Alice"), Person::new("Bob"), Person::new("Cara")]
    }

    fn sample_blocked() -> BlockedCalendar {
        BlockedCalendar::new().with_year(
            2025,
            BlockedDateSet::new()
                .with_key(DayKey::parse("2025-01-01").unwrap())
                .with_key(DayKey::parse("2025-12-25").unwrap()),
        )
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&sample_persons(), &sample_blocked()).is_ok());
    }

    #[test]
    fn test_duplicate_person() {
        let persons = vec![Person::new("Alice"), Person::new("Alice")];
        let errors = validate_config(&persons, &sample_blocked()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePerson && e.message.contains("Alice")));
    }

    #[test]
    fn test_empty_name() {
        let persons = vec![Person::new("  ")];
        let errors = validate_config(&persons, &sample_blocked()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyName));
    }

    #[test]
    fn test_blocked_key_wrong_year() {
        let blocked = BlockedCalendar::new().with_year(
            2026,
            BlockedDateSet::new().with_key(DayKey::parse("2025-12-25").unwrap()),
        );
        let errors = validate_config(&sample_persons(), &blocked).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::BlockedKeyYearMismatch));
    }

    #[test]
    fn test_multiple_errors() {
        let persons = vec![Person::new(""), Person::new("A"), Person::new("A")];
        let blocked = BlockedCalendar::new().with_year(
            2024,
            BlockedDateSet::new().with_key(DayKey::parse("2025-01-01").unwrap()),
        );
        let errors = validate_config(&persons, &blocked).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_roster_unknown_person() {
        let mut roster = Roster::new(2025);
        roster
            .day_mut("2025-02-03")
            .unwrap()
            .push_unique("Mallory".into());
        roster.day_mut("2025-02-04").unwrap().push_unique("Bob".into());

        let errors = validate_roster(&roster, &sample_persons()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::UnknownPerson);
        assert!(errors[0].message.contains("2025-02-03"));
    }

    #[test]
    fn test_roster_valid() {
        let mut roster = Roster::new(2025);
        roster.day_mut("2025-02-04").unwrap().push_unique("Bob".into());
        assert!(validate_roster(&roster, &sample_persons()).is_ok());
    }
}
