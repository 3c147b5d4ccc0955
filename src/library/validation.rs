//! Load-time checks for catalog documents.
//!
//! A catalog that breaks one of these rules is a content defect, so every
//! violation is collected and reported together before startup fails.

use std::collections::HashSet;

use thiserror::Error;

use super::document::CatalogDocument;
use crate::domain::{RewardKey, WeekKey};

/// A single malformed-catalog condition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogViolation {
    #[error("Catalog contains no lessons")]
    NoLessons,

    #[error("Lesson at position {position} has id 0 (ids must be positive)")]
    InvalidLessonId { position: usize },

    #[error("Duplicate lesson id: {id}")]
    DuplicateLessonId { id: u32 },

    #[error("Lesson {id} is declared after lesson {previous}")]
    OutOfOrder { id: u32, previous: u32 },

    #[error("Lesson {id} has an empty {field}")]
    EmptyLessonField { id: u32, field: &'static str },

    #[error("Missing weekly theme: {week}")]
    MissingWeeklyTheme { week: WeekKey },

    #[error("Weekly theme {week} is empty")]
    EmptyWeeklyTheme { week: WeekKey },

    #[error("Missing reward description: {reward}")]
    MissingReward { reward: RewardKey },

    #[error("Reward description {reward} is empty")]
    EmptyReward { reward: RewardKey },

    #[error("Gauntlet intro has an empty {field}")]
    EmptyGauntletField { field: &'static str },
}

/// Every violation found in one document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed catalog ({} violation(s)):\n{}", .0.len(), render_list(.0))]
pub struct CatalogViolations(pub Vec<CatalogViolation>);

impl CatalogViolations {
    pub fn iter(&self) -> impl Iterator<Item = &CatalogViolation> {
        self.0.iter()
    }

    pub fn contains(&self, violation: &CatalogViolation) -> bool {
        self.0.contains(violation)
    }
}

fn render_list(violations: &[CatalogViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Check a document against every catalog invariant
pub fn validate(doc: &CatalogDocument) -> Result<(), CatalogViolations> {
    let mut violations = Vec::new();

    if doc.lessons.is_empty() {
        violations.push(CatalogViolation::NoLessons);
    }

    let mut seen = HashSet::new();
    let mut highest: Option<u32> = None;

    for (position, lesson) in doc.lessons.iter().enumerate() {
        let id = lesson.lesson_id;

        if id == 0 {
            violations.push(CatalogViolation::InvalidLessonId { position });
        }

        if !seen.insert(id) {
            violations.push(CatalogViolation::DuplicateLessonId { id });
        } else if let Some(previous) = highest.filter(|&prev| id < prev) {
            violations.push(CatalogViolation::OutOfOrder { id, previous });
        }
        highest = highest.max(Some(id));

        for (field, value) in lesson.required_fields() {
            if is_blank(value) {
                violations.push(CatalogViolation::EmptyLessonField { id, field });
            }
        }
    }

    for week in WeekKey::ALL {
        match doc.weekly_themes.get(&week) {
            None => violations.push(CatalogViolation::MissingWeeklyTheme { week }),
            Some(theme) if is_blank(theme) => {
                violations.push(CatalogViolation::EmptyWeeklyTheme { week })
            }
            Some(_) => {}
        }
    }

    for reward in RewardKey::ALL {
        match doc.reward_descriptions.get(&reward) {
            None => violations.push(CatalogViolation::MissingReward { reward }),
            Some(text) if is_blank(text) => {
                violations.push(CatalogViolation::EmptyReward { reward })
            }
            Some(_) => {}
        }
    }

    for (field, value) in doc.gauntlet_intro.fields() {
        if is_blank(value) {
            violations.push(CatalogViolation::EmptyGauntletField { field });
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(CatalogViolations(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_document;
    use crate::domain::LessonEntry;

    fn lesson(id: u32) -> LessonEntry {
        LessonEntry::new(id, "Title", "Intro", "Challenge", "Quote", "Outro")
    }

    #[test]
    fn test_builtin_document_is_valid() {
        assert!(validate(&builtin_document()).is_ok());
    }

    #[test]
    fn test_duplicate_id_reported_once() {
        let mut doc = builtin_document();
        doc.lessons = vec![lesson(1), lesson(2), lesson(2)];

        let err = validate(&doc).unwrap_err();
        assert_eq!(err.0, vec![CatalogViolation::DuplicateLessonId { id: 2 }]);
    }

    #[test]
    fn test_out_of_order_ids() {
        let mut doc = builtin_document();
        doc.lessons = vec![lesson(1), lesson(5), lesson(3)];

        let err = validate(&doc).unwrap_err();
        assert!(err.contains(&CatalogViolation::OutOfOrder { id: 3, previous: 5 }));
    }

    #[test]
    fn test_gaps_are_allowed() {
        let mut doc = builtin_document();
        doc.lessons = vec![lesson(2), lesson(10), lesson(11)];
        assert!(validate(&doc).is_ok());
    }

    #[test]
    fn test_blank_fields_are_reported() {
        let mut doc = builtin_document();
        doc.lessons[3].challenge = "   ".to_string();
        doc.gauntlet_intro.title = String::new();

        let err = validate(&doc).unwrap_err();
        assert!(err.contains(&CatalogViolation::EmptyLessonField {
            id: 4,
            field: "challenge"
        }));
        assert!(err.contains(&CatalogViolation::EmptyGauntletField { field: "title" }));
        assert_eq!(err.0.len(), 2);
    }

    #[test]
    fn test_collects_all_violations() {
        let mut doc = builtin_document();
        doc.lessons = vec![lesson(0)];
        doc.weekly_themes.remove(&WeekKey::Week2);
        doc.reward_descriptions
            .insert(RewardKey::MentorUnlocks, String::new());

        let err = validate(&doc).unwrap_err();
        assert_eq!(err.0.len(), 3);

        let message = err.to_string();
        assert!(message.starts_with("Malformed catalog (3 violation(s))"));
        assert!(message.contains("Missing weekly theme: week2"));
        assert!(message.contains("Reward description mentorUnlocks is empty"));
    }
}
