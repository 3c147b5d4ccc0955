//! Literal catalog content compiled into the binary.
//!
//! Nothing here is validated; `Catalog::builtin` turns it into owned
//! records and runs the same checks as any loaded catalog document.

pub mod lessons;
pub mod tables;

use std::collections::BTreeMap;

use crate::domain::{GauntletIntro, LessonEntry};
use crate::library::CatalogDocument;

pub use lessons::{LessonSeed, LESSONS};

impl From<&LessonSeed> for LessonEntry {
    fn from(seed: &LessonSeed) -> Self {
        let lesson = LessonEntry::new(
            seed.id,
            seed.title,
            seed.intro,
            seed.challenge,
            seed.quote,
            seed.outro,
        );

        match seed.teaser {
            Some(teaser) => lesson.with_teaser(teaser),
            None => lesson,
        }
    }
}

/// Build the shipped catalog document from the embedded tables
pub fn builtin_document() -> CatalogDocument {
    CatalogDocument {
        lessons: LESSONS.iter().map(LessonEntry::from).collect(),
        weekly_themes: tables::WEEKLY_THEMES
            .iter()
            .map(|(key, theme)| (*key, theme.to_string()))
            .collect::<BTreeMap<_, _>>(),
        gauntlet_intro: GauntletIntro::new(
            tables::GAUNTLET_TITLE,
            tables::GAUNTLET_DESCRIPTION,
            tables::GAUNTLET_SEND_OFF,
        ),
        reward_descriptions: tables::REWARDS
            .iter()
            .map(|(key, description)| (*key, description.to_string()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_document_shape() {
        let doc = builtin_document();
        assert_eq!(doc.lessons.len(), 40);
        assert_eq!(doc.weekly_themes.len(), 5);
        assert_eq!(doc.reward_descriptions.len(), 4);
        assert_eq!(doc.lessons[0].title, "The Hero Awakens");
    }

    #[test]
    fn test_seed_conversion_keeps_teaser() {
        let first = LessonEntry::from(&LESSONS[0]);
        assert!(first.teaser().is_some());

        let last = LessonEntry::from(&LESSONS[LESSONS.len() - 1]);
        assert_eq!(last.next_lesson_teaser, None);
    }
}
