//! The content catalog.
//!
//! Built once from a validated document and read-only afterwards. Every
//! keyed lookup fails softly with [`NotFound`]; a `Catalog` is `Send + Sync`
//! and can be shared behind an `Arc` without locking.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, error, info};

use super::document::{CatalogDocument, ContentSource};
use super::validation::{validate, CatalogViolations};
use crate::content::builtin_document;
use crate::domain::{GauntletIntro, LessonEntry, RewardKey, WeekKey};

/// A keyed lookup with no matching entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("Lesson not found: {id}")]
    Lesson { id: i64 },

    #[error("Weekly theme not found: {key}")]
    WeeklyTheme { key: String },

    #[error("Reward description not found: {key}")]
    Reward { key: String },
}

/// Immutable catalog of lessons and auxiliary tables
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Lessons in declaration order
    lessons: Vec<LessonEntry>,

    /// lesson_id -> position in `lessons`
    index: HashMap<u32, usize>,

    weekly_themes: BTreeMap<WeekKey, String>,

    gauntlet_intro: GauntletIntro,

    reward_descriptions: BTreeMap<RewardKey, String>,
}

impl Catalog {
    /// Build the catalog shipped with the crate
    pub fn builtin() -> Result<Self, CatalogViolations> {
        Self::from_document(builtin_document())
    }

    /// Validate a document and freeze it into a catalog
    pub fn from_document(doc: CatalogDocument) -> Result<Self, CatalogViolations> {
        if let Err(violations) = validate(&doc) {
            for violation in violations.iter() {
                error!("Catalog violation: {}", violation);
            }
            return Err(violations);
        }

        let index = doc
            .lessons
            .iter()
            .enumerate()
            .map(|(pos, lesson)| (lesson.lesson_id, pos))
            .collect();

        Ok(Self {
            lessons: doc.lessons,
            index,
            weekly_themes: doc.weekly_themes,
            gauntlet_intro: doc.gauntlet_intro,
            reward_descriptions: doc.reward_descriptions,
        })
    }

    /// Load and validate a catalog document from disk
    pub async fn load(path: &Path) -> Result<Self> {
        let doc = CatalogDocument::read(path).await?;
        Self::from_document(doc)
            .with_context(|| format!("Catalog failed validation: {}", path.display()))
    }

    /// Build the catalog from the configured source
    pub async fn from_source(source: &ContentSource) -> Result<Self> {
        let catalog = match source {
            ContentSource::Builtin => Self::builtin()?,
            ContentSource::File(path) => Self::load(path).await?,
        };

        info!(
            "Loaded catalog with {} lessons from {}",
            catalog.len(),
            source
        );
        Ok(catalog)
    }

    /// Get a lesson by id. Any integer is accepted.
    pub fn get_lesson(&self, id: i64) -> Result<&LessonEntry, NotFound> {
        debug!("Lesson lookup: {}", id);

        u32::try_from(id)
            .ok()
            .and_then(|key| self.index.get(&key))
            .map(|&pos| &self.lessons[pos])
            .ok_or(NotFound::Lesson { id })
    }

    /// All lessons in catalog order
    pub fn list_lessons(&self) -> &[LessonEntry] {
        &self.lessons
    }

    /// Get a weekly theme by its contract key (e.g. "week3")
    pub fn get_weekly_theme(&self, key: &str) -> Result<&str, NotFound> {
        debug!("Weekly theme lookup: {}", key);

        key.parse::<WeekKey>()
            .ok()
            .and_then(|week| self.weekly_theme(week))
            .ok_or_else(|| NotFound::WeeklyTheme {
                key: key.to_string(),
            })
    }

    /// Get a weekly theme by typed key
    pub fn weekly_theme(&self, week: WeekKey) -> Option<&str> {
        self.weekly_themes.get(&week).map(String::as_str)
    }

    /// All weekly themes in key order
    pub fn weekly_themes(&self) -> impl Iterator<Item = (WeekKey, &str)> {
        self.weekly_themes.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// The gauntlet transition record
    pub fn get_gauntlet_intro(&self) -> &GauntletIntro {
        &self.gauntlet_intro
    }

    /// Get a reward description by its contract key (e.g. "graduation")
    pub fn get_reward_description(&self, key: &str) -> Result<&str, NotFound> {
        debug!("Reward lookup: {}", key);

        key.parse::<RewardKey>()
            .ok()
            .and_then(|reward| self.reward_description(reward))
            .ok_or_else(|| NotFound::Reward {
                key: key.to_string(),
            })
    }

    /// Get a reward description by typed key
    pub fn reward_description(&self, reward: RewardKey) -> Option<&str> {
        self.reward_descriptions.get(&reward).map(String::as_str)
    }

    /// All reward descriptions in key order
    pub fn rewards(&self) -> impl Iterator<Item = (RewardKey, &str)> {
        self.reward_descriptions
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
    }

    /// Search lessons by query (case-insensitive substring match)
    pub fn search(&self, query: &str) -> Vec<&LessonEntry> {
        let query_lower = query.to_lowercase();

        self.lessons
            .iter()
            .filter(|lesson| lesson.matches(&query_lower))
            .collect()
    }

    /// Get the number of lessons
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Check if the catalog has no lessons
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Snapshot the catalog as a serializable document
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            lessons: self.lessons.clone(),
            weekly_themes: self.weekly_themes.clone(),
            gauntlet_intro: self.gauntlet_intro.clone(),
            reward_descriptions: self.reward_descriptions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().expect("builtin catalog is valid")
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 40);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_get_lesson_by_id() {
        let catalog = catalog();
        let lesson = catalog.get_lesson(1).unwrap();
        assert_eq!(lesson.title, "The Hero Awakens");
        assert_eq!(catalog.get_lesson(24).unwrap().lesson_id, 24);
    }

    #[test]
    fn test_get_lesson_out_of_range() {
        let catalog = catalog();
        for id in [0, -1, 41, i64::MAX, i64::MIN, u32::MAX as i64 + 1] {
            assert_eq!(catalog.get_lesson(id), Err(NotFound::Lesson { id }));
        }
    }

    #[test]
    fn test_lookup_uses_ids_not_positions() {
        let mut doc = builtin_document();
        doc.lessons = doc
            .lessons
            .into_iter()
            .filter(|l| l.lesson_id % 10 == 0)
            .collect();
        let catalog = Catalog::from_document(doc).unwrap();

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get_lesson(20).unwrap().lesson_id, 20);
        assert!(catalog.get_lesson(2).is_err());
    }

    #[test]
    fn test_weekly_theme_lookup() {
        let catalog = catalog();
        assert_eq!(
            catalog.get_weekly_theme("week3").unwrap(),
            "The Advanced Trials - Mastering complex skills and integration"
        );
        assert_eq!(
            catalog.get_weekly_theme("week9"),
            Err(NotFound::WeeklyTheme {
                key: "week9".to_string()
            })
        );
        assert_eq!(catalog.weekly_themes().count(), 5);
    }

    #[test]
    fn test_reward_lookup() {
        let catalog = catalog();
        assert_eq!(
            catalog.get_reward_description("graduation").unwrap(),
            "Grand ceremony and Gauntlet unlock with full fanfare"
        );
        assert!(catalog.get_reward_description("Graduation").is_err());
        let keys: Vec<_> = catalog.rewards().map(|(k, _)| k).collect();
        assert_eq!(keys, RewardKey::ALL.to_vec());
    }

    #[test]
    fn test_catalog_search() {
        let catalog = catalog();

        // Search by title
        let results = catalog.search("gauntlet");
        assert!(results.is_empty());

        let results = catalog.search("binary search");
        assert_eq!(results.len(), 2);

        // Case insensitive
        let results = catalog.search("HERO AWAKENS");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].lesson_id, 1);
    }

    #[test]
    fn test_to_document_round_trips() {
        let catalog = catalog();
        assert_eq!(catalog.to_document(), builtin_document());
    }
}
