//! Content catalog: lessons plus the auxiliary tables renderers use.
//!
//! # Document Layout
//!
//! ```text
//! {
//!   "lessons":            [ { "lessonId", "title", "storyIntro", "challenge",
//!                             "mentorQuote", "storyOutro", "nextLessonTeaser"? } ],
//!   "weeklyThemes":       { "week1" .. "week5" },
//!   "gauntletIntro":      { "title", "description", "mentorSendOff" },
//!   "rewardDescriptions": { "weekCompletion", "mentorUnlocks",
//!                           "skillMilestones", "graduation" }
//! }
//! ```

pub mod catalog;
pub mod document;
pub mod validation;

pub use catalog::{Catalog, NotFound};
pub use document::{CatalogDocument, ContentSource, DocumentFormat};
pub use validation::{validate, CatalogViolation, CatalogViolations};
