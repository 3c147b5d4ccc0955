//! codequest - Content catalog for the CodeQuest lesson storyline
//!
//! A read-only catalog of narrative lessons plus three auxiliary tables
//! (weekly themes, the gauntlet intro and reward descriptions) consumed by
//! a lesson renderer.
//!
//! # Architecture
//!
//! - The catalog is built once, validated, and never mutated
//! - Every keyed lookup fails softly with `NotFound`
//! - A malformed catalog is rejected at load time with every violation listed
//! - There is no global instance; the caller owns the catalog and shares it
//!
//! # Modules
//!
//! - `content`: The shipped lesson text and tables
//! - `domain`: Data structures (LessonEntry, WeekKey, RewardKey, GauntletIntro)
//! - `library`: Catalog, document format and validation
//! - `config`: Content source and export settings
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Show a lesson
//! codequest lesson 1
//!
//! # Export the catalog for a renderer
//! codequest export --output catalog.json
//!
//! # Check a hand-edited catalog
//! codequest validate content/catalog.yaml
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use domain::{GauntletIntro, LessonEntry, RewardKey, WeekKey};
pub use library::{
    Catalog, CatalogDocument, CatalogViolation, CatalogViolations, ContentSource, NotFound,
};
