//! Domain types for the content catalog.
//!
//! This module contains the data structures renderers consume:
//! - LessonEntry: One narrative lesson
//! - WeekKey / RewardKey: Typed keys for the auxiliary tables
//! - GauntletIntro: The post-catalog transition record

pub mod lesson;
pub mod tables;

// Re-export commonly used types
pub use lesson::LessonEntry;
pub use tables::{GauntletIntro, RewardKey, WeekKey};
