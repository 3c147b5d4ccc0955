//! Lesson records.
//!
//! A lesson is one narrative unit of the storyline. Field names serialize
//! in camelCase because external renderers address them by those names.

use serde::{Deserialize, Deserializer, Serialize};

/// A single lesson in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonEntry {
    /// Unique, positive lookup key
    pub lesson_id: u32,

    /// Short display title
    pub title: String,

    /// Scene-setting text shown before the challenge
    pub story_intro: String,

    /// What the hero has to do in this lesson
    pub challenge: String,

    /// Words from the mentor
    pub mentor_quote: String,

    /// Closing text shown after the challenge
    pub story_outro: String,

    /// Preview of the following lesson (absent on the final lesson)
    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_lesson_teaser: Option<String>,
}

impl LessonEntry {
    /// Create a lesson without a teaser
    pub fn new(
        lesson_id: u32,
        title: impl Into<String>,
        story_intro: impl Into<String>,
        challenge: impl Into<String>,
        mentor_quote: impl Into<String>,
        story_outro: impl Into<String>,
    ) -> Self {
        Self {
            lesson_id,
            title: title.into(),
            story_intro: story_intro.into(),
            challenge: challenge.into(),
            mentor_quote: mentor_quote.into(),
            story_outro: story_outro.into(),
            next_lesson_teaser: None,
        }
    }

    /// Set the teaser. An empty or blank teaser counts as no teaser.
    pub fn with_teaser(mut self, teaser: impl Into<String>) -> Self {
        let teaser = teaser.into();
        self.next_lesson_teaser = if teaser.trim().is_empty() {
            None
        } else {
            Some(teaser)
        };
        self
    }

    /// The teaser to display, if any
    pub fn teaser(&self) -> Option<&str> {
        self.next_lesson_teaser
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }

    /// Required display fields paired with their contract names
    pub fn required_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("title", self.title.as_str()),
            ("storyIntro", self.story_intro.as_str()),
            ("challenge", self.challenge.as_str()),
            ("mentorQuote", self.mentor_quote.as_str()),
            ("storyOutro", self.story_outro.as_str()),
        ]
    }

    /// Case-insensitive match against the narrative fields
    pub fn matches(&self, query_lower: &str) -> bool {
        [
            &self.title,
            &self.story_intro,
            &self.challenge,
            &self.story_outro,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(query_lower))
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
