//! Serialized form of a catalog.
//!
//! A catalog document holds every lesson and auxiliary table under the
//! field names renderers depend on. Documents are read from and written to
//! JSON or YAML, chosen by file extension.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::domain::{GauntletIntro, LessonEntry, RewardKey, WeekKey};

/// Full catalog contents, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    /// Lessons in declaration order
    pub lessons: Vec<LessonEntry>,

    /// Week key -> theme line
    #[serde(default)]
    pub weekly_themes: BTreeMap<WeekKey, String>,

    pub gauntlet_intro: GauntletIntro,

    /// Reward key -> description
    #[serde(default)]
    pub reward_descriptions: BTreeMap<RewardKey, String>,
}

/// On-disk encoding of a catalog document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            _ => anyhow::bail!(
                "Unsupported catalog file extension (expected .json, .yaml or .yml): {}",
                path.display()
            ),
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "json"),
            DocumentFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Where the catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Content compiled into the binary
    Builtin,

    /// A catalog document on disk
    File(PathBuf),
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::Builtin => write!(f, "builtin"),
            ContentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl CatalogDocument {
    /// Parse a document from text in the given format
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        match format {
            DocumentFormat::Json => {
                serde_json::from_str(content).context("Failed to parse catalog JSON")
            }
            DocumentFormat::Yaml => {
                serde_yaml::from_str(content).context("Failed to parse catalog YAML")
            }
        }
    }

    /// Render the document as text in the given format
    pub fn render(&self, format: DocumentFormat, pretty: bool) -> Result<String> {
        let text = match format {
            DocumentFormat::Json if pretty => serde_json::to_string_pretty(self)?,
            DocumentFormat::Json => serde_json::to_string(self)?,
            DocumentFormat::Yaml => serde_yaml::to_string(self)?,
        };
        Ok(text)
    }

    /// Read a document from disk
    pub async fn read(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;

        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

        Self::parse(&content, format)
            .with_context(|| format!("Invalid catalog document: {}", path.display()))
    }

    /// Write the document to disk
    pub async fn write(&self, path: &Path, pretty: bool) -> Result<()> {
        let format = DocumentFormat::from_path(path)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let content = self.render(format, pretty)?;
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> &'static str {
        r#"{
            "lessons": [{
                "lessonId": 1,
                "title": "One",
                "storyIntro": "i",
                "challenge": "c",
                "mentorQuote": "q",
                "storyOutro": "o"
            }],
            "weeklyThemes": { "week1": "First week" },
            "gauntletIntro": { "title": "t", "description": "d", "mentorSendOff": "s" },
            "rewardDescriptions": { "graduation": "Party" }
        }"#
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/catalog.json")).unwrap(),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("catalog.YML")).unwrap(),
            DocumentFormat::Yaml
        );
        assert!(DocumentFormat::from_path(Path::new("catalog.toml")).is_err());
        assert!(DocumentFormat::from_path(Path::new("catalog")).is_err());
    }

    #[test]
    fn test_parse_json_document() {
        let doc = CatalogDocument::parse(minimal_json(), DocumentFormat::Json).unwrap();
        assert_eq!(doc.lessons.len(), 1);
        assert_eq!(doc.weekly_themes.get(&WeekKey::Week1).unwrap(), "First week");
        assert_eq!(
            doc.reward_descriptions.get(&RewardKey::Graduation).unwrap(),
            "Party"
        );
        assert_eq!(doc.gauntlet_intro.mentor_send_off, "s");
    }

    #[test]
    fn test_unknown_week_key_is_parse_error() {
        let json = minimal_json().replace("\"week1\"", "\"week9\"");
        assert!(CatalogDocument::parse(&json, DocumentFormat::Json).is_err());
    }

    #[test]
    fn test_rendered_json_uses_contract_names() {
        let doc = CatalogDocument::parse(minimal_json(), DocumentFormat::Json).unwrap();
        let text = doc.render(DocumentFormat::Json, false).unwrap();

        assert!(text.contains("\"weeklyThemes\""));
        assert!(text.contains("\"gauntletIntro\""));
        assert!(text.contains("\"rewardDescriptions\""));
        assert!(text.contains("\"week1\""));
        assert!(!text.contains("nextLessonTeaser"));
    }

    #[test]
    fn test_yaml_text_matches_json_content() {
        let doc = CatalogDocument::parse(minimal_json(), DocumentFormat::Json).unwrap();
        let yaml = doc.render(DocumentFormat::Yaml, true).unwrap();
        let reparsed = CatalogDocument::parse(&yaml, DocumentFormat::Yaml).unwrap();
        assert_eq!(reparsed, doc);
    }
}
