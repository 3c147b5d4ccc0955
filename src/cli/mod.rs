//! Command-line interface for codequest.
//!
//! Provides commands for looking up lessons, listing the catalog, reading
//! the auxiliary tables, exporting the catalog document and validating
//! catalog files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::{self, ResolvedConfig};
use crate::content::builtin_document;
use crate::domain::LessonEntry;
use crate::library::{validate, Catalog, CatalogDocument, ContentSource, DocumentFormat};

/// codequest - Lesson catalog for the CodeQuest storyline
#[derive(Parser, Debug)]
#[command(name = "codequest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog document to use instead of the configured content
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a single lesson
    Lesson {
        /// Lesson ID
        #[arg(allow_negative_numbers = true)]
        id: i64,

        /// Print the lesson record as JSON
        #[arg(long)]
        json: bool,
    },

    /// List lessons in catalog order
    Lessons {
        /// Maximum number of lessons to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the theme of a week (week1..week5)
    Theme {
        /// Week key
        week: String,
    },

    /// List every weekly theme
    Themes,

    /// Show the gauntlet intro
    Gauntlet,

    /// Show a reward description
    Reward {
        /// Reward key (weekCompletion, mentorUnlocks, skillMilestones, graduation)
        key: String,
    },

    /// List every reward description
    Rewards,

    /// Search lesson text
    Search {
        /// Search query
        query: String,
    },

    /// Export the catalog document (JSON, or YAML for .yaml/.yml outputs)
    Export {
        /// Output file (writes JSON to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a catalog document
    Validate {
        /// Catalog file (validates the configured content if not provided)
        path: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let mut cfg = config::load_config()?;
        if let Some(path) = self.content {
            cfg = cfg.with_content(path);
        }

        match self.command {
            Commands::Config => show_config(&cfg),
            Commands::Validate { path } => {
                let source = path.map(ContentSource::File).unwrap_or(cfg.content);
                validate_source(&source).await
            }
            command => {
                let catalog = Catalog::from_source(&cfg.content).await?;
                run_query(&catalog, &cfg, command).await
            }
        }
    }
}

/// Run a command that reads from the catalog
async fn run_query(catalog: &Catalog, cfg: &ResolvedConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Lesson { id, json } => show_lesson(catalog, id, json),
        Commands::Lessons { limit } => {
            list_lessons(catalog, limit);
            Ok(())
        }
        Commands::Theme { week } => {
            let theme = catalog.get_weekly_theme(&week).map_err(|e| {
                warn!("{}", e);
                e
            })?;
            println!("{}: {}", week, theme);
            Ok(())
        }
        Commands::Themes => {
            for (week, theme) in catalog.weekly_themes() {
                println!("{:<8} {}", week, theme);
            }
            Ok(())
        }
        Commands::Gauntlet => {
            let intro = catalog.get_gauntlet_intro();
            println!("{}", "═".repeat(64));
            println!("  {}", intro.title);
            println!("{}", "═".repeat(64));
            println!();
            println!("{}", intro.description);
            println!();
            println!("  \"{}\"", intro.mentor_send_off);
            Ok(())
        }
        Commands::Reward { key } => {
            let description = catalog.get_reward_description(&key).map_err(|e| {
                warn!("{}", e);
                e
            })?;
            println!("{}: {}", key, description);
            Ok(())
        }
        Commands::Rewards => {
            for (key, description) in catalog.rewards() {
                println!("{:<16} {}", key, description);
            }
            Ok(())
        }
        Commands::Search { query } => {
            search_lessons(catalog, &query);
            Ok(())
        }
        Commands::Export { output } => export_catalog(catalog, cfg, output).await,
        Commands::Config | Commands::Validate { .. } => {
            unreachable!("handled before the catalog is loaded")
        }
    }
}

/// Show a single lesson
fn show_lesson(catalog: &Catalog, id: i64, json: bool) -> Result<()> {
    let lesson = catalog.get_lesson(id).map_err(|e| {
        warn!("{}", e);
        e
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(lesson)?);
        return Ok(());
    }

    print_lesson(lesson);
    Ok(())
}

fn print_lesson(lesson: &LessonEntry) {
    println!("{}", "═".repeat(64));
    println!("  Lesson {}: {}", lesson.lesson_id, lesson.title);
    println!("{}", "═".repeat(64));
    println!();
    println!("{}", lesson.story_intro);
    println!();
    println!("Challenge: {}", lesson.challenge);
    println!();
    println!("  \"{}\"", lesson.mentor_quote);
    println!();
    println!("{}", lesson.story_outro);

    // Absent teaser means nothing is printed at all
    if let Some(teaser) = lesson.teaser() {
        println!();
        println!("{}", teaser);
    }
}

/// List lessons in catalog order
fn list_lessons(catalog: &Catalog, limit: Option<usize>) {
    let lessons = catalog.list_lessons();
    let shown = limit.unwrap_or(lessons.len()).min(lessons.len());

    println!("{:<6} {:<50}", "ID", "TITLE");
    println!("{}", "-".repeat(56));

    for lesson in &lessons[..shown] {
        println!("{:<6} {:<50}", lesson.lesson_id, lesson.title);
    }

    println!("\nTotal: {} lessons", catalog.len());
}

/// Search lesson text
fn search_lessons(catalog: &Catalog, query: &str) {
    let results = catalog.search(query);

    if results.is_empty() {
        println!("No results found for: {}", query);
        return;
    }

    println!("Found {} result(s) for \"{}\":\n", results.len(), query);
    println!("{:<6} {:<50}", "ID", "TITLE");
    println!("{}", "-".repeat(56));

    for lesson in results {
        println!("{:<6} {:<50}", lesson.lesson_id, lesson.title);
    }
}

/// Export the catalog document to a file or stdout
async fn export_catalog(
    catalog: &Catalog,
    cfg: &ResolvedConfig,
    output: Option<PathBuf>,
) -> Result<()> {
    let doc = catalog.to_document();

    match output {
        Some(path) => {
            doc.write(&path, cfg.export.pretty).await?;
            eprintln!("Exported {} lessons to {}", catalog.len(), path.display());
        }
        None => {
            println!("{}", doc.render(DocumentFormat::Json, cfg.export.pretty)?);
        }
    }

    Ok(())
}

/// Validate a catalog source and report every violation
async fn validate_source(source: &ContentSource) -> Result<()> {
    let doc = match source {
        ContentSource::Builtin => builtin_document(),
        ContentSource::File(path) => CatalogDocument::read(path)
            .await
            .with_context(|| format!("Could not validate {}", path.display()))?,
    };

    match validate(&doc) {
        Ok(()) => {
            println!(
                "✅ Catalog is valid: {} lessons ({})",
                doc.lessons.len(),
                source
            );
            Ok(())
        }
        Err(violations) => {
            eprintln!("❌ Catalog is malformed ({})", source);
            for violation in violations.iter() {
                eprintln!("   - {}", violation);
            }
            anyhow::bail!("{} violation(s) found", violations.0.len())
        }
    }
}

/// Show resolved configuration
fn show_config(cfg: &ResolvedConfig) -> Result<()> {
    println!("{}", "═".repeat(64));
    println!("  CodeQuest Configuration");
    println!("{}", "═".repeat(64));
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!("Home:        {}", cfg.home.display());
    println!("Content:     {}", cfg.content);
    println!("Export:      pretty = {}", cfg.export.pretty);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lesson_command() {
        let cli = Cli::try_parse_from(["codequest", "lesson", "12", "--json"]).unwrap();
        match cli.command {
            Commands::Lesson { id, json } => {
                assert_eq!(id, 12);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_lesson_id() {
        let cli = Cli::try_parse_from(["codequest", "lesson", "-3"]).unwrap();
        assert!(matches!(cli.command, Commands::Lesson { id: -3, json: false }));
    }

    #[test]
    fn test_global_content_flag() {
        let cli = Cli::try_parse_from(["codequest", "themes", "--content", "alt.yaml"]).unwrap();
        assert_eq!(cli.content, Some(PathBuf::from("alt.yaml")));
        assert!(matches!(cli.command, Commands::Themes));
    }

    #[test]
    fn test_show_lesson_not_found_is_error() {
        let catalog = Catalog::builtin().unwrap();
        let err = show_lesson(&catalog, 41, false).unwrap_err();
        assert_eq!(err.to_string(), "Lesson not found: 41");
    }

    #[tokio::test]
    async fn test_validate_builtin_source() {
        assert!(validate_source(&ContentSource::Builtin).await.is_ok());
    }
}
