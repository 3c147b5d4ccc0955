//! Configuration for codequest.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (CODEQUEST_HOME, CODEQUEST_CONTENT)
//! 2. Project config file (.codequest/config.yaml)
//! 3. User config file ($CODEQUEST_HOME/config.yaml)
//! 4. Defaults (~/.codequest, built-in content)
//!
//! Config file discovery:
//! - Searches current directory and parents for .codequest/config.yaml
//! - Falls back to config.yaml inside the home directory
//! - Project paths are relative to the project root (parent of .codequest/);
//!   home config paths are relative to the home directory
//!
//! The resolved config is returned by value; callers own it and pass it on.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::library::ContentSource;

pub const HOME_ENV: &str = "CODEQUEST_HOME";
pub const CONTENT_ENV: &str = "CODEQUEST_CONTENT";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfig {
    /// Catalog document to load instead of the built-in content
    pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub pretty: Option<bool>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to codequest home
    pub home: PathBuf,
    /// Where the catalog is loaded from
    pub content: ContentSource,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Export settings
    pub export: ExportSettings,
}

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub pretty: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ResolvedConfig {
    /// Replace the content source (used by the --content flag)
    pub fn with_content(mut self, path: impl Into<PathBuf>) -> Self {
        self.content = ContentSource::File(path.into());
        self
    }
}

/// Environment overrides, captured once so resolution stays testable
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub home: Option<PathBuf>,
    pub content: Option<PathBuf>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            home: std::env::var_os(HOME_ENV).map(PathBuf::from),
            content: std::env::var_os(CONTENT_ENV).map(PathBuf::from),
        }
    }
}

/// Find a project config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".codequest").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to `base`
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Resolve configuration from an explicit start directory and overrides
pub fn resolve(start: &Path, env: &EnvOverrides) -> Result<ResolvedConfig> {
    let home = match env.home.clone() {
        Some(home) => home,
        None => dirs::home_dir()
            .context("Failed to determine home directory")?
            .join(".codequest"),
    };

    // Project config wins over the user config in the home directory
    let located = find_config_file(start)
        .map(|path| {
            // Base directory is the parent of .codequest/
            let base = path
                .parent()
                .and_then(|p| p.parent())
                .unwrap_or(Path::new("."))
                .to_path_buf();
            (path, base)
        })
        .or_else(|| {
            let path = home.join("config.yaml");
            path.exists().then(|| (path, home.clone()))
        });

    let (content, export, config_file) = if let Some((config_path, base_dir)) = located {
        let config = load_config_file(&config_path)?;

        let content = if let Some(ref env_content) = env.content {
            ContentSource::File(env_content.clone())
        } else if let Some(ref file) = config.content.file {
            ContentSource::File(resolve_path(&base_dir, file))
        } else {
            ContentSource::Builtin
        };

        let export = ExportSettings {
            pretty: config
                .export
                .as_ref()
                .and_then(|e| e.pretty)
                .unwrap_or(true),
        };

        (content, export, Some(config_path))
    } else {
        // No config file - use env vars or defaults
        let content = env
            .content
            .clone()
            .map(ContentSource::File)
            .unwrap_or(ContentSource::Builtin);

        (content, ExportSettings::default(), None)
    };

    Ok(ResolvedConfig {
        home,
        content,
        config_file,
        export,
    })
}

/// Load configuration from the current directory and process environment
pub fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    resolve(&cwd, &EnvOverrides::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn isolated_env(temp: &TempDir) -> EnvOverrides {
        EnvOverrides {
            home: Some(temp.path().join("home")),
            content: None,
        }
    }

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let config_dir = dir.join(".codequest");
        std::fs::create_dir_all(&config_dir).unwrap();
        let config_path = config_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "{}", body).unwrap();
        config_path
    }

    #[test]
    fn test_default_config_without_file() {
        let temp = TempDir::new().unwrap();
        let config = resolve(temp.path(), &isolated_env(&temp)).unwrap();

        assert_eq!(config.home, temp.path().join("home"));
        assert_eq!(config.content, ContentSource::Builtin);
        assert!(config.config_file.is_none());
        assert!(config.export.pretty);
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            temp.path(),
            r#"
version: "1.0"
content:
  file: content/catalog.yaml
export:
  pretty: false
"#,
        );

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.content.file, Some("content/catalog.yaml".to_string()));
        assert_eq!(config.export.unwrap().pretty, Some(false));
    }

    #[test]
    fn test_project_config_found_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        let nested = project.join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();
        write_config(
            &project,
            "version: \"1.0\"\ncontent:\n  file: content/catalog.json\n",
        );

        let config = resolve(&nested, &isolated_env(&temp)).unwrap();

        assert!(config.config_file.is_some());
        match config.content {
            ContentSource::File(path) => {
                assert!(path.ends_with("content/catalog.json"));
                assert!(path.starts_with(&project) || path.starts_with(project.canonicalize().unwrap()));
            }
            ContentSource::Builtin => panic!("expected file source"),
        }
    }

    #[test]
    fn test_env_content_overrides_config_file() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "version: \"1.0\"\ncontent:\n  file: content/catalog.json\n",
        );

        let env = EnvOverrides {
            content: Some(PathBuf::from("/srv/override.yaml")),
            ..isolated_env(&temp)
        };
        let config = resolve(temp.path(), &env).unwrap();

        assert_eq!(
            config.content,
            ContentSource::File(PathBuf::from("/srv/override.yaml"))
        );
    }

    #[test]
    fn test_home_config_used_as_fallback() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("home");
        std::fs::create_dir_all(&home).unwrap();
        std::fs::write(
            home.join("config.yaml"),
            "version: \"1.0\"\nexport:\n  pretty: false\n",
        )
        .unwrap();

        let workdir = temp.path().join("elsewhere");
        std::fs::create_dir_all(&workdir).unwrap();

        let config = resolve(&workdir, &isolated_env(&temp)).unwrap();
        assert_eq!(config.config_file, Some(home.join("config.yaml")));
        assert!(!config.export.pretty);
        assert_eq!(config.content, ContentSource::Builtin);
    }

    #[test]
    fn test_with_content_override() {
        let temp = TempDir::new().unwrap();
        let config = resolve(temp.path(), &isolated_env(&temp))
            .unwrap()
            .with_content("catalog.json");
        assert_eq!(config.content, ContentSource::File(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "./subdir"),
            PathBuf::from("/home/user/project/subdir")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
    }
}
