//! Application configuration
//!
//! PyDot keeps its state under the platform config directory in a `pydot`
//! folder: `config.json` (active theme and default project location),
//! `themes.json` (the theme registry), `suggestions.json` (autocomplete word
//! lists) and `recent_projects.json`. All paths
//! flow through an explicit [`ConfigPaths`] value so components never reach
//! for ambient globals and tests can point everything at a temp dir.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{PydotError, Result};

/// Default theme key used on first run and as the load fallback.
pub const DEFAULT_THEME: &str = "vs_code_dark";

/// Resolved locations of PyDot's on-disk state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    config_dir: PathBuf,
}

impl ConfigPaths {
    /// Uses an explicit config directory. Components take this for real use
    /// and tests alike; there is no ambient global.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Discovers the platform config directory (`~/.config/pydot` on Linux,
    /// the roaming app-data folder on Windows).
    pub fn discover() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| PydotError::Configuration("no config directory for this platform".into()))?;
        Ok(Self::new(base.join("pydot")))
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    pub fn themes_file(&self) -> PathBuf {
        self.config_dir.join("themes.json")
    }

    pub fn suggestions_file(&self) -> PathBuf {
        self.config_dir.join("suggestions.json")
    }

    pub fn recent_projects_file(&self) -> PathBuf {
        self.config_dir.join("recent_projects.json")
    }

    /// Creates the config directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }
}

/// Contents of `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Key of the active theme in the theme registry.
    pub theme: String,
    /// Directory new projects are created under.
    pub default_project_location: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            default_project_location: default_project_location(),
        }
    }
}

impl AppConfig {
    /// Loads the config file, falling back to defaults when it is missing.
    ///
    /// A file that exists but does not parse is a configuration error and is
    /// surfaced rather than silently replaced.
    pub fn load(paths: &ConfigPaths) -> Result<Self> {
        let path = paths.config_file();
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let config = serde_json::from_str(&contents).map_err(|e| {
                    PydotError::Configuration(format!("{}: {}", path.display(), e))
                })?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Writes the config file as pretty JSON, creating the config dir first.
    pub fn save(&self, paths: &ConfigPaths) -> Result<()> {
        paths.ensure_dir()?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(paths.config_file(), contents)?;
        Ok(())
    }

    /// True when no config file exists yet, i.e. PyDot has never been set up.
    pub fn is_first_run(paths: &ConfigPaths) -> bool {
        !paths.config_file().exists()
    }
}

/// `~/Documents/PyDot` on Windows, `~/Projects/PyDot` elsewhere, falling
/// back to the current directory when no home can be determined.
fn default_project_location() -> PathBuf {
    let base = if cfg!(windows) {
        dirs::document_dir().or_else(dirs::home_dir)
    } else {
        dirs::home_dir().map(|h| h.join("Projects"))
    };
    base.unwrap_or_else(|| PathBuf::from(".")).join("PyDot")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::new(dir.path().join("pydot"));

        let config = AppConfig::load(&paths).unwrap();
        assert_eq!(config.theme, DEFAULT_THEME);
        assert!(AppConfig::is_first_run(&paths));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::new(dir.path().join("pydot"));

        let config = AppConfig {
            theme: "midnight".to_string(),
            default_project_location: PathBuf::from("/tmp/games"),
        };
        config.save(&paths).unwrap();

        assert!(!AppConfig::is_first_run(&paths));
        let loaded = AppConfig::load(&paths).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::new(dir.path());
        paths.ensure_dir().unwrap();
        fs::write(paths.config_file(), "{ not json").unwrap();

        let err = AppConfig::load(&paths).unwrap_err();
        assert!(matches!(err, PydotError::Configuration(_)));
    }

    #[test]
    fn test_paths_are_rooted_in_config_dir() {
        let paths = ConfigPaths::new("/tmp/pydot-test");
        assert_eq!(paths.config_file(), Path::new("/tmp/pydot-test/config.json"));
        assert_eq!(paths.themes_file(), Path::new("/tmp/pydot-test/themes.json"));
        assert_eq!(
            paths.suggestions_file(),
            Path::new("/tmp/pydot-test/suggestions.json")
        );
        assert_eq!(
            paths.recent_projects_file(),
            Path::new("/tmp/pydot-test/recent_projects.json")
        );
    }
}
