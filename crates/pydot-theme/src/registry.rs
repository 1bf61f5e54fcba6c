//! Theme registry
//!
//! The registry is the parsed form of `themes.json`. It preserves the file's
//! declaration order. Looking up an unknown theme key is a configuration
//! error - the caller picked a key that is not in the file - and is reported
//! as such rather than silently falling back to some other theme.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use pydot_core::{PydotError, Result};

use crate::Palette;

/// Default themes shipped with PyDot, written out on first run.
const BUILTIN_THEMES: &str = include_str!("../data/themes.json");

/// Ordered collection of named palettes.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Palette>,
}

impl ThemeRegistry {
    /// The registry of themes embedded in the binary.
    pub fn builtin() -> Self {
        let themes = serde_json::from_str(BUILTIN_THEMES)
            .expect("embedded themes.json must parse");
        Self { themes }
    }

    /// Loads a registry from a themes file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let themes: IndexMap<String, Palette> = serde_json::from_str(&contents)
            .map_err(|e| PydotError::Theme(format!("{}: {}", path.display(), e)))?;
        if themes.is_empty() {
            return Err(PydotError::Theme(format!(
                "{}: no themes defined",
                path.display()
            )));
        }
        Ok(Self { themes })
    }

    /// Loads the themes file if present, otherwise the embedded defaults.
    pub fn load_or_builtin(path: &Path) -> Self {
        match Self::load(path) {
            Ok(registry) => registry,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "falling back to built-in themes");
                Self::builtin()
            }
        }
    }

    /// Writes the registry out as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.themes)?)?;
        Ok(())
    }

    /// Resolves a theme key to its palette.
    pub fn palette(&self, key: &str) -> Result<&Palette> {
        self.themes
            .get(key)
            .ok_or_else(|| PydotError::Theme(format!("unknown theme '{key}'")))
    }

    /// Finds the key of the theme with the given display name.
    pub fn key_for_name(&self, name: &str) -> Option<&str> {
        self.themes
            .iter()
            .find(|(_, palette)| palette.name == name)
            .map(|(key, _)| key.as_str())
    }

    /// Theme keys and palettes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Palette)> {
        self.themes.iter().map(|(k, p)| (k.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_registry_parses() {
        let registry = ThemeRegistry::builtin();
        assert!(registry.palette("vs_code_dark").is_ok());
        assert!(registry.len() >= 2);
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let registry = ThemeRegistry::builtin();
        let err = registry.palette("does_not_exist").unwrap_err();
        assert!(matches!(err, PydotError::Theme(_)));
    }

    #[test]
    fn test_declaration_order_preserved() {
        let registry = ThemeRegistry::builtin();
        let keys: Vec<_> = registry.iter().map(|(k, _)| k).collect();
        assert_eq!(keys[0], "vs_code_dark");
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("themes.json");

        let registry = ThemeRegistry::builtin();
        registry.save(&path).unwrap();

        let loaded = ThemeRegistry::load(&path).unwrap();
        assert_eq!(loaded.len(), registry.len());
        assert_eq!(
            loaded.palette("vs_code_dark").unwrap(),
            registry.palette("vs_code_dark").unwrap()
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ThemeRegistry::load_or_builtin(&dir.path().join("nope.json"));
        assert!(registry.palette("vs_code_dark").is_ok());
    }

    #[test]
    fn test_key_for_name() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.key_for_name("VS Code Dark"), Some("vs_code_dark"));
        assert_eq!(registry.key_for_name("Nope"), None);
    }
}
