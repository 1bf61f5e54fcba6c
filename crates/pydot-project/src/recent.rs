//! Recent-projects store
//!
//! A JSON list of previously opened projects, most recently opened first
//! when listed. Entries whose directory has disappeared are pruned on load
//! so the launcher never offers a dead path.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use pydot_core::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEntry {
    pub id: Uuid,
    pub name: String,
    pub path: PathBuf,
    pub last_opened: DateTime<Utc>,
}

/// The recent-projects list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentProjects {
    entries: Vec<RecentEntry>,
}

impl RecentProjects {
    /// Loads the store; a missing file is an empty list, a malformed one is
    /// logged and replaced with an empty list rather than killing the
    /// launcher.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(store) => store,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "malformed recent projects file");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Records that `path` was opened as project `name` just now, inserting
    /// or refreshing its entry.
    pub fn touch(&mut self, name: &str, path: &Path) {
        match self.entries.iter_mut().find(|e| e.path == path) {
            Some(entry) => {
                entry.name = name.to_string();
                entry.last_opened = Utc::now();
            }
            None => self.entries.push(RecentEntry {
                id: Uuid::new_v4(),
                name: name.to_string(),
                path: path.to_path_buf(),
                last_opened: Utc::now(),
            }),
        }
    }

    /// Drops entries whose directory no longer exists. Returns how many
    /// were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.path.exists());
        before - self.entries.len()
    }

    /// Entries ordered most recently opened first.
    pub fn iter_recent_first(&self) -> impl Iterator<Item = &RecentEntry> {
        let mut sorted: Vec<&RecentEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.last_opened.cmp(&a.last_opened));
        sorted.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
