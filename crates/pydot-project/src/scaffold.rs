//! Project scaffolding
//!
//! A [`ScaffoldManifest`] lists the directories and templated starter files
//! a new project gets. Entries flagged `class_kit` only apply when the user
//! asked for the pydot helper classes; kit files later in the list may
//! overwrite base files (the class-kit `main.py` replaces the basic one).

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::context;
use pydot_core::{PydotError, Result};
use serde::{Deserialize, Serialize};

use crate::TemplateEngine;

const BUILTIN_MANIFEST: &str = include_str!("../data/scaffold.json");

/// A directory to create under the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldDir {
    pub path: String,
    #[serde(default)]
    pub class_kit: bool,
}

/// A starter file: an embedded template rendered to a destination path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldFile {
    pub template: String,
    pub dest: String,
    #[serde(default)]
    pub class_kit: bool,
}

/// What a freshly scaffolded project contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldManifest {
    pub dirs: Vec<ScaffoldDir>,
    pub files: Vec<ScaffoldFile>,
}

impl ScaffoldManifest {
    /// The manifest embedded in the binary.
    pub fn builtin() -> Self {
        serde_json::from_str(BUILTIN_MANIFEST).expect("embedded scaffold.json must parse")
    }

    /// Loads a manifest override from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| PydotError::Project(format!("{}: {}", path.display(), e)))
    }
}

/// Creates project trees and class files from the manifest and templates.
pub struct ProjectScaffolder {
    engine: TemplateEngine,
    manifest: ScaffoldManifest,
}

impl ProjectScaffolder {
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
            manifest: ScaffoldManifest::builtin(),
        }
    }

    pub fn with_manifest(manifest: ScaffoldManifest) -> Self {
        Self {
            engine: TemplateEngine::new(),
            manifest,
        }
    }

    /// Creates `location/name` with the manifest's directories and starter
    /// files. Refuses to scaffold over an existing directory.
    pub fn create_project(
        &self,
        location: &Path,
        name: &str,
        with_class_kit: bool,
    ) -> Result<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PydotError::Project("project name is empty".into()));
        }

        let project_dir = location.join(name);
        if project_dir.exists() {
            return Err(PydotError::Project(format!(
                "{} already exists",
                project_dir.display()
            )));
        }

        fs::create_dir_all(&project_dir)?;
        for dir in &self.manifest.dirs {
            if dir.class_kit && !with_class_kit {
                continue;
            }
            fs::create_dir_all(project_dir.join(&dir.path))?;
        }

        for file in &self.manifest.files {
            if file.class_kit && !with_class_kit {
                continue;
            }
            let rendered = self
                .engine
                .render(&file.template, &context! { project_name => name })?;
            fs::write(project_dir.join(&file.dest), rendered)?;
        }

        tracing::info!(project = name, path = %project_dir.display(), "scaffolded project");
        Ok(project_dir)
    }

    /// Creates `scripts/<name>.py` with a templated class and threads the
    /// import into `main.py`.
    ///
    /// The file name is lower-cased and the class name capitalized, the way
    /// the editor's "new file" flow always did it. Blank names are rejected.
    pub fn add_class_file(&self, project_dir: &Path, raw_name: &str) -> Result<PathBuf> {
        let file_name = raw_name.trim().to_lowercase();
        if file_name.is_empty() {
            return Err(PydotError::Project("class file name is empty".into()));
        }

        let class_name = capitalize(&file_name);
        let scripts_dir = project_dir.join("scripts");
        fs::create_dir_all(&scripts_dir)?;

        let file_path = scripts_dir.join(format!("{file_name}.py"));
        let rendered = self
            .engine
            .render("class_file", &context! { class_name => class_name.as_str() })?;
        fs::write(&file_path, rendered)?;

        // Thread the import into main.py, once.
        let main_path = project_dir.join("main.py");
        if main_path.exists() {
            let content = fs::read_to_string(&main_path)?;
            let import_line = format!("from scripts.{file_name} import {class_name}\n");
            if !content.contains(import_line.trim_end()) {
                fs::write(&main_path, format!("{import_line}{content}"))?;
            }
        }

        tracing::info!(class = %class_name, path = %file_path.display(), "created class file");
        Ok(file_path)
    }
}

impl Default for ProjectScaffolder {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
