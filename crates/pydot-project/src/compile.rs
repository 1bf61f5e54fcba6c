//! Compile-to-executable wrapper
//!
//! Packaging semantics belong to PyInstaller; this module only assembles
//! the invocation, waits for it (the artifact move needs the exit), and
//! relocates the built executable. Unlike the run command this one blocks.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use pydot_core::{PydotError, Result};

use crate::find_entry_script;

/// Options for the PyInstaller invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Bundle everything into a single executable file.
    pub onefile: bool,
    /// Suppress the console window (games draw their own).
    pub windowed: bool,
    /// Where the finished executable lands; defaults to the project root.
    pub output_dir: Option<PathBuf>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            onefile: true,
            windowed: true,
            output_dir: None,
        }
    }
}

/// Packages the project's entry script and returns the executable path.
///
/// Build intermediates go to `build/` inside the project and are removed
/// afterwards; the artifact is moved out of PyInstaller's `dist/` into the
/// requested output directory.
pub fn compile_project(project_dir: &Path, options: &CompileOptions) -> Result<PathBuf> {
    let entry = find_entry_script(project_dir)?;
    let dist_dir = project_dir.join("dist");
    let work_dir = project_dir.join("build");

    let mut command = Command::new("pyinstaller");
    command
        .current_dir(project_dir)
        .arg("--noconfirm")
        .arg("--distpath")
        .arg(&dist_dir)
        .arg("--workpath")
        .arg(&work_dir)
        .arg("--specpath")
        .arg(&work_dir);
    if options.onefile {
        command.arg("--onefile");
    }
    if options.windowed {
        command.arg("--windowed");
    }
    command.arg(&entry);

    tracing::info!(entry = %entry.display(), "compiling project");
    let output = command.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PydotError::Process(
                "pyinstaller not found; install it with 'pip install pyinstaller'".into(),
            )
        } else {
            e.into()
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PydotError::Process(format!(
            "pyinstaller failed with {}: {}",
            output.status,
            last_lines(&stderr, 5)
        )));
    }

    let artifact = built_artifact(&entry, &dist_dir, options.onefile);
    if !artifact.exists() {
        return Err(PydotError::Process(format!(
            "expected build output at {}",
            artifact.display()
        )));
    }

    // Post-completion: move the artifact out of dist/ and drop the
    // intermediates.
    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| project_dir.to_path_buf());
    fs::create_dir_all(&output_dir)?;
    let destination = output_dir.join(artifact.file_name().unwrap_or_default());
    if destination.exists() {
        remove_path(&destination)?;
    }
    fs::rename(&artifact, &destination)?;

    let _ = fs::remove_dir_all(&work_dir);
    let _ = fs::remove_dir_all(&dist_dir);

    tracing::info!(executable = %destination.display(), "compile finished");
    Ok(destination)
}

/// Where PyInstaller leaves the artifact for the given mode.
fn built_artifact(entry: &Path, dist_dir: &Path, onefile: bool) -> PathBuf {
    let stem = entry
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("main");
    if onefile {
        let name = if cfg!(windows) {
            format!("{stem}.exe")
        } else {
            stem.to_string()
        };
        dist_dir.join(name)
    } else {
        dist_dir.join(stem)
    }
}

fn remove_path(path: &Path) -> Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}

fn last_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}
