//! PyDot Project - the collaborator commands around the editor core
//!
//! This crate covers everything PyDot does to the world outside the text
//! buffer:
//!
//! - **Scaffolding**: create a project directory tree and starter files
//!   rendered from MiniJinja templates, and generate new class files wired
//!   into `main.py`.
//! - **Recent projects**: the JSON store behind the launcher's project list.
//! - **Game process**: launch the project's entry script as a detached
//!   subprocess and stop it again.
//! - **Compile**: the thin wrapper around PyInstaller that packages a
//!   project into an executable.

mod compile;
mod process;
mod recent;
mod scaffold;
mod templates;

pub use compile::{CompileOptions, compile_project};
pub use process::{GameProcess, find_entry_script};
pub use recent::{RecentEntry, RecentProjects};
pub use scaffold::{ProjectScaffolder, ScaffoldDir, ScaffoldFile, ScaffoldManifest};
pub use templates::TemplateEngine;
