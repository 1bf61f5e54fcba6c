//! `pydot` - command-line front door for the PyDot IDE
//!
//! The GUI shell owns the editing experience; everything that touches the
//! world outside the text buffer is reachable from here too: first-run
//! setup, project scaffolding, recent projects, themes, class-file
//! generation, running the game, and compiling it to an executable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use tracing_subscriber::EnvFilter;

use pydot_core::{AppConfig, ConfigPaths};
use pydot_project::{
    CompileOptions, GameProcess, ProjectScaffolder, RecentProjects, compile_project,
};
use pydot_suggest::SuggestionData;
use pydot_theme::ThemeRegistry;

#[derive(Parser)]
#[command(name = "pydot", version, about = "A simple IDE for pygame games")]
struct Cli {
    /// Override the config directory (mainly for testing).
    #[arg(long, global = true, env = "PYDOT_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// First-run setup: create the config dir, default config and themes
    Init,
    /// Scaffold a new game project
    New {
        name: String,
        /// Parent directory; defaults to the configured project location
        #[arg(long)]
        location: Option<PathBuf>,
        /// Skip the pydot helper classes
        #[arg(long)]
        no_class_kit: bool,
    },
    /// Record a project as opened and show where it lives
    Open { path: PathBuf },
    /// List recently opened projects
    Recent,
    /// List available themes
    Themes,
    /// Set the active theme
    Theme { key: String },
    /// Add a class file to a project and wire its import into main.py
    Class {
        name: String,
        #[arg(long, default_value = ".")]
        project: PathBuf,
    },
    /// Launch the project's game
    Run {
        #[arg(default_value = ".")]
        project: PathBuf,
    },
    /// Package the project into an executable
    Compile {
        #[arg(default_value = ".")]
        project: PathBuf,
        /// Where the executable lands; defaults to the project root
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let paths = match &cli.config_dir {
        Some(dir) => ConfigPaths::new(dir),
        None => ConfigPaths::discover()?,
    };

    match cli.command {
        Command::Init => init(&paths),
        Command::New {
            name,
            location,
            no_class_kit,
        } => new_project(&paths, &name, location, !no_class_kit),
        Command::Open { path } => open_project(&paths, path),
        Command::Recent => list_recent(&paths),
        Command::Themes => list_themes(&paths),
        Command::Theme { key } => set_theme(&paths, &key),
        Command::Class { name, project } => add_class(&name, &project),
        Command::Run { project } => run_game(&project),
        Command::Compile { project, output } => compile(&project, output),
    }
}

fn init(paths: &ConfigPaths) -> Result<()> {
    paths.ensure_dir()?;

    let themes_file = paths.themes_file();
    if !themes_file.exists() {
        ThemeRegistry::builtin().save(&themes_file)?;
        println!("Wrote default themes to {}", themes_file.display());
    }

    let suggestions_file = paths.suggestions_file();
    if !suggestions_file.exists() {
        let data = serde_json::to_string_pretty(&SuggestionData::builtin())?;
        std::fs::write(&suggestions_file, data)?;
        println!(
            "Wrote default autocomplete data to {}",
            suggestions_file.display()
        );
    }

    if AppConfig::is_first_run(paths) {
        let config = AppConfig::default();
        config.save(paths)?;
        println!(
            "Created {} (theme: {}, projects: {})",
            paths.config_file().display(),
            config.theme,
            config.default_project_location.display()
        );
    } else {
        println!("Already set up at {}", paths.config_dir().display());
    }
    Ok(())
}

fn new_project(
    paths: &ConfigPaths,
    name: &str,
    location: Option<PathBuf>,
    with_class_kit: bool,
) -> Result<()> {
    let config = AppConfig::load(paths)?;
    let location = location.unwrap_or(config.default_project_location);
    std::fs::create_dir_all(&location)?;

    let scaffolder = ProjectScaffolder::new();
    let project_dir = scaffolder.create_project(&location, name, with_class_kit)?;

    let mut recent = RecentProjects::load(&paths.recent_projects_file());
    recent.touch(name, &project_dir);
    recent.save(&paths.recent_projects_file())?;

    println!("Created {}", project_dir.display());
    Ok(())
}

fn open_project(paths: &ConfigPaths, path: PathBuf) -> Result<()> {
    let path = path
        .canonicalize()
        .with_context(|| format!("no such project: {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("project")
        .to_string();

    let mut recent = RecentProjects::load(&paths.recent_projects_file());
    recent.touch(&name, &path);
    recent.save(&paths.recent_projects_file())?;

    println!("{} ({})", name, path.display());
    Ok(())
}

fn list_recent(paths: &ConfigPaths) -> Result<()> {
    let store_path = paths.recent_projects_file();
    let mut recent = RecentProjects::load(&store_path);
    if recent.prune() > 0 {
        recent.save(&store_path)?;
    }

    if recent.is_empty() {
        println!("No recent projects.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(["Name", "Path", "Last opened"]);
    for entry in recent.iter_recent_first() {
        table.add_row([
            entry.name.clone(),
            entry.path.display().to_string(),
            entry.last_opened.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn list_themes(paths: &ConfigPaths) -> Result<()> {
    let registry = ThemeRegistry::load_or_builtin(&paths.themes_file());
    let config = AppConfig::load(paths)?;

    let mut table = Table::new();
    table.set_header(["Key", "Name", "Background", "Active"]);
    for (key, palette) in registry.iter() {
        let active = if key == config.theme { "*" } else { "" };
        table.add_row([key, palette.name.as_str(), palette.bg_primary.as_str(), active]);
    }
    println!("{table}");
    Ok(())
}

fn set_theme(paths: &ConfigPaths, key: &str) -> Result<()> {
    let registry = ThemeRegistry::load_or_builtin(&paths.themes_file());
    // Validate before persisting; an unknown key is a configuration error.
    let palette = registry.palette(key)?;

    let mut config = AppConfig::load(paths)?;
    config.theme = key.to_string();
    config.save(paths)?;

    println!("Theme set to {} ({})", key, palette.name);
    Ok(())
}

fn add_class(name: &str, project: &Path) -> Result<()> {
    let scaffolder = ProjectScaffolder::new();
    let file = scaffolder.add_class_file(project, name)?;
    println!("Created {}", file.display());
    Ok(())
}

fn run_game(project: &Path) -> Result<()> {
    let mut process = GameProcess::new();
    let pid = process.start(project)?;
    // Fire-and-forget: dropping the handle leaves the game running.
    println!("Game running (pid {pid}).");
    Ok(())
}

fn compile(project: &Path, output: Option<PathBuf>) -> Result<()> {
    let options = CompileOptions {
        output_dir: output,
        ..CompileOptions::default()
    };
    let executable = compile_project(project, &options)?;
    println!("Built {}", executable.display());
    Ok(())
}
