//! Game subprocess management
//!
//! Launching the game is fire-and-forget: the editor blocks only long
//! enough to spawn the interpreter and confirm it did not die on the spot.
//! The child is never awaited beyond that; stopping kills and reaps it.

use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::time::Duration;

use pydot_core::{PydotError, Result};

/// Entry scripts probed in order inside a project directory.
pub const ENTRY_CANDIDATES: &[&str] = &["game.py", "main.py"];

/// Locates the script `run` and `compile` operate on.
pub fn find_entry_script(project_dir: &Path) -> Result<PathBuf> {
    for candidate in ENTRY_CANDIDATES {
        let path = project_dir.join(candidate);
        if path.is_file() {
            return Ok(path);
        }
    }
    Err(PydotError::NotFound(format!(
        "no game.py or main.py in {}",
        project_dir.display()
    )))
}

/// Handle to the (at most one) running game subprocess.
#[derive(Default)]
pub struct GameProcess {
    child: Option<Child>,
}

impl GameProcess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns the project's entry script and returns the child pid.
    ///
    /// Tries `python3` first and falls back to `python`. A child that exits
    /// within the liveness window is reported as an error with its exit
    /// status; otherwise the process runs detached from the editor. A
    /// previous child still running is stopped first.
    pub fn start(&mut self, project_dir: &Path) -> Result<u32> {
        if self.is_running() {
            self.stop()?;
        }

        let entry = find_entry_script(project_dir)?;
        let script = entry
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("main.py")
            .to_string();

        let mut child = spawn_python(&script, project_dir)?;
        tracing::info!(script = %script, pid = child.id(), "game process started");

        // Liveness window: catch scripts that crash on import.
        std::thread::sleep(Duration::from_millis(200));
        if let Some(status) = child.try_wait()? {
            return Err(PydotError::Process(format!(
                "game exited immediately with {status}"
            )));
        }

        let pid = child.id();
        self.child = Some(child);
        Ok(pid)
    }

    /// True while the child is alive.
    pub fn is_running(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => match child.try_wait() {
                Ok(None) => true,
                _ => {
                    self.child = None;
                    false
                }
            },
            None => false,
        }
    }

    /// Kills and reaps the child. Returns whether anything was stopped.
    pub fn stop(&mut self) -> Result<bool> {
        let Some(mut child) = self.child.take() else {
            return Ok(false);
        };

        tracing::info!(pid = child.id(), "stopping game process");
        match child.kill() {
            Ok(()) => {}
            // Already exited on its own.
            Err(e) if e.kind() == std::io::ErrorKind::InvalidInput => {}
            Err(e) => return Err(e.into()),
        }
        child.wait()?;
        Ok(true)
    }
}

fn spawn_python(script: &str, cwd: &Path) -> Result<Child> {
    match Command::new("python3").arg(script).current_dir(cwd).spawn() {
        Ok(child) => Ok(child),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("python3 not found, trying python");
            Command::new("python")
                .arg(script)
                .current_dir(cwd)
                .spawn()
                .map_err(|e| {
                    PydotError::Process(format!("no python interpreter available: {e}"))
                })
        }
        Err(e) => Err(e.into()),
    }
}
