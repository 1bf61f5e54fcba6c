//! PyDot Core - shared error type and application configuration
//!
//! This crate provides the pieces every other PyDot crate depends on:
//!
//! - `PydotError` / `Result` - the workspace error type
//! - `AppConfig` - `config.json` handling (theme selection, default project
//!   location) and config-directory discovery

mod config;
mod error;

pub use config::*;
pub use error::*;
