//! mpbrun - MacPack bundle launcher
//!
//! Runs `.mpb` bundles through the external `macpack` tool installed under
//! the user's home directory and reports the tool's merged output.
//!
//! The core is [`launcher::Launcher`]; the remaining modules make up the
//! command line front end around it.

pub mod bundle;
pub mod cli;
pub mod commands;
pub mod error;
pub mod launcher;
pub mod path;
pub mod selection;
pub mod tool;
pub mod ui;

pub use error::{LauncherError, Result};
pub use launcher::{ExecutionResult, Launcher, PendingRun};
pub use tool::ToolLocation;
