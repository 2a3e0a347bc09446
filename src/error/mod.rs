//! Error types and handling for mpbrun
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`tool`]: Tool errors
//! - [`bundle`]: Bundle manifest errors
//! - [`fs`]: File system errors
//!
//! Launcher failures are not errors: `Launcher::run` hands them back as
//! [`crate::launcher::ExecutionResult::Failure`] data. `LauncherError` covers
//! everything around it (configuration, selection, the CLI commands).

pub mod bundle;
pub mod fs;
pub mod tool;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mpbrun operations
#[derive(Error, Diagnostic, Debug)]
pub enum LauncherError {
    // Tool errors
    #[error("Could not determine the home directory of the current user")]
    #[diagnostic(
        code(mpbrun::tool::home_unavailable),
        help("Set the HOME environment variable to your home directory")
    )]
    HomeDirUnavailable,

    #[error("Bundle failed to run: {description}")]
    #[diagnostic(
        code(mpbrun::tool::run_failed),
        help("Check that macpack is installed at ~/.macpack/bin/macpack (see 'mpbrun tool')")
    )]
    RunFailed { description: String },

    // Bundle errors
    #[error("No bundle selected")]
    #[diagnostic(
        code(mpbrun::bundle::not_selected),
        help("Pass the path to a .mpb bundle, e.g. 'mpbrun run ./MyApp.mpb'")
    )]
    NoBundleSelected,

    #[error("Bundle manifest not found: {path}")]
    #[diagnostic(
        code(mpbrun::bundle::manifest_not_found),
        help("A bundle keeps its metadata in app.json at the bundle root")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to parse bundle manifest {path}: {reason}")]
    #[diagnostic(code(mpbrun::bundle::manifest_parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(mpbrun::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("Failed to read directory {path}: {reason}")]
    #[diagnostic(code(mpbrun::fs::read_dir_failed))]
    ReadDirFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mpbrun::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for LauncherError {
    fn from(err: std::io::Error) -> Self {
        LauncherError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, LauncherError>;
