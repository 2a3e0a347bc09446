//! Bundle execution launcher
//!
//! Runs the external `macpack` tool against one bundle and hands back
//! everything it printed. The launcher never looks at the bundle itself and
//! never interprets the tool's exit status: a tool that ran and complained is
//! still an [`ExecutionResult::Output`]. Only failing to start, wait on, or
//! decode the tool produces an [`ExecutionResult::Failure`].
//!
//! ```no_run
//! use mpbrun::launcher::{ExecutionResult, Launcher};
//! use mpbrun::tool::ToolLocation;
//!
//! let launcher = Launcher::new(ToolLocation::new("/usr/local/bin/macpack"));
//! match launcher.run("./Demo.mpb") {
//!     ExecutionResult::Output { text, .. } => print!("{text}"),
//!     ExecutionResult::Failure(description) => eprintln!("{description}"),
//! }
//! ```

mod background;
mod capture;

pub use background::PendingRun;

use std::path::Path;

use crate::error::{self, Result};
use crate::path;
use crate::tool::ToolLocation;

/// Outcome of a single launcher invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// The tool ran to completion
    Output {
        /// Merged stdout and stderr, decoded as UTF-8
        text: String,
        /// Exit code of the tool, `None` when it was killed by a signal.
        /// Informational only.
        exit_code: Option<i32>,
    },
    /// The tool could not be run, or its output could not be decoded
    Failure(String),
}

impl ExecutionResult {
    pub fn is_output(&self) -> bool {
        matches!(self, ExecutionResult::Output { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ExecutionResult::Failure(_))
    }

    /// Captured text, if the tool ran
    pub fn output_text(&self) -> Option<&str> {
        match self {
            ExecutionResult::Output { text, .. } => Some(text),
            ExecutionResult::Failure(_) => None,
        }
    }

    /// Failure description, if the tool could not be run
    pub fn failure(&self) -> Option<&str> {
        match self {
            ExecutionResult::Output { .. } => None,
            ExecutionResult::Failure(description) => Some(description),
        }
    }

    /// Convert into a `Result`, turning `Failure` into [`crate::error::LauncherError::RunFailed`]
    pub fn into_result(self) -> Result<String> {
        match self {
            ExecutionResult::Output { text, .. } => Ok(text),
            ExecutionResult::Failure(description) => Err(error::tool::run_failed(description)),
        }
    }
}

/// Spawns the external tool for a bundle and collects its output
///
/// Holds no state besides the tool location, so one launcher can serve any
/// number of calls, including concurrent ones.
#[derive(Debug, Clone)]
pub struct Launcher {
    tool: ToolLocation,
}

impl Launcher {
    pub fn new(tool: ToolLocation) -> Self {
        Self { tool }
    }

    /// Launcher for the tool installed under the current user's home directory
    pub fn from_home() -> Result<Self> {
        Ok(Self::new(ToolLocation::resolve()?))
    }

    pub fn tool(&self) -> &ToolLocation {
        &self.tool
    }

    /// Run the tool against `bundle_path` and wait for it to exit
    ///
    /// `bundle_path` may be relative, empty or point at nothing; it is made
    /// absolute against the current directory and passed on as the tool's
    /// only argument.
    pub fn run(&self, bundle_path: &str) -> ExecutionResult {
        match path::normalize_bundle_path(bundle_path) {
            Ok(bundle) => self.run_normalized(&bundle),
            Err(e) => ExecutionResult::Failure(format!(
                "Failed to resolve bundle path '{bundle_path}': {e}"
            )),
        }
    }

    fn run_normalized(&self, bundle: &Path) -> ExecutionResult {
        let captured = match capture::run_merged(self.tool.path(), bundle.as_os_str()) {
            Ok(captured) => captured,
            Err(e) => {
                return ExecutionResult::Failure(format!(
                    "Failed to run {}: {e}",
                    path::display(self.tool.path())
                ));
            }
        };

        match String::from_utf8(captured.bytes) {
            Ok(text) => ExecutionResult::Output {
                text,
                exit_code: captured.status.code(),
            },
            Err(e) => ExecutionResult::Failure(format!(
                "Output of {} is not valid UTF-8: {}",
                path::display(self.tool.path()),
                e.utf8_error()
            )),
        }
    }
}

/// Run a bundle with the tool under the current user's home directory
///
/// The tool location is resolved on every call. Only a missing home
/// directory is an error; every run outcome comes back as data.
pub fn run(bundle_path: &str) -> Result<ExecutionResult> {
    Ok(Launcher::from_home()?.run(bundle_path))
}
