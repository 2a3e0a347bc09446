//! Tool errors

use super::LauncherError;

/// Creates a run failed error from a launcher failure description
pub fn run_failed(description: impl Into<String>) -> LauncherError {
    LauncherError::RunFailed {
        description: description.into(),
    }
}
