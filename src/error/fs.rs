//! File system errors

use super::LauncherError;

/// Creates a read directory failed error
pub fn read_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> LauncherError {
    LauncherError::ReadDirFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> LauncherError {
    LauncherError::IoError {
        message: message.into(),
    }
}
