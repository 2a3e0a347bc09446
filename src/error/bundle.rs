//! Bundle selection and manifest errors

use super::LauncherError;

/// Creates a manifest not found error
pub fn manifest_not_found(path: impl Into<String>) -> LauncherError {
    LauncherError::ManifestNotFound { path: path.into() }
}

/// Creates a manifest parse failed error
pub fn manifest_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> LauncherError {
    LauncherError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
