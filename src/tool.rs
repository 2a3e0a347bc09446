//! Location of the external `macpack` executable
//!
//! The tool always lives at a fixed place under the current user's home
//! directory. The path is computed at call time and never cached, so a caller
//! that changes `HOME` between runs sees the new location.

use std::path::{Path, PathBuf};

use crate::error::{LauncherError, Result};

/// Install directory of macpack, relative to the home directory
pub const TOOL_HOME_DIR: &str = ".macpack";

/// Executable path relative to [`TOOL_HOME_DIR`]
pub const TOOL_BIN: &str = "bin/macpack";

/// Absolute path of the external tool the launcher spawns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolLocation {
    path: PathBuf,
}

impl ToolLocation {
    /// Wrap an explicit executable path (stub tools, embedding callers)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Tool location below the given home directory
    pub fn from_home_dir(home: &Path) -> Self {
        Self::new(home.join(TOOL_HOME_DIR).join(TOOL_BIN))
    }

    /// Resolve the tool location for the current user
    ///
    /// Reads the home directory on every call. A missing home directory is a
    /// configuration error and is surfaced instead of falling back to a
    /// relative path.
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir().ok_or(LauncherError::HomeDirUnavailable)?;
        Ok(Self::from_home_dir(&home))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether an executable file currently exists at this location
    ///
    /// Informational only: the launcher never checks this before spawning.
    pub fn is_installed(&self) -> bool {
        self.path.is_file()
    }
}

impl AsRef<Path> for ToolLocation {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_from_home_dir_appends_fixed_segment() {
        let tool = ToolLocation::from_home_dir(Path::new("/home/alice"));
        assert_eq!(
            tool.path(),
            Path::new("/home/alice/.macpack/bin/macpack")
        );
    }

    #[test]
    fn test_new_keeps_path_verbatim() {
        let tool = ToolLocation::new("/opt/stub/macpack");
        assert_eq!(tool.path(), Path::new("/opt/stub/macpack"));
    }

    #[test]
    fn test_is_installed_false_when_missing() {
        let temp = TempDir::new().unwrap();
        let tool = ToolLocation::from_home_dir(temp.path());
        assert!(!tool.is_installed());
    }

    #[test]
    fn test_is_installed_true_when_file_exists() {
        let temp = TempDir::new().unwrap();
        let tool = ToolLocation::from_home_dir(temp.path());
        std::fs::create_dir_all(tool.path().parent().unwrap()).unwrap();
        std::fs::write(tool.path(), "#!/bin/sh\n").unwrap();
        assert!(tool.is_installed());
    }

    #[test]
    #[cfg(unix)]
    #[serial]
    fn test_resolve_reads_home_at_call_time() {
        let original = std::env::var_os("HOME");
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();

        unsafe {
            std::env::set_var("HOME", first.path());
        }
        let a = ToolLocation::resolve().unwrap();

        unsafe {
            std::env::set_var("HOME", second.path());
        }
        let b = ToolLocation::resolve().unwrap();

        unsafe {
            match original {
                Some(home) => std::env::set_var("HOME", home),
                None => std::env::remove_var("HOME"),
            }
        }

        assert_eq!(a, ToolLocation::from_home_dir(first.path()));
        assert_eq!(b, ToolLocation::from_home_dir(second.path()));
    }
}
