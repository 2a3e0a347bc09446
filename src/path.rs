//! Bundle path normalization
//!
//! Bundle paths arrive as free-form strings and must reach the tool as an
//! absolute, standardized path. Normalization is purely lexical: the bundle
//! does not have to exist and symlinks are left alone.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Normalize a bundle path against the current working directory
///
/// The empty string resolves to the working directory itself.
pub fn normalize_bundle_path(input: &str) -> io::Result<PathBuf> {
    absolutize(Path::new(input))
}

/// [`normalize_bundle_path`] for a path that is already a `Path`
///
/// Only relative paths consult the working directory.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize_against(path, path));
    }
    let cwd = std::env::current_dir()?;
    Ok(normalize_against(path, &cwd))
}

/// Make `path` absolute relative to `base`, then fold `.` and `..`
///
/// `..` never climbs above the root. `base` is expected to be absolute.
pub fn normalize_against(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping the root is a no-op
                normalized.pop();
            }
            Component::Normal(name) => normalized.push(name),
        }
    }

    normalized
}

/// Platform-friendly display form of a path (strips `\\?\` on Windows)
pub fn display(path: &Path) -> String {
    dunce::simplified(path).display().to_string()
}
