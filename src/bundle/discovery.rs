//! Find bundles below a directory

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::has_bundle_extension;
use crate::error::{self, Result};

/// Default search depth for [`discover_bundles`]
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// List `.mpb` directories under `root`, sorted by path
///
/// Bundles are not searched for nested bundles. Entries that cannot be read
/// are skipped; only an unreadable `root` is an error.
pub fn discover_bundles(root: &Path, max_depth: usize) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(error::fs::read_dir_failed(
            root.display().to_string(),
            "not a directory",
        ));
    }

    let mut bundles = Vec::new();
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let Ok(entry) = entry else {
            continue;
        };
        if entry.file_type().is_dir() && has_bundle_extension(entry.path()) {
            bundles.push(entry.into_path());
            walker.skip_current_dir();
        }
    }

    Ok(bundles)
}
