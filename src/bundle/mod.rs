//! Read-only bundle helpers
//!
//! None of this is consulted by the launcher, which hands any path to the
//! tool untouched. The CLI uses these to list bundles and show their
//! manifest.

pub mod discovery;
pub mod manifest;

pub use discovery::discover_bundles;
pub use manifest::BundleManifest;

use std::path::Path;

/// Directory extension of a MacPack bundle
pub const BUNDLE_EXTENSION: &str = "mpb";

/// Whether the last path component carries the `.mpb` extension
pub fn has_bundle_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(BUNDLE_EXTENSION))
}
