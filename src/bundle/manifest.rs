//! Bundle manifest (`app.json`)
//!
//! The manifest describes the app packed in a bundle and names the entry
//! point below `exec/`. Reading it is informational; running a bundle is left
//! entirely to the external tool.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// Manifest file name at the bundle root
pub const MANIFEST_FILE: &str = "app.json";

/// Directory holding the bundle's executables
pub const EXEC_DIR: &str = "exec";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleManifest {
    pub name: String,
    pub version: String,
    pub author: String,
    /// Entry point, relative to `exec/`
    pub exec: String,
}

impl BundleManifest {
    /// Load `app.json` from a bundle directory
    pub fn load(bundle_dir: &Path) -> Result<Self> {
        let manifest_path = bundle_dir.join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&manifest_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                error::bundle::manifest_not_found(manifest_path.display().to_string())
            } else {
                error::fs::io_error(format!("Failed to read {}: {e}", manifest_path.display()))
            }
        })?;

        Self::from_json(&content).map_err(|e| {
            error::bundle::manifest_parse_failed(manifest_path.display().to_string(), e.to_string())
        })
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Path of the entry point inside `bundle_dir`
    pub fn exec_path(&self, bundle_dir: &Path) -> PathBuf {
        bundle_dir.join(EXEC_DIR).join(&self.exec)
    }
}
