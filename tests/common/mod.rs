//! Common test utilities for mpbrun integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway home directory plus a work directory for bundles
pub struct TestHome {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Used as `HOME` for the binary under test
    pub home: PathBuf,
    /// Working directory for the binary under test
    pub work: PathBuf,
}

impl TestHome {
    /// Create a new test home with empty `home/` and `work/` directories
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        // Canonical so paths echoed by the stub match on macOS (/var -> /private/var)
        let root = temp
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory");
        let home = root.join("home");
        let work = root.join("work");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        std::fs::create_dir_all(&work).expect("Failed to create work directory");
        Self { temp, home, work }
    }

    /// Where the binary will look for macpack
    #[allow(dead_code)]
    pub fn tool_path(&self) -> PathBuf {
        self.home.join(".macpack").join("bin").join("macpack")
    }

    /// Install a `/bin/sh` stub as `~/.macpack/bin/macpack`
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn install_stub(&self, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.tool_path();
        std::fs::create_dir_all(path.parent().expect("tool path has a parent"))
            .expect("Failed to create tool directory");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write stub");
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat stub")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod stub");
        path
    }

    /// Create a bundle directory under `work/`, optionally with an `app.json`
    #[allow(dead_code)]
    pub fn create_bundle(&self, rel: &str, manifest: Option<&str>) -> PathBuf {
        let bundle = self.work.join(rel);
        std::fs::create_dir_all(&bundle).expect("Failed to create bundle directory");
        if let Some(content) = manifest {
            std::fs::write(bundle.join("app.json"), content).expect("Failed to write app.json");
        }
        bundle
    }

    /// The mpbrun binary with `HOME` and the working directory pointed here
    pub fn cmd(&self) -> Command {
        let mut cmd = mpbrun_cmd();
        cmd.env("HOME", &self.home).current_dir(&self.work);
        cmd
    }
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn mpbrun_cmd() -> Command {
    Command::cargo_bin("mpbrun").expect("mpbrun binary is built for integration tests")
}

/// Render a path the way the stub receives it
#[allow(dead_code)]
pub fn arg_of(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
