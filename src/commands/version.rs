//! Version command implementation

use crate::error::Result;
use crate::tool::{TOOL_BIN, TOOL_HOME_DIR};

/// Print version, build and tool lookup information
pub fn run() -> Result<()> {
    for line in version_lines() {
        println!("{line}");
    }
    Ok(())
}

fn version_lines() -> Vec<String> {
    vec![
        format!("mpbrun {}", env!("CARGO_PKG_VERSION")),
        String::new(),
        "Build info:".to_string(),
        // Minimum supported rustc declared in Cargo.toml
        format!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION")),
        format!("  Profile: {}", build_profile()),
        format!("  Tool: ~/{TOOL_HOME_DIR}/{TOOL_BIN}"),
    ]
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
