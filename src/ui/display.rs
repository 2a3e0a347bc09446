//! Display functions for bundles and the tool location

use console::Style;
use std::path::Path;

use crate::bundle::BundleManifest;
use crate::path;
use crate::tool::ToolLocation;

/// Display a bundle manifest
pub fn display_manifest(bundle_dir: &Path, manifest: &BundleManifest) {
    let label = Style::new().bold();
    println!("{}", Style::new().bold().yellow().apply_to(&manifest.name));
    println!("  {} {}", label.apply_to("Version:"), manifest.version);
    println!("  {} {}", label.apply_to("Author:"), manifest.author);
    println!(
        "  {} {}",
        label.apply_to("Exec:"),
        path::display(&manifest.exec_path(bundle_dir))
    );
    println!("  {} {}", label.apply_to("Path:"), path::display(bundle_dir));
}

/// Display the discovered bundles, one per line
pub fn display_bundle_list(root: &Path, bundles: &[std::path::PathBuf]) {
    if bundles.is_empty() {
        println!("No bundles found in {}", path::display(root));
        return;
    }

    for bundle in bundles {
        let shown = bundle.strip_prefix(root).unwrap_or(bundle);
        println!("  {}", Style::new().yellow().apply_to(path::display(shown)));
    }
}

/// Display where the tool is expected and whether it is there
pub fn display_tool(tool: &ToolLocation) {
    let status = if tool.is_installed() {
        Style::new().green().apply_to("installed")
    } else {
        Style::new().red().apply_to("not installed")
    };
    println!("{} ({})", path::display(tool.path()), status);
}
