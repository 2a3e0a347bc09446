//! Show command implementation

use crate::bundle::{BundleManifest, has_bundle_extension};
use crate::cli::ShowArgs;
use crate::error::{self, Result};
use crate::path;
use crate::ui::{self, Verbose, display};

pub fn run(verbose: Verbose, args: ShowArgs) -> Result<()> {
    let bundle_dir = path::absolutize(&args.bundle)?;
    verbose.log(format!("Reading manifest of {}", path::display(&bundle_dir)));

    if !has_bundle_extension(&bundle_dir) {
        ui::warn(format!("{} does not end in .mpb", path::display(&bundle_dir)));
    }

    let manifest = BundleManifest::load(&bundle_dir)?;

    if args.json {
        let json = serde_json::to_string_pretty(&manifest)
            .map_err(|e| error::fs::io_error(format!("Failed to serialize manifest: {e}")))?;
        println!("{json}");
    } else {
        display::display_manifest(&bundle_dir, &manifest);
    }

    Ok(())
}
