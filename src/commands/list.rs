//! List command implementation

use crate::bundle::discover_bundles;
use crate::cli::ListArgs;
use crate::error::Result;
use crate::path;
use crate::ui::{Verbose, display};

pub fn run(verbose: Verbose, args: ListArgs) -> Result<()> {
    let root = match args.dir {
        Some(dir) => path::absolutize(&dir)?,
        None => std::env::current_dir()?,
    };
    verbose.log(format!(
        "Searching {} (depth {})",
        path::display(&root),
        args.depth
    ));

    let bundles = discover_bundles(&root, args.depth)?;
    display::display_bundle_list(&root, &bundles);

    Ok(())
}
