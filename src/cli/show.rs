use clap::Parser;
use std::path::PathBuf;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show bundle information:\n    mpbrun show ./MyApp.mpb\n\n\
                  Print the manifest as JSON:\n    mpbrun show ./MyApp.mpb --json")]
pub struct ShowArgs {
    /// Path to the .mpb bundle
    #[arg(value_name = "BUNDLE_PATH")]
    pub bundle: PathBuf,

    /// Print the manifest as JSON
    #[arg(long)]
    pub json: bool,
}
