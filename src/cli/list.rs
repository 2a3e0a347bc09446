use clap::Parser;
use std::path::PathBuf;

use crate::bundle::discovery::DEFAULT_MAX_DEPTH;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List bundles in the current directory:\n    mpbrun list\n\n\
                  List bundles under a directory:\n    mpbrun list ~/Apps\n\n\
                  Search deeper:\n    mpbrun list ~/Apps --depth 6")]
pub struct ListArgs {
    /// Directory to search (defaults to current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Maximum directory depth to search
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub depth: usize,
}
