//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - run: Run command arguments
//! - show: Show command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod list;
pub mod run;
pub mod show;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use run::RunArgs;
pub use show::ShowArgs;

/// mpbrun - MacPack bundle launcher
///
/// Runs .mpb bundles through the macpack tool installed in ~/.macpack.
#[derive(Parser, Debug)]
#[command(
    name = "mpbrun",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Run MacPack .mpb bundles",
    long_about = "mpbrun hands a .mpb bundle to the macpack tool installed at \
                  ~/.macpack/bin/macpack and prints everything the tool writes, \
                  stdout and stderr merged.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mpbrun run ./MyApp.mpb        \x1b[90m# Run a bundle\x1b[0m\n   \
                  mpbrun show ./MyApp.mpb       \x1b[90m# Show bundle manifest\x1b[0m\n   \
                  mpbrun list ~/Apps            \x1b[90m# List bundles under a directory\x1b[0m\n   \
                  mpbrun tool                   \x1b[90m# Show where macpack is expected\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a bundle with macpack
    Run(RunArgs),

    /// Show bundle information
    Show(ShowArgs),

    /// List bundles under a directory
    List(ListArgs),

    /// Show the macpack tool location
    Tool,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
