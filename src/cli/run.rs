use clap::Parser;

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run a bundle:\n    mpbrun run ./MyApp.mpb\n\n\
                  Run a bundle and exit with the tool's exit code:\n    mpbrun run ~/Apps/MyApp.mpb --exit-code\n\n\
                  Show what is being launched:\n    mpbrun -v run ./MyApp.mpb")]
pub struct RunArgs {
    /// Path to the .mpb bundle (relative paths are resolved against the current directory)
    #[arg(value_name = "BUNDLE_PATH")]
    pub bundle: Option<String>,

    /// Exit with the tool's exit code instead of 0 once it has run
    #[arg(long)]
    pub exit_code: bool,
}
