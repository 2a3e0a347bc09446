//! Run command implementation

use std::io::Write;

use crate::bundle::has_bundle_extension;
use crate::cli::RunArgs;
use crate::error::{self, Result};
use crate::launcher::{ExecutionResult, Launcher};
use crate::path;
use crate::selection::BundleSelection;
use crate::ui::{self, Verbose};

/// Run the selected bundle and print the tool's merged output
///
/// Returns the process exit code to use: `0` unless `--exit-code` asked for
/// the tool's own code.
pub fn run(verbose: Verbose, args: RunArgs) -> Result<i32> {
    let selection = BundleSelection::from_arg(args.bundle);
    let bundle_path = selection.require()?;

    let launcher = Launcher::from_home()?;
    verbose.log(format!("Tool: {}", path::display(launcher.tool().path())));
    if verbose.is_enabled() {
        log_bundle_path(verbose, bundle_path);
    }

    let spinner = ui::create_spinner(&format!("Running {bundle_path}"));
    let result = launcher.run_in_background(bundle_path).wait();
    spinner.finish_and_clear();

    match result {
        ExecutionResult::Output { text, exit_code } => {
            write_output(&text)?;
            match exit_code {
                Some(code) => verbose.log(format!("Tool exited with code {code}")),
                None => verbose.log("Tool was terminated by a signal"),
            }
            Ok(process_exit_code(args.exit_code, exit_code))
        }
        ExecutionResult::Failure(description) => Err(error::tool::run_failed(description)),
    }
}

fn log_bundle_path(verbose: Verbose, bundle_path: &str) {
    match path::normalize_bundle_path(bundle_path) {
        Ok(bundle) => {
            verbose.log(format!("Bundle: {}", path::display(&bundle)));
            if !has_bundle_extension(&bundle) {
                ui::warn(format!("{} does not end in .mpb", path::display(&bundle)));
            }
        }
        Err(e) => verbose.log(format!("Could not resolve bundle path: {e}")),
    }
}

fn write_output(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| error::fs::io_error(format!("Failed to write tool output: {e}")))
}

/// Exit code for the CLI process after a completed run
fn process_exit_code(forward: bool, tool_code: Option<i32>) -> i32 {
    if !forward {
        return 0;
    }
    // Killed by a signal: report a generic failure
    tool_code.unwrap_or(1)
}
