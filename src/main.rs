//! mpbrun - MacPack bundle launcher
//!
//! Command line entry point. Runs `.mpb` bundles through the macpack tool
//! installed in `~/.macpack`.

use clap::Parser;
use miette::Diagnostic;

use mpbrun::cli::{Cli, Commands};
use mpbrun::commands;
use mpbrun::ui::Verbose;

fn main() {
    let cli = Cli::parse();
    let verbose = Verbose::new(cli.verbose);

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(verbose, args),
        Commands::Show(args) => commands::show::run(verbose, args).map(|()| 0),
        Commands::List(args) => commands::list::run(verbose, args).map(|()| 0),
        Commands::Tool => commands::tool::run().map(|()| 0),
        Commands::Version => commands::version::run().map(|()| 0),
        Commands::Completions(args) => commands::completions::run(args).map(|()| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(help) = e.help() {
                eprintln!("  help: {help}");
            }
            std::process::exit(1);
        }
    }
}
