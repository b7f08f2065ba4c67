// qtremux-cli/src/main.rs
//
// Entry point for the qtremux CLI.
//
// Responsibilities:
// - Parsing command-line arguments (`cli` module).
// - Initializing logging (env_logger via the `logging` module).
// - Dispatching to the subcommand implementations.
// - Rendering fatal errors and managing the process exit code. Engine exit
//   codes pass through untouched; fatal setup errors exit with 1.

use clap::Parser;
use std::process;

mod cli;
mod commands;
mod logging;
mod output;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Remux(args) => commands::remux::execute(args),
        Commands::Info(args) => commands::info::execute(args),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            output::print_cli_error(&e.to_string());
            process::exit(1);
        }
    }
}
