//! Main entry point for the gitsign-config CLI.
//!
//! Prints the configuration gitsign would use, resolved from defaults,
//! git config and the environment:
//! - `show`: Print the resolved configuration
//! - `get`: Print a single value
//! - `explain`: Print every value with its origin
//! - `env-vars`: List the consumed environment variables

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let level = gitsign_config::init_logger(cli.verbose, cli.quiet);
    log::debug!("log level {level}");

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        repo: cli.repo,
        config_file: cli.config_file,
        git: cli.git,
        no_env: cli.no_env,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::Explain(cmd) => cmd.execute(&global),
        cli::Command::EnvVars(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
