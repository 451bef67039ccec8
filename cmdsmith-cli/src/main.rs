//! cmdsmith CLI - list and scaffold the commands of a CLI project.
//!
//! Commands:
//! - `cmdsmith command:list [-t cli|readme] [-f json|text|markdown]`: List all commands
//! - `cmdsmith command:create [--name] [--summary] [--description] [--dir]`: Create a command
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error
//! - 2: Invalid arguments (reported by clap)

use std::io;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cmdsmith::commands::create::{run_create, CreateArgs};
use cmdsmith::commands::list::run_list;
use cmdsmith::{Cli, Commands};
use cmdsmith_common::DialoguerPrompter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("cmdsmith=debug,cmdsmith_common=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match std::env::current_dir() {
        Ok(root) => dispatch_command(cli.command, &root),
        Err(e) => {
            eprintln!("Error: cannot determine current directory: {}", e);
            1
        }
    };
    std::process::exit(exit_code);
}

/// Run a parsed subcommand against the project at `root`.
fn dispatch_command(command: Commands, root: &Path) -> i32 {
    let mut stdout = io::stdout().lock();
    match command {
        Commands::CommandList { target, format } => {
            result_to_exit(run_list(root, target, format, &mut stdout))
        }
        Commands::CommandCreate {
            name,
            summary,
            description,
            target_dir,
        } => {
            let args = CreateArgs {
                name,
                summary,
                description,
                target_dir,
            };
            let mut prompter = DialoguerPrompter::new(false);
            result_to_exit(run_create(root, args, &mut prompter, &mut stdout).map(|_| ()))
        }
    }
}

/// Convert a `Result<(), E: Display>` to an exit code.
fn result_to_exit<E: std::fmt::Display>(result: Result<(), E>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            1
        }
    }
}
