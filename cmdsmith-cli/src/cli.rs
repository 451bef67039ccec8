//! CLI definition for cmdsmith.
//!
//! This module is self-contained. It only depends on `clap` and `std` so that
//! `build.rs` can compile it via `#[path = "src/cli.rs"]` to generate
//! documentation, man pages, and shell completions at build time.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Where `command:list` sends its output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    /// Standard output
    #[default]
    Cli,
    /// The command list region of README.md
    Readme,
}

impl std::fmt::Display for ListTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListTarget::Cli => write!(f, "cli"),
            ListTarget::Readme => write!(f, "readme"),
        }
    }
}

/// Rendering of the command list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Pretty-printed JSON array
    Json,
    /// Aligned plain text
    #[default]
    Text,
    /// Markdown sections with option tables
    Markdown,
}

impl std::fmt::Display for ListFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListFormat::Json => write!(f, "json"),
            ListFormat::Text => write!(f, "text"),
            ListFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// cmdsmith - command scaffolding for CLI projects
///
/// Lists the commands a CLI exposes and scaffolds new ones.
#[derive(Parser, Debug)]
#[command(name = "cmdsmith")]
#[command(version)]
#[command(about = "List and scaffold the commands of a CLI project")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all commands
    #[command(name = "command:list")]
    CommandList {
        /// Where to write the list
        #[arg(short, long, value_enum, default_value_t = ListTarget::Cli)]
        target: ListTarget,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ListFormat::Text)]
        format: ListFormat,
    },
    /// Create a new command
    #[command(name = "command:create")]
    CommandCreate {
        /// Command name, formatted as {namespace}:{action}
        #[arg(long)]
        name: Option<String>,
        /// Command short summary
        #[arg(long)]
        summary: Option<String>,
        /// Command long description
        #[arg(long)]
        description: Option<String>,
        /// Directory where the command file is created
        #[arg(long = "dir", value_name = "DIR")]
        target_dir: Option<PathBuf>,
    },
}
