//! cmdsmith common - core library behind the `cmdsmith` CLI.
//!
//! This crate turns a `clap` command registry into plain descriptors, renders
//! them as JSON, text or Markdown, writes the result to the terminal or into a
//! README marker region, and scaffolds new commands into a project.
//!
//! # Listing commands
//!
//! ```rust
//! use clap::{Arg, Command};
//! use cmdsmith_common::{get_commands, render, Format};
//!
//! let registry = Command::new("app")
//!     .subcommand(Command::new("project:build").about("Build the project"))
//!     .subcommand(Command::new("project:clean").arg(Arg::new("path")));
//!
//! let commands = get_commands(&registry);
//! assert_eq!(commands.len(), 2);
//!
//! let text = render(&commands, Format::Text, "app").unwrap();
//! assert!(text.starts_with("Command: project:build"));
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod list;
pub mod naming;
pub mod prompt;
pub mod render;
pub mod scaffold;
pub mod sink;
pub mod splice;

pub use config::{CmdsmithConfig, ConfigProvider};
pub use descriptor::{get_commands, CommandDescriptor, TermDescriptor};
pub use error::{CmdsmithError, Result};
pub use list::{list_commands, ListOptions, ListOutcome};
pub use prompt::{DialoguerPrompter, ParameterSpec, Prompter};
pub use render::{render, Format};
pub use scaffold::{scaffold, ProjectLayout, ScaffoldReport, ScaffoldRequest};
pub use sink::{dispatch, Target, README_END_MARKER, README_START_MARKER};
pub use splice::{splice_region, SpliceError};
