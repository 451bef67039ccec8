//! cmdsmith - list and scaffold the commands of a CLI project.
//!
//! The binary is a thin layer over [`cmdsmith_common`]: it parses arguments
//! with the definitions in [`cli`], resolves the project configuration from
//! the current directory and runs one of the [`commands`].

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, ListFormat, ListTarget};
