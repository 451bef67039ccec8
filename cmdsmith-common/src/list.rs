//! The `command:list` pipeline: introspect, render, dispatch.

use std::io::Write;
use std::path::PathBuf;

use clap::Command;

use crate::descriptor::get_commands;
use crate::error::{CmdsmithError, Result};
use crate::render::{render, Format};
use crate::sink::{dispatch, Target};

/// Inputs of one `command:list` run.
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub target: Target,
    pub format: Format,
    /// README rewritten when `target` is [`Target::Readme`].
    pub readme_path: PathBuf,
    /// Prefix of every usage line; usually the binary name.
    pub package_name: String,
}

/// What a `command:list` run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOutcome {
    pub command_count: usize,
    pub target: Target,
}

/// Reject combinations that can never succeed, before touching anything.
pub fn validate_options(target: Target, format: Format) -> Result<()> {
    if target == Target::Readme && format != Format::Markdown {
        return Err(CmdsmithError::UserInput(format!(
            "Please set format to {} if you want to output to README.md (got {}).",
            Format::Markdown,
            format
        )));
    }
    Ok(())
}

/// Render the subcommands of `registry` and send them to the chosen target.
pub fn list_commands<W: Write>(
    registry: &Command,
    options: &ListOptions,
    out: &mut W,
) -> Result<ListOutcome> {
    validate_options(options.target, options.format)?;

    let commands = get_commands(registry);
    let output = render(&commands, options.format, &options.package_name)?;
    dispatch(
        &output,
        options.target,
        &commands,
        &options.readme_path,
        out,
    )?;

    Ok(ListOutcome {
        command_count: commands.len(),
        target: options.target,
    })
}
