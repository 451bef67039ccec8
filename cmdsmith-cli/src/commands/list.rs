//! `command:list` - render the cmdsmith command registry.

use std::io::Write;
use std::path::Path;

use clap::CommandFactory;
use cmdsmith_common::{list_commands, ConfigProvider, Format, ListOptions, Result, Target};

use super::display_path;
use crate::cli::{Cli, ListFormat, ListTarget};

impl From<ListTarget> for Target {
    fn from(target: ListTarget) -> Self {
        match target {
            ListTarget::Cli => Target::Cli,
            ListTarget::Readme => Target::Readme,
        }
    }
}

impl From<ListFormat> for Format {
    fn from(format: ListFormat) -> Self {
        match format {
            ListFormat::Json => Format::Json,
            ListFormat::Text => Format::Text,
            ListFormat::Markdown => Format::Markdown,
        }
    }
}

/// Run `command:list` for the project at `root`.
pub fn run_list<W: Write>(
    root: &Path,
    target: ListTarget,
    format: ListFormat,
    out: &mut W,
) -> Result<()> {
    let config = ConfigProvider::new(root).load()?;
    let registry = Cli::command();
    let options = ListOptions {
        target: target.into(),
        format: format.into(),
        readme_path: config.readme_path(root),
        package_name: registry.get_name().to_string(),
    };

    let outcome = list_commands(&registry, &options, out)?;
    tracing::debug!(commands = outcome.command_count, target = %outcome.target, "Listed commands");

    if outcome.target == Target::Readme {
        writeln!(
            out,
            "Updated {} with {} commands",
            display_path(root, &options.readme_path),
            outcome.command_count
        )?;
    }
    Ok(())
}
