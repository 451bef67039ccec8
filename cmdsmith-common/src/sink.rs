//! Output sinks for a rendered command list.

use std::io::Write;
use std::path::Path;

use crate::descriptor::CommandDescriptor;
use crate::error::{CmdsmithError, Result};
use crate::naming::anchor;
use crate::splice::{splice_region, SpliceError};

/// Line opening the README region owned by `command:list`.
pub const README_START_MARKER: &str = "<!-- DO NOT REMOVE: CommandListStart -->";

/// Line closing the README region owned by `command:list`.
pub const README_END_MARKER: &str = "<!-- DO NOT REMOVE: CommandListEnd -->";

/// Where rendered output goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Target {
    /// Standard output.
    #[default]
    Cli,
    /// The marker region of the project README.
    Readme,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Cli => write!(f, "cli"),
            Target::Readme => write!(f, "readme"),
        }
    }
}

/// Send `output` to `target`.
///
/// `cli` writes to `out`; `readme` rewrites the marker region of the file at
/// `readme_path` and leaves `out` alone.
pub fn dispatch<W: Write>(
    output: &str,
    target: Target,
    commands: &[CommandDescriptor],
    readme_path: &Path,
    out: &mut W,
) -> Result<()> {
    match target {
        Target::Cli => {
            writeln!(out, "{output}")?;
            Ok(())
        }
        Target::Readme => update_readme(readme_path, output, commands),
    }
}

/// One `[name](#anchor)` link per command, newline separated.
pub fn table_of_contents(commands: &[CommandDescriptor]) -> String {
    commands
        .iter()
        .map(|cmd| format!("[{}](#{})", cmd.name, anchor(&cmd.name)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Content placed between the README markers.
pub fn readme_region(output: &str, commands: &[CommandDescriptor]) -> String {
    format!(
        "\n\n### Table of Contents\n\n{}\n\n{}",
        table_of_contents(commands),
        output
    )
}

/// Rewrite the command list region of the README at `path`.
///
/// Nothing is written when the file or either marker is missing.
pub fn update_readme(path: &Path, output: &str, commands: &[CommandDescriptor]) -> Result<()> {
    if !path.is_file() {
        return Err(CmdsmithError::not_found("README.md", path));
    }

    let readme = std::fs::read_to_string(path)?;
    let content = readme_region(output, commands);
    let updated = splice_region(&readme, README_START_MARKER, README_END_MARKER, &content)
        .map_err(|err| match err {
            SpliceError::MissingMarker(marker) => CmdsmithError::MalformedTarget {
                path: path.to_path_buf(),
                marker,
            },
        })?;

    std::fs::write(path, updated)?;
    tracing::info!(path = %path.display(), commands = commands.len(), "README updated");
    Ok(())
}
