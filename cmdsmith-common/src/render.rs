//! Multi-format rendering of command descriptors.

use std::fmt::Write as _;

use crate::descriptor::CommandDescriptor;
use crate::error::Result;

/// Output representation of a command list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Pretty-printed JSON array of descriptors.
    Json,
    /// Aligned plain text for terminals.
    #[default]
    Text,
    /// Markdown sections with argument/option tables.
    Markdown,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Text => write!(f, "text"),
            Format::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render `commands` in `format`. `package_name` prefixes every usage line.
pub fn render(commands: &[CommandDescriptor], format: Format, package_name: &str) -> Result<String> {
    let output = match format {
        Format::Json => render_json(commands)?,
        Format::Text => render_text(commands, package_name),
        Format::Markdown => render_markdown(commands, package_name),
    };
    tracing::debug!(%format, bytes = output.len(), "Rendered command list");
    Ok(output)
}

/// Two-space indented JSON, nothing around it.
pub fn render_json(commands: &[CommandDescriptor]) -> Result<String> {
    Ok(serde_json::to_string_pretty(commands)?)
}

/// Width of the term column shared by every command: longest term plus two.
pub fn column_width(commands: &[CommandDescriptor]) -> usize {
    commands
        .iter()
        .flat_map(|cmd| cmd.terms())
        .map(|row| row.term.chars().count())
        .max()
        .unwrap_or(0)
        + 2
}

pub fn render_text(commands: &[CommandDescriptor], package_name: &str) -> String {
    let width = column_width(commands);
    let mut out = String::new();

    for cmd in commands {
        let _ = write!(out, "Command: {}\n\n", cmd.name);
        let _ = write!(out, "  Usage: {} {}\n\n", package_name, cmd.invocation_syntax);
        let _ = writeln!(out, "  {}", cmd.summary);

        if !cmd.positional_arguments.is_empty() {
            out.push_str("\nArguments:\n");
            for arg in &cmd.positional_arguments {
                let _ = writeln!(out, "  {:<width$} {}", arg.term, arg.description);
            }
        }

        if !cmd.options.is_empty() {
            out.push_str("\nOptions:\n");
            for opt in &cmd.options {
                let _ = writeln!(out, "  {:<width$} {}", opt.term, opt.description);
            }
        }

        let _ = write!(out, "\n\n{}\n\n", "-".repeat(width));
    }

    out
}

pub fn render_markdown(commands: &[CommandDescriptor], package_name: &str) -> String {
    let mut out = String::new();

    for cmd in commands {
        let _ = write!(out, "### `{}`\n\n", cmd.name);
        let _ = write!(out, "{}\n\n", cmd.summary);
        let _ = write!(
            out,
            "__Usage:__ `{} {}`\n\n",
            package_name, cmd.invocation_syntax
        );

        if !cmd.positional_arguments.is_empty() {
            out.push_str("| Arg | Description |\n|:----:|:----:|\n");
            for arg in &cmd.positional_arguments {
                let _ = writeln!(out, "| `{}` | {} |", arg.term, table_cell(&arg.description));
            }
            out.push('\n');
        }

        if !cmd.options.is_empty() {
            out.push_str("| Option | Description |\n|:----:|:----:|\n");
            for opt in &cmd.options {
                let _ = writeln!(out, "| `{}` | {} |", opt.term, table_cell(&opt.description));
            }
            out.push('\n');
        }
    }

    out
}

/// Keep a description on one table row.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
