//! Command registry introspection.
//!
//! Converts the subcommands registered on a `clap::Command` into plain,
//! serializable [`CommandDescriptor`] records. The registry is passed in
//! explicitly, so the conversion is a pure function of it.

use clap::{Arg, ArgAction, Command};
use serde::{Deserialize, Serialize};

/// Name of the subcommand clap generates to print help.
const HELP_COMMAND: &str = "help";

/// One argument or option row: the placeholder/flag syntax and its help text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDescriptor {
    /// Display form, e.g. `<NAME>` or `-f, --format <FORMAT>`.
    pub term: String,
    /// Help text including default / possible value annotations.
    pub description: String,
}

/// Plain description of one registered subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDescriptor {
    /// Command name, conventionally `{namespace}:{action}`.
    pub name: String,
    /// How to invoke it, e.g. `command:list [options]`.
    pub invocation_syntax: String,
    /// Short description.
    pub summary: String,
    /// Positional arguments in declaration order.
    pub positional_arguments: Vec<TermDescriptor>,
    /// Options in declaration order.
    pub options: Vec<TermDescriptor>,
}

impl CommandDescriptor {
    /// Build a descriptor from a (built) clap command.
    pub fn from_command(cmd: &Command) -> Self {
        let positional_arguments = visible_positionals(cmd)
            .map(|arg| TermDescriptor {
                term: argument_term(arg),
                description: argument_description(arg),
            })
            .collect();
        let options = visible_options(cmd)
            .map(|arg| TermDescriptor {
                term: option_term(arg),
                description: argument_description(arg),
            })
            .collect();

        Self {
            name: cmd.get_name().to_string(),
            invocation_syntax: invocation_syntax(cmd),
            summary: command_summary(cmd),
            positional_arguments,
            options,
        }
    }

    /// All argument and option rows, arguments first.
    pub fn terms(&self) -> impl Iterator<Item = &TermDescriptor> {
        self.positional_arguments.iter().chain(self.options.iter())
    }
}

/// Read every visible subcommand of `registry`, excluding `help`, sorted by name.
///
/// The registry is cloned and built first so that the generated help flags
/// and propagated global options appear exactly as users see them.
pub fn get_commands(registry: &Command) -> Vec<CommandDescriptor> {
    let mut registry = registry.clone();
    registry.build();

    let mut commands: Vec<CommandDescriptor> = registry
        .get_subcommands()
        .filter(|cmd| !cmd.is_hide_set() && cmd.get_name() != HELP_COMMAND)
        .map(CommandDescriptor::from_command)
        .collect();
    commands.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!(count = commands.len(), "Introspected command registry");
    commands
}

fn visible_positionals(cmd: &Command) -> impl Iterator<Item = &Arg> {
    cmd.get_positionals().filter(|arg| !arg.is_hide_set())
}

fn visible_options(cmd: &Command) -> impl Iterator<Item = &Arg> {
    cmd.get_arguments()
        .filter(|arg| !arg.is_positional() && !arg.is_hide_set())
}

/// `--help` and `--version` are generated by clap and do not count as options
/// of the command itself.
fn is_builtin_flag(arg: &Arg) -> bool {
    matches!(
        arg.get_action(),
        ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
    )
}

fn command_summary(cmd: &Command) -> String {
    cmd.get_about()
        .or_else(|| cmd.get_long_about())
        .map(|about| about.to_string())
        .and_then(|about| about.lines().next().map(|line| line.trim().to_string()))
        .unwrap_or_default()
}

fn invocation_syntax(cmd: &Command) -> String {
    let mut syntax = cmd.get_name().to_string();
    if let Some(alias) = cmd.get_visible_aliases().next() {
        syntax.push('|');
        syntax.push_str(alias);
    }
    if visible_options(cmd).any(|arg| !is_builtin_flag(arg)) {
        syntax.push_str(" [options]");
    }
    for arg in visible_positionals(cmd) {
        syntax.push(' ');
        syntax.push_str(&argument_term(arg));
    }
    syntax
}

fn value_name(arg: &Arg) -> String {
    arg.get_value_names()
        .and_then(|names| names.first())
        .map(|name| name.to_string())
        .unwrap_or_else(|| arg.get_id().as_str().to_uppercase())
}

fn accepts_multiple(arg: &Arg) -> bool {
    matches!(arg.get_action(), ArgAction::Append)
        || arg
            .get_num_args()
            .is_some_and(|range| range.max_values() > 1)
}

fn argument_term(arg: &Arg) -> String {
    let name = value_name(arg);
    let mut term = if arg.is_required_set() {
        format!("<{name}>")
    } else {
        format!("[{name}]")
    };
    if accepts_multiple(arg) {
        term.push_str("...");
    }
    term
}

fn option_term(arg: &Arg) -> String {
    let mut flags = Vec::new();
    if let Some(short) = arg.get_short() {
        flags.push(format!("-{short}"));
    }
    if let Some(long) = arg.get_long() {
        flags.push(format!("--{long}"));
    }
    let mut term = flags.join(", ");

    if arg.get_action().takes_values() {
        let name = value_name(arg);
        let optional_value = arg
            .get_num_args()
            .is_some_and(|range| range.min_values() == 0);
        if optional_value {
            term.push_str(&format!(" [{name}]"));
        } else {
            term.push_str(&format!(" <{name}>"));
        }
        if accepts_multiple(arg) {
            term.push_str("...");
        }
    }
    term
}

fn argument_description(arg: &Arg) -> String {
    let mut parts = Vec::new();

    if let Some(help) = arg.get_help().or_else(|| arg.get_long_help()) {
        let help = help.to_string();
        let help = help.trim();
        if !help.is_empty() {
            parts.push(help.to_string());
        }
    }

    if arg.get_action().takes_values() {
        if !arg.is_hide_default_value_set() && !arg.get_default_values().is_empty() {
            let defaults = arg
                .get_default_values()
                .iter()
                .map(|value| value.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("[default: {defaults}]"));
        }

        if !arg.is_hide_possible_values_set() {
            let values = arg
                .get_possible_values()
                .iter()
                .filter(|value| !value.is_hide_set())
                .map(|value| value.get_name().to_string())
                .collect::<Vec<_>>();
            if !values.is_empty() {
                parts.push(format!("[possible values: {}]", values.join(", ")));
            }
        }
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Command {
        Command::new("app")
            .subcommand(
                Command::new("project:clean")
                    .about("Remove build output")
                    .arg(Arg::new("path").help("Directory to clean")),
            )
            .subcommand(
                Command::new("project:build")
                    .about("Build the project")
                    .arg(
                        Arg::new("target")
                            .help("Build target")
                            .required(true)
                            .value_name("TARGET"),
                    )
                    .arg(
                        Arg::new("mode")
                            .short('m')
                            .long("mode")
                            .help("Build mode")
                            .value_name("MODE")
                            .default_value("debug")
                            .value_parser(["debug", "release"]),
                    )
                    .arg(
                        Arg::new("verbose")
                            .short('v')
                            .long("verbose")
                            .help("Print every step")
                            .action(ArgAction::SetTrue),
                    ),
            )
            .subcommand(Command::new("internal:secret").hide(true))
    }

    #[test]
    fn test_get_commands_sorted_without_help() {
        let commands = get_commands(&registry());
        let names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["project:build", "project:clean"]);
    }

    #[test]
    fn test_get_commands_empty_registry() {
        assert!(get_commands(&Command::new("app")).is_empty());
    }

    #[test]
    fn test_help_subcommand_filtered() {
        let registry = Command::new("app")
            .subcommand(Command::new("b:one"))
            .subcommand(Command::new("a:two"))
            .subcommand(Command::new("c:three"));
        let commands = get_commands(&registry);
        assert_eq!(commands.len(), 3);
        assert!(commands.iter().all(|c| c.name != "help"));
        assert_eq!(commands[0].name, "a:two");
        assert_eq!(commands[2].name, "c:three");
    }

    #[test]
    fn test_invocation_syntax() {
        let commands = get_commands(&registry());
        assert_eq!(
            commands[0].invocation_syntax,
            "project:build [options] <TARGET>"
        );
        assert_eq!(commands[1].invocation_syntax, "project:clean [PATH]");
    }

    #[test]
    fn test_positional_arguments() {
        let commands = get_commands(&registry());
        assert_eq!(
            commands[0].positional_arguments,
            vec![TermDescriptor {
                term: "<TARGET>".to_string(),
                description: "Build target".to_string(),
            }]
        );
    }

    #[test]
    fn test_option_terms_and_annotations() {
        let commands = get_commands(&registry());
        let mode = commands[0]
            .options
            .iter()
            .find(|o| o.term.contains("--mode"))
            .expect("mode option");
        assert_eq!(mode.term, "-m, --mode <MODE>");
        assert_eq!(
            mode.description,
            "Build mode [default: debug] [possible values: debug, release]"
        );

        let verbose = commands[0]
            .options
            .iter()
            .find(|o| o.term.contains("--verbose"))
            .expect("verbose option");
        assert_eq!(verbose.term, "-v, --verbose");
        assert_eq!(verbose.description, "Print every step");
    }

    #[test]
    fn test_generated_help_flag_is_listed() {
        let commands = get_commands(&registry());
        assert!(commands[1].options.iter().any(|o| o.term == "-h, --help"));
    }

    #[test]
    fn test_multiple_values_marked() {
        let registry = Command::new("app").subcommand(
            Command::new("files:add").arg(
                Arg::new("files")
                    .required(true)
                    .num_args(1..)
                    .value_name("FILE"),
            ),
        );
        let commands = get_commands(&registry);
        assert_eq!(commands[0].positional_arguments[0].term, "<FILE>...");
    }

    #[test]
    fn test_hidden_argument_skipped() {
        let registry = Command::new("app").subcommand(
            Command::new("x:y")
                .arg(Arg::new("secret").long("secret").hide(true))
                .arg(Arg::new("shown").long("shown")),
        );
        let commands = get_commands(&registry);
        assert!(commands[0].options.iter().all(|o| !o.term.contains("secret")));
        assert!(commands[0].options.iter().any(|o| o.term.contains("shown")));
    }

    #[test]
    fn test_terms_chain_arguments_then_options() {
        let commands = get_commands(&registry());
        let first = commands[0].terms().next().expect("at least one term");
        assert_eq!(first.term, "<TARGET>");
    }
}
