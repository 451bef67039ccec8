//! Interactive parameter prompting.
//!
//! Parameters are declared as an ordered list of [`ParameterSpec`]. Values
//! supplied up front that pass validation are kept; everything else is asked
//! for through a [`Prompter`], one question at a time, in declaration order.

use std::collections::{BTreeMap, HashMap};
use std::io::{self, IsTerminal};

use dialoguer::{theme::ColorfulTheme, Input};

use crate::error::{CmdsmithError, Result};

/// Validation function for a parameter value. `Err` carries the message
/// shown to the user.
pub type Validator = fn(&str) -> std::result::Result<(), String>;

/// One parameter the flow may ask for.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    pub name: String,
    /// Question shown to the user.
    pub message: String,
    /// Pre-filled answer; parameters without one are required.
    pub default: Option<String>,
    pub validator: Option<Validator>,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            default: None,
            validator: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Run the validator, if any.
    pub fn validate(&self, value: &str) -> std::result::Result<(), String> {
        match self.validator {
            Some(validator) => validator(value),
            None => Ok(()),
        }
    }
}

/// Source of answers for missing parameters.
pub trait Prompter {
    /// Ask for `spec` and return the raw answer.
    fn ask(&mut self, spec: &ParameterSpec) -> Result<String>;

    /// Whether a rejected answer can be asked for again.
    fn is_interactive(&self) -> bool {
        true
    }
}

/// Terminal prompter backed by dialoguer.
///
/// Falls back to defaults when stdin is not a terminal or when created
/// non-interactive; a parameter without a default is then an error.
pub struct DialoguerPrompter {
    non_interactive: bool,
}

impl DialoguerPrompter {
    pub fn new(non_interactive: bool) -> Self {
        Self {
            non_interactive: non_interactive || !io::stdin().is_terminal(),
        }
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, spec: &ParameterSpec) -> Result<String> {
        if self.non_interactive {
            return spec.default.clone().ok_or_else(|| {
                CmdsmithError::UserInput(format!(
                    "Missing required parameter '{}' ({})",
                    spec.name, spec.message
                ))
            });
        }

        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(spec.message.as_str())
            .allow_empty(spec.default.is_some());

        if let Some(default) = spec.default.as_ref().filter(|d| !d.is_empty()) {
            input = input.default(default.clone());
        }
        if let Some(validator) = spec.validator {
            input = input.validate_with(move |value: &String| validator(value));
        }

        input
            .interact_text()
            .map_err(|e| CmdsmithError::Prompt(e.to_string()))
    }

    fn is_interactive(&self) -> bool {
        !self.non_interactive
    }
}

/// Resolve every parameter of `specs`.
///
/// A provided, non-empty value that passes validation is used as is. Missing
/// or invalid values are asked for; an interactive prompter is asked again
/// until the answer validates, a non-interactive one fails on the first
/// invalid value.
pub fn resolve_parameters(
    specs: &[ParameterSpec],
    provided: &HashMap<String, String>,
    prompter: &mut dyn Prompter,
) -> Result<BTreeMap<String, String>> {
    let mut resolved = BTreeMap::new();

    for spec in specs {
        if let Some(value) = provided.get(&spec.name).filter(|v| !v.is_empty()) {
            match spec.validate(value) {
                Ok(()) => {
                    resolved.insert(spec.name.clone(), value.clone());
                    continue;
                }
                Err(reason) if prompter.is_interactive() => {
                    eprintln!("❌ {reason}");
                }
                Err(reason) => return Err(CmdsmithError::UserInput(reason)),
            }
        }

        let answer = loop {
            let answer = prompter.ask(spec)?;
            match spec.validate(&answer) {
                Ok(()) => break answer,
                Err(reason) if prompter.is_interactive() => {
                    eprintln!("❌ {reason}");
                }
                Err(reason) => return Err(CmdsmithError::UserInput(reason)),
            }
        };

        tracing::debug!(parameter = %spec.name, "Resolved parameter from prompt");
        resolved.insert(spec.name.clone(), answer);
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Answers questions from a fixed script and records what was asked.
    struct ScriptedPrompter {
        answers: VecDeque<String>,
        asked: Vec<String>,
        interactive: bool,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                asked: Vec::new(),
                interactive: true,
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, spec: &ParameterSpec) -> Result<String> {
            self.asked.push(spec.name.clone());
            self.answers
                .pop_front()
                .ok_or_else(|| CmdsmithError::Prompt("no more answers".to_string()))
        }

        fn is_interactive(&self) -> bool {
            self.interactive
        }
    }

    fn needs_colon(value: &str) -> std::result::Result<(), String> {
        if value.contains(':') {
            Ok(())
        } else {
            Err("must contain ':'".to_string())
        }
    }

    fn specs() -> Vec<ParameterSpec> {
        vec![
            ParameterSpec::new("name", "Command name").with_validator(needs_colon),
            ParameterSpec::new("summary", "Summary").with_default(""),
            ParameterSpec::new("dir", "Directory").with_default("src/commands"),
        ]
    }

    fn provided(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_all_provided_asks_nothing() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let values = resolve_parameters(
            &specs(),
            &provided(&[("name", "a:b"), ("summary", "s"), ("dir", "lib")]),
            &mut prompter,
        )
        .unwrap();
        assert!(prompter.asked.is_empty());
        assert_eq!(values["name"], "a:b");
        assert_eq!(values["dir"], "lib");
    }

    #[test]
    fn test_missing_asked_in_declaration_order() {
        let mut prompter = ScriptedPrompter::new(&["x:y", "", "src/commands"]);
        let values = resolve_parameters(&specs(), &HashMap::new(), &mut prompter).unwrap();
        assert_eq!(prompter.asked, vec!["name", "summary", "dir"]);
        assert_eq!(values["name"], "x:y");
        assert_eq!(values["summary"], "");
    }

    #[test]
    fn test_invalid_provided_value_is_asked_again() {
        let mut prompter = ScriptedPrompter::new(&["project:build"]);
        let values = resolve_parameters(
            &specs(),
            &provided(&[("name", "nocolon"), ("summary", "s"), ("dir", "d")]),
            &mut prompter,
        )
        .unwrap();
        assert_eq!(prompter.asked, vec!["name"]);
        assert_eq!(values["name"], "project:build");
    }

    #[test]
    fn test_invalid_answer_repeats_question() {
        let mut prompter = ScriptedPrompter::new(&["bad", "still-bad", "good:one"]);
        let values = resolve_parameters(
            &specs()[..1],
            &HashMap::new(),
            &mut prompter,
        )
        .unwrap();
        assert_eq!(prompter.asked, vec!["name", "name", "name"]);
        assert_eq!(values["name"], "good:one");
    }

    #[test]
    fn test_non_interactive_invalid_value_fails() {
        let mut prompter = ScriptedPrompter::new(&[]);
        prompter.interactive = false;
        let err = resolve_parameters(&specs(), &provided(&[("name", "nocolon")]), &mut prompter)
            .unwrap_err();
        assert!(matches!(err, CmdsmithError::UserInput(ref m) if m == "must contain ':'"));
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_non_interactive_dialoguer_uses_defaults() {
        let mut prompter = DialoguerPrompter::new(true);
        let values = resolve_parameters(&specs(), &provided(&[("name", "a:b")]), &mut prompter)
            .unwrap();
        assert_eq!(values["summary"], "");
        assert_eq!(values["dir"], "src/commands");
    }

    #[test]
    fn test_non_interactive_dialoguer_missing_required() {
        let mut prompter = DialoguerPrompter::new(true);
        let err = resolve_parameters(&specs(), &HashMap::new(), &mut prompter).unwrap_err();
        assert!(matches!(err, CmdsmithError::UserInput(ref m) if m.contains("'name'")));
    }
}
