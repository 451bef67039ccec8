//! Command scaffolding.
//!
//! Creating a command touches three files, in order:
//! 1. the project metadata, which gains a launch script for the command;
//! 2. a new command source file rendered from the template;
//! 3. the commands index, which gains an import and an export entry.
//!
//! The steps are not transactional. A failure leaves earlier steps applied.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{CmdsmithError, Result};
use crate::naming::{camel_case, escape_single_quotes, kebab_case};
use crate::prompt::{resolve_parameters, ParameterSpec, Prompter};
use crate::splice::{insert_before_marker, SpliceError};

/// Marker in the commands index before which imports are inserted.
pub const IMPORT_MARKER: &str = "// DO NOT REMOVE: AUTO-GENERATED COMMANDS IMPORT";

/// Marker in the commands index before which export entries are inserted.
pub const EXPORT_MARKER: &str = "// DO NOT REMOVE: AUTO-GENERATED COMMANDS EXPORT";

/// Resolved locations of the files a scaffold touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub metadata_path: PathBuf,
    pub template_path: PathBuf,
    pub index_path: PathBuf,
    /// Default target directory, relative to `root`.
    pub commands_dir: PathBuf,
    pub extension: String,
    pub script_runner: String,
}

impl ProjectLayout {
    /// Where the source file of `name` goes inside `target_dir`.
    pub fn command_file_path(&self, target_dir: &Path, name: &str) -> PathBuf {
        self.root
            .join(target_dir)
            .join(format!("{}.{}", kebab_case(name), self.extension))
    }
}

/// A fully resolved `command:create` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub name: String,
    pub summary: String,
    pub description: String,
    pub target_dir: PathBuf,
}

/// Files written by a successful scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub metadata_path: PathBuf,
    pub file_path: PathBuf,
    pub index_path: PathBuf,
    /// Identifier the command is imported as.
    pub identifier: String,
    /// Module path used in the import line.
    pub import_path: String,
}

/// Command names must look like `{namespace}:{action}`.
pub fn validate_command_name(value: &str) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        return Err("Command name is required".to_string());
    }
    if !value.contains(':') {
        return Err(
            "Command name should be formatted as {namespace}:{action} (ex: project:create, command:delete...)"
                .to_string(),
        );
    }
    Ok(())
}

/// The questions `command:create` may ask, in order.
pub fn parameter_specs(default_dir: &Path) -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("name", "Command name (format: {namespace}:{action}):")
            .with_validator(validate_command_name),
        ParameterSpec::new("summary", "Command short summary:").with_default(""),
        ParameterSpec::new("description", "Command long description:").with_default(""),
        ParameterSpec::new(
            "target_dir",
            "Target directory where the command file will be created:",
        )
        .with_default(default_dir.to_string_lossy()),
    ]
}

impl ScaffoldRequest {
    /// Fill in missing or invalid parameters through `prompter`.
    pub fn resolve(
        name: Option<String>,
        summary: Option<String>,
        description: Option<String>,
        target_dir: Option<PathBuf>,
        default_dir: &Path,
        prompter: &mut dyn Prompter,
    ) -> Result<Self> {
        let mut provided = HashMap::new();
        let supplied = [
            ("name", name),
            ("summary", summary),
            ("description", description),
            ("target_dir", target_dir.map(|d| d.to_string_lossy().into_owned())),
        ];
        for (key, value) in supplied {
            if let Some(value) = value {
                provided.insert(key.to_string(), value);
            }
        }

        let mut values = resolve_parameters(&parameter_specs(default_dir), &provided, prompter)?;
        Ok(Self::from_values(&mut values))
    }

    fn from_values(values: &mut BTreeMap<String, String>) -> Self {
        let mut take = |key: &str| values.remove(key).unwrap_or_default();
        Self {
            name: take("name"),
            summary: take("summary"),
            description: take("description"),
            target_dir: PathBuf::from(take("target_dir")),
        }
    }
}

/// Create the command described by `request` inside the project `layout`.
pub fn scaffold(layout: &ProjectLayout, request: &ScaffoldRequest) -> Result<ScaffoldReport> {
    validate_command_name(&request.name).map_err(CmdsmithError::UserInput)?;

    register_script(&layout.metadata_path, &request.name, &layout.script_runner)?;

    let file_path = layout.command_file_path(&request.target_dir, &request.name);
    write_command_file(&layout.template_path, &file_path, request)?;

    let (identifier, import_path) =
        register_in_index(&layout.index_path, &file_path, &request.name)?;

    Ok(ScaffoldReport {
        metadata_path: layout.metadata_path.clone(),
        file_path,
        index_path: layout.index_path.clone(),
        identifier,
        import_path,
    })
}

/// Add a `scripts` entry for `name` to the JSON metadata file.
pub fn register_script(metadata_path: &Path, name: &str, script_runner: &str) -> Result<()> {
    if !metadata_path.is_file() {
        return Err(CmdsmithError::not_found("Project metadata", metadata_path));
    }

    let content = std::fs::read_to_string(metadata_path)?;
    let mut metadata: Value = serde_json::from_str(&content)?;

    let object = metadata.as_object_mut().ok_or_else(|| {
        CmdsmithError::UserInput(format!(
            "{} must contain a JSON object",
            metadata_path.display()
        ))
    })?;
    let scripts = object
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| {
            CmdsmithError::UserInput(format!(
                "\"scripts\" in {} must be a JSON object",
                metadata_path.display()
            ))
        })?;

    if scripts.contains_key(name) {
        return Err(CmdsmithError::AlreadyExists {
            name: name.to_string(),
            path: metadata_path.to_path_buf(),
        });
    }
    scripts.insert(
        name.to_string(),
        Value::String(format!("{script_runner} {name}")),
    );

    std::fs::write(
        metadata_path,
        format!("{}\n", serde_json::to_string_pretty(&metadata)?),
    )?;
    tracing::debug!(path = %metadata_path.display(), %name, "Registered script");
    Ok(())
}

/// Substitute the `#{name}`, `#{summary}` and `#{description}` placeholders.
pub fn render_template(template: &str, request: &ScaffoldRequest) -> String {
    template
        .replace("#{name}", &escape_single_quotes(&request.name))
        .replace("#{summary}", &escape_single_quotes(&request.summary))
        .replace("#{description}", &escape_single_quotes(&request.description))
}

fn write_command_file(template_path: &Path, file_path: &Path, request: &ScaffoldRequest) -> Result<()> {
    if !template_path.is_file() {
        return Err(CmdsmithError::not_found("Command template", template_path));
    }
    let template = std::fs::read_to_string(template_path)?;
    let content = render_template(&template, request);

    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    tracing::debug!(path = %file_path.display(), "Wrote command file");
    Ok(())
}

/// Module path of `file_path` as imported from the index file: relative,
/// `/`-separated, without extension, starting with `.`.
pub fn import_path(index_path: &Path, file_path: &Path) -> String {
    let index_dir = index_path.parent().unwrap_or_else(|| Path::new(""));
    let module = file_path.with_extension("");
    let relative = pathdiff::diff_paths(&module, index_dir).unwrap_or(module);

    let path = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
    if path.starts_with('.') {
        path
    } else {
        format!("./{path}")
    }
}

fn register_in_index(index_path: &Path, file_path: &Path, name: &str) -> Result<(String, String)> {
    if !index_path.is_file() {
        return Err(CmdsmithError::not_found("Commands index", index_path));
    }

    let identifier = camel_case(name);
    let module = import_path(index_path, file_path);
    let malformed = |err: SpliceError| match err {
        SpliceError::MissingMarker(marker) => CmdsmithError::MalformedTarget {
            path: index_path.to_path_buf(),
            marker,
        },
    };

    let content = std::fs::read_to_string(index_path)?;
    let content = insert_before_marker(
        &content,
        IMPORT_MARKER,
        &format!("import {identifier} from '{module}';"),
    )
    .map_err(malformed)?;
    let content =
        insert_before_marker(&content, EXPORT_MARKER, &format!("{identifier},")).map_err(malformed)?;

    std::fs::write(index_path, content)?;
    tracing::debug!(path = %index_path.display(), %identifier, "Updated commands index");
    Ok((identifier, module))
}
