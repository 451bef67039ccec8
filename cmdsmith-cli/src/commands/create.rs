//! `command:create` - scaffold a new command into the current project.

use std::io::Write;
use std::path::{Path, PathBuf};

use cmdsmith_common::{scaffold, ConfigProvider, Prompter, Result, ScaffoldReport, ScaffoldRequest};

use super::display_path;

/// Values given on the command line; anything missing is prompted for.
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    pub name: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub target_dir: Option<PathBuf>,
}

/// Run `command:create` for the project at `root`.
pub fn run_create<W: Write>(
    root: &Path,
    args: CreateArgs,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<ScaffoldReport> {
    let config = ConfigProvider::new(root).load()?;
    let layout = config.layout(root);

    let request = ScaffoldRequest::resolve(
        args.name,
        args.summary,
        args.description,
        args.target_dir,
        &layout.commands_dir,
        prompter,
    )?;
    tracing::debug!(?request, "Creating command");

    let report = scaffold(&layout, &request)?;

    writeln!(out, "Created command '{}':\n", request.name)?;
    writeln!(
        out,
        "  {}  (script added)",
        display_path(root, &report.metadata_path)
    )?;
    writeln!(out, "  {}", display_path(root, &report.file_path))?;
    writeln!(
        out,
        "  {}  (imported as {})",
        display_path(root, &report.index_path),
        report.identifier
    )?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdsmith_common::scaffold::{EXPORT_MARKER, IMPORT_MARKER};
    use cmdsmith_common::{CmdsmithError, DialoguerPrompter};

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("templates")).unwrap();
        std::fs::create_dir_all(root.join("src/commands")).unwrap();
        std::fs::write(root.join("package.json"), "{\"name\": \"demo\", \"scripts\": {}}").unwrap();
        std::fs::write(
            root.join("templates/new-command.template.ts"),
            "export default { name: '#{name}', summary: '#{summary}' };\n",
        )
        .unwrap();
        std::fs::write(
            root.join("src/commands/index.ts"),
            format!("{IMPORT_MARKER}\n\nexport default [\n  {EXPORT_MARKER}\n];\n"),
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_create_reports_written_files() {
        let dir = project();
        let mut prompter = DialoguerPrompter::new(true);
        let mut buf = Vec::new();

        let report = run_create(
            dir.path(),
            CreateArgs {
                name: Some("project:build".to_string()),
                summary: Some("Build it".to_string()),
                ..CreateArgs::default()
            },
            &mut prompter,
            &mut buf,
        )
        .unwrap();

        assert_eq!(report.identifier, "projectBuild");
        assert_eq!(report.import_path, "./project-build");
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("Created command 'project:build':"));
        assert!(out.contains("src/commands/project-build.ts"));
        assert!(out.contains("(imported as projectBuild)"));
    }

    #[test]
    fn test_create_without_name_non_interactive_fails() {
        let dir = project();
        let mut prompter = DialoguerPrompter::new(true);
        let mut buf = Vec::new();

        let err = run_create(dir.path(), CreateArgs::default(), &mut prompter, &mut buf).unwrap_err();

        assert!(matches!(err, CmdsmithError::UserInput(_)));
        assert!(buf.is_empty());
        assert!(!dir.path().join("src/commands/project-build.ts").exists());
    }
}
