//! Shared helpers for cmdsmith integration tests.

use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// Copy the fixture project into a fresh temporary directory.
pub fn fixture_project() -> anyhow::Result<TempDir> {
    let dir = tempfile::tempdir()?;
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/project");
    copy_dir(&source, dir.path())?;
    Ok(dir)
}

fn copy_dir(from: &Path, to: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(to)?;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// `cmdsmith` running inside `root` with no config coming from the environment.
pub fn cmdsmith(root: &Path) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("cmdsmith")?;
    cmd.current_dir(root)
        .env_remove("RUST_LOG")
        .env_remove("CMDSMITH_README")
        .env_remove("CMDSMITH_METADATA")
        .env_remove("CMDSMITH_TEMPLATE")
        .env_remove("CMDSMITH_INDEX")
        .env_remove("CMDSMITH_COMMANDS_DIR")
        .env_remove("CMDSMITH_EXTENSION")
        .env_remove("CMDSMITH_SCRIPT_RUNNER");
    Ok(cmd)
}
