//! CLI documentation generation shared by build scripts.
//!
//! Included from `cmdsmith-cli/build.rs` via `#[path = ...]`. Every generator
//! takes the binary name so output files are named after it.

use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

fn io_context(msg: String, err: Error) -> Error {
    Error::new(ErrorKind::Other, format!("{msg}: {err}"))
}

/// Create `dir` and write `bytes` to `dir/filename`.
fn write_artifact(dir: &Path, filename: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .map_err(|e| io_context(format!("failed to create directory {}", dir.display()), e))?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes)
        .map_err(|e| io_context(format!("failed to write {}", path.display()), e))?;
    eprintln!("Generated {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

/// Markdown command reference, `{name}-cli.md`.
pub fn generate_markdown(cmd: &clap::Command, dir: &Path, name: &str) -> std::io::Result<()> {
    let md = clap_markdown::help_markdown_command(cmd);
    write_artifact(dir, &format!("{name}-cli.md"), md.as_bytes())?;
    Ok(())
}

/// ROFF man page, `{name}.1`.
pub fn generate_manpage(cmd: &clap::Command, dir: &Path, name: &str) -> std::io::Result<()> {
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .render(&mut buf)
        .map_err(|e| io_context(format!("failed to render man page for {name}"), e))?;
    write_artifact(dir, &format!("{name}.1"), &buf)?;
    Ok(())
}

/// Bash, zsh and fish completion scripts.
pub fn generate_completions(mut cmd: clap::Command, dir: &Path, name: &str) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| io_context(format!("failed to create directory {}", dir.display()), e))?;
    for shell in [
        clap_complete::Shell::Bash,
        clap_complete::Shell::Zsh,
        clap_complete::Shell::Fish,
    ] {
        let path = clap_complete::generate_to(shell, &mut cmd, name, dir)
            .map_err(|e| io_context(format!("failed to generate {shell:?} completions"), e))?;
        eprintln!("Generated {}", path.display());
    }
    Ok(())
}
