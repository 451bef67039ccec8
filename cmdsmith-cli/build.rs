//! Build script for cmdsmith-cli.
//!
//! Generates the CLI reference, man page and shell completions from the clap
//! definitions in `src/cli.rs`, under `OUT_DIR/docs`:
//!
//! - `cmdsmith-cli.md`
//! - `man/cmdsmith.1`
//! - `completions/`

use std::path::PathBuf;

use clap::CommandFactory;

#[path = "src/cli.rs"]
#[allow(dead_code)]
mod cli;

#[path = "../build-support/doc_gen.rs"]
mod doc_gen;

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=../build-support/doc_gen.rs");

    let cmd = cli::Cli::command();
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    let docs = out_dir.join("docs");

    doc_gen::generate_markdown(&cmd, &docs, "cmdsmith")?;
    doc_gen::generate_manpage(&cmd, &docs.join("man"), "cmdsmith")?;
    doc_gen::generate_completions(cmd, &docs.join("completions"), "cmdsmith")?;

    Ok(())
}
