//! Handlers for each subcommand.
//!
//! Handlers take the project root and an output writer so they can run
//! against a temporary project in tests.

use std::path::Path;

pub mod create;
pub mod list;

/// `path` relative to `root` when it lies inside it, for user-facing messages.
pub(crate) fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
