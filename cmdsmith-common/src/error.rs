//! Error types for cmdsmith operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CmdsmithError>;

/// Main error type for cmdsmith operations.
#[derive(Debug, Error)]
pub enum CmdsmithError {
    /// A parameter is missing, invalid, or combined with an incompatible one.
    #[error("{0}")]
    UserInput(String),

    /// A file the operation depends on does not exist.
    #[error("{what} not found at {}", .path.display())]
    NotFound {
        /// Human name of the missing file (e.g. "README.md").
        what: String,
        /// Where it was looked for.
        path: PathBuf,
    },

    /// A target file lacks one of the literal markers the tool edits around.
    #[error(
        "{} does not contain the marker:\n{marker}\nPlease add it in the right place of the file.",
        .path.display()
    )]
    MalformedTarget {
        /// The file being edited.
        path: PathBuf,
        /// The marker that could not be located.
        marker: String,
    },

    /// The command is already registered in the project metadata.
    #[error("Command '{name}' already exists in {}", .path.display())]
    AlreadyExists {
        /// The command name.
        name: String,
        /// The metadata file holding the existing entry.
        path: PathBuf,
    },

    /// IO error while reading or writing project files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The interactive prompt failed to read an answer.
    #[error("Failed to read input: {0}")]
    Prompt(String),
}

impl From<figment::Error> for CmdsmithError {
    fn from(error: figment::Error) -> Self {
        CmdsmithError::Config(Box::new(error))
    }
}

impl CmdsmithError {
    /// Shorthand for a [`CmdsmithError::NotFound`].
    pub fn not_found(what: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        CmdsmithError::NotFound {
            what: what.into(),
            path: path.into(),
        }
    }
}
