//! Project configuration using Figment.
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults (the conventional project layout)
//! 2. `.cmdsmith.toml` in the project root
//! 3. `CMDSMITH_*` environment variables (e.g. `CMDSMITH_SCRIPT_RUNNER`)

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Result;
use crate::scaffold::ProjectLayout;

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE_NAME: &str = ".cmdsmith.toml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "CMDSMITH_";

/// Project layout settings. Paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CmdsmithConfig {
    /// README holding the command list markers.
    pub readme: PathBuf,
    /// JSON metadata file with a top-level `scripts` map.
    pub metadata: PathBuf,
    /// Template for new command files.
    pub template: PathBuf,
    /// Commands index holding the import/export markers.
    pub index: PathBuf,
    /// Default directory for new command files.
    pub commands_dir: PathBuf,
    /// Extension of generated command files, without the dot.
    pub extension: String,
    /// Script prefix; the command name is appended to it.
    pub script_runner: String,
}

impl Default for CmdsmithConfig {
    fn default() -> Self {
        Self {
            readme: PathBuf::from("README.md"),
            metadata: PathBuf::from("package.json"),
            template: PathBuf::from("templates/new-command.template.ts"),
            index: PathBuf::from("src/commands/index.ts"),
            commands_dir: PathBuf::from("src/commands"),
            extension: "ts".to_string(),
            script_runner: "ts-node src/index.ts".to_string(),
        }
    }
}

impl CmdsmithConfig {
    /// Resolve every path against `root`.
    pub fn layout(&self, root: &Path) -> ProjectLayout {
        ProjectLayout {
            root: root.to_path_buf(),
            metadata_path: root.join(&self.metadata),
            template_path: root.join(&self.template),
            index_path: root.join(&self.index),
            commands_dir: self.commands_dir.clone(),
            extension: self.extension.trim_start_matches('.').to_string(),
            script_runner: self.script_runner.clone(),
        }
    }

    /// Absolute README path for `root`.
    pub fn readme_path(&self, root: &Path) -> PathBuf {
        root.join(&self.readme)
    }
}

/// Loads [`CmdsmithConfig`] for one project root.
///
/// No caching; every call reads the sources again.
pub struct ConfigProvider {
    root: PathBuf,
}

impl ConfigProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Merge all sources and extract the configuration.
    pub fn load(&self) -> Result<CmdsmithConfig> {
        let config: CmdsmithConfig = self.build_figment().extract()?;
        debug!(root = %self.root.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    fn build_figment(&self) -> Figment {
        let file = self.root.join(CONFIG_FILE_NAME);
        trace!("Looking for config file: {}", file.display());

        Figment::new()
            .merge(Serialized::defaults(CmdsmithConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}
