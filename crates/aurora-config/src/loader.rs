//! Configuration loader with multi-source merging

use crate::{AuroraConfig, ConfigError};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILE: &str = "aurora.toml";
const LOCAL_CONFIG_FILE: &str = "aurora.local.toml";

/// `config.toml` under the platform config dir (`~/.config/aurora/` on Linux).
fn user_config_file() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("com", "Aurora", "aurora")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or_else(|| {
            ConfigError::XdgError("Failed to determine user config directory".to_string())
        })
}

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "AURORA".to_string(),
            user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "AURORA")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip the per-user config file.
    pub fn without_user_config(mut self) -> Self {
        self.user_config = false;
        self
    }

    /// Whether the project directory holds an aurora.toml.
    pub fn has_project_config(&self) -> bool {
        self.project_dir.join(PROJECT_CONFIG_FILE).exists()
    }

    /// Config files that exist and will be merged, lowest precedence first.
    ///
    /// User config, then aurora.toml, then aurora.local.toml.
    pub fn sources(&self) -> Vec<PathBuf> {
        let user = self.user_config.then(user_config_file).and_then(Result::ok);

        user.into_iter()
            .chain([
                self.project_dir.join(PROJECT_CONFIG_FILE),
                self.project_dir.join(LOCAL_CONFIG_FILE),
            ])
            .filter(|path| path.exists())
            .collect()
    }

    /// Merges defaults, config files and `<PREFIX>_SECTION__KEY` variables.
    pub fn load(&self) -> Result<AuroraConfig> {
        let defaults = config::Config::try_from(&AuroraConfig::default())?;

        let builder = self
            .sources()
            .into_iter()
            .fold(config::Config::builder().add_source(defaults), |builder, path| {
                builder.add_source(config::File::from(path).format(config::FileFormat::Toml))
            })
            .add_source(
                config::Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize::<AuroraConfig>()
            .context("Failed to deserialize configuration")
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default(&self) -> AuroraConfig {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
