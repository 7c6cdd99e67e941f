//! Configuration loader with multi-source merging

use crate::{ConfigError, NewsroomConfig, Paths};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

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
            env_prefix: "NEWSROOM".to_string(),
            user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "NEWSROOM")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/newsroom/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<NewsroomConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = NewsroomConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/newsroom/config.toml)
        if self.user_config {
            if let Ok(user_config_file) = Paths::new().user_config_file() {
                if user_config_file.exists() {
                    builder = builder.add_source(
                        config::File::from(user_config_file)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // 3. Project config (newsroom.toml)
        let project_config_file = Paths::project_config_file(&self.project_dir);
        if project_config_file.exists() {
            builder = builder.add_source(
                config::File::from(project_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 4. Local config (newsroom.local.toml, gitignored)
        let local_config_file = Paths::local_config_file(&self.project_dir);
        if local_config_file.exists() {
            builder = builder.add_source(
                config::File::from(local_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 5. Environment variables (NEWSROOM_SITE__SITE_NAME, ...)
        // Field names contain underscores, so nesting uses a double underscore.
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let newsroom_config: NewsroomConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        newsroom_config
            .validate()
            .context("Configuration failed validation")?;

        Ok(newsroom_config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default(self) -> NewsroomConfig {
        self.load().unwrap_or_default()
    }

    /// Write a default newsroom.toml into the project directory
    pub fn init_project(&self) -> Result<PathBuf, ConfigError> {
        let path = Paths::project_config_file(&self.project_dir);
        if path.exists() {
            return Err(ConfigError::AlreadyInitialized(path));
        }

        let rendered = NewsroomConfig::default().to_toml()?;
        std::fs::write(&path, rendered).map_err(|source| ConfigError::WriteError {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
