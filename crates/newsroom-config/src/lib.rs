//! Configuration management for Newsroom
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (NEWSROOM_* prefix, highest precedence)
//! 2. newsroom.local.toml (gitignored, local overrides)
//! 3. newsroom.toml (git-tracked, project config)
//! 4. ~/.config/newsroom/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)

use anyhow::Result;
use newsroom_types::{NotificationPreferences, SiteSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main Newsroom configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsroomConfig {
    pub site: SiteSettings,
    /// Preferences given to accounts that have not saved their own.
    pub notifications: NotificationPreferences,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Seed the in-memory store with the sample newsroom.
    pub seed_sample_data: bool,
    /// Number of articles listed under "Recent Articles" on the dashboard.
    pub recent_articles: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            recent_articles: 5,
        }
    }
}

impl NewsroomConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Create a configuration with an empty store
    pub fn empty() -> Self {
        Self {
            store: StoreConfig {
                seed_sample_data: false,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Check invariants that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.site_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "site.site_name must not be empty".to_string(),
            ));
        }

        if self.site.contact_email.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "site.contact_email must not be empty".to_string(),
            ));
        }

        if self.store.recent_articles == 0 {
            return Err(ConfigError::ValidationError(
                "store.recent_articles must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Render this configuration as a TOML document
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
