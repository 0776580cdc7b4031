//! Configuration module for kitbook
//!
//! Manages application configuration including the default catalog path.
//! Configuration is stored in the user's config directory.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_fence_lang() -> String {
    crate::export::DEFAULT_FENCE_LANG.to_string()
}

const fn default_true() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct KitbookConfig {
    /// Catalog file to load when no --catalog flag is given
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Language tag for fenced code blocks in bulk payloads
    #[serde(default = "default_fence_lang")]
    pub fence_lang: String,

    /// Write exports to the system clipboard (false: always print)
    #[serde(default = "default_true")]
    pub use_clipboard: bool,
}

impl Default for KitbookConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            quiet: false,
            fence_lang: default_fence_lang(),
            use_clipboard: true,
        }
    }
}

impl KitbookConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("kitbook").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config dir: {e}")))?;
        }

        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml)
            .map_err(|e| ConfigError::Message(format!("Failed to write config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KitbookConfig::default();
        assert!(config.catalog_path.is_none());
        assert!(!config.quiet);
        assert_eq!(config.fence_lang, "typescript");
        assert!(config.use_clipboard);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = KitbookConfig::default();
        config.catalog_path = Some(PathBuf::from("/tmp/catalog.json"));
        config.fence_lang = "tsx".into();

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: KitbookConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.catalog_path, config.catalog_path);
        assert_eq!(parsed.fence_lang, "tsx");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let parsed: KitbookConfig = toml::from_str("quiet = true\n").unwrap();
        assert!(parsed.quiet);
        assert_eq!(parsed.fence_lang, "typescript");
        assert!(parsed.use_clipboard);
    }
}
