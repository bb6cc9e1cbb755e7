//! Store configuration, read from TOML.
//!
//! ```toml
//! key_prefix = "triglav_"
//! admin_login = "admin"
//! admin_password = "admin"
//! data_file = "data/profile.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for a [`ContentStore`](crate::ContentStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Namespace prepended to every storage key.
    pub key_prefix: Option<String>,
    pub admin_login: String,
    pub admin_password: String,
    /// Profile file for [`FileStorage`](crate::FileStorage). None keeps data in memory.
    pub data_file: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: None,
            admin_login: "admin".to_string(),
            admin_password: "admin".to_string(),
            data_file: None,
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.admin_login, "admin");
    }

    #[test]
    fn test_full_config() {
        let config = StoreConfig::from_toml_str(
            r#"
            key_prefix = "triglav_"
            admin_password = "s3cret"
            data_file = "data/profile.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.key_prefix.as_deref(), Some("triglav_"));
        assert_eq!(config.admin_login, "admin");
        assert_eq!(config.admin_password, "s3cret");
        assert_eq!(config.data_file, Some(PathBuf::from("data/profile.json")));
    }

    #[test]
    fn test_invalid_config() {
        let result = StoreConfig::from_toml_str("admin_login = 5");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = StoreConfig::load("/nonexistent/triglav.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
