use crate::error::{IndexError, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration loaded from a TOML file.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Index storage configuration.
    pub index: IndexConfig,
}

/// Storage parameters for the per-volume index databases.
#[derive(Debug, Deserialize, Clone)]
pub struct IndexConfig {
    /// Base directory under which each volume gets its own database
    /// (`db_path/<volume>`).
    pub db_path: PathBuf,
}

impl Config {
    /// Load configuration from a TOML file at `path`.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| IndexError::Config(format!("Cannot read config file: {e}")))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| IndexError::Config(format!("Invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.index.db_path.as_os_str().is_empty() {
            return Err(IndexError::Config("db_path must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_validate() {
        let cfg: Config = toml::from_str("[index]\ndb_path = \"/var/lib/chunk-index\"\n")
            .expect("parse");
        assert_eq!(cfg.index.db_path, PathBuf::from("/var/lib/chunk-index"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_empty_db_path_rejected() {
        let cfg: Config = toml::from_str("[index]\ndb_path = \"\"\n").expect("parse");
        assert!(cfg.validate().is_err());
    }
}
