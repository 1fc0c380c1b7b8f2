//! GasyWay configuration file handling

use anyhow::{Context, Result};
use gasyway_store::StoreConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE: &str = "gasyway.toml";

/// Top-level configuration (gasyway.toml)
#[derive(Debug, Deserialize, Serialize)]
pub struct GasywayConfig {
    pub store: StoreSection,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Token store connection
#[derive(Debug, Deserialize, Serialize)]
pub struct StoreSection {
    /// Base URL of the token functions
    pub base_url: String,
    /// Public (anonymous) key
    pub public_key: String,
    /// Per-request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// `tokens css` output
#[derive(Debug, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Stylesheet written by `tokens css --write`
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
}

fn default_stylesheet() -> String {
    "design-tokens.css".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            stylesheet: default_stylesheet(),
        }
    }
}

impl GasywayConfig {
    /// Load configuration from a directory (looks for gasyway.toml)
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {CONFIG_FILE} found in {}. Run `gasyway init` to create one.",
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: GasywayConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        if config.store.base_url.trim().is_empty() {
            anyhow::bail!("store.base_url is empty in {}", config_path.display());
        }

        Ok(config)
    }

    pub fn new(base_url: &str, public_key: &str) -> Self {
        Self {
            store: StoreSection {
                base_url: base_url.to_string(),
                public_key: public_key.to_string(),
                timeout_secs: None,
            },
            export: ExportConfig::default(),
        }
    }

    /// Client settings for the configured store
    pub fn store_config(&self) -> StoreConfig {
        let config = StoreConfig::new(&self.store.base_url, &self.store.public_key);
        match self.store.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn init_output_loads_back() {
        let dir = TempDir::new().unwrap();
        let config = GasywayConfig::new("https://store.test/functions/v1", "anon");
        fs::write(dir.path().join(CONFIG_FILE), config.to_toml().unwrap()).unwrap();

        let loaded = GasywayConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(loaded.store.base_url, "https://store.test/functions/v1");
        assert_eq!(loaded.store.public_key, "anon");
        assert_eq!(loaded.store.timeout_secs, None);
        assert_eq!(loaded.export.stylesheet, "design-tokens.css");
    }

    #[test]
    fn timeout_reaches_store_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "[store]\nbase_url = \"https://store.test\"\npublic_key = \"anon\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let store = GasywayConfig::load_from_dir(&path).unwrap().store_config();
        assert_eq!(store.timeout, Some(Duration::from_secs(5)));
        assert_eq!(store.public_key.expose(), "anon");
    }

    #[test]
    fn missing_file_points_to_init() {
        let dir = TempDir::new().unwrap();
        let err = GasywayConfig::load_from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("gasyway init"));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[store]\nbase_url = \"\"\npublic_key = \"anon\"\n",
        )
        .unwrap();

        assert!(GasywayConfig::load_from_dir(dir.path()).is_err());
    }
}
