//! CLI configuration
//!
//! Config directory: ~/.treeshare/ (cross-platform)
//!
//! Config file format (~/.treeshare/config.toml):
//! ```toml
//! [scheme]
//! holders = 5
//! threshold = 3
//! chunk_size = 1
//!
//! [output]
//! share_dir = "shares"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use treeshare_core::{scheme_params_from_env, SchemeParameters};

/// Structure of ~/.treeshare/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TreeshareConfig {
    /// Default scheme for split/derive
    #[serde(default)]
    pub scheme: SchemeSettings,

    /// Where share files go
    #[serde(default)]
    pub output: OutputSettings,
}

/// Default scheme parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeSettings {
    pub holders: u16,
    pub threshold: u16,
    pub chunk_size: u32,
}

impl Default for SchemeSettings {
    fn default() -> Self {
        // Env overrides compile-time defaults; an invalid env combination is ignored.
        let params = scheme_params_from_env().unwrap_or_default();
        Self {
            holders: params.holder_count(),
            threshold: params.threshold(),
            chunk_size: params.chunk_size(),
        }
    }
}

impl SchemeSettings {
    /// Resolve into validated parameters, letting CLI flags override each field
    pub fn resolve(
        &self,
        holders: Option<u16>,
        threshold: Option<u16>,
        chunk_size: Option<u32>,
    ) -> Result<SchemeParameters> {
        SchemeParameters::new(
            holders.unwrap_or(self.holders),
            threshold.unwrap_or(self.threshold),
            chunk_size.unwrap_or(self.chunk_size),
        )
        .context("Invalid scheme parameters")
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Default directory for share files
    #[serde(default = "default_share_dir")]
    pub share_dir: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            share_dir: default_share_dir(),
        }
    }
}

fn default_share_dir() -> String {
    std::env::var("TREESHARE_SHARE_DIR").unwrap_or_else(|_| "shares".to_string())
}

/// Get the config directory path (~/.treeshare/)
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_dir = home.join(".treeshare");

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .context("Failed to create config directory ~/.treeshare/")?;
    }

    Ok(config_dir)
}

/// Get the config file path
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load configuration from file
/// Falls back to defaults if file doesn't exist
pub fn load_config() -> TreeshareConfig {
    match config_file_path() {
        Ok(path) if path.exists() => match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}", e);
                    TreeshareConfig::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                TreeshareConfig::default()
            }
        },
        _ => TreeshareConfig::default(),
    }
}

/// Save configuration to file
pub fn save_config(config: &TreeshareConfig) -> Result<()> {
    let path = config_file_path()?;
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(&path, content).context("Failed to write config file")?;
    Ok(())
}
