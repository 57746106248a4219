//! `solar-admin.toml` configuration
//!
//! Every key is optional. A file that names an unknown section or key is
//! rejected so typos do not silently fall back to defaults.

use serde::Deserialize;
use solar_codegen::ExportConfig;
use solar_core::{AdminError, AdminResult};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up in the working directory when `--config` is absent
pub const CONFIG_FILE_NAME: &str = "solar-admin.toml";

mod defaults {
    use std::path::PathBuf;

    pub fn store_dir() -> PathBuf {
        PathBuf::from(".solar-admin")
    }

    pub fn store_key() -> String {
        solar_content::DEFAULT_STORAGE_KEY.to_string()
    }

    pub fn out_dir() -> PathBuf {
        PathBuf::from("exported")
    }

    pub fn stagger_ms() -> u64 {
        100
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub export: ExportSection,
}

/// `[store]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    /// Directory holding the persisted document
    #[serde(default = "defaults::store_dir")]
    pub dir: PathBuf,
    /// Key the document is stored under
    #[serde(default = "defaults::store_key")]
    pub key: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            dir: defaults::store_dir(),
            key: defaults::store_key(),
        }
    }
}

/// `[export]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportSection {
    #[serde(default = "defaults::out_dir")]
    pub out_dir: PathBuf,
    /// Delay between files of a multi-file export, in milliseconds
    #[serde(default = "defaults::stagger_ms")]
    pub stagger_ms: u64,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            out_dir: defaults::out_dir(),
            stagger_ms: defaults::stagger_ms(),
        }
    }
}

impl AdminConfig {
    /// Parse config text
    pub fn parse(text: &str) -> AdminResult<Self> {
        toml::from_str(text).map_err(|e| AdminError::InvalidConfig(e.to_string()))
    }

    /// Load the explicit config file, or `solar-admin.toml` from the working
    /// directory when present, or fall back to defaults
    ///
    /// An explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> AdminResult<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let local = PathBuf::from(CONFIG_FILE_NAME);
                if !local.exists() {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                local
            }
        };

        let text = std::fs::read_to_string(&path).map_err(|e| AdminError::FileRead {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| AdminError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Export settings, with the output directory optionally overridden
    pub fn export_config(&self, out_dir: Option<&Path>, overwrite: bool) -> ExportConfig {
        let config = ExportConfig::new()
            .with_output_dir(out_dir.unwrap_or(self.export.out_dir.as_path()))
            .with_stagger(Duration::from_millis(self.export.stagger_ms));
        if overwrite {
            config.allow_overwrite()
        } else {
            config
        }
    }
}
