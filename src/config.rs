use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::text_normalizer::{SHORT_THRESHOLD, VERY_LONG_THRESHOLD};
use crate::error::LivecapResult;

/// Caption utility configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Display
    pub max_caption_bytes: usize,
    pub newline_byte_threshold: usize,

    // Memory watchdog
    pub trim_interval_secs: u64,
    pub soft_limit_mb: u64,
    pub hard_limit_mb: u64,
    pub regrowth_mb: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_caption_bytes: VERY_LONG_THRESHOLD,
            newline_byte_threshold: SHORT_THRESHOLD,
            trim_interval_secs: 60,
            soft_limit_mb: 384,
            hard_limit_mb: 768,
            regrowth_mb: 64,
        }
    }
}

impl Config {
    /// Load config from file or create default
    pub fn load() -> LivecapResult<Self> {
        let config_path = config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            match serde_json::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    // Graceful degradation: log warning and use defaults
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    // Backup corrupt file for debugging
                    let backup_path = config_path.with_extension("json.corrupt");
                    let _ = std::fs::rename(&config_path, &backup_path);
                    Ok(Self::default())
                }
            }
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> LivecapResult<()> {
        let config_path = config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("livecap")
        .join("config.json")
}
