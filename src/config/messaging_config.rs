//! Legacy messaging configuration
//!
//! Loads and saves `<town_root>/config/messaging.json`, the file-based store of
//! named mailing lists, work queues, announce channels and nudge channels.

use super::validation::validate_messaging_config_result;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Highest config version this crate understands
pub const CURRENT_MESSAGING_VERSION: u32 = 1;

/// `type` value of a messaging config file
pub const MESSAGING_CONFIG_TYPE: &str = "messaging";

/// A claimable work queue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Addresses or patterns allowed to claim (e.g., "gastown/polecats/*")
    pub workers: Vec<String>,

    /// Maximum concurrent claims; 0 means unlimited
    #[serde(default)]
    pub max_claims: i64,
}

/// A retained bulletin board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnounceConfig {
    pub readers: Vec<String>,

    /// Messages kept; 0 means unlimited
    #[serde(default)]
    pub retain_count: i64,
}

/// Messaging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingConfig {
    #[serde(rename = "type", default)]
    pub config_type: String,

    #[serde(default)]
    pub version: u32,

    /// list name → ordered recipient addresses
    #[serde(default)]
    pub lists: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub queues: BTreeMap<String, QueueConfig>,

    #[serde(default)]
    pub announces: BTreeMap<String, AnnounceConfig>,

    /// channel name → recipient addresses or patterns
    #[serde(default)]
    pub nudge_channels: BTreeMap<String, Vec<String>>,
}

impl MessagingConfig {
    /// Create an empty configuration at the current version
    pub fn new() -> Self {
        Self {
            config_type: MESSAGING_CONFIG_TYPE.to_string(),
            version: CURRENT_MESSAGING_VERSION,
            lists: BTreeMap::new(),
            queues: BTreeMap::new(),
            announces: BTreeMap::new(),
            nudge_channels: BTreeMap::new(),
        }
    }

    /// Load and validate configuration from a specific path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(crate::MailrouteError::Config(format!(
                "Messaging config not found: {}",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), "Loading messaging configuration");

        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        validate_messaging_config_result(&config)?;

        tracing::debug!(
            lists = config.lists.len(),
            queues = config.queues.len(),
            announces = config.announces.len(),
            "Messaging configuration loaded"
        );

        Ok(config)
    }

    /// Load configuration, returning an empty one if the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }
        Self::load(path)
    }

    /// Validate and save configuration to a specific path
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        validate_messaging_config_result(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        tracing::info!(path = %path.display(), "Saving messaging configuration");

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Whether a queue with this name is configured
    pub fn has_queue(&self, name: &str) -> bool {
        self.queues.contains_key(name)
    }

    /// Whether an announce channel with this name is configured
    pub fn has_announce(&self, name: &str) -> bool {
        self.announces.contains_key(name)
    }

    /// Members of a named list
    pub fn list(&self, name: &str) -> Option<&[String]> {
        self.lists.get(name).map(Vec::as_slice)
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard path of the messaging config in a town
pub fn messaging_config_path(town_root: impl AsRef<Path>) -> PathBuf {
    town_root.as_ref().join("config").join("messaging.json")
}
