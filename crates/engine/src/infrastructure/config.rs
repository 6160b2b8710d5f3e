//! Engine configuration from environment variables.

use std::time::Duration;

use tabletophub_domain::{AllocationError, GameSetting};

pub const DEFAULT_UPLOAD_URL_TTL_SECS: u64 = 300;
pub const DEFAULT_DOCUMENT_KEY_PREFIX: &str = "user-documents";
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 50 * 1024 * 1024;
pub const DEFAULT_STORAGE_BASE_URL: &str = "memory://documents";

/// Runtime settings for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Setting used when a request omits one
    pub default_setting: GameSetting,
    pub upload_url_ttl: Duration,
    pub document_key_prefix: String,
    pub max_document_bytes: u64,
    pub storage_base_url: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_setting: GameSetting::DEFAULT,
            upload_url_ttl: Duration::from_secs(DEFAULT_UPLOAD_URL_TTL_SECS),
            document_key_prefix: DEFAULT_DOCUMENT_KEY_PREFIX.to_string(),
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            storage_base_url: DEFAULT_STORAGE_BASE_URL.to_string(),
        }
    }
}

impl EngineConfig {
    /// Reads the process environment.
    ///
    /// Supported environment variables:
    /// - DEFAULT_GAME_SETTING: setting id or display name (unknown values are an error)
    /// - UPLOAD_URL_TTL_SECS: upload URL lifetime, 1-86400
    /// - DOCUMENT_KEY_PREFIX: first segment of document storage keys
    /// - MAX_DOCUMENT_BYTES: largest accepted upload
    /// - STORAGE_BASE_URL: base for issued document URLs
    pub fn from_env() -> Result<Self, AllocationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AllocationError> {
        let mut config = Self::default();
        let lookup = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(val) = lookup("DEFAULT_GAME_SETTING") {
            config.default_setting = val.parse()?;
            tracing::info!(setting = %config.default_setting, "Applied DEFAULT_GAME_SETTING");
        }

        if let Some(val) = lookup("UPLOAD_URL_TTL_SECS") {
            match val.parse::<u64>() {
                Ok(secs) if (1..=86_400).contains(&secs) => {
                    config.upload_url_ttl = Duration::from_secs(secs);
                }
                Ok(secs) => {
                    tracing::warn!(secs, "UPLOAD_URL_TTL_SECS out of range [1, 86400], ignoring");
                }
                Err(_) => {
                    tracing::warn!(val = %val, "UPLOAD_URL_TTL_SECS is not a valid u64, ignoring");
                }
            }
        }

        if let Some(val) = lookup("DOCUMENT_KEY_PREFIX") {
            let prefix = val.trim_matches('/');
            if prefix.is_empty() {
                tracing::warn!("DOCUMENT_KEY_PREFIX is only slashes, ignoring");
            } else {
                config.document_key_prefix = prefix.to_string();
            }
        }

        if let Some(val) = lookup("MAX_DOCUMENT_BYTES") {
            match val.parse::<u64>() {
                Ok(bytes) if bytes > 0 => config.max_document_bytes = bytes,
                _ => {
                    tracing::warn!(val = %val, "MAX_DOCUMENT_BYTES is not a positive u64, ignoring");
                }
            }
        }

        if let Some(val) = lookup("STORAGE_BASE_URL") {
            config.storage_base_url = val;
        }

        Ok(config)
    }
}
