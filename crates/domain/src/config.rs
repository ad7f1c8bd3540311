//! Client configuration

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_KEYRING_SERVICE, DEFAULT_USER_AGENT,
};
use crate::errors::ApiError;

/// API client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Versioned API base (e.g. `http://localhost:8000/api/v1`)
    pub base_url: String,
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    pub storage: StorageConfig,
}

/// Where the credential is persisted between sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageConfig {
    /// Process memory only; nothing survives a restart
    #[default]
    Memory,
    /// JSON key/value file, the desktop stand-in for browser local storage
    File { path: PathBuf },
    /// Platform keychain entry per storage key
    Keyring {
        #[serde(default = "default_keyring_service")]
        service: String,
    },
}

fn default_keyring_service() -> String {
    DEFAULT_KEYRING_SERVICE.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            storage: StorageConfig::Memory,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with every other field defaulted
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Check that the base URL is an absolute http(s) URL.
    ///
    /// # Errors
    /// Returns `ApiError::Config` when the URL cannot be parsed or uses
    /// another scheme.
    pub fn validate(&self) -> Result<Url, ApiError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("Invalid base URL '{}': {e}", self.base_url)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ApiError::Config(format!("Unsupported base URL scheme: {other}"))),
        }
    }

    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Base URL with the trailing `/api/vN` segment stripped.
    ///
    /// Media paths returned by the server (profile pictures, uploaded
    /// reports) are relative to this root rather than to the API prefix.
    pub fn backend_root(&self) -> String {
        let trimmed = self.base_url.trim_end_matches('/');

        if let Some(idx) = trimmed.rfind("/api/v") {
            let version = &trimmed[idx + "/api/v".len()..];
            if !version.is_empty() && version.chars().all(|c| c.is_ascii_digit()) {
                return trimmed[..idx].to_string();
            }
        }

        trimmed.to_string()
    }

    /// Turn a server-relative media path into an absolute URL.
    ///
    /// Paths already starting with `http` pass through untouched; empty
    /// input yields `None`.
    pub fn resolve_media_url(&self, path: &str) -> Option<String> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        if path.starts_with("http") {
            return Some(path.to_string());
        }

        let root = self.backend_root();
        if path.starts_with('/') {
            Some(format!("{root}{path}"))
        } else {
            Some(format!("{root}/{path}"))
        }
    }
}
