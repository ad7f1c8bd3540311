//! Configuration loader
//!
//! Builds a [`ClientConfig`] from environment variables or a config file.
//!
//! ## Loading Strategy
//! 1. Environment variables, when `SMARTPATH_API_URL` is set
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//! 3. JSON and TOML are both accepted, chosen by file extension
//!
//! ## Environment Variables
//! - `SMARTPATH_API_URL`: versioned API base URL (required)
//! - `SMARTPATH_USER_AGENT`: overrides the default user agent
//! - `SMARTPATH_CONNECT_TIMEOUT`: TCP/TLS connect timeout in seconds
//! - `SMARTPATH_TOKEN_FILE`: persist the credential in this JSON file
//! - `SMARTPATH_USE_KEYRING`: persist the credential in the platform keychain
//!
//! ## File Locations
//! The loader probes, in order:
//! 1. `./smartpath.{json,toml}` and `./config.{json,toml}`
//! 2. The same names one and two directories up
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use smartpath_domain::constants::{
    ENV_API_URL, ENV_CONNECT_TIMEOUT, ENV_TOKEN_FILE, ENV_USER_AGENT, ENV_USE_KEYRING,
};
use smartpath_domain::{ClientConfig, StorageConfig};

use crate::errors::ConfigError;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["smartpath.json", "smartpath.toml", "config.json", "config.toml"];

/// Load configuration, environment first and file second
///
/// # Errors
/// Returns `ConfigError` if neither source yields a valid configuration.
pub fn load() -> Result<ClientConfig, ConfigError> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!(base_url = %config.base_url, "Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only `SMARTPATH_API_URL` is required; everything else keeps its default.
///
/// # Errors
/// Returns `ConfigError::MissingVar` without the base URL,
/// `ConfigError::InvalidValue` for an unparsable timeout, and
/// `ConfigError::Client` when the URL is not absolute http(s).
pub fn load_from_env() -> Result<ClientConfig, ConfigError> {
    let mut config = ClientConfig::with_base_url(env_var(ENV_API_URL)?);

    if let Ok(user_agent) = std::env::var(ENV_USER_AGENT) {
        config.user_agent = user_agent;
    }

    if let Ok(raw) = std::env::var(ENV_CONNECT_TIMEOUT) {
        config.connect_timeout_secs = raw.trim().parse::<u64>().map_err(|e| {
            ConfigError::InvalidValue { key: ENV_CONNECT_TIMEOUT.to_string(), reason: e.to_string() }
        })?;
    }

    if let Ok(path) = std::env::var(ENV_TOKEN_FILE) {
        config.storage = StorageConfig::File { path: PathBuf::from(path) };
    } else if env_bool(ENV_USE_KEYRING, false) {
        config.storage = StorageConfig::Keyring {
            service: smartpath_domain::constants::DEFAULT_KEYRING_SERVICE.to_string(),
        };
    }

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// With `path` set to `None` the standard locations are probed. Fields
/// missing from the file keep their defaults.
///
/// # Errors
/// Returns `ConfigError` if the file is missing, unreadable, malformed, or
/// names an invalid base URL.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig, ConfigError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::FileNotFound(p));
            }
            p
        }
        None => probe_config_paths().ok_or(ConfigError::NoConfigFile)?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)?;
    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Format is picked by extension; a missing extension is read as JSON
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig, ConfigError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ConfigError::Format { format: "TOML", reason: e.to_string() }),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ConfigError::Format { format: "JSON", reason: e.to_string() }),
        other => Err(ConfigError::UnsupportedFormat(other.to_string())),
    }
}

/// First existing config file among the standard locations
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.clone());
        roots.extend(cwd.ancestors().skip(1).take(2).map(Path::to_path_buf));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.is_file())
}

fn env_var(key: &str) -> Result<String, ConfigError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(key.to_string())),
    }
}

/// Accepts `1`/`true`/`yes`/`on` (case-insensitive); anything else is false
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
