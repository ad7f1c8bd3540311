//! Client constants
//!
//! Centralized location for the fixed values the API client relies on.

// Server location
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_USER_AGENT: &str = concat!("smartpath-client/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

// Per-category deadlines (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const UPLOAD_TIMEOUT_SECS: u64 = 60;
pub const OCR_PREVIEW_TIMEOUT_SECS: u64 = 90;
pub const AI_GENERATION_TIMEOUT_SECS: u64 = 120;

// Credential persistence. Both keys are written on every set; reads try the
// primary key first.
pub const TOKEN_STORAGE_KEY: &str = "access_token";
pub const LEGACY_TOKEN_STORAGE_KEY: &str = "token";
pub const DEFAULT_KEYRING_SERVICE: &str = "com.smartpath.client";

// Environment variables read by the config loader
pub const ENV_API_URL: &str = "SMARTPATH_API_URL";
pub const ENV_USER_AGENT: &str = "SMARTPATH_USER_AGENT";
pub const ENV_CONNECT_TIMEOUT: &str = "SMARTPATH_CONNECT_TIMEOUT";
pub const ENV_TOKEN_FILE: &str = "SMARTPATH_TOKEN_FILE";
pub const ENV_USE_KEYRING: &str = "SMARTPATH_USE_KEYRING";

// Response normalization
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";
pub const INVALID_JSON_MESSAGE: &str = "invalid JSON response from server";
pub const VALIDATION_STATUS: u16 = 422;
