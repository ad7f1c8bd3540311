//! # SmartPath Infrastructure
//!
//! Everything that touches the network, the disk or the platform keychain.
//!
//! This crate contains:
//! - Credential storage backends and the `TokenStore`
//! - Request construction, timeout guarding and response normalization
//! - The reqwest-backed HTTP transport and the `ApiClient` built on it
//! - One endpoint facade per feature area
//! - Configuration loading from the environment or a file
//!
//! ## Architecture
//! - Wire types and the error taxonomy live in `smartpath-domain`
//! - Every facade talks to one injected `ApiClient`; nothing is global
//! - Calls are never retried here; callers decide

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod storage;

// Re-export commonly used items
pub use api::*;
pub use errors::{ConfigError, StorageError};
pub use http::{HttpClient, HttpClientBuilder};
pub use storage::{CredentialStorage, FileStorage, KeyringStorage, MemoryStorage};
