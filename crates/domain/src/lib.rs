//! # SmartPath Domain
//!
//! Wire types and shared definitions for the SmartPath API client.
//!
//! This crate contains:
//! - Request/response payload types for every feature area
//! - The classified error taxonomy returned by every API call
//! - Client configuration structures
//! - Timeout and storage constants
//!
//! ## Architecture
//! - No dependencies on other SmartPath crates
//! - No I/O: everything here is plain data
//! - Consumed by `smartpath-infra`, which owns the HTTP plumbing

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
