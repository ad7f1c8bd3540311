//! Credential persistence backends
//!
//! A backend is a tiny synchronous key/value store. The `TokenStore` writes
//! the bearer credential through one of these so it survives restarts.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use smartpath_domain::StorageConfig;

use crate::errors::StorageError;

mod file;
mod keychain;

pub use file::FileStorage;
pub use keychain::KeyringStorage;

/// Key/value persistence for credentials
pub trait CredentialStorage: Send + Sync {
    /// Read `key`; `Ok(None)` when nothing is stored
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Process-local storage; nothing survives a restart
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Instantiate the backend selected by `config`
pub fn from_config(config: &StorageConfig) -> Arc<dyn CredentialStorage> {
    match config {
        StorageConfig::Memory => Arc::new(MemoryStorage::new()),
        StorageConfig::File { path } => Arc::new(FileStorage::new(path.clone())),
        StorageConfig::Keyring { service } => Arc::new(KeyringStorage::new(service.clone())),
    }
}
