//! Bearer credential lifecycle
//!
//! The credential lives in memory and is mirrored to a persistent backend
//! under two keys: the current one and the name older clients used. Both are
//! written on every `set` so either generation of client can pick it up.

use std::sync::Arc;

use parking_lot::RwLock;
use smartpath_domain::constants::{LEGACY_TOKEN_STORAGE_KEY, TOKEN_STORAGE_KEY};
use tracing::{debug, warn};

use crate::storage::{CredentialStorage, MemoryStorage};

/// Holds the current bearer credential.
///
/// Storage failures never surface: a failed write leaves the in-memory value
/// in place, and a failed read is treated as "no credential".
pub struct TokenStore {
    current: RwLock<Option<String>>,
    storage: Arc<dyn CredentialStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn CredentialStorage>) -> Self {
        Self { current: RwLock::new(None), storage }
    }

    /// Store backed by process memory only
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Replace the credential; `None` clears it everywhere.
    pub fn set(&self, token: Option<&str>) {
        match token {
            Some(token) => {
                *self.current.write() = Some(token.to_string());
                for key in [TOKEN_STORAGE_KEY, LEGACY_TOKEN_STORAGE_KEY] {
                    if let Err(err) = self.storage.write(key, token) {
                        warn!(key, error = %err, "failed to persist credential");
                    }
                }
                debug!("credential stored");
            }
            None => {
                *self.current.write() = None;
                for key in [TOKEN_STORAGE_KEY, LEGACY_TOKEN_STORAGE_KEY] {
                    if let Err(err) = self.storage.remove(key) {
                        warn!(key, error = %err, "failed to remove persisted credential");
                    }
                }
                debug!("credential cleared");
            }
        }
    }

    pub fn clear(&self) {
        self.set(None);
    }

    /// Current credential: memory first, then the primary key, then the
    /// legacy key. Empty strings count as absent.
    pub fn get(&self) -> Option<String> {
        if let Some(token) = self.current.read().as_ref().filter(|t| !t.is_empty()) {
            return Some(token.clone());
        }

        [TOKEN_STORAGE_KEY, LEGACY_TOKEN_STORAGE_KEY]
            .into_iter()
            .find_map(|key| self.read_persisted(key))
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }

    fn read_persisted(&self, key: &str) -> Option<String> {
        match self.storage.read(key) {
            Ok(value) => value.filter(|t| !t.is_empty()),
            Err(err) => {
                warn!(key, error = %err, "failed to read persisted credential");
                None
            }
        }
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("has_credential", &self.current.read().is_some())
            .finish_non_exhaustive()
    }
}
