use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::error::AppError;

/// Which browser store backs a `BrowserStorage`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// localStorage, survives the tab
    Local,
    /// sessionStorage, dropped with the tab
    Session,
}

/// Thin wrapper over the Web Storage API.
///
/// Outside the browser every read misses and every write succeeds without
/// storing anything.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    storage_type: StorageType,
}

impl BrowserStorage {
    pub fn new(storage_type: StorageType) -> Self {
        Self { storage_type }
    }

    #[cfg(feature = "web")]
    fn backend(&self) -> Result<web_sys::Storage, AppError> {
        let window = web_sys::window().ok_or_else(|| AppError::storage("window not available"))?;
        let storage = match self.storage_type {
            StorageType::Local => window.local_storage(),
            StorageType::Session => window.session_storage(),
        };
        storage
            .map_err(|e| AppError::storage(format!("{e:?}")))?
            .ok_or_else(|| AppError::storage("storage not available"))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "web")]
        {
            let storage = self.backend().ok()?;
            match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key, error = ?e, "failed to read from browser storage");
                    None
                }
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, self.storage_type);
            None
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        #[cfg(feature = "web")]
        {
            self.backend()?
                .set_item(key, value)
                .map_err(|e| AppError::storage(format!("failed to write '{key}': {e:?}")))
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    pub fn remove(&self, key: &str) -> Result<(), AppError> {
        #[cfg(feature = "web")]
        {
            self.backend()?
                .remove_item(key)
                .map_err(|e| AppError::storage(format!("failed to remove '{key}': {e:?}")))
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            Ok(())
        }
    }

    /// Read and decode a JSON value. Undecodable entries are treated as absent.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "discarding undecodable storage entry");
                None
            }
        }
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}
