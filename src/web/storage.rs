use web_sys::Storage;

use crate::error::{describe_js, StorageError};
use crate::session::store::SessionStorage;

/// `window.sessionStorage`.
pub struct BrowserSessionStorage {
    storage: Storage,
}

impl BrowserSessionStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        // Throws in sandboxed frames and some private browsing modes
        match window.session_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StorageError::Unavailable),
            Err(e) => Err(StorageError::Access(describe_js(&e))),
        }
    }
}

impl SessionStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Access(describe_js(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Access(describe_js(&e)))
    }
}
