use log::{debug, warn};

use crate::error::StorageError;

/// String key-value store living for the page session.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Boolean flags on top of session storage. Reads fail open: an unavailable
/// or erroring backend reports every flag as unset.
pub struct SessionFlagStore<S> {
    storage: Option<S>,
}

impl<S: SessionStorage> SessionFlagStore<S> {
    pub fn new(storage: Result<S, StorageError>) -> Self {
        match storage {
            Ok(storage) => Self { storage: Some(storage) },
            Err(e) => {
                warn!("Session flags disabled: {}", e);
                Self { storage: None }
            }
        }
    }

    pub fn get(&self, key: &str) -> bool {
        let Some(storage) = &self.storage else {
            return false;
        };
        match storage.get_item(key) {
            Ok(Some(value)) => !value.is_empty(),
            Ok(None) => false,
            Err(e) => {
                warn!("Reading session flag {} failed: {}", key, e);
                false
            }
        }
    }

    pub fn set(&self, key: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, "true")?;
        debug!("Session flag {} set", key);
        Ok(())
    }
}
