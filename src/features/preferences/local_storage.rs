//! Browser `localStorage` backend. The `Storage` handle is looked up on every
//! call so the store itself stays `Send + Sync` and can be moved into
//! reactive closures.

use super::PreferenceStore;
use crate::app_lib::AppError;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .ok_or_else(|| AppError::Storage("window is not available".to_string()))?
            .local_storage()
            .map_err(|_| AppError::Storage("localStorage access denied".to_string()))?
            .ok_or_else(|| AppError::Storage("localStorage is not available".to_string()))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get_string(&self, key: &str) -> Option<String> {
        match Self::storage() {
            Ok(storage) => storage.get_item(key).ok().flatten(),
            Err(error) => {
                tracing::debug!(%error, key, "preference read skipped");
                None
            }
        }
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), AppError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("failed to write {key}")))
    }
}
