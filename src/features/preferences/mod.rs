//! Key/value persistence for client preferences.
//!
//! Values are stored as strings; booleans use JSON literals (`true`/`false`)
//! so they stay readable by any other script sharing the same storage.

mod memory;
#[cfg(target_arch = "wasm32")]
mod local_storage;

pub use memory::MemoryStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use crate::app_lib::AppError;

pub const SIDEBAR_EXPANDED_KEY: &str = "sidebar-expanded";
pub const THEME_MODE_KEY: &str = "theme-mode";

/// String-keyed preference storage injected into the widget.
pub trait PreferenceStore {
    fn get_string(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns `AppError::Storage` when the backend rejects the write.
    fn set_string(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Reads a JSON boolean literal. Anything else reads as absent.
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_string(key).and_then(|raw| decode_bool(&raw))
    }

    /// # Errors
    /// Propagates the failure from `set_string`.
    fn set_bool(&self, key: &str, value: bool) -> Result<(), AppError> {
        let encoded = serde_json::to_string(&value)?;
        self.set_string(key, &encoded)
    }
}

fn decode_bool(raw: &str) -> Option<bool> {
    match serde_json::from_str::<bool>(raw) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::debug!(%error, "ignoring non-boolean preference value");
            None
        }
    }
}
