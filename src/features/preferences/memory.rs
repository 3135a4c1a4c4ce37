use super::PreferenceStore;
use crate::app_lib::AppError;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory store shared between clones. Used outside the browser and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-seeded with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut values = self
            .values
            .write()
            .map_err(|_| AppError::Storage("preference store lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
