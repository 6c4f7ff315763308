//! Per-conversation scratch state.
//!
//! The session bag is an opaque mutable key/value store scoped to one
//! conversation. The assistant reads and writes a small fixed key set (the
//! pending reminder draft, the awaiting-time flag, transient hour/minute
//! selections) and leaves everything else alone.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::NudgeError;

/// Opaque per-conversation key/value store.
#[derive(Debug, Clone, Default)]
pub struct SessionBag {
    values: HashMap<String, String>,
}

impl SessionBag {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a raw string value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a raw string value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Remove a key, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Check a boolean flag. Missing keys read as `false`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    /// Set or clear a boolean flag. Clearing removes the key.
    pub fn set_flag(&mut self, key: &str, value: bool) {
        if value {
            self.set(key, "true");
        } else {
            self.values.remove(key);
        }
    }

    /// Get a JSON-encoded value.
    ///
    /// # Errors
    ///
    /// Returns `NudgeError::Parse` if the stored value does not decode.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, NudgeError> {
        match self.get(key) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    /// Store a JSON-encoded value.
    ///
    /// # Errors
    ///
    /// Returns `NudgeError::Parse` if the value does not encode.
    pub fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), NudgeError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, raw);
        Ok(())
    }
}
