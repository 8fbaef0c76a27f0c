//! In-process log store.
//!
//! Holds the raw blob rather than a typed list so that tests can seed
//! arbitrary (including corrupt) content.

use std::sync::Mutex;

use crate::db::{decode_blob, encode_blob, LogStore};
use crate::error::AppError;
use crate::models::WorkoutLogEntry;

#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a raw blob.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
        }
    }

    /// Current raw blob, if any.
    pub fn blob(&self) -> Option<String> {
        self.blob
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl LogStore for MemoryStore {
    fn load(&self) -> Vec<WorkoutLogEntry> {
        self.blob().map(|b| decode_blob(&b)).unwrap_or_default()
    }

    fn save_all(&self, entries: &[WorkoutLogEntry]) -> Result<(), AppError> {
        let encoded = encode_blob(entries)?;
        *self
            .blob
            .lock()
            .map_err(|_| AppError::Storage("Memory store lock poisoned".to_string()))? =
            Some(encoded);
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self
            .blob
            .lock()
            .map_err(|_| AppError::Storage("Memory store lock poisoned".to_string()))? = None;
        Ok(())
    }
}
