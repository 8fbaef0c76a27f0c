//! Persistence layer for the workout log.
//!
//! The whole log is stored as one opaque JSON blob under a single namespace
//! key. Reads never fail: a missing or unreadable blob is an empty log.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::AppError;
use crate::models::WorkoutLogEntry;

/// Namespace key the log blob is stored under.
pub const STORAGE_KEY: &str = "fitpulse_logs";

/// Log Store contract.
pub trait LogStore: Send + Sync {
    /// Load the full entry list. Missing or corrupt content yields an empty list.
    fn load(&self) -> Vec<WorkoutLogEntry>;

    /// Persist the complete list, replacing any prior content.
    fn save_all(&self, entries: &[WorkoutLogEntry]) -> Result<(), AppError>;

    /// Remove all stored content.
    fn clear(&self) -> Result<(), AppError>;
}

/// Decode a stored blob, degrading to an empty list on corruption.
pub(crate) fn decode_blob(blob: &str) -> Vec<WorkoutLogEntry> {
    if blob.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<WorkoutLogEntry>>(blob) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, key = STORAGE_KEY, "Stored log is unreadable, treating as empty");
            Vec::new()
        }
    }
}

/// Encode the entry list as a blob.
pub(crate) fn encode_blob(entries: &[WorkoutLogEntry]) -> Result<String, AppError> {
    serde_json::to_string(entries)
        .map_err(|e| AppError::Storage(format!("Failed to encode log: {}", e)))
}
