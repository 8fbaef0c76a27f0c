// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed log store.
//!
//! The blob lives at `<data_dir>/fitpulse_logs.json`. Writes go to a temp file
//! in the same directory and are renamed over the target, so a crash mid-write
//! never leaves a truncated log behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::db::{decode_blob, encode_blob, LogStore, STORAGE_KEY};
use crate::error::AppError;
use crate::models::WorkoutLogEntry;

/// JSON file log store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `data_dir`, creating the directory if needed.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Storage(format!(
                "Failed to create data dir {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        let path = data_dir.join(format!("{}.json", STORAGE_KEY));
        tracing::info!(path = %path.display(), "Using file log store");
        Ok(Self { path })
    }

    /// Path of the blob file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomic(&self, content: &[u8]) -> io::Result<()> {
        let parent = self.path.parent().unwrap_or(Path::new("."));
        let mut temp = tempfile::NamedTempFile::new_in(parent)?;
        temp.write_all(content)?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl LogStore for JsonFileStore {
    fn load(&self) -> Vec<WorkoutLogEntry> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => decode_blob(&blob),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    "Failed to read log file, treating as empty"
                );
                Vec::new()
            }
        }
    }

    fn save_all(&self, entries: &[WorkoutLogEntry]) -> Result<(), AppError> {
        let blob = encode_blob(entries)?;
        self.write_atomic(blob.as_bytes()).map_err(|e| {
            AppError::Storage(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::debug!(count = entries.len(), "Log saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
