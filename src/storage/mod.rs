//! Storage layer for persisting habit data
//!
//! Habits are saved as whole snapshots; there is no per-record persistence.
//! The JSON file backend is the only implementation.

pub mod json;

// Re-export the main storage types
pub use json::*;

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Habit;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access habit file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write habit data: {0}")]
    Write(#[source] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait defining the storage interface for habits
///
/// This keeps the tracker independent of where the snapshot lives.
pub trait HabitStorage {
    /// Replace the stored snapshot with `habits`
    fn save(&self, habits: &[Habit]) -> Result<(), StorageError>;

    /// Load the stored snapshot; an absent snapshot is an empty list
    fn load(&self) -> Result<Vec<Habit>, StorageError>;
}
