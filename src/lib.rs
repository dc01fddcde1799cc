//! Public library interface for the habit tracker
//!
//! The domain layer holds habits and the streak rules, the store keeps them in
//! memory, storage reads and writes the JSON snapshot, and analytics answers
//! read-only questions about the store. [`HabitTracker`] ties a store to a
//! file for callers such as the command-line front end.

use std::path::PathBuf;

use thiserror::Error;

pub mod analytics;
pub mod domain;
pub mod sample;
pub mod storage;
pub mod store;

// Re-export public modules and types
pub use analytics::{
    best_habit, list_all_habits, list_by_periodicity, longest_streak_all, longest_streak_for,
    summarize, summarize_by_periodicity, HabitSummary,
};
pub use domain::*;
pub use storage::{read_habits, write_habits, HabitStorage, JsonFileStorage, StorageError};
pub use store::HabitStore;

/// Errors surfaced to callers of the tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A habit store bound to a storage backend
///
/// `open` loads whatever snapshot exists; mutations only touch memory until
/// `save` is called.
pub struct HabitTracker<S: HabitStorage = JsonFileStorage> {
    storage: S,
    store: HabitStore,
}

impl HabitTracker<JsonFileStorage> {
    /// Open the tracker backed by the JSON file at `path`
    ///
    /// A missing file gives an empty tracker.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TrackerError> {
        let path = path.into();
        tracing::info!("Opening habit tracker with data file: {}", path.display());
        Self::with_storage(JsonFileStorage::new(path))
    }
}

impl<S: HabitStorage> HabitTracker<S> {
    /// Create a tracker over any storage backend and load its snapshot
    pub fn with_storage(storage: S) -> Result<Self, TrackerError> {
        let store = HabitStore::from_habits(storage.load()?);
        Ok(Self { storage, store })
    }

    /// Reload the snapshot, discarding unsaved changes
    pub fn reload(&mut self) -> Result<(), TrackerError> {
        let habits = self.storage.load()?;
        self.store.replace_all(habits);
        Ok(())
    }

    /// Write the current habits to storage
    pub fn save(&self) -> Result<(), TrackerError> {
        self.storage.save(self.store.habits())?;
        Ok(())
    }

    pub fn store(&self) -> &HabitStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut HabitStore {
        &mut self.store
    }
}
