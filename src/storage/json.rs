//! JSON file implementation of the habit storage interface
//!
//! The file holds a single top-level array of habit objects. Every save
//! rewrites the whole file.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use crate::domain::Habit;
use crate::storage::{HabitStorage, StorageError};

/// Serialize habits as a pretty-printed JSON array
pub fn write_habits<W: Write>(mut writer: W, habits: &[Habit]) -> Result<(), StorageError> {
    serde_json::to_writer_pretty(&mut writer, habits)?;
    writer.write_all(b"\n").map_err(StorageError::Write)?;
    writer.flush().map_err(StorageError::Write)?;
    Ok(())
}

/// Deserialize habits from a JSON array
///
/// Unknown periodicity strings are kept as-is and reported with a warning.
/// Anything structurally wrong (missing fields, bad dates) is an error.
pub fn read_habits<R: Read>(reader: R) -> Result<Vec<Habit>, StorageError> {
    let habits: Vec<Habit> = serde_json::from_reader(reader)?;

    for habit in habits.iter().filter(|h| !h.periodicity().is_recognized()) {
        tracing::warn!(
            "Habit '{}' has unrecognized periodicity '{}', streaks will not extend",
            habit.name(),
            habit.periodicity()
        );
    }

    Ok(habits)
}

/// File-backed storage
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl HabitStorage for JsonFileStorage {
    /// Overwrite the file with the given habits
    fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        write_habits(BufWriter::new(file), habits)?;

        tracing::info!("Saved {} habits to {}", habits.len(), self.path.display());
        Ok(())
    }

    /// Load habits, treating a missing file as "no habits yet"
    fn load(&self) -> Result<Vec<Habit>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("No habit file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let habits = read_habits(BufReader::new(file))?;
        tracing::info!("Loaded {} habits from {}", habits.len(), self.path.display());
        Ok(habits)
    }
}
