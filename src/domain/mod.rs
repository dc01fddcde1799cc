//! Domain module containing the habit data model and streak rules
//!
//! This module defines the core entities (Habit, Completion, Periodicity) and
//! the streak calculation. It depends on nothing else in the crate; the store,
//! storage and analytics layers build on top of it.

pub mod habit;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid periodicity '{0}'. Valid options: daily, weekly, monthly")]
    InvalidPeriodicity(String),
}
