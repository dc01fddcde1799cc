//! Core types used throughout the domain layer
//!
//! Periodicity decides how far apart two completions may be while still
//! counting toward the same streak.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// How often a habit should be performed
///
/// Only `Daily`, `Weekly` and `Monthly` can be constructed from user input.
/// `Unrecognized` exists so that a habit file written by another tool (or by
/// hand) still loads: the raw string is kept and written back unchanged, but
/// no gap ever continues a streak for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Periodicity {
    /// Completions must land on consecutive calendar days
    Daily,
    /// Completions may be up to 7 days apart
    Weekly,
    /// Completions may be up to 31 days apart
    Monthly,
    /// A stored value that is none of the above
    Unrecognized(String),
}

impl Periodicity {
    /// The string stored in the habit file
    pub fn as_str(&self) -> &str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
            Periodicity::Monthly => "monthly",
            Periodicity::Unrecognized(raw) => raw,
        }
    }

    /// Whether this is one of the known schedules
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Periodicity::Unrecognized(_))
    }

    /// Largest gap in days between two completions that keeps a streak going
    ///
    /// Daily habits need an exact one-day step rather than "at most one day",
    /// see [`Periodicity::continues_streak`].
    pub fn max_gap_days(&self) -> Option<i64> {
        match self {
            Periodicity::Daily => Some(1),
            Periodicity::Weekly => Some(7),
            Periodicity::Monthly => Some(31),
            Periodicity::Unrecognized(_) => None,
        }
    }

    /// Check whether two sorted completions `delta` days apart extend a streak
    ///
    /// A delta of zero (the same date logged twice) breaks a daily streak but
    /// sits inside the weekly and monthly windows.
    pub fn continues_streak(&self, delta: i64) -> bool {
        match self {
            Periodicity::Daily => delta == 1,
            Periodicity::Weekly | Periodicity::Monthly => {
                self.max_gap_days().is_some_and(|max| delta <= max)
            }
            Periodicity::Unrecognized(_) => false,
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing for user input: only the three lowercase names are accepted
impl FromStr for Periodicity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Periodicity::Daily),
            "weekly" => Ok(Periodicity::Weekly),
            "monthly" => Ok(Periodicity::Monthly),
            other => Err(DomainError::InvalidPeriodicity(other.to_string())),
        }
    }
}

/// Lenient conversion used when reading stored data
impl From<String> for Periodicity {
    fn from(raw: String) -> Self {
        raw.parse().unwrap_or(Periodicity::Unrecognized(raw))
    }
}

impl From<Periodicity> for String {
    fn from(periodicity: Periodicity) -> Self {
        match periodicity {
            Periodicity::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
