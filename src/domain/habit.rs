//! Habit entity and its completion log
//!
//! This module defines the Habit struct that represents something the user
//! wants to do regularly, and the Completion records appended to it.

use chrono::{Local, NaiveDate, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use crate::domain::Periodicity;

/// Format used for `created_at` in the habit file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A record of completing a habit on a specific calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub date: NaiveDate,
}

impl Completion {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

/// A habit represents something the user wants to do regularly
///
/// Periodicity and creation time are fixed once the habit exists, so the
/// fields are private and only the completion log can grow. Completions are
/// kept in the order they were logged, which is not necessarily date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    name: String,
    periodicity: Periodicity,
    task_spec: String,
    #[serde(with = "timestamp", default = "current_timestamp")]
    created_at: NaiveDateTime,
    completions: Vec<Completion>,
}

impl Habit {
    /// Create a new habit stamped with the current local time
    pub fn new(name: impl Into<String>, periodicity: Periodicity, task_spec: impl Into<String>) -> Self {
        Self::with_created_at(name, periodicity, task_spec, current_timestamp())
    }

    /// Create a habit with an explicit creation time
    ///
    /// Sub-second precision is dropped so the value survives a save/load cycle.
    pub fn with_created_at(
        name: impl Into<String>,
        periodicity: Periodicity,
        task_spec: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            periodicity,
            task_spec: task_spec.into(),
            created_at: created_at.trunc_subsecs(0),
            completions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn periodicity(&self) -> &Periodicity {
        &self.periodicity
    }

    pub fn task_spec(&self) -> &str {
        &self.task_spec
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Completion log in the order entries were added
    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    /// Dates of all completions, in log order
    pub fn completion_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.completions.iter().map(|c| c.date)
    }

    /// Most recent completion date, regardless of log order
    pub fn last_completed(&self) -> Option<NaiveDate> {
        self.completion_dates().max()
    }

    /// Record a completion for the given day
    ///
    /// Duplicates are kept; the streak calculation decides what they mean.
    pub fn add_completion(&mut self, date: NaiveDate) {
        self.completions.push(Completion::new(date));
    }

    /// Record a completion at a point in time, keeping only its calendar date
    pub fn add_completion_at(&mut self, timestamp: NaiveDateTime) {
        self.add_completion(timestamp.date());
    }

    /// Record a completion for today (local time)
    pub fn complete_now(&mut self) {
        self.add_completion(today());
    }

    /// `created_at` rendered the way it is stored
    pub fn created_at_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn current_timestamp() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Serde adapter for `YYYY-MM-DD HH:MM:SS` timestamps
///
/// Writing always uses the canonical format. Reading is looser: a null or
/// blank value means "now", and ISO 8601 (`T` separator, fractional seconds)
/// or a bare date are accepted. Anything else fails the load.
mod timestamp {
    use chrono::{NaiveDate, NaiveDateTime, SubsecRound};
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::{current_timestamp, TIMESTAMP_FORMAT};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        let raw = match raw.as_deref().map(str::trim) {
            None | Some("") => return Ok(current_timestamp()),
            Some(raw) => raw,
        };

        parse(raw)
            .map(|value| value.trunc_subsecs(0))
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized created_at timestamp '{raw}'")))
    }

    fn parse(raw: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
            .ok()
            .or_else(|| raw.parse::<NaiveDateTime>().ok())
            .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").ok())
            .or_else(|| raw.parse::<NaiveDate>().ok().and_then(|date| date.and_hms_opt(0, 0, 0)))
    }
}
