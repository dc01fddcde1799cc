//! In-memory habit store
//!
//! Holds every tracked habit in insertion order. Names are meant to be unique
//! but creation does not enforce it: lookups see the first habit with a name,
//! deletion removes all of them.

use chrono::NaiveDate;

use crate::domain::{Habit, Periodicity};

/// The collection of all tracked habits
///
/// Records are only reachable through shared references or the targeted
/// mutators below, so nothing outside the store can rewrite a habit's
/// periodicity or drop entries from its log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitStore {
    habits: Vec<Habit>,
}

impl HabitStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from previously loaded habits
    pub fn from_habits(habits: Vec<Habit>) -> Self {
        Self { habits }
    }

    /// Replace the whole collection, e.g. after loading from disk
    pub fn replace_all(&mut self, habits: Vec<Habit>) {
        tracing::debug!("Replacing {} habits with {} loaded habits", self.habits.len(), habits.len());
        self.habits = habits;
    }

    /// Create a new habit and append it to the store
    ///
    /// An existing habit with the same name is not replaced; it keeps
    /// shadowing the new one for lookups until it is deleted.
    pub fn create_habit(
        &mut self,
        name: impl Into<String>,
        periodicity: Periodicity,
        task_spec: impl Into<String>,
    ) -> &Habit {
        self.insert(Habit::new(name, periodicity, task_spec))
    }

    /// Append an already constructed habit
    pub fn insert(&mut self, habit: Habit) -> &Habit {
        if self.get_habit(habit.name()).is_some() {
            tracing::debug!("Habit '{}' already exists, new record is shadowed", habit.name());
        }
        tracing::debug!("Created habit: {} ({})", habit.name(), habit.periodicity());

        let index = self.habits.len();
        self.habits.push(habit);
        &self.habits[index]
    }

    /// Delete every habit with the given name
    ///
    /// Returns how many habits were removed; zero is not an error.
    pub fn delete_habit(&mut self, name: &str) -> usize {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.name() != name);
        let removed = before - self.habits.len();

        tracing::debug!("Deleted {} habit(s) named '{}'", removed, name);
        removed
    }

    /// Find the first habit with the given name
    pub fn get_habit(&self, name: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.name() == name)
    }

    /// Log a completion for the first habit with the given name
    ///
    /// `date` defaults to today. Returns `None` if no habit matches.
    pub fn complete_habit(&mut self, name: &str, date: Option<NaiveDate>) -> Option<&Habit> {
        let habit = self.habits.iter_mut().find(|habit| habit.name() == name)?;
        match date {
            Some(date) => habit.add_completion(date),
            None => habit.complete_now(),
        }

        tracing::debug!("Logged completion for '{}' ({} total)", name, habit.completions().len());
        Some(&*habit)
    }

    /// All habits in insertion order
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Habit> {
        self.habits.iter()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}

impl<'a> IntoIterator for &'a HabitStore {
    type Item = &'a Habit;
    type IntoIter = std::slice::Iter<'a, Habit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
