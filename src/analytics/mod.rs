//! Read-only analytics over a habit store
//!
//! Everything here is computed on demand from the store's current contents;
//! nothing is cached.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{calculate_streak, Habit, Periodicity};
use crate::store::HabitStore;

/// Per-habit overview used for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitSummary {
    pub name: String,
    pub periodicity: String,
    pub task_spec: String,
    pub created_at: String,
    pub total_completions: usize,
    pub last_completed: Option<NaiveDate>,
    pub longest_streak: u32,
}

impl HabitSummary {
    pub fn from_habit(habit: &Habit) -> Self {
        Self {
            name: habit.name().to_string(),
            periodicity: habit.periodicity().to_string(),
            task_spec: habit.task_spec().to_string(),
            created_at: habit.created_at_display(),
            total_completions: habit.completions().len(),
            last_completed: habit.last_completed(),
            longest_streak: calculate_streak(habit),
        }
    }
}

/// Names of all habits in insertion order
pub fn list_all_habits(store: &HabitStore) -> Vec<&str> {
    store.iter().map(Habit::name).collect()
}

/// Names of habits with exactly this periodicity, in insertion order
pub fn list_by_periodicity<'a>(store: &'a HabitStore, periodicity: &Periodicity) -> Vec<&'a str> {
    store
        .iter()
        .filter(|habit| habit.periodicity() == periodicity)
        .map(Habit::name)
        .collect()
}

/// Longest streak across all habits, 0 for an empty store
pub fn longest_streak_all(store: &HabitStore) -> u32 {
    store.iter().map(calculate_streak).max().unwrap_or(0)
}

/// Longest streak for a single habit
pub fn longest_streak_for(habit: &Habit) -> u32 {
    calculate_streak(habit)
}

/// The first habit holding the overall longest streak
pub fn best_habit(store: &HabitStore) -> Option<(&Habit, u32)> {
    let mut best: Option<(&Habit, u32)> = None;
    for habit in store {
        let streak = calculate_streak(habit);
        if best.map_or(true, |(_, top)| streak > top) {
            best = Some((habit, streak));
        }
    }
    best
}

/// Summaries of every habit in insertion order
pub fn summarize(store: &HabitStore) -> Vec<HabitSummary> {
    store.iter().map(HabitSummary::from_habit).collect()
}

/// Summaries of habits with exactly this periodicity, in insertion order
///
/// Filters on the records themselves, so a habit sharing its name with one
/// of another periodicity is not pulled in.
pub fn summarize_by_periodicity(store: &HabitStore, periodicity: &Periodicity) -> Vec<HabitSummary> {
    store
        .iter()
        .filter(|habit| habit.periodicity() == periodicity)
        .map(HabitSummary::from_habit)
        .collect()
}
