//! Sample habits for trying the tracker out
//!
//! Three daily habits done every day for the last four weeks and two weekly
//! habits done once a week over the same period.

use chrono::{Duration, NaiveDate};

use crate::domain::Periodicity;
use crate::store::HabitStore;

/// Name, periodicity and task description of each sample habit
pub const SAMPLE_HABITS: [(&str, Periodicity, &str); 5] = [
    ("Check blood sugar", Periodicity::Daily, "Check and record blood sugar level"),
    ("Exercise", Periodicity::Weekly, "30 minutes of exercise"),
    ("Take medication", Periodicity::Daily, "Take prescribed diabetes medication"),
    ("Log meals", Periodicity::Daily, "Record all meals"),
    ("Walk 10,000 steps", Periodicity::Weekly, "Walk at least 10,000 steps in a week"),
];

const WEEKS: i64 = 4;

/// Add the sample habits with four weeks of history ending on `today`
pub fn seed_sample_habits(store: &mut HabitStore, today: NaiveDate) {
    for (name, periodicity, task_spec) in SAMPLE_HABITS {
        let days: Vec<i64> = match periodicity {
            Periodicity::Daily => (0..WEEKS * 7).rev().collect(),
            Periodicity::Weekly => (0..WEEKS).rev().map(|weeks| weeks * 7).collect(),
            _ => Vec::new(),
        };

        store.create_habit(name, periodicity, task_spec);
        for days_ago in days {
            store.complete_habit(name, Some(today - Duration::days(days_ago)));
        }
    }

    tracing::info!("Seeded {} sample habits", SAMPLE_HABITS.len());
}
