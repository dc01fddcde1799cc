//! Streak calculation
//!
//! A streak is a run of completions where every neighbouring pair (in date
//! order) is close enough together for the habit's periodicity. We report
//! the longest such run in the habit's history.

use chrono::NaiveDate;

use crate::domain::{Habit, Periodicity};

/// Calculate the longest streak for a habit
///
/// Returns 0 for a habit that was never completed, otherwise at least 1.
pub fn calculate_streak(habit: &Habit) -> u32 {
    let mut dates: Vec<NaiveDate> = habit.completion_dates().collect();
    dates.sort();
    longest_run(&dates, habit.periodicity())
}

/// Longest run over dates that are already sorted ascending
pub fn longest_run(sorted_dates: &[NaiveDate], periodicity: &Periodicity) -> u32 {
    if sorted_dates.is_empty() {
        return 0;
    }

    let mut streak = 1u32;
    let mut max_streak = 1u32;

    for pair in sorted_dates.windows(2) {
        let delta = (pair[1] - pair[0]).num_days();
        if periodicity.continues_streak(delta) {
            streak += 1;
        } else {
            streak = 1;
        }
        max_streak = max_streak.max(streak);
    }

    max_streak
}
