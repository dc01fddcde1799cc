/// Streak behaviour checked through the public API
use chrono::{Duration, NaiveDate};
use habit_tracker::*;

fn day0() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 12, 25).unwrap()
}

fn habit(periodicity: Periodicity, offsets: &[i64]) -> Habit {
    let mut habit = Habit::new("Test Habit", periodicity, "A test habit");
    for offset in offsets {
        habit.add_completion(day0() + Duration::days(*offset));
    }
    habit
}

#[test]
fn test_empty_log_is_zero_for_every_periodicity() {
    for periodicity in [
        Periodicity::Daily,
        Periodicity::Weekly,
        Periodicity::Monthly,
        Periodicity::Unrecognized("yearly".to_string()),
    ] {
        assert_eq!(calculate_streak(&habit(periodicity, &[])), 0);
    }
}

#[test]
fn test_daily_streak_matches_run_length() {
    for n in 1..=10 {
        let offsets: Vec<i64> = (0..n).collect();
        assert_eq!(calculate_streak(&habit(Periodicity::Daily, &offsets)), n as u32);
    }
}

#[test]
fn test_daily_streak_across_month_and_year_boundaries() {
    // 2023-12-25 .. 2024-01-07
    let offsets: Vec<i64> = (0..14).collect();
    assert_eq!(calculate_streak(&habit(Periodicity::Daily, &offsets)), 14);
}

#[test]
fn test_duplicate_date_then_next_day() {
    assert_eq!(calculate_streak(&habit(Periodicity::Daily, &[0, 0, 1])), 2);
}

#[test]
fn test_weekly_eight_day_gap_breaks() {
    assert_eq!(calculate_streak(&habit(Periodicity::Weekly, &[0, 7, 14, 21])), 4);
    assert_eq!(calculate_streak(&habit(Periodicity::Weekly, &[0, 8, 15, 22])), 3);
    assert_eq!(calculate_streak(&habit(Periodicity::Weekly, &[0, 7, 14, 22])), 3);
}

#[test]
fn test_monthly_tolerates_up_to_31_days() {
    assert_eq!(calculate_streak(&habit(Periodicity::Monthly, &[0, 31, 62])), 3);
    assert_eq!(calculate_streak(&habit(Periodicity::Monthly, &[0, 32, 63])), 2);
}

#[test]
fn test_order_of_logging_does_not_matter() {
    let sorted = habit(Periodicity::Daily, &[0, 1, 2, 5, 6]);
    let shuffled = habit(Periodicity::Daily, &[6, 1, 5, 0, 2]);
    assert_eq!(calculate_streak(&sorted), calculate_streak(&shuffled));
    assert_eq!(calculate_streak(&shuffled), 3);
}

#[test]
fn test_unrecognized_periodicity_is_one() {
    let other = Periodicity::Unrecognized("biweekly".to_string());
    assert_eq!(calculate_streak(&habit(other, &[0, 1, 2])), 1);
}

#[test]
fn test_longest_run_on_sorted_slice() {
    let dates: Vec<NaiveDate> = [0, 1, 2, 10].iter().map(|d| day0() + Duration::days(*d)).collect();
    assert_eq!(longest_run(&dates, &Periodicity::Daily), 3);
    assert_eq!(longest_run(&dates, &Periodicity::Weekly), 4);
    assert_eq!(longest_run(&[], &Periodicity::Weekly), 0);
}
