/// Save/load round trips against real files
use chrono::{Duration, NaiveDate};
use habit_tracker::*;
use tempfile::TempDir;

fn populated_store() -> HabitStore {
    let mut store = HabitStore::new();
    store.create_habit("Check blood sugar", Periodicity::Daily, "Check and record blood sugar level");
    store.create_habit("Exercise", Periodicity::Weekly, "30 minutes of exercise");
    store.create_habit("Doctor visit", Periodicity::Monthly, "");
    store.create_habit("Exercise", Periodicity::Daily, "shadowed duplicate");

    let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
    for offset in [3, 0, 1, 1, 2] {
        store.complete_habit("Check blood sugar", Some(start + Duration::days(offset)));
    }
    store.complete_habit("Exercise", Some(start));
    store
}

#[test]
fn test_round_trip_preserves_every_field_and_order() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = JsonFileStorage::new(dir.path().join("habits.json"));
    let store = populated_store();

    storage.save(store.habits()).expect("Failed to save");
    let loaded = storage.load().expect("Failed to load");

    assert_eq!(loaded, store.habits());
    assert_eq!(HabitStore::from_habits(loaded), store);
}

#[test]
fn test_loading_missing_file_gives_empty_store() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = JsonFileStorage::new(dir.path().join("does-not-exist.json"));

    let loaded = storage.load().expect("Missing file should not be an error");
    assert!(loaded.is_empty());
}

#[test]
fn test_file_layout_matches_documented_schema() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("habits.json");
    let created = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
    let mut habit = Habit::with_created_at("Log meals", Periodicity::Daily, "Record all meals", created);
    habit.add_completion(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());

    JsonFileStorage::new(&path).save(&[habit]).expect("Failed to save");

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "name": "Log meals",
            "periodicity": "daily",
            "task_spec": "Record all meals",
            "created_at": "2024-01-01 12:00:00",
            "completions": [{ "date": "2024-01-02" }]
        }])
    );
}

#[test]
fn test_hand_written_file_with_odd_values() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("habits.json");
    std::fs::write(
        &path,
        r#"[
  {"name": "Nap", "periodicity": "hourly", "task_spec": "", "completions": [{"date": "2024-01-01"}, {"date": "2024-01-02"}]}
]"#,
    )
    .unwrap();

    let loaded = JsonFileStorage::new(&path).load().expect("Failed to load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].periodicity().as_str(), "hourly");
    assert_eq!(calculate_streak(&loaded[0]), 1);
}

#[test]
fn test_malformed_date_fails_to_load() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("habits.json");
    std::fs::write(
        &path,
        r#"[{"name": "a", "periodicity": "daily", "task_spec": "", "created_at": "2024-01-01 00:00:00", "completions": [{"date": "tomorrow"}]}]"#,
    )
    .unwrap();

    let result = JsonFileStorage::new(&path).load();
    assert!(matches!(result, Err(StorageError::Serialization(_))));
}

#[test]
fn test_null_and_blank_created_at_do_not_block_loading() {
    let json = r#"[
  {"name": "Nulled", "periodicity": "daily", "task_spec": "", "created_at": null, "completions": []},
  {"name": "Blank", "periodicity": "weekly", "task_spec": "", "created_at": "", "completions": []},
  {"name": "Iso", "periodicity": "monthly", "task_spec": "", "created_at": "2024-01-01T09:00:00", "completions": []}
]"#;

    let loaded = read_habits(json.as_bytes()).expect("Failed to load");
    assert_eq!(list_all_habits(&HabitStore::from_habits(loaded.clone())), vec!["Nulled", "Blank", "Iso"]);
    assert_eq!(loaded[2].created_at_display(), "2024-01-01 09:00:00");
}
