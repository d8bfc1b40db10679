//! Integration tests for the JSON snapshot store: round-trips, the
//! pre-save day-boundary filter, and reminder persistence.

use chrono::NaiveDate;
use tempfile::tempdir;

use hydrate_core::ledger::DailyRecord;
use hydrate_core::reminder::Reminder;
use hydrate_core::{HydrationLedger, JsonFileStore, LedgerStore};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

#[test]
fn ledger_round_trip() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path());

    let today = date("2024-03-10");
    let mut ledger = HydrationLedger::new(today);
    ledger.set_daily_goal(2500);
    ledger.add_intake(750, today);
    ledger.set_onboarding_completed(true);
    ledger.daily_records = vec![DailyRecord {
        date: date("2024-03-09"),
        intake: 1900,
    }];

    store.save_ledger_at(&mut ledger, today).expect("save");
    let restored = store.load_ledger();

    assert_eq!(restored.daily_goal, 2500);
    assert_eq!(restored.current_intake, 750);
    assert!(restored.onboarding_completed);
    assert_eq!(restored.last_reset_date, today);
    assert_eq!(restored.daily_records, ledger.daily_records);
}

#[test]
fn pre_save_filter_archives_stale_day() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path());

    // Left open overnight: intake belongs to yesterday, no mutation since.
    let yesterday = date("2024-03-09");
    let today = date("2024-03-10");
    let mut ledger = HydrationLedger::new(yesterday);
    ledger.add_intake(1400, yesterday);

    store.save_ledger_at(&mut ledger, today).expect("save");

    // The in-memory ledger rolled over...
    assert_eq!(ledger.current_intake, 0);
    assert_eq!(ledger.last_reset_date, today);

    // ...and the written snapshot agrees.
    let restored = store.load_ledger();
    assert_eq!(restored.current_intake, 0);
    assert_eq!(restored.last_reset_date, today);
    assert_eq!(restored.daily_records.len(), 1);
    assert_eq!(restored.daily_records[0].date, yesterday);
    assert_eq!(restored.daily_records[0].intake, 1400);
}

#[test]
fn pre_save_filter_is_a_no_op_same_day() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path());

    let today = date("2024-03-10");
    let mut ledger = HydrationLedger::new(today);
    ledger.add_intake(600, today);

    store.save_ledger_at(&mut ledger, today).expect("save");

    assert_eq!(ledger.current_intake, 600);
    assert!(ledger.daily_records.is_empty());
}

#[test]
fn hand_edited_snapshot_is_normalized_on_load() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("hydration.json"),
        r#"{
            "dailyGoal": 0,
            "currentIntake": 300,
            "onboardingCompleted": true,
            "lastResetDate": "2024-03-10",
            "dailyRecords": [
                { "date": "2024-03-08", "intake": 1000 },
                { "date": "2024-03-07", "intake": 900 },
                { "date": "2024-03-08", "intake": 1600 }
            ]
        }"#,
    )
    .expect("write snapshot");

    let store = JsonFileStore::new(dir.path());
    let ledger = store.load_ledger();

    assert_eq!(ledger.daily_goal, hydrate_core::DEFAULT_DAILY_GOAL_ML);
    assert_eq!(ledger.daily_records.len(), 2);
    assert_eq!(ledger.daily_records[0].date, date("2024-03-07"));
    assert_eq!(ledger.daily_records[1].intake, 1600);
}

#[test]
fn partial_snapshot_fills_defaults() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("hydration.json"),
        r#"{ "currentIntake": 450, "lastResetDate": "2024-03-10" }"#,
    )
    .expect("write snapshot");

    let store = JsonFileStore::new(dir.path());
    let ledger = store.load_ledger();

    assert_eq!(ledger.current_intake, 450);
    assert_eq!(ledger.daily_goal, hydrate_core::DEFAULT_DAILY_GOAL_ML);
    assert!(!ledger.onboarding_completed);
    assert!(ledger.daily_records.is_empty());
}

#[test]
fn reminders_round_trip() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path());

    let mut reminders = store.load_reminders();
    assert!(reminders.is_empty());

    let reminder = Reminder::new("morning glass", 8, 30).expect("reminder");
    let id = reminder.id;
    reminders.upsert(reminder);
    reminders.upsert(Reminder::new("afternoon", 15, 0).expect("reminder"));
    store.save_reminders(&reminders).expect("save");

    let restored = store.load_reminders();
    assert_eq!(restored.len(), 2);
    let morning = restored.get(id).expect("reminder survives");
    assert_eq!(morning.label, "morning glass");
    assert_eq!(morning.time_display(), "08:30");
    assert!(morning.enabled);
}
