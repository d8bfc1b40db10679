//! The hydration ledger: per-day intake state and rolling history.
//!
//! `HydrationLedger` tracks the running total for the active calendar day,
//! archives that total into a capped 30-day history when the day changes,
//! and answers the seven-day trend query. All date-dependent operations
//! take `today` as an explicit parameter so callers (and tests) control
//! the clock; `local_today` supplies the device-local calendar day.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default daily goal in milliliters, applied when no goal has been set
/// or a non-positive one is supplied.
pub const DEFAULT_DAILY_GOAL_ML: u32 = 2000;

/// Maximum number of per-day records kept in history.
pub const HISTORY_CAP: usize = 30;

/// Current calendar day in the device's local time zone.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// One finalized (or in-progress) intake total for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,

    /// Total intake for that day in milliliters.
    pub intake: u32,
}

/// One entry of the seven-day trend query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTotal {
    /// Calendar day this total belongs to.
    pub date: NaiveDate,

    /// Three-letter weekday abbreviation ("Mon", "Tue", ...).
    pub label: String,

    /// Intake in milliliters, zero when no record exists for the day.
    pub intake: u32,
}

/// The persisted hydration state.
///
/// Serialized as a single JSON document with camelCase keys, the stable
/// on-disk interface consumed by anything reading the snapshot directly.
///
/// Invariants:
/// - `daily_goal` is always positive.
/// - `daily_records` holds at most one record per date, sorted ascending,
///   capped at [`HISTORY_CAP`] entries with the oldest evicted first.
/// - `current_intake` always belongs to the day named by
///   `last_reset_date`; it is archived before any date change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HydrationLedger {
    /// Target milliliters per day.
    #[serde(default = "default_goal")]
    pub daily_goal: u32,

    /// Milliliters logged for the active day.
    #[serde(default)]
    pub current_intake: u32,

    /// Whether the one-time onboarding flow has completed.
    #[serde(default)]
    pub onboarding_completed: bool,

    /// The day `current_intake` applies to.
    #[serde(default = "local_today")]
    pub last_reset_date: NaiveDate,

    /// Rolling history of per-day totals.
    #[serde(default)]
    pub daily_records: Vec<DailyRecord>,
}

fn default_goal() -> u32 {
    DEFAULT_DAILY_GOAL_ML
}

impl HydrationLedger {
    /// Create a fresh ledger with defaults, anchored to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            daily_goal: DEFAULT_DAILY_GOAL_ML,
            current_intake: 0,
            onboarding_completed: false,
            last_reset_date: today,
            daily_records: Vec::new(),
        }
    }

    /// Restore the invariants on a snapshot of unknown provenance.
    ///
    /// Loaded files may have been hand-edited: a zero goal becomes the
    /// default, duplicate dates collapse to the latest value, and the
    /// history is re-sorted and re-capped.
    pub fn normalize(&mut self) {
        if self.daily_goal == 0 {
            self.daily_goal = DEFAULT_DAILY_GOAL_ML;
        }
        self.daily_records.sort_by_key(|record| record.date);
        self.daily_records.dedup_by(|later, earlier| {
            if earlier.date == later.date {
                earlier.intake = later.intake;
                true
            } else {
                false
            }
        });
        if self.daily_records.len() > HISTORY_CAP {
            let excess = self.daily_records.len() - HISTORY_CAP;
            self.daily_records.drain(..excess);
        }
    }

    /// Log `amount` milliliters for `today`; negative amounts undo
    /// earlier entries, with the running total clamped at zero.
    pub fn add_intake(&mut self, amount: i64, today: NaiveDate) {
        self.roll_if_new_day(today);
        let next = i64::from(self.current_intake).saturating_add(amount);
        self.current_intake = u32::try_from(next.max(0)).unwrap_or(u32::MAX);
    }

    /// Archive-then-roll when the calendar day has changed.
    ///
    /// If `today` differs from `last_reset_date`, the previous day's
    /// nonzero total is upserted into history, the counter zeroes, and
    /// the ledger adopts `today`. Returns whether a rollover happened.
    ///
    /// This is the single rollover implementation: both `add_intake` and
    /// the store's pre-save filter go through it. A `today` earlier than
    /// `last_reset_date` (clock moved backward) is unspecified and rolls
    /// over the same way.
    pub fn roll_if_new_day(&mut self, today: NaiveDate) -> bool {
        if self.last_reset_date == today {
            return false;
        }
        debug!(
            from = %self.last_reset_date,
            to = %today,
            archived = self.current_intake,
            "day rollover"
        );
        if self.current_intake > 0 {
            self.archive(self.last_reset_date, self.current_intake);
        }
        self.current_intake = 0;
        self.last_reset_date = today;
        true
    }

    /// Set the daily goal; non-positive values reset it to the default.
    pub fn set_daily_goal(&mut self, goal: i64) {
        self.daily_goal = u32::try_from(goal)
            .ok()
            .filter(|&goal| goal > 0)
            .unwrap_or(DEFAULT_DAILY_GOAL_ML);
    }

    /// Explicit day-end action: commit the current total as final for
    /// `today` (upsert, even when zero), then zero the counter.
    ///
    /// Unlike the rollover path this keys the record by `today`, not by
    /// `last_reset_date`.
    pub fn reset_intake(&mut self, today: NaiveDate) {
        self.archive(today, self.current_intake);
        self.current_intake = 0;
        self.last_reset_date = today;
    }

    /// Set the onboarding flag; no other side effects.
    pub fn set_onboarding_completed(&mut self, completed: bool) {
        self.onboarding_completed = completed;
    }

    /// The history record for `date`, if one exists.
    pub fn record_for(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.daily_records
            .binary_search_by(|record| record.date.cmp(&date))
            .ok()
            .map(|index| &self.daily_records[index])
    }

    /// The seven calendar days ending with `today`, oldest first.
    ///
    /// Always exactly seven entries; dates without a history record carry
    /// an intake of zero. Today's live counter is not consulted: only
    /// archived records count, so today reads zero until committed.
    pub fn weekly_data(&self, today: NaiveDate) -> Vec<DayTotal> {
        (0..7)
            .rev()
            .map(|back| {
                let date = today - Days::new(back);
                let intake = self.record_for(date).map_or(0, |record| record.intake);
                DayTotal {
                    date,
                    label: date.format("%a").to_string(),
                    intake,
                }
            })
            .collect()
    }

    /// Percent of the daily goal reached so far (may exceed 100).
    pub fn progress_percent(&self) -> u32 {
        let goal = u64::from(self.daily_goal.max(1));
        ((u64::from(self.current_intake) * 100) / goal) as u32
    }

    /// Upsert a history record for `date` and enforce the cap.
    ///
    /// The history stays sorted ascending by date, so enforcing the cap
    /// drains the chronologically oldest entries from the front. Every
    /// archiving path funnels through here, so cap enforcement has
    /// exactly one home.
    fn archive(&mut self, date: NaiveDate, intake: u32) {
        match self
            .daily_records
            .binary_search_by(|record| record.date.cmp(&date))
        {
            Ok(index) => self.daily_records[index].intake = intake,
            Err(index) => self.daily_records.insert(index, DailyRecord { date, intake }),
        }
        if self.daily_records.len() > HISTORY_CAP {
            let excess = self.daily_records.len() - HISTORY_CAP;
            self.daily_records.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
    }

    #[test]
    fn test_add_intake_accumulates_within_day() {
        let today = date("2024-01-01");
        let mut ledger = HydrationLedger::new(today);
        ledger.add_intake(250, today);
        ledger.add_intake(300, today);
        assert_eq!(ledger.current_intake, 550);
        assert_eq!(ledger.last_reset_date, today);
        assert!(ledger.daily_records.is_empty());
    }

    #[test]
    fn test_add_intake_clamps_at_zero() {
        let today = date("2024-01-01");
        let mut ledger = HydrationLedger::new(today);
        ledger.add_intake(250, today);
        ledger.add_intake(-1000, today);
        assert_eq!(ledger.current_intake, 0);
    }

    #[test]
    fn test_rollover_archives_previous_day() {
        let d1 = date("2024-01-01");
        let d2 = date("2024-01-02");
        let mut ledger = HydrationLedger::new(d1);
        ledger.current_intake = 1200;

        ledger.add_intake(300, d2);

        assert_eq!(ledger.current_intake, 300);
        assert_eq!(ledger.last_reset_date, d2);
        assert_eq!(
            ledger.record_for(d1),
            Some(&DailyRecord {
                date: d1,
                intake: 1200
            })
        );
    }

    #[test]
    fn test_rollover_skips_empty_previous_day() {
        let mut ledger = HydrationLedger::new(date("2024-01-01"));
        ledger.add_intake(500, date("2024-01-02"));
        assert_eq!(ledger.current_intake, 500);
        assert!(ledger.daily_records.is_empty());
    }

    #[test]
    fn test_rollover_negative_amount_starts_day_at_zero() {
        let mut ledger = HydrationLedger::new(date("2024-01-01"));
        ledger.current_intake = 800;
        ledger.add_intake(-100, date("2024-01-02"));
        assert_eq!(ledger.current_intake, 0);
        assert_eq!(ledger.record_for(date("2024-01-01")).unwrap().intake, 800);
    }

    #[test]
    fn test_rollover_overwrites_existing_record_for_same_date() {
        let d1 = date("2024-01-01");
        let mut ledger = HydrationLedger::new(d1);
        ledger.daily_records.push(DailyRecord {
            date: d1,
            intake: 100,
        });
        ledger.current_intake = 900;
        ledger.roll_if_new_day(date("2024-01-02"));
        assert_eq!(ledger.daily_records.len(), 1);
        assert_eq!(ledger.record_for(d1).unwrap().intake, 900);
    }

    #[test]
    fn test_history_cap_evicts_oldest() {
        let start = date("2024-01-01");
        let mut ledger = HydrationLedger::new(start);
        // Drink every day for 31 days; each new day archives the previous.
        for offset in 0..32 {
            ledger.add_intake(1000, start + Days::new(offset));
        }
        assert_eq!(ledger.daily_records.len(), HISTORY_CAP);
        // Day 0 fell off the front; day 1 is now the oldest.
        assert!(ledger.record_for(start).is_none());
        assert!(ledger.record_for(start + Days::new(1)).is_some());
        assert!(ledger
            .daily_records
            .windows(2)
            .all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn test_set_daily_goal_rejects_non_positive() {
        let mut ledger = HydrationLedger::new(date("2024-01-01"));
        ledger.set_daily_goal(3000);
        assert_eq!(ledger.daily_goal, 3000);
        ledger.set_daily_goal(0);
        assert_eq!(ledger.daily_goal, DEFAULT_DAILY_GOAL_ML);
        ledger.set_daily_goal(-50);
        assert_eq!(ledger.daily_goal, DEFAULT_DAILY_GOAL_ML);
    }

    #[test]
    fn test_reset_intake_commits_today() {
        let today = date("2024-01-01");
        let mut ledger = HydrationLedger::new(today);
        ledger.add_intake(1500, today);
        ledger.reset_intake(today);

        assert_eq!(ledger.current_intake, 0);
        assert_eq!(ledger.last_reset_date, today);
        assert_eq!(ledger.record_for(today).unwrap().intake, 1500);
    }

    #[test]
    fn test_reset_intake_twice_does_not_duplicate() {
        let today = date("2024-01-01");
        let mut ledger = HydrationLedger::new(today);
        ledger.add_intake(1500, today);
        ledger.reset_intake(today);
        ledger.reset_intake(today);

        assert_eq!(ledger.current_intake, 0);
        assert_eq!(ledger.daily_records.len(), 1);
    }

    #[test]
    fn test_weekly_data_is_seven_days_ascending() {
        let today = date("2024-01-10");
        let mut ledger = HydrationLedger::new(today);
        ledger.daily_records = vec![
            DailyRecord {
                date: date("2024-01-05"),
                intake: 1800,
            },
            DailyRecord {
                date: date("2024-01-09"),
                intake: 2100,
            },
        ];

        let week = ledger.weekly_data(today);

        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, date("2024-01-04"));
        assert_eq!(week[6].date, today);
        assert!(week.windows(2).all(|pair| pair[0].date < pair[1].date));
        assert_eq!(week[1].intake, 1800);
        assert_eq!(week[5].intake, 2100);
        assert_eq!(week[0].intake, 0);
    }

    #[test]
    fn test_weekly_data_ignores_live_total_until_committed() {
        let today = date("2024-01-10");
        let mut ledger = HydrationLedger::new(today);
        ledger.add_intake(650, today);

        assert_eq!(ledger.weekly_data(today)[6].intake, 0);

        ledger.reset_intake(today);
        assert_eq!(ledger.weekly_data(today)[6].intake, 650);
    }

    #[test]
    fn test_weekly_labels_are_weekday_abbreviations() {
        // 2024-01-01 was a Monday.
        let ledger = HydrationLedger::new(date("2024-01-07"));
        let week = ledger.weekly_data(date("2024-01-07"));
        let labels: Vec<&str> = week.iter().map(|day| day.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
    }

    #[test]
    fn test_progress_percent() {
        let mut ledger = HydrationLedger::new(date("2024-01-01"));
        ledger.set_daily_goal(2000);
        ledger.add_intake(500, date("2024-01-01"));
        assert_eq!(ledger.progress_percent(), 25);
        ledger.add_intake(2000, date("2024-01-01"));
        assert_eq!(ledger.progress_percent(), 125);
    }

    #[test]
    fn test_normalize_restores_invariants() {
        let mut ledger = HydrationLedger::new(date("2024-01-05"));
        ledger.daily_goal = 0;
        ledger.daily_records = vec![
            DailyRecord {
                date: date("2024-01-03"),
                intake: 900,
            },
            DailyRecord {
                date: date("2024-01-01"),
                intake: 500,
            },
            DailyRecord {
                date: date("2024-01-03"),
                intake: 1200,
            },
        ];

        ledger.normalize();

        assert_eq!(ledger.daily_goal, DEFAULT_DAILY_GOAL_ML);
        assert_eq!(ledger.daily_records.len(), 2);
        assert_eq!(ledger.daily_records[0].date, date("2024-01-01"));
        // The later duplicate wins.
        assert_eq!(ledger.record_for(date("2024-01-03")).unwrap().intake, 1200);
    }

    #[test]
    fn test_snapshot_round_trip_uses_camel_case() {
        let today = date("2024-01-01");
        let mut ledger = HydrationLedger::new(today);
        ledger.add_intake(750, today);
        ledger.set_daily_goal(2500);

        let json = serde_json::to_value(&ledger).expect("serialize");
        assert_eq!(json["dailyGoal"], 2500);
        assert_eq!(json["currentIntake"], 750);
        assert_eq!(json["lastResetDate"], "2024-01-01");

        let restored: HydrationLedger = serde_json::from_value(json).expect("deserialize");
        assert_eq!(restored.current_intake, ledger.current_intake);
        assert_eq!(restored.last_reset_date, ledger.last_reset_date);
    }
}
