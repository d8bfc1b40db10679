//! JSON output formatting.

use hydrate_core::reminder::ReminderSet;
use hydrate_core::{DayTotal, HydrationLedger};

/// Today's status as JSON.
pub fn status_json(ledger: &HydrationLedger) -> serde_json::Value {
    serde_json::json!({
        "date": ledger.last_reset_date.to_string(),
        "current_intake": ledger.current_intake,
        "daily_goal": ledger.daily_goal,
        "percent": ledger.progress_percent(),
        "onboarding_completed": ledger.onboarding_completed,
    })
}

/// The seven-day trend as a JSON array.
///
/// Each entry carries `date`, `label`, and `value` (intake in ml, zero
/// for days without history).
pub fn week_json(week: &[DayTotal]) -> Vec<serde_json::Value> {
    week.iter()
        .map(|day| {
            serde_json::json!({
                "date": day.date.to_string(),
                "label": day.label,
                "value": day.intake,
            })
        })
        .collect()
}

/// Reminder records as a JSON array.
pub fn reminders_json(reminders: &ReminderSet) -> Vec<serde_json::Value> {
    reminders
        .iter()
        .map(|reminder| {
            serde_json::json!({
                "id": reminder.id,
                "label": reminder.label,
                "time": reminder.time_display(),
                "enabled": reminder.enabled,
            })
        })
        .collect()
}
