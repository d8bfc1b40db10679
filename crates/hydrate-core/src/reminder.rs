//! Daily reminder records and the notification-scheduling seam.
//!
//! Reminders are simple flagged records persisted alongside the ledger.
//! Actual delivery belongs to a platform collaborator behind
//! [`ReminderScheduler`]; the core only supplies the trigger time and an
//! optional percent-complete context value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{HydrateError, Result};

/// A repeating daily reminder at a fixed local time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable identifier handed to the scheduler for later cancellation.
    pub id: Uuid,

    /// User-facing label shown in the notification.
    pub label: String,

    /// Hour of day, 0-23.
    pub hour: u8,

    /// Minute of hour, 0-59.
    pub minute: u8,

    /// Whether the trigger is currently scheduled.
    pub enabled: bool,
}

impl Reminder {
    /// Create an enabled reminder with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `HydrateError::InvalidInput` when the time of day is out
    /// of range.
    pub fn new(label: impl Into<String>, hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(HydrateError::InvalidInput(format!(
                "Invalid time of day: {:02}:{:02}",
                hour, minute
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            label: label.into(),
            hour,
            minute,
            enabled: true,
        })
    }

    /// Time of day as `HH:MM`.
    pub fn time_display(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// The persisted collection of reminder records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderSet {
    reminders: Vec<Reminder>,
}

impl ReminderSet {
    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    /// Reminders in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Reminder> + '_ {
        self.reminders.iter()
    }

    /// Insert a reminder, replacing any existing record with the same id.
    pub fn upsert(&mut self, reminder: Reminder) {
        match self.reminders.iter_mut().find(|r| r.id == reminder.id) {
            Some(existing) => *existing = reminder,
            None => self.reminders.push(reminder),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }

    /// Find a reminder whose id string starts with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns `HydrateError::InvalidInput` when the prefix matches more
    /// than one reminder.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Option<&Reminder>> {
        let prefix = prefix.trim().to_ascii_lowercase();
        let mut matches = self
            .reminders
            .iter()
            .filter(|r| r.id.to_string().starts_with(&prefix));
        let first = matches.next();
        if matches.next().is_some() {
            return Err(HydrateError::InvalidInput(format!(
                "Reminder id prefix \"{}\" is ambiguous",
                prefix
            )));
        }
        Ok(first)
    }

    /// Flip the enabled flag. Returns the updated reminder, or `None`
    /// when the id is unknown.
    pub fn set_enabled(&mut self, id: Uuid, enabled: bool) -> Option<&Reminder> {
        let reminder = self.reminders.iter_mut().find(|r| r.id == id)?;
        reminder.enabled = enabled;
        Some(reminder)
    }

    /// Remove a reminder by id.
    pub fn remove(&mut self, id: Uuid) -> Option<Reminder> {
        let index = self.reminders.iter().position(|r| r.id == id)?;
        Some(self.reminders.remove(index))
    }
}

/// Optional context attached to a scheduled trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotificationContext {
    /// Percent of the daily goal reached when the trigger was scheduled.
    pub percent_complete: u32,
}

/// Collaborator that owns notification delivery.
///
/// Implementations register or cancel a repeating daily trigger keyed by
/// the reminder's stable id. The core never inspects scheduling state;
/// failures surface as `HydrateError::Scheduler`.
pub trait ReminderScheduler {
    /// Schedule (or reschedule) the daily trigger for `reminder`.
    fn schedule_daily(
        &mut self,
        reminder: &Reminder,
        context: Option<NotificationContext>,
    ) -> Result<()>;

    /// Cancel the trigger identified by `id`, if one is registered.
    fn cancel(&mut self, id: Uuid) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_time_of_day() {
        assert!(Reminder::new("morning", 8, 30).is_ok());
        assert!(Reminder::new("bad", 24, 0).is_err());
        assert!(Reminder::new("bad", 12, 60).is_err());
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let mut set = ReminderSet::default();
        let reminder = Reminder::new("morning", 8, 0).unwrap();
        let id = reminder.id;
        set.upsert(reminder.clone());

        let mut updated = reminder;
        updated.minute = 30;
        set.upsert(updated);

        assert_eq!(set.len(), 1);
        assert_eq!(set.get(id).unwrap().minute, 30);
    }

    #[test]
    fn test_set_enabled_flips_only_the_flag() {
        let mut set = ReminderSet::default();
        let reminder = Reminder::new("lunch", 12, 15).unwrap();
        let id = reminder.id;
        set.upsert(reminder);

        let updated = set.set_enabled(id, false).unwrap();
        assert!(!updated.enabled);
        assert_eq!(updated.hour, 12);
        assert_eq!(updated.minute, 15);

        assert!(set.set_enabled(Uuid::new_v4(), true).is_none());
    }

    #[test]
    fn test_remove() {
        let mut set = ReminderSet::default();
        let reminder = Reminder::new("evening", 20, 0).unwrap();
        let id = reminder.id;
        set.upsert(reminder);

        assert!(set.remove(id).is_some());
        assert!(set.is_empty());
        assert!(set.remove(id).is_none());
    }

    #[test]
    fn test_find_by_prefix() {
        let mut set = ReminderSet::default();
        let reminder = Reminder::new("morning", 8, 0).unwrap();
        let id = reminder.id;
        set.upsert(reminder);

        let prefix = &id.to_string()[..8];
        assert_eq!(set.find_by_prefix(prefix).unwrap().unwrap().id, id);
        assert!(set.find_by_prefix("zzzzzzzz").unwrap().is_none());
    }
}
