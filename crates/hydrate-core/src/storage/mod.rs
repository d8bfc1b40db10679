//! Persistence for the hydration snapshot and reminder records.
//!
//! The [`LedgerStore`] trait is the seam between the domain model and
//! whatever key-value storage the platform provides; [`JsonFileStore`]
//! is the file-backed implementation used by the CLI.

mod json_file;

pub use json_file::JsonFileStore;

use crate::error::Result;
use crate::ledger::HydrationLedger;
use crate::reminder::ReminderSet;

/// Storage interface for the persisted hydration state.
///
/// All implementations must ensure:
/// - Loading never fails: a missing or unreadable snapshot yields a
///   fresh default ledger, and loaded snapshots are normalized so the
///   ledger invariants hold.
/// - Saving applies the day-boundary filter before writing, so a day
///   crossed purely by wall-clock time is still archived.
/// - Writes replace the previous snapshot atomically.
pub trait LedgerStore {
    /// Load the persisted ledger, falling back to defaults.
    fn load_ledger(&self) -> HydrationLedger;

    /// Persist the ledger.
    ///
    /// Rolls the in-memory ledger over first when the local calendar day
    /// has changed since `last_reset_date`, so memory and disk cannot
    /// diverge.
    ///
    /// # Errors
    ///
    /// Returns `HydrateError::Storage` when the snapshot cannot be
    /// written. In-memory state is already updated; a later save retries
    /// implicitly.
    fn save_ledger(&self, ledger: &mut HydrationLedger) -> Result<()>;

    /// Load the persisted reminder records, falling back to an empty set.
    fn load_reminders(&self) -> ReminderSet;

    /// Persist the reminder records.
    ///
    /// # Errors
    ///
    /// Returns `HydrateError::Storage` when the records cannot be
    /// written.
    fn save_reminders(&self, reminders: &ReminderSet) -> Result<()>;
}
