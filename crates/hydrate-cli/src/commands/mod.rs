//! Command handlers for the Hydrate CLI.

mod goal;
mod insights;
mod intake;
mod misc;
mod remind;

// Re-export public API
pub use goal::{handle_goal, handle_onboard};
pub use insights::handle_week;
pub use intake::{handle_drink, handle_reset, handle_status};
pub use misc::handle_completions;
pub use remind::handle_remind;

use hydrate_core::{local_today, HydrationLedger, JsonFileStore, LedgerStore};
use tracing::warn;

use crate::app::AppContext;

/// Load the ledger, capturing a day boundary crossed since the last run.
///
/// A rollover observed at read time is persisted immediately so the
/// snapshot on disk agrees with what gets displayed; a failed write is
/// logged and retried implicitly by the next mutation.
pub(crate) fn load_rolled(ctx: &AppContext) -> anyhow::Result<(JsonFileStore, HydrationLedger)> {
    let store = ctx.store()?;
    let mut ledger = store.load_ledger();
    if ledger.roll_if_new_day(local_today()) {
        if let Err(err) = store.save_ledger(&mut ledger) {
            warn!(%err, "could not persist day rollover");
        }
    }
    Ok((store, ledger))
}
