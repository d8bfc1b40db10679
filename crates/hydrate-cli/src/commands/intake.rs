use hydrate_core::{local_today, LedgerStore};

use crate::app::AppContext;
use crate::output::{print_status, status_json};
use crate::ui::UiContext;

use super::load_rolled;

pub fn handle_drink(ctx: &AppContext, amount: i64) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let mut ledger = store.load_ledger();
    ledger.add_intake(amount, local_today());
    store.save_ledger(&mut ledger)?;

    if !ctx.quiet() {
        let verb = if amount < 0 { "Removed" } else { "Logged" };
        println!("{} {} ml", verb, amount.unsigned_abs());
        print_status(&UiContext::from_env(), &ledger);
    }
    Ok(())
}

pub fn handle_status(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let (_store, ledger) = load_rolled(ctx)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status_json(&ledger))?);
    } else {
        print_status(&UiContext::from_env(), &ledger);
    }
    Ok(())
}

pub fn handle_reset(ctx: &AppContext) -> anyhow::Result<()> {
    let (store, mut ledger) = load_rolled(ctx)?;
    let today = local_today();
    let committed = ledger.current_intake;
    ledger.reset_intake(today);
    store.save_ledger(&mut ledger)?;

    if !ctx.quiet() {
        println!("Committed {} ml for {}. Counter reset.", committed, today);
    }
    Ok(())
}
