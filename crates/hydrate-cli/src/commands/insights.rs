use hydrate_core::local_today;

use crate::app::AppContext;
use crate::output::{print_week, week_json};

use super::load_rolled;

pub fn handle_week(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let (_store, ledger) = load_rolled(ctx)?;
    let week = ledger.weekly_data(local_today());

    if json {
        let value = serde_json::Value::Array(week_json(&week));
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print_week(&ledger, &week);
    }
    Ok(())
}
