use chrono::{NaiveTime, Timelike};
use tracing::info;
use uuid::Uuid;

use hydrate_core::reminder::{
    NotificationContext, Reminder, ReminderScheduler, ReminderSet,
};
use hydrate_core::{local_today, LedgerStore};

use crate::app::AppContext;
use crate::cli::RemindCommands;
use crate::errors::CliError;
use crate::output::{print_reminders, reminders_json};
use crate::ui::short_id;

/// Scheduler binding for the CLI: records schedule/cancel intents as
/// tracing events. Delivery mechanics belong to the platform layer.
struct TracingScheduler;

impl ReminderScheduler for TracingScheduler {
    fn schedule_daily(
        &mut self,
        reminder: &Reminder,
        context: Option<NotificationContext>,
    ) -> hydrate_core::Result<()> {
        info!(
            id = %reminder.id,
            time = %reminder.time_display(),
            percent = context.map(|c| c.percent_complete),
            "scheduling daily reminder trigger"
        );
        Ok(())
    }

    fn cancel(&mut self, id: Uuid) -> hydrate_core::Result<()> {
        info!(%id, "cancelling reminder trigger");
        Ok(())
    }
}

pub fn handle_remind(ctx: &AppContext, command: &RemindCommands) -> anyhow::Result<()> {
    match command {
        RemindCommands::Add { time, label } => handle_add(ctx, time, label),
        RemindCommands::List { json } => handle_list(ctx, *json),
        RemindCommands::Enable { id } => handle_set_enabled(ctx, id, true),
        RemindCommands::Disable { id } => handle_set_enabled(ctx, id, false),
        RemindCommands::Remove { id } => handle_remove(ctx, id),
    }
}

fn handle_add(ctx: &AppContext, time: &str, label: &str) -> anyhow::Result<()> {
    let (hour, minute) = parse_time(time)?;
    let reminder = Reminder::new(label, hour, minute)
        .map_err(|err| CliError::invalid_input(err.to_string()))?;

    let store = ctx.store()?;
    let mut reminders = store.load_reminders();

    let mut scheduler = TracingScheduler;
    scheduler.schedule_daily(&reminder, Some(progress_context(ctx)?))?;

    let id = reminder.id;
    let display_time = reminder.time_display();
    reminders.upsert(reminder);
    store.save_reminders(&reminders)?;

    if !ctx.quiet() {
        println!("Added reminder {} at {} ({})", short_id(&id), display_time, label);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let reminders = store.load_reminders();

    if json {
        let value = serde_json::Value::Array(reminders_json(&reminders));
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print_reminders(&reminders);
    }
    Ok(())
}

fn handle_set_enabled(ctx: &AppContext, id_prefix: &str, enabled: bool) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let mut reminders = store.load_reminders();
    let id = find_id(&reminders, id_prefix)?;

    let mut scheduler = TracingScheduler;
    if enabled {
        let context = progress_context(ctx)?;
        if let Some(reminder) = reminders.set_enabled(id, true) {
            scheduler.schedule_daily(reminder, Some(context))?;
        }
    } else {
        reminders.set_enabled(id, false);
        scheduler.cancel(id)?;
    }
    store.save_reminders(&reminders)?;

    if !ctx.quiet() {
        let verb = if enabled { "Enabled" } else { "Disabled" };
        println!("{} reminder {}", verb, short_id(&id));
    }
    Ok(())
}

fn handle_remove(ctx: &AppContext, id_prefix: &str) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let mut reminders = store.load_reminders();
    let id = find_id(&reminders, id_prefix)?;

    reminders.remove(id);
    let mut scheduler = TracingScheduler;
    scheduler.cancel(id)?;
    store.save_reminders(&reminders)?;

    if !ctx.quiet() {
        println!("Removed reminder {}", short_id(&id));
    }
    Ok(())
}

/// Percent-complete context for a freshly scheduled trigger.
///
/// Reads the ledger through the shared rollover so a stale counter does
/// not leak yesterday's percentage; nothing is persisted here.
fn progress_context(ctx: &AppContext) -> anyhow::Result<NotificationContext> {
    let store = ctx.store()?;
    let mut ledger = store.load_ledger();
    ledger.roll_if_new_day(local_today());
    Ok(NotificationContext {
        percent_complete: ledger.progress_percent(),
    })
}

fn parse_time(time: &str) -> Result<(u8, u8), CliError> {
    let parsed = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|_| CliError::invalid_input(format!("Invalid time \"{}\" (expected HH:MM)", time)))?;
    Ok((parsed.hour() as u8, parsed.minute() as u8))
}

fn find_id(reminders: &ReminderSet, prefix: &str) -> anyhow::Result<Uuid> {
    match reminders.find_by_prefix(prefix) {
        Ok(Some(reminder)) => Ok(reminder.id),
        Ok(None) => Err(CliError::not_found(
            format!("No reminder matching \"{}\"", prefix),
            "Hint: run `hydrate remind list` to see reminder ids.",
        )
        .into()),
        Err(err) => Err(CliError::invalid_input(err.to_string()).into()),
    }
}
