//! Text and table output formatting.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use owo_colors::OwoColorize;

use hydrate_core::reminder::ReminderSet;
use hydrate_core::{DayTotal, HydrationLedger};

use crate::ui::{format_ml, progress_bar, short_id, UiContext};

const BAR_WIDTH: usize = 20;

/// Print today's intake, goal, and progress bar.
pub fn print_status(ctx: &UiContext, ledger: &HydrationLedger) {
    let percent = ledger.progress_percent();
    let bar = progress_bar(percent, BAR_WIDTH);
    let bar = if ctx.color {
        if percent >= 100 {
            bar.green().to_string()
        } else {
            bar.cyan().to_string()
        }
    } else {
        bar
    };

    println!(
        "{} {} / {} ({}%)",
        bar,
        format_ml(ledger.current_intake),
        format_ml(ledger.daily_goal),
        percent
    );

    if !ledger.onboarding_completed {
        println!("Hint: run `hydrate onboard` to personalize your daily goal.");
    }
}

/// Print the seven-day trend table.
pub fn print_week(ledger: &HydrationLedger, week: &[DayTotal]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Day", "Date", "Intake", "Goal"]);

    for day in week {
        let percent = day_percent(day.intake, ledger.daily_goal);
        table.add_row(vec![
            day.label.clone(),
            day.date.to_string(),
            format_ml(day.intake),
            format!("{} {}%", progress_bar(percent, 10), percent),
        ]);
    }

    println!("{table}");
}

/// Print the reminder table, or a hint when none exist.
pub fn print_reminders(reminders: &ReminderSet) {
    if reminders.is_empty() {
        println!("No reminders. Add one with `hydrate remind add 08:30`.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Id", "Time", "Label", "Enabled"]);

    for reminder in reminders.iter() {
        table.add_row(vec![
            short_id(&reminder.id),
            reminder.time_display(),
            reminder.label.clone(),
            if reminder.enabled { "yes" } else { "no" }.to_string(),
        ]);
    }

    println!("{table}");
}

fn day_percent(intake: u32, goal: u32) -> u32 {
    ((u64::from(intake) * 100) / u64::from(goal.max(1))) as u32
}
