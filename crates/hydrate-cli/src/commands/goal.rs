use dialoguer::{Input, Select};

use hydrate_core::goal::{recommended_goal_ml, ActivityLevel, WeightUnit};
use hydrate_core::{LedgerStore, DEFAULT_DAILY_GOAL_ML};

use crate::app::AppContext;
use crate::cli::OnboardArgs;
use crate::errors::CliError;
use crate::ui::format_ml;

use super::load_rolled;

pub fn handle_goal(ctx: &AppContext, goal: Option<i64>) -> anyhow::Result<()> {
    match goal {
        None => {
            let store = ctx.store()?;
            let ledger = store.load_ledger();
            println!("Daily goal: {}", format_ml(ledger.daily_goal));
            Ok(())
        }
        Some(value) => {
            let (store, mut ledger) = load_rolled(ctx)?;
            ledger.set_daily_goal(value);
            store.save_ledger(&mut ledger)?;

            if !ctx.quiet() {
                if value <= 0 {
                    println!(
                        "Non-positive goal; reset to the default {}.",
                        format_ml(DEFAULT_DAILY_GOAL_ML)
                    );
                } else {
                    println!("Daily goal set to {}.", format_ml(ledger.daily_goal));
                }
            }
            Ok(())
        }
    }
}

pub fn handle_onboard(ctx: &AppContext, args: &OnboardArgs) -> anyhow::Result<()> {
    let weight = resolve_weight(args)?;
    let unit = resolve_unit(args)?;
    let activity = resolve_activity(args)?;

    let goal_ml = recommended_goal_ml(weight, unit, activity)
        .map_err(|err| CliError::invalid_input(err.to_string()))?;

    let (store, mut ledger) = load_rolled(ctx)?;
    ledger.set_daily_goal(i64::from(goal_ml));
    ledger.set_onboarding_completed(true);
    store.save_ledger(&mut ledger)?;

    if !ctx.quiet() {
        println!(
            "Recommended daily goal for {} {} ({} activity): {} ml",
            weight, unit, activity, goal_ml
        );
        println!("Onboarding complete. Log your first glass with `hydrate drink 250`.");
    }
    Ok(())
}

fn resolve_weight(args: &OnboardArgs) -> anyhow::Result<f64> {
    if let Some(weight) = args.weight {
        return Ok(weight);
    }
    if args.no_input {
        return Err(CliError::invalid_input("--weight is required with --no-input").into());
    }
    Ok(Input::<f64>::new()
        .with_prompt("Body weight")
        .interact_text()?)
}

fn resolve_unit(args: &OnboardArgs) -> anyhow::Result<WeightUnit> {
    if let Some(unit) = &args.unit {
        return unit
            .parse()
            .map_err(|err: hydrate_core::HydrateError| CliError::invalid_input(err.to_string()).into());
    }
    if args.no_input {
        return Ok(WeightUnit::Kg);
    }
    let choice = Select::new()
        .with_prompt("Weight unit")
        .items(&["kg", "lbs"])
        .default(0)
        .interact()?;
    Ok(if choice == 0 {
        WeightUnit::Kg
    } else {
        WeightUnit::Lbs
    })
}

fn resolve_activity(args: &OnboardArgs) -> anyhow::Result<ActivityLevel> {
    if let Some(activity) = &args.activity {
        return activity
            .parse()
            .map_err(|err: hydrate_core::HydrateError| CliError::invalid_input(err.to_string()).into());
    }
    if args.no_input {
        return Ok(ActivityLevel::Sedentary);
    }
    let items: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| format!("{} ({})", level, level.description()))
        .collect();
    let choice = Select::new()
        .with_prompt("Activity level")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(ActivityLevel::ALL[choice])
}
