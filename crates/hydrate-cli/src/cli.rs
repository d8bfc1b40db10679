use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use hydrate_core::VERSION;

/// Hydrate - track your daily water intake from the command line
#[derive(Parser)]
#[command(name = "hydrate")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct Cli {
    /// Directory holding the hydration data files
    #[arg(short, long, global = true, env = "HYDRATE_PATH")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log water intake in milliliters (negative amounts undo entries)
    Drink {
        /// Amount in milliliters
        #[arg(value_name = "ML", allow_negative_numbers = true)]
        amount: i64,
    },

    /// Show today's intake against the daily goal
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or set the daily goal in milliliters
    Goal {
        /// New goal; non-positive values reset to the default
        #[arg(value_name = "ML", allow_negative_numbers = true)]
        goal: Option<i64>,
    },

    /// Commit today's total to history and zero the counter
    Reset,

    /// Show the last seven days of intake
    Week {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute a personalized daily goal from weight and activity
    Onboard(OnboardArgs),

    /// Manage daily drink reminders
    Remind {
        #[command(subcommand)]
        command: RemindCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `onboard` command
#[derive(Args)]
pub struct OnboardArgs {
    /// Body weight, in the unit given by --unit
    #[arg(long)]
    pub weight: Option<f64>,

    /// Weight unit (kg or lbs)
    #[arg(long)]
    pub unit: Option<String>,

    /// Activity level (sedentary, light, moderate, active, very-active)
    #[arg(long)]
    pub activity: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

#[derive(Subcommand)]
pub enum RemindCommands {
    /// Add a daily reminder
    Add {
        /// Time of day (HH:MM, local time)
        #[arg(value_name = "TIME")]
        time: String,

        /// Reminder label
        #[arg(long, default_value = "Time to drink water")]
        label: String,
    },

    /// List reminders
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Enable a reminder and schedule its trigger
    Enable {
        /// Reminder id (or unique prefix)
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Disable a reminder and cancel its trigger
    Disable {
        /// Reminder id (or unique prefix)
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Remove a reminder
    Remove {
        /// Reminder id (or unique prefix)
        #[arg(value_name = "ID")]
        id: String,
    },
}
