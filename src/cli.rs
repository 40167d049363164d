use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "nutricare",
    version,
    about = "Health metrics and nutrition calculator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,
}

/// Per-invocation overrides of the stored profile. Weight and height are read
/// in the configured unit system.
#[derive(Args, Debug, Default, Clone)]
pub struct ProfileArgs {
    /// Body weight
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height
    #[arg(long)]
    pub height: Option<f64>,

    /// Age in years (overrides birth_year)
    #[arg(long)]
    pub age: Option<u32>,

    /// male, female or other
    #[arg(long)]
    pub sex: Option<String>,

    /// sedentary, light, moderate, active, very_active
    #[arg(long)]
    pub activity: Option<String>,

    /// weight_loss, maintain, muscle_gain
    #[arg(long)]
    pub goal: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the profile config
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// BMI, BMR, TDEE, calorie target and the rest of the health summary
    Metrics {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Macro split for a calorie budget
    Macros {
        /// Daily calories (default: profile calorie target)
        #[arg(long)]
        calories: Option<f64>,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Calories burned by one exercise session
    Burn {
        /// Exercise name (e.g. running, yoga, jump_rope)
        exercise: String,

        /// Duration in minutes
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        minutes: u32,

        /// low, moderate, high, very_high
        #[arg(long, default_value = "moderate")]
        intensity: String,

        /// Body weight (default: profile weight)
        #[arg(long)]
        weight: Option<f64>,
    },

    /// List known exercises, or recommend some for the profile
    Exercises {
        /// Recommend exercises for the profile's BMI, sex and goal
        #[arg(long)]
        recommend: bool,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Nutrition of a meal, scaled by the eaten portion
    Meal {
        #[arg(long)]
        calories: f64,
        #[arg(long)]
        protein: f64,
        #[arg(long)]
        carbs: f64,
        #[arg(long)]
        fats: f64,
        #[arg(long)]
        fiber: Option<f64>,

        /// Percentage of the meal actually eaten (0-100)
        #[arg(long)]
        consumed: Option<f64>,
    },

    /// Compare a day's intake with targets
    Analyze {
        /// Consumed totals as CALORIES,PROTEIN,CARBS,FATS
        #[arg(long)]
        consumed: String,

        /// Targets as CALORIES,PROTEIN,CARBS,FATS (default: from profile)
        #[arg(long)]
        target: Option<String>,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Daily balance from a JSON day log ("-" reads stdin)
    Day {
        /// JSON object with meals, exercises, water_ml and steps
        #[arg(long)]
        input: String,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::Config { .. } => "config",
            Self::Metrics { .. } => "metrics",
            Self::Macros { .. } => "macros",
            Self::Burn { .. } => "burn",
            Self::Exercises { .. } => "exercises",
            Self::Meal { .. } => "meal",
            Self::Analyze { .. } => "analyze",
            Self::Day { .. } => "day",
            Self::Completions { .. } => "completions",
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (weight, height, birth_year, sex, activity, goal, units.system)
        key: String,
        /// Config value
        value: String,
    },
}
