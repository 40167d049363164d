pub mod analyze;
pub mod burn;
pub mod config;
pub mod day;
pub mod exercises;
pub mod init;
pub mod macros;
pub mod meal;
pub mod metrics;

use anyhow::Result;

use crate::cli::ProfileArgs;
use nutricare::core::units::{self, Quantity};
use nutricare::models::config::Config;
use nutricare::models::{ActivityLevel, ActivityProfile, Anthropometrics, Goal};

/// Stored profile with command-line overrides applied, validated.
pub fn resolve_profile(
    config: &Config,
    args: &ProfileArgs,
) -> Result<(Anthropometrics, ActivityProfile)> {
    let mut body = config.profile.anthropometrics()?;
    let mut activity = config.profile.activity_profile();

    if let Some(w) = args.weight {
        body.weight_kg = Some(units::from_input(w, Quantity::Weight, config.units.system));
    }
    if let Some(h) = args.height {
        body.height_cm = Some(units::from_input(h, Quantity::Height, config.units.system));
    }
    if let Some(a) = args.age {
        body.age_years = Some(a);
    }
    if let Some(ref s) = args.sex {
        body.sex = Some(s.parse()?);
    }
    if let Some(ref a) = args.activity {
        activity.activity_level = ActivityLevel::parse_lenient(a);
    }
    if let Some(ref g) = args.goal {
        activity.goal = Goal::parse_lenient(g);
    }

    body.validate()?;
    tracing::debug!(?body, ?activity, "resolved profile");
    Ok((body, activity))
}

/// Print a serializable result as the JSON envelope.
pub fn print_json<T: serde::Serialize>(command: &str, data: &T) -> Result<()> {
    println!(
        "{}",
        nutricare::output::success(command, serde_json::to_value(data)?)
    );
    Ok(())
}
