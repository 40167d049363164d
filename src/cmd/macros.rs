use anyhow::Result;

use crate::cli::ProfileArgs;
use nutricare::core::macros::macro_split;
use nutricare::core::metrics::DerivedMetrics;
use nutricare::models::config::Config;
use nutricare::output::human;

pub fn run(calories: Option<f64>, args: &ProfileArgs, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let (body, activity) = super::resolve_profile(&config, args)?;

    let daily_calories = match calories {
        Some(c) if c > 0.0 => c,
        Some(c) => anyhow::bail!("calories must be positive: {}", c),
        None => DerivedMetrics::compute(&body, &activity)
            .daily_calorie_target
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "no calorie target: pass --calories or complete the profile (weight, height, birth_year, sex)"
                )
            })?,
    };

    let split = macro_split(daily_calories, activity.goal);
    if human_flag {
        println!("{}", human::format_macros(&split));
    } else {
        super::print_json("macros", &split)?;
    }
    Ok(())
}
