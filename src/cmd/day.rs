use anyhow::{Context, Result};
use serde_json::json;
use std::io::Read;

use crate::cli::ProfileArgs;
use nutricare::core::dashboard::{DayLog, daily_balance};
use nutricare::core::exercise::summarize_sessions;
use nutricare::core::metrics::DerivedMetrics;
use nutricare::models::config::Config;
use nutricare::output::human;

pub fn run(input: &str, args: &ProfileArgs, human_flag: bool) -> Result<()> {
    let raw = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        input.to_string()
    };
    let log: DayLog = serde_json::from_str(&raw).context("invalid day log JSON")?;
    log.validate()?;

    let config = Config::load()?;
    let (body, activity) = super::resolve_profile(&config, args)?;
    let weight_kg = match body.weight_kg {
        Some(w) => w,
        None if log.exercises.is_empty() => 0.0,
        None => anyhow::bail!("exercise calories need a weight: pass --weight or set it in config"),
    };
    let target = DerivedMetrics::compute(&body, &activity).daily_calorie_target;

    let balance = daily_balance(&log, weight_kg, target);
    let exercise = summarize_sessions(&log.exercises, weight_kg);

    if human_flag {
        println!("{}", human::format_balance(&balance));
    } else {
        super::print_json("day", &json!({ "balance": balance, "exercise": exercise }))?;
    }
    Ok(())
}
