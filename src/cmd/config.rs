use anyhow::Result;
use serde_json::json;

use nutricare::core::metrics::DerivedMetrics;
use nutricare::models::config::Config;

pub fn run_show(human: bool) -> Result<()> {
    let config = Config::load()?;
    let path = Config::path();
    if human {
        println!("# {}", path.display());
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let age_years = config.profile.anthropometrics()?.age_years;
    super::print_json(
        "config",
        &json!({
            "path": path.display().to_string(),
            "config": config,
            "age_years": age_years,
        }),
    )
}

/// Store one profile value and report what it now derives.
pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let body = config.profile.anthropometrics()?;
    let metrics = DerivedMetrics::compute(&body, &config.profile.activity_profile());
    super::print_json(
        "config",
        &json!({
            "key": key,
            "value": value,
            "profile": config.profile,
            "daily_calorie_target": metrics.daily_calorie_target,
        }),
    )
}
