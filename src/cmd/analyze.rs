use anyhow::Result;

use crate::cli::ProfileArgs;
use nutricare::core::macros::macro_split;
use nutricare::core::metrics::DerivedMetrics;
use nutricare::core::nutrition::daily_nutrition_analysis;
use nutricare::models::MacroTotals;
use nutricare::models::config::Config;
use nutricare::output::human;

pub fn run(
    consumed: &str,
    target: Option<&str>,
    args: &ProfileArgs,
    human_flag: bool,
) -> Result<()> {
    let consumed = parse_totals(consumed)?;
    let target = match target {
        Some(t) => parse_totals(t)?,
        None => {
            let config = Config::load()?;
            let (body, activity) = super::resolve_profile(&config, args)?;
            let kcal = DerivedMetrics::compute(&body, &activity)
                .daily_calorie_target
                .ok_or_else(|| {
                    anyhow::anyhow!("no calorie target: pass --target or complete the profile")
                })?;
            let split = macro_split(kcal, activity.goal);
            MacroTotals::new(kcal, split.protein_g, split.carbs_g, split.fats_g)
        }
    };

    let analysis = daily_nutrition_analysis(&consumed, &target);
    if human_flag {
        println!("{}", human::format_analysis(&analysis));
    } else {
        super::print_json("analyze", &analysis)?;
    }
    Ok(())
}

/// Parse `CALORIES,PROTEIN,CARBS,FATS`.
fn parse_totals(input: &str) -> Result<MacroTotals> {
    let values: Vec<f64> = input
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .map_err(|_| anyhow::anyhow!("invalid number: {}", s.trim()))
        })
        .collect::<Result<_>>()?;

    match values.as_slice() {
        [calories, protein, carbs, fats] => Ok(MacroTotals::new(*calories, *protein, *carbs, *fats)),
        _ => anyhow::bail!(
            "expected CALORIES,PROTEIN,CARBS,FATS (4 values), got {}",
            values.len()
        ),
    }
}
