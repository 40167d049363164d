use anyhow::Result;
use serde_json::json;

use crate::cli::ProfileArgs;
use nutricare::core::exercise;
use nutricare::core::metrics::{bmi_category, compute_bmi};
use nutricare::models::config::Config;
use nutricare::output::human;

pub fn run(recommend: bool, args: &ProfileArgs, human_flag: bool) -> Result<()> {
    if !recommend {
        let catalog = exercise::catalog();
        if human_flag {
            println!("{}", human::format_catalog(&catalog));
        } else {
            super::print_json("exercises", &json!({ "exercises": catalog }))?;
        }
        return Ok(());
    }

    let config = Config::load()?;
    let (body, activity) = super::resolve_profile(&config, args)?;
    let (Some(bmi), Some(sex)) = (
        body.weight_kg.zip(body.height_cm).and_then(|(w, h)| compute_bmi(w, h)),
        body.sex,
    ) else {
        anyhow::bail!("please complete your profile (height, weight, sex required)");
    };

    let category = bmi_category(Some(bmi));
    let picks = exercise::recommend_exercises(sex, bmi, activity.goal);

    if human_flag {
        println!("{}", human::format_recommendations(&picks, bmi, category));
    } else {
        super::print_json(
            "exercises",
            &json!({
                "recommended_exercises": picks,
                "based_on": {
                    "bmi": bmi,
                    "bmi_category": category,
                    "sex": sex,
                    "goal": activity.goal,
                }
            }),
        )?;
    }
    Ok(())
}
