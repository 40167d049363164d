use anyhow::Result;
use serde_json::json;

use nutricare::core::nutrition::adjusted_nutrition;
use nutricare::models::{MealPortion, NutritionFacts};
use nutricare::output::human;

pub fn run(base: NutritionFacts, consumed: Option<f64>, human_flag: bool) -> Result<()> {
    MealPortion {
        nutrition: base,
        consumed_percentage: consumed,
    }
    .validate()?;

    let eaten = adjusted_nutrition(&base, consumed);
    if human_flag {
        println!("{}", human::format_nutrition(&eaten));
    } else {
        super::print_json(
            "meal",
            &json!({
                "base": base,
                "consumed_percentage": consumed,
                "adjusted": eaten,
            }),
        )?;
    }
    Ok(())
}
