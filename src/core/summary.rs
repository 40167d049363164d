use serde::Serialize;

use super::macros::{MacroSplit, macro_split};
use super::metrics::{DerivedMetrics, estimate_body_fat_percentage, water_intake_recommendation};
use crate::models::profile::{ActivityProfile, Anthropometrics};

#[derive(Debug, Clone, Serialize)]
pub struct HealthSummary {
    pub body: Anthropometrics,
    pub activity: ActivityProfile,
    pub metrics: DerivedMetrics,
    pub macros: Option<MacroSplit>,
    pub water_ml: Option<u32>,
    pub body_fat_percentage: Option<f64>,
}

/// Everything the engine can say about one profile.
pub fn summarize(body: &Anthropometrics, activity: &ActivityProfile) -> HealthSummary {
    let metrics = DerivedMetrics::compute(body, activity);

    let macros = metrics
        .daily_calorie_target
        .map(|kcal| macro_split(kcal, activity.goal));
    let water_ml = body.weight_kg.map(water_intake_recommendation);
    let body_fat_percentage = match (metrics.bmi, body.age_years, body.sex) {
        (Some(bmi), Some(age), Some(sex)) => Some(estimate_body_fat_percentage(bmi, age, sex)),
        _ => None,
    };

    HealthSummary {
        body: *body,
        activity: *activity,
        metrics,
        macros,
        water_ml,
        body_fat_percentage,
    }
}
