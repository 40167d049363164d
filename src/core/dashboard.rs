use serde::{Deserialize, Serialize};

use super::nutrition::adjusted_nutrition;
use super::round2;
use crate::error::LogError;
use crate::models::exercise::ExerciseEvent;
use crate::models::nutrition::MealPortion;

/// Calorie goal used when the profile cannot produce one.
pub const DEFAULT_CALORIE_TARGET: f64 = 2000.0;
pub const WATER_GOAL_ML: u32 = 2000;
pub const STEPS_GOAL: u32 = 10_000;

/// One day of intake and activity, as supplied by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayLog {
    #[serde(default)]
    pub meals: Vec<MealPortion>,
    #[serde(default)]
    pub exercises: Vec<ExerciseEvent>,
    #[serde(default)]
    pub water_ml: u32,
    #[serde(default)]
    pub steps: u32,
}

impl DayLog {
    /// Check every meal and session before any totals are computed.
    pub fn validate(&self) -> Result<(), LogError> {
        for meal in &self.meals {
            meal.validate()?;
        }
        for session in &self.exercises {
            session.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyBalance {
    pub calories_consumed: f64,
    pub calories_burned: f64,
    pub net_calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calorie_target: f64,
    pub calorie_progress: f64,
    pub water_ml: u32,
    pub water_progress: f64,
    pub steps: u32,
    pub steps_progress: f64,
}

fn progress(value: f64, goal: f64) -> f64 {
    round2(value / goal * 100.0)
}

/// Totals for the day. Meals count only their consumed portion; exercise
/// calories use `weight_kg`.
pub fn daily_balance(log: &DayLog, weight_kg: f64, calorie_target: Option<f64>) -> DailyBalance {
    let eaten: Vec<_> = log
        .meals
        .iter()
        .map(|m| adjusted_nutrition(&m.nutrition, m.consumed_percentage))
        .collect();

    let consumed: f64 = eaten.iter().map(|n| n.calories).sum();
    let burned: f64 = log.exercises.iter().map(|e| e.calories_burned(weight_kg)).sum();
    let target = calorie_target
        .filter(|t| *t > 0.0)
        .unwrap_or(DEFAULT_CALORIE_TARGET);

    DailyBalance {
        calories_consumed: round2(consumed),
        calories_burned: round2(burned),
        net_calories: round2(consumed - burned),
        protein: round2(eaten.iter().map(|n| n.protein).sum()),
        carbs: round2(eaten.iter().map(|n| n.carbs).sum()),
        fats: round2(eaten.iter().map(|n| n.fats).sum()),
        calorie_target: target,
        calorie_progress: progress(consumed, target),
        water_ml: log.water_ml,
        water_progress: progress(f64::from(log.water_ml), f64::from(WATER_GOAL_ML)),
        steps: log.steps,
        steps_progress: progress(f64::from(log.steps), f64::from(STEPS_GOAL)),
    }
}
