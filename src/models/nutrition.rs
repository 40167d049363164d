use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Nutrient content of a meal or food item.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    #[serde(default)]
    pub fiber: f64,
}

impl NutritionFacts {
    /// Every nutrient must be a finite, non-negative amount.
    pub fn validate(&self) -> Result<(), LogError> {
        let fields = [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fats", self.fats),
            ("fiber", self.fiber),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(LogError::NegativeNutrient { field, value });
            }
        }
        Ok(())
    }
}

/// Calories and the three macronutrients, used for consumed-vs-target
/// comparisons.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroTotals {
    pub fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fats,
        }
    }
}

impl From<NutritionFacts> for MacroTotals {
    fn from(n: NutritionFacts) -> Self {
        Self::new(n.calories, n.protein, n.carbs, n.fats)
    }
}

/// A logged meal: its full nutrition and how much of it was actually eaten.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MealPortion {
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
    #[serde(default)]
    pub consumed_percentage: Option<f64>,
}

impl MealPortion {
    pub fn validate(&self) -> Result<(), LogError> {
        self.nutrition.validate()?;
        match self.consumed_percentage {
            Some(pct) if !(0.0..=100.0).contains(&pct) => Err(LogError::PortionOutOfRange(pct)),
            _ => Ok(()),
        }
    }
}
