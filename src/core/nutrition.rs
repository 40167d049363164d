use serde::Serialize;

use super::round2;
use crate::models::nutrition::{MacroTotals, NutritionFacts};

/// Calorie difference beyond which a surplus or deficit is flagged.
pub const CALORIE_TOLERANCE_KCAL: f64 = 200.0;
/// Protein below this share of target is flagged.
pub const PROTEIN_MIN_PERCENT: f64 = 80.0;
/// Carbs or fats above this share of target are flagged.
pub const MACRO_MAX_PERCENT: f64 = 120.0;

/// Nutrition actually eaten from a meal.
///
/// With a consumed percentage every value is scaled and rounded to 2 dp.
/// Without one the values pass through untouched.
pub fn adjusted_nutrition(base: &NutritionFacts, consumed_percentage: Option<f64>) -> NutritionFacts {
    let Some(pct) = consumed_percentage else {
        return *base;
    };
    let factor = pct / 100.0;
    NutritionFacts {
        calories: round2(base.calories * factor),
        protein: round2(base.protein * factor),
        carbs: round2(base.carbs * factor),
        fats: round2(base.fats * factor),
        fiber: round2(base.fiber * factor),
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    CalorieSurplus,
    CalorieDeficit,
    ProteinLow,
    CarbsHigh,
    FatHigh,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::CalorieSurplus => "Calories are over target; increase physical activity.",
            Self::CalorieDeficit => "Calories are under target; add a healthy snack.",
            Self::ProteinLow => "Protein intake is too low; add more protein sources.",
            Self::CarbsHigh => "Carbohydrates are too high; cut back on simple carbs.",
            Self::FatHigh => "Fat intake is too high; prefer healthy fats.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationEntry {
    pub code: Recommendation,
    pub message: &'static str,
}

impl From<Recommendation> for RecommendationEntry {
    fn from(code: Recommendation) -> Self {
        Self {
            code,
            message: code.message(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NutritionAnalysis {
    pub consumed: MacroTotals,
    pub target: MacroTotals,
    pub difference: MacroTotals,
    pub percentage: MacroTotals,
    pub recommendations: Vec<RecommendationEntry>,
}

/// `consumed / target × 100`, or 0 for a zero target.
fn percent_of(consumed: f64, target: f64) -> f64 {
    if target > 0.0 {
        consumed / target * 100.0
    } else {
        0.0
    }
}

/// Compare a day's intake with its targets and flag what is off.
///
/// Flags come out in a fixed order: calories, protein, carbs, fats.
pub fn daily_nutrition_analysis(consumed: &MacroTotals, target: &MacroTotals) -> NutritionAnalysis {
    let calorie_diff = consumed.calories - target.calories;
    let protein_pct = percent_of(consumed.protein, target.protein);
    let carbs_pct = percent_of(consumed.carbs, target.carbs);
    let fats_pct = percent_of(consumed.fats, target.fats);

    let mut flags = Vec::new();
    if calorie_diff > CALORIE_TOLERANCE_KCAL {
        flags.push(Recommendation::CalorieSurplus);
    } else if calorie_diff < -CALORIE_TOLERANCE_KCAL {
        flags.push(Recommendation::CalorieDeficit);
    }
    if protein_pct < PROTEIN_MIN_PERCENT {
        flags.push(Recommendation::ProteinLow);
    }
    if carbs_pct > MACRO_MAX_PERCENT {
        flags.push(Recommendation::CarbsHigh);
    }
    if fats_pct > MACRO_MAX_PERCENT {
        flags.push(Recommendation::FatHigh);
    }

    NutritionAnalysis {
        consumed: *consumed,
        target: *target,
        difference: MacroTotals::new(
            round2(calorie_diff),
            round2(consumed.protein - target.protein),
            round2(consumed.carbs - target.carbs),
            round2(consumed.fats - target.fats),
        ),
        percentage: MacroTotals::new(
            round2(percent_of(consumed.calories, target.calories)),
            round2(protein_pct),
            round2(carbs_pct),
            round2(fats_pct),
        ),
        recommendations: flags.into_iter().map(RecommendationEntry::from).collect(),
    }
}
