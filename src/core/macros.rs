use serde::Serialize;

use super::round2;
use crate::models::profile::Goal;

/// Atwater energy densities (kcal per gram).
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Share of daily calories per macronutrient, in whole percent.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MacroPercentages {
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MacroSplit {
    pub daily_calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    pub percentages: MacroPercentages,
}

impl MacroSplit {
    /// Energy of the rounded gram amounts, back in kcal.
    pub fn total_kcal(&self) -> f64 {
        self.protein_g * KCAL_PER_G_PROTEIN
            + self.carbs_g * KCAL_PER_G_CARBS
            + self.fats_g * KCAL_PER_G_FAT
    }
}

pub fn macro_percentages(goal: Goal) -> MacroPercentages {
    match goal {
        Goal::WeightLoss => MacroPercentages {
            protein: 30,
            carbs: 40,
            fats: 30,
        },
        Goal::MuscleGain => MacroPercentages {
            protein: 30,
            carbs: 45,
            fats: 25,
        },
        Goal::Maintain | Goal::Unknown => MacroPercentages {
            protein: 25,
            carbs: 45,
            fats: 30,
        },
    }
}

/// Split a calorie budget into protein, carbohydrate and fat grams.
pub fn macro_split(daily_calories: f64, goal: Goal) -> MacroSplit {
    let pct = macro_percentages(goal);
    let kcal = |share: u32| daily_calories * f64::from(share) / 100.0;

    MacroSplit {
        daily_calories,
        protein_g: round2(kcal(pct.protein) / KCAL_PER_G_PROTEIN),
        carbs_g: round2(kcal(pct.carbs) / KCAL_PER_G_CARBS),
        fats_g: round2(kcal(pct.fats) / KCAL_PER_G_FAT),
        percentages: pct,
    }
}
