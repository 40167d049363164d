//! Body metrics: BMI, BMR, TDEE, calorie target, ideal weight, body fat and
//! water intake.
//!
//! Every function is pure. Inputs that are missing or non-positive produce
//! `None` rather than an error, since a profile is completed progressively.

use serde::Serialize;

use super::round2;
use crate::models::profile::{ActivityLevel, ActivityProfile, Anthropometrics, Goal, Sex};

/// Lower and upper bound of the healthy BMI band.
pub const HEALTHY_BMI_MIN: f64 = 18.5;
pub const HEALTHY_BMI_MAX: f64 = 24.9;

/// TDEE multiplier used when the activity level is unknown.
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.55;

/// Daily deficit applied for weight loss (~0.5 kg/week).
pub const WEIGHT_LOSS_DEFICIT_KCAL: f64 = 500.0;

/// Daily surplus applied for muscle gain.
pub const MUSCLE_GAIN_SURPLUS_KCAL: f64 = 300.0;

/// Recommended water per kg of body weight.
pub const WATER_ML_PER_KG: f64 = 35.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
    Unknown,
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Underweight => write!(f, "underweight"),
            Self::Normal => write!(f, "normal"),
            Self::Overweight => write!(f, "overweight"),
            Self::Obese => write!(f, "obese"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct WeightRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

fn positive(v: f64) -> Option<f64> {
    (v > 0.0 && v.is_finite()).then_some(v)
}

/// Body Mass Index: weight (kg) / height (m)².
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    let w = positive(weight_kg)?;
    let h_m = positive(height_cm)? / 100.0;
    Some(round2(w / (h_m * h_m)))
}

/// Each band includes its lower bound: 18.5 is normal, 25 overweight, 30 obese.
pub fn bmi_category(bmi: Option<f64>) -> BmiCategory {
    match bmi {
        None => BmiCategory::Unknown,
        Some(b) if b.is_nan() => BmiCategory::Unknown,
        Some(b) if b < 18.5 => BmiCategory::Underweight,
        Some(b) if b < 25.0 => BmiCategory::Normal,
        Some(b) if b < 30.0 => BmiCategory::Overweight,
        Some(_) => BmiCategory::Obese,
    }
}

/// Basal metabolic rate (Mifflin-St Jeor).
///
/// `Sex::Other` takes the female constant.
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> Option<f64> {
    let w = positive(weight_kg)?;
    let h = positive(height_cm)?;
    let base = 10.0 * w + 6.25 * h - 5.0 * f64::from(age_years);
    let offset = match sex {
        Sex::Male => 5.0,
        Sex::Female | Sex::Other => -161.0,
    };
    Some(round2(base + offset))
}

pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
        ActivityLevel::Unknown => {
            tracing::debug!("unknown activity level, using moderate multiplier");
            DEFAULT_ACTIVITY_MULTIPLIER
        }
    }
}

/// Total daily energy expenditure: BMR scaled by activity.
pub fn compute_tdee(bmr: Option<f64>, level: ActivityLevel) -> Option<f64> {
    bmr.map(|b| round2(b * activity_multiplier(level)))
}

pub fn daily_calorie_target(tdee: Option<f64>, goal: Goal) -> Option<f64> {
    let tdee = tdee?;
    let target = match goal {
        Goal::WeightLoss => tdee - WEIGHT_LOSS_DEFICIT_KCAL,
        Goal::MuscleGain => tdee + MUSCLE_GAIN_SURPLUS_KCAL,
        Goal::Maintain | Goal::Unknown => tdee,
    };
    Some(round2(target))
}

/// Weight range that keeps BMI inside the healthy band for this height.
pub fn ideal_weight_range(height_cm: f64) -> Option<WeightRange> {
    let h_m = positive(height_cm)? / 100.0;
    let h2 = h_m * h_m;
    Some(WeightRange {
        min_kg: round2(HEALTHY_BMI_MIN * h2),
        max_kg: round2(HEALTHY_BMI_MAX * h2),
    })
}

/// Body fat percentage from BMI (Deurenberg), never below 0.
pub fn estimate_body_fat_percentage(bmi: f64, age_years: u32, sex: Sex) -> f64 {
    let constant = match sex {
        Sex::Male => 16.2,
        Sex::Female | Sex::Other => 5.4,
    };
    let body_fat = 1.20 * bmi + 0.23 * f64::from(age_years) - constant;
    round2(body_fat.max(0.0))
}

/// Daily water recommendation in whole millilitres.
pub fn water_intake_recommendation(weight_kg: f64) -> u32 {
    // float-to-int `as` truncates and saturates at 0
    (weight_kg * WATER_ML_PER_KG) as u32
}

/// Every metric derivable from a profile, recomputed on each call.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DerivedMetrics {
    pub bmi: Option<f64>,
    pub bmi_category: BmiCategory,
    pub bmr: Option<f64>,
    pub tdee: Option<f64>,
    pub ideal_weight_min: Option<f64>,
    pub ideal_weight_max: Option<f64>,
    pub daily_calorie_target: Option<f64>,
}

impl DerivedMetrics {
    pub fn compute(body: &Anthropometrics, activity: &ActivityProfile) -> Self {
        let bmi = match (body.weight_kg, body.height_cm) {
            (Some(w), Some(h)) => compute_bmi(w, h),
            _ => None,
        };
        let bmr = match (body.weight_kg, body.height_cm, body.age_years, body.sex) {
            (Some(w), Some(h), Some(a), Some(s)) => compute_bmr(w, h, a, s),
            _ => None,
        };
        let tdee = compute_tdee(bmr, activity.activity_level);
        let ideal = body.height_cm.and_then(ideal_weight_range);

        Self {
            bmi,
            bmi_category: bmi_category(bmi),
            bmr,
            tdee,
            ideal_weight_min: ideal.map(|r| r.min_kg),
            ideal_weight_max: ideal.map(|r| r.max_kg),
            daily_calorie_target: daily_calorie_target(tdee, activity.goal),
        }
    }
}
