//! Exercise energy expenditure from MET values.
//!
//! Calories scale linearly with body mass and time at a fixed metabolic
//! equivalent per activity. The table stores one MET per activity, so a
//! coarse intensity multiplier is applied on top.

use serde::Serialize;

use super::metrics::{BmiCategory, bmi_category};
use super::round2;
use crate::models::exercise::{ExerciseCategory, ExerciseEvent, ExerciseKind, Intensity};
use crate::models::profile::{Goal, Sex};

/// MET used for activities missing from the table.
pub const DEFAULT_MET: f64 = 5.0;

/// Intensity multiplier used when the intensity is unknown.
pub const DEFAULT_INTENSITY_MULTIPLIER: f64 = 1.0;

/// MET value per known activity (Compendium of Physical Activities).
pub fn met_lookup(kind: &ExerciseKind) -> f64 {
    match kind {
        ExerciseKind::Running => 9.0,
        ExerciseKind::BriskWalking => 4.5,
        ExerciseKind::SlowWalking => 3.0,
        ExerciseKind::Cycling => 7.5,
        ExerciseKind::Swimming => 8.0,
        ExerciseKind::JumpRope => 11.0,
        ExerciseKind::Bodybuilding => 6.0,
        ExerciseKind::WeightLifting => 6.5,
        ExerciseKind::CrossFit => 8.0,
        ExerciseKind::Pilates => 3.5,
        ExerciseKind::Yoga => 3.0,
        ExerciseKind::Aerobics => 6.5,
        ExerciseKind::Zumba => 7.0,
        ExerciseKind::HorseRiding => 5.5,
        ExerciseKind::Tennis => 7.0,
        ExerciseKind::Football => 8.5,
        ExerciseKind::Basketball => 7.5,
        ExerciseKind::Volleyball => 4.0,
        ExerciseKind::Archery => 3.5,
        ExerciseKind::Hiking => 6.5,
        ExerciseKind::Skiing => 7.0,
        ExerciseKind::Wrestling => 9.0,
        ExerciseKind::Boxing => 9.5,
        ExerciseKind::Karate => 8.0,
        ExerciseKind::Taekwondo => 8.0,
        ExerciseKind::Gardening => 4.0,
        ExerciseKind::HouseCleaning => 3.5,
        ExerciseKind::PlayingWithChildren => 5.0,
        ExerciseKind::Other(key) => {
            tracing::debug!(exercise = %key, met = DEFAULT_MET, "no MET entry, using default");
            DEFAULT_MET
        }
    }
}

pub fn intensity_multiplier(intensity: Intensity) -> f64 {
    match intensity {
        Intensity::Low => 0.8,
        Intensity::Moderate => 1.0,
        Intensity::High => 1.2,
        Intensity::VeryHigh => 1.4,
        Intensity::Unknown => DEFAULT_INTENSITY_MULTIPLIER,
    }
}

/// kcal = MET × intensity multiplier × weight (kg) × duration (h).
pub fn calories_burned(
    met_value: f64,
    intensity: Intensity,
    weight_kg: f64,
    duration_minutes: u32,
) -> f64 {
    let adjusted_met = met_value * intensity_multiplier(intensity);
    let hours = f64::from(duration_minutes) / 60.0;
    round2(adjusted_met * weight_kg * hours)
}

impl ExerciseEvent {
    /// MET for this session's activity, before intensity correction.
    pub fn met_value(&self) -> f64 {
        met_lookup(&self.exercise_kind)
    }

    pub fn calories_burned(&self, weight_kg: f64) -> f64 {
        calories_burned(
            self.met_value(),
            self.intensity,
            weight_kg,
            self.duration_minutes,
        )
    }
}

/// Calculation details for one session.
#[derive(Debug, Clone, Serialize)]
pub struct BurnResult {
    pub exercise: ExerciseKind,
    pub known_exercise: bool,
    pub duration_minutes: u32,
    pub intensity: Intensity,
    pub met_value: f64,
    pub adjusted_met: f64,
    pub weight_kg: f64,
    pub calories_burned: f64,
}

pub fn burn(event: &ExerciseEvent, weight_kg: f64) -> BurnResult {
    let met_value = event.met_value();
    BurnResult {
        exercise: event.exercise_kind.clone(),
        known_exercise: event.exercise_kind.is_known(),
        duration_minutes: event.duration_minutes,
        intensity: event.intensity,
        met_value,
        adjusted_met: round2(met_value * intensity_multiplier(event.intensity)),
        weight_kg,
        calories_burned: event.calories_burned(weight_kg),
    }
}

pub fn exercise_category(kind: &ExerciseKind) -> ExerciseCategory {
    use ExerciseKind as K;
    match kind {
        K::Running | K::BriskWalking | K::SlowWalking | K::Cycling | K::Swimming | K::JumpRope => {
            ExerciseCategory::Cardio
        }
        K::Bodybuilding | K::WeightLifting | K::CrossFit => ExerciseCategory::Strength,
        K::Pilates | K::Yoga => ExerciseCategory::Flexibility,
        K::Aerobics | K::Zumba => ExerciseCategory::Group,
        K::Football | K::Basketball | K::Volleyball | K::Tennis => ExerciseCategory::Sports,
        _ => ExerciseCategory::Other,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: ExerciseKind,
    pub met_value: f64,
    pub category: ExerciseCategory,
}

/// All activities with a MET entry.
pub fn catalog() -> Vec<CatalogEntry> {
    ExerciseKind::KNOWN
        .iter()
        .map(|kind| CatalogEntry {
            name: kind.clone(),
            met_value: met_lookup(kind),
            category: exercise_category(kind),
        })
        .collect()
}

/// Suggested activities by BMI band and goal. Only `Sex::Female` gets the
/// female list; male and other share the male list.
pub fn recommend_exercises(sex: Sex, bmi: f64, goal: Goal) -> Vec<ExerciseKind> {
    use ExerciseKind as K;
    let band = bmi_category(Some(bmi));
    let female = sex == Sex::Female;

    match (band, female) {
        (BmiCategory::Underweight, true) => vec![K::Yoga, K::Pilates, K::SlowWalking, K::Swimming],
        (BmiCategory::Underweight, false) => {
            vec![K::Bodybuilding, K::WeightLifting, K::CrossFit, K::Wrestling]
        }
        (BmiCategory::Normal, true) => match goal {
            Goal::MuscleGain => vec![
                K::Pilates,
                K::Bodybuilding,
                K::Aerobics,
                K::Swimming,
                K::Cycling,
            ],
            Goal::WeightLoss => vec![
                K::Zumba,
                K::Aerobics,
                K::Running,
                K::Swimming,
                K::JumpRope,
            ],
            Goal::Maintain | Goal::Unknown => {
                vec![K::Yoga, K::Pilates, K::Swimming, K::BriskWalking]
            }
        },
        (BmiCategory::Normal, false) => match goal {
            Goal::MuscleGain => vec![K::Bodybuilding, K::WeightLifting, K::CrossFit, K::Swimming],
            Goal::WeightLoss => vec![
                K::Running,
                K::Swimming,
                K::Football,
                K::Basketball,
                K::JumpRope,
            ],
            Goal::Maintain | Goal::Unknown => {
                vec![K::Bodybuilding, K::Swimming, K::Cycling, K::Football]
            }
        },
        (_, true) => vec![
            K::BriskWalking,
            K::Swimming,
            K::Other("low_impact_aerobics".to_string()),
            K::Cycling,
        ],
        (_, false) => vec![K::BriskWalking, K::Swimming, K::Cycling, K::Bodybuilding],
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExerciseSummary {
    pub total_sessions: usize,
    pub total_duration_minutes: u32,
    pub total_calories_burned: f64,
    pub average_calories_per_session: f64,
}

/// Totals over a set of sessions for one body weight.
pub fn summarize_sessions(events: &[ExerciseEvent], weight_kg: f64) -> ExerciseSummary {
    let total_duration_minutes = events.iter().map(|e| e.duration_minutes).sum();
    let total: f64 = events.iter().map(|e| e.calories_burned(weight_kg)).sum();
    let average = if events.is_empty() {
        0.0
    } else {
        total / events.len() as f64
    };

    ExerciseSummary {
        total_sessions: events.len(),
        total_duration_minutes,
        total_calories_burned: round2(total),
        average_calories_per_session: round2(average),
    }
}
