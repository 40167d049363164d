#![allow(dead_code)]

use nutricare::models::{ActivityLevel, ActivityProfile, Anthropometrics, Goal, Sex};

/// Floating point equality within `tolerance`.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Assert two 2-dp rounded values match.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        approx_eq(actual, expected, 1e-6),
        "expected {expected}, got {actual}"
    );
}

/// 70 kg, 175 cm, 30 year old male.
pub fn reference_male() -> Anthropometrics {
    Anthropometrics::new(70.0, 175.0, 30, Sex::Male)
}

/// 60 kg, 165 cm, 25 year old female.
pub fn reference_female() -> Anthropometrics {
    Anthropometrics::new(60.0, 165.0, 25, Sex::Female)
}

pub fn moderate(goal: Goal) -> ActivityProfile {
    ActivityProfile::new(ActivityLevel::Moderate, goal)
}
