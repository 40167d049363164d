//! Error types for profile validation.

use thiserror::Error;

/// Lowest age the metabolic formulas are calibrated for.
pub const MIN_AGE_YEARS: u32 = 10;

/// Highest accepted age.
pub const MAX_AGE_YEARS: u32 = 120;

/// Errors raised when a profile value is present but unusable.
///
/// A missing value is never an error: the engine answers `None` for anything
/// it cannot compute yet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("weight must be positive: {0}")]
    BadWeight(f64),

    #[error("height must be positive: {0}")]
    BadHeight(f64),

    #[error("age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS}: {0}")]
    AgeOutOfRange(u32),

    #[error("invalid sex: {0} (expected male/female/other)")]
    UnknownSex(String),

    #[error("birth year {0} is in the future")]
    BirthYearInFuture(i32),
}

/// Errors raised when a logged meal or exercise session carries impossible
/// values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LogError {
    #[error("{field} must be a non-negative number: {value}")]
    NegativeNutrient { field: &'static str, value: f64 },

    #[error("consumed percentage must be between 0 and 100: {0}")]
    PortionOutOfRange(f64),

    #[error("{0} session must last at least one minute")]
    EmptySession(String),
}
