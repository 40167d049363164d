use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{MAX_AGE_YEARS, MIN_AGE_YEARS, ProfileError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Sex {
    type Err = ProfileError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ProfileError::UnknownSex(s.to_string())),
        }
    }
}

/// Daily activity level. Anything unrecognised lands on `Unknown`, which the
/// engine treats like `Moderate`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
    #[serde(other)]
    Unknown,
}

impl ActivityLevel {
    /// Parse without failing; unrecognised input becomes `Unknown`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "very_active" => Self::VeryActive,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sedentary => write!(f, "sedentary"),
            Self::Light => write!(f, "light"),
            Self::Moderate => write!(f, "moderate"),
            Self::Active => write!(f, "active"),
            Self::VeryActive => write!(f, "very_active"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Body-weight goal. `Unknown` behaves like `Maintain`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    #[default]
    Maintain,
    MuscleGain,
    #[serde(other)]
    Unknown,
}

impl Goal {
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "weight_loss" | "lose" => Self::WeightLoss,
            "maintain" => Self::Maintain,
            "muscle_gain" | "gain" => Self::MuscleGain,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WeightLoss => write!(f, "weight_loss"),
            Self::Maintain => write!(f, "maintain"),
            Self::MuscleGain => write!(f, "muscle_gain"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Body measurements. Every field is optional because a profile is filled in
/// progressively; derived metrics simply stay undefined until their inputs
/// exist.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Anthropometrics {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<u32>,
    pub sex: Option<Sex>,
}

impl Anthropometrics {
    pub fn new(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> Self {
        Self {
            weight_kg: Some(weight_kg),
            height_cm: Some(height_cm),
            age_years: Some(age_years),
            sex: Some(sex),
        }
    }

    /// Reject values that are present but outside their valid range.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if let Some(w) = self.weight_kg {
            if !w.is_finite() || w <= 0.0 {
                return Err(ProfileError::BadWeight(w));
            }
        }
        if let Some(h) = self.height_cm {
            if !h.is_finite() || h <= 0.0 {
                return Err(ProfileError::BadHeight(h));
            }
        }
        if let Some(a) = self.age_years {
            if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&a) {
                return Err(ProfileError::AgeOutOfRange(a));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityProfile {
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
}

impl ActivityProfile {
    pub fn new(activity_level: ActivityLevel, goal: Goal) -> Self {
        Self {
            activity_level,
            goal,
        }
    }
}
