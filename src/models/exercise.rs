use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Named activities with a known MET value. Anything else is carried as
/// `Other` with its normalised key and resolves to the default MET.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExerciseKind {
    Running,
    BriskWalking,
    SlowWalking,
    Cycling,
    Swimming,
    JumpRope,
    Bodybuilding,
    WeightLifting,
    CrossFit,
    Pilates,
    Yoga,
    Aerobics,
    Zumba,
    HorseRiding,
    Tennis,
    Football,
    Basketball,
    Volleyball,
    Archery,
    Hiking,
    Skiing,
    Wrestling,
    Boxing,
    Karate,
    Taekwondo,
    Gardening,
    HouseCleaning,
    PlayingWithChildren,
    Other(String),
}

impl ExerciseKind {
    /// Every activity with an entry in the MET table, in catalog order.
    pub const KNOWN: [ExerciseKind; 28] = [
        Self::Running,
        Self::BriskWalking,
        Self::SlowWalking,
        Self::Cycling,
        Self::Swimming,
        Self::JumpRope,
        Self::Bodybuilding,
        Self::WeightLifting,
        Self::CrossFit,
        Self::Pilates,
        Self::Yoga,
        Self::Aerobics,
        Self::Zumba,
        Self::HorseRiding,
        Self::Tennis,
        Self::Football,
        Self::Basketball,
        Self::Volleyball,
        Self::Archery,
        Self::Hiking,
        Self::Skiing,
        Self::Wrestling,
        Self::Boxing,
        Self::Karate,
        Self::Taekwondo,
        Self::Gardening,
        Self::HouseCleaning,
        Self::PlayingWithChildren,
    ];

    /// Resolve a user-supplied name. Case, spaces and hyphens are ignored.
    pub fn from_key(input: &str) -> Self {
        let key = normalize_key(input);
        match key.as_str() {
            "running" | "run" => Self::Running,
            "brisk_walking" => Self::BriskWalking,
            "slow_walking" | "walking" => Self::SlowWalking,
            "cycling" | "bike" => Self::Cycling,
            "swimming" | "swim" => Self::Swimming,
            "jump_rope" => Self::JumpRope,
            "bodybuilding" => Self::Bodybuilding,
            "weight_lifting" | "weights" => Self::WeightLifting,
            "crossfit" => Self::CrossFit,
            "pilates" => Self::Pilates,
            "yoga" => Self::Yoga,
            "aerobics" => Self::Aerobics,
            "zumba" => Self::Zumba,
            "horse_riding" => Self::HorseRiding,
            "tennis" => Self::Tennis,
            "football" | "soccer" => Self::Football,
            "basketball" => Self::Basketball,
            "volleyball" => Self::Volleyball,
            "archery" => Self::Archery,
            "hiking" | "mountaineering" => Self::Hiking,
            "skiing" => Self::Skiing,
            "wrestling" => Self::Wrestling,
            "boxing" => Self::Boxing,
            "karate" => Self::Karate,
            "taekwondo" => Self::Taekwondo,
            "gardening" => Self::Gardening,
            "house_cleaning" => Self::HouseCleaning,
            "playing_with_children" => Self::PlayingWithChildren,
            _ => Self::Other(key),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Running => "running",
            Self::BriskWalking => "brisk_walking",
            Self::SlowWalking => "slow_walking",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::JumpRope => "jump_rope",
            Self::Bodybuilding => "bodybuilding",
            Self::WeightLifting => "weight_lifting",
            Self::CrossFit => "crossfit",
            Self::Pilates => "pilates",
            Self::Yoga => "yoga",
            Self::Aerobics => "aerobics",
            Self::Zumba => "zumba",
            Self::HorseRiding => "horse_riding",
            Self::Tennis => "tennis",
            Self::Football => "football",
            Self::Basketball => "basketball",
            Self::Volleyball => "volleyball",
            Self::Archery => "archery",
            Self::Hiking => "hiking",
            Self::Skiing => "skiing",
            Self::Wrestling => "wrestling",
            Self::Boxing => "boxing",
            Self::Karate => "karate",
            Self::Taekwondo => "taekwondo",
            Self::Gardening => "gardening",
            Self::HouseCleaning => "house_cleaning",
            Self::PlayingWithChildren => "playing_with_children",
            Self::Other(key) => key,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

fn normalize_key(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

impl From<String> for ExerciseKind {
    fn from(s: String) -> Self {
        Self::from_key(&s)
    }
}

impl From<&str> for ExerciseKind {
    fn from(s: &str) -> Self {
        Self::from_key(s)
    }
}

impl From<ExerciseKind> for String {
    fn from(kind: ExerciseKind) -> Self {
        kind.key().to_string()
    }
}

impl std::fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Cardio,
    Strength,
    Flexibility,
    Group,
    Sports,
    Other,
}

impl std::fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cardio => write!(f, "cardio"),
            Self::Strength => write!(f, "strength"),
            Self::Flexibility => write!(f, "flexibility"),
            Self::Group => write!(f, "group"),
            Self::Sports => write!(f, "sports"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Perceived effort of a session. `Unknown` applies no correction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    #[default]
    Moderate,
    High,
    VeryHigh,
    #[serde(other)]
    Unknown,
}

impl Intensity {
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "low" => Self::Low,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            "very_high" => Self::VeryHigh,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
            Self::VeryHigh => write!(f, "very_high"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// One exercise session. Calories are never stored here; they are derived
/// from the session and the body weight at calculation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEvent {
    pub exercise_kind: ExerciseKind,
    pub duration_minutes: u32,
    #[serde(default)]
    pub intensity: Intensity,
}

impl ExerciseEvent {
    pub fn new(exercise_kind: ExerciseKind, duration_minutes: u32, intensity: Intensity) -> Self {
        Self {
            exercise_kind,
            duration_minutes,
            intensity,
        }
    }

    pub fn validate(&self) -> Result<(), LogError> {
        if self.duration_minutes == 0 {
            return Err(LogError::EmptySession(self.exercise_kind.to_string()));
        }
        Ok(())
    }
}
