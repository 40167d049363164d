pub mod config;
pub mod exercise;
pub mod nutrition;
pub mod profile;

pub use exercise::{ExerciseCategory, ExerciseEvent, ExerciseKind, Intensity};
pub use nutrition::{MacroTotals, MealPortion, NutritionFacts};
pub use profile::{ActivityLevel, ActivityProfile, Anthropometrics, Goal, Sex};
