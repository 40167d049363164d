use anyhow::Result;

use nutricare::core::exercise;
use nutricare::core::units::{self, Quantity};
use nutricare::error::ProfileError;
use nutricare::models::config::Config;
use nutricare::models::{ExerciseEvent, ExerciseKind, Intensity};
use nutricare::output::human;

pub fn run(
    exercise_name: &str,
    minutes: u32,
    intensity: &str,
    weight: Option<f64>,
    human_flag: bool,
) -> Result<()> {
    let config = Config::load()?;
    let weight_kg = match weight {
        Some(w) => units::from_input(w, Quantity::Weight, config.units.system),
        None => config
            .profile
            .weight_kg
            .ok_or_else(|| {
                anyhow::anyhow!("no weight: pass --weight or set it with `config set weight`")
            })?,
    };
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(ProfileError::BadWeight(weight_kg).into());
    }

    let event = ExerciseEvent::new(
        ExerciseKind::from_key(exercise_name),
        minutes,
        Intensity::parse_lenient(intensity),
    );
    let result = exercise::burn(&event, weight_kg);

    if human_flag {
        println!("{}", human::format_burn(&result));
    } else {
        super::print_json("burn", &result)?;
    }
    Ok(())
}
