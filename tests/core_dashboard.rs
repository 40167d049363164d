use nutricare::core::dashboard::{DEFAULT_CALORIE_TARGET, DayLog, daily_balance};
use nutricare::error::LogError;
use nutricare::models::{ExerciseEvent, ExerciseKind, Intensity, MealPortion, NutritionFacts};

fn meal(calories: f64, protein: f64, consumed: Option<f64>) -> MealPortion {
    MealPortion {
        nutrition: NutritionFacts {
            calories,
            protein,
            carbs: 50.0,
            fats: 10.0,
            fiber: 0.0,
        },
        consumed_percentage: consumed,
    }
}

#[test]
fn test_daily_balance_counts_consumed_portions() {
    let log = DayLog {
        meals: vec![meal(500.0, 30.0, Some(50.0)), meal(300.0, 20.0, None)],
        exercises: vec![ExerciseEvent::new(
            ExerciseKind::Running,
            30,
            Intensity::Moderate,
        )],
        water_ml: 1500,
        steps: 8000,
    };
    let b = daily_balance(&log, 70.0, None);
    assert_eq!(b.calories_consumed, 550.0);
    assert_eq!(b.calories_burned, 315.0);
    assert_eq!(b.net_calories, 235.0);
    assert_eq!(b.protein, 35.0);
    assert_eq!(b.carbs, 75.0);
    assert_eq!(b.calorie_target, DEFAULT_CALORIE_TARGET);
    assert_eq!(b.calorie_progress, 27.5);
    assert_eq!(b.water_progress, 75.0);
    assert_eq!(b.steps_progress, 80.0);
}

#[test]
fn test_daily_balance_uses_given_target() {
    let log = DayLog {
        meals: vec![meal(1000.0, 50.0, None)],
        ..Default::default()
    };
    let b = daily_balance(&log, 70.0, Some(2500.0));
    assert_eq!(b.calorie_target, 2500.0);
    assert_eq!(b.calorie_progress, 40.0);

    let fallback = daily_balance(&log, 70.0, Some(0.0));
    assert_eq!(fallback.calorie_target, DEFAULT_CALORIE_TARGET);
}

#[test]
fn test_empty_day() {
    let log: DayLog = serde_json::from_str("{}").unwrap();
    let b = daily_balance(&log, 70.0, None);
    assert_eq!(b.calories_consumed, 0.0);
    assert_eq!(b.net_calories, 0.0);
    assert_eq!(b.water_progress, 0.0);
}

#[test]
fn test_day_log_validate_checks_every_entry() {
    let good = DayLog {
        meals: vec![meal(500.0, 30.0, Some(50.0))],
        exercises: vec![ExerciseEvent::new(ExerciseKind::Running, 30, Intensity::Moderate)],
        ..Default::default()
    };
    assert!(good.validate().is_ok());

    let overeaten = DayLog {
        meals: vec![meal(500.0, 30.0, None), meal(500.0, 30.0, Some(250.0))],
        ..Default::default()
    };
    assert_eq!(overeaten.validate(), Err(LogError::PortionOutOfRange(250.0)));

    let idle = DayLog {
        exercises: vec![ExerciseEvent::new(ExerciseKind::Yoga, 0, Intensity::Low)],
        ..Default::default()
    };
    assert_eq!(
        idle.validate(),
        Err(LogError::EmptySession("yoga".to_string()))
    );
}
