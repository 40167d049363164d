use colored::Colorize;
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;

use crate::core::dashboard::DailyBalance;
use crate::core::exercise::{BurnResult, CatalogEntry, intensity_multiplier};
use crate::core::macros::MacroSplit;
use crate::core::metrics::BmiCategory;
use crate::core::nutrition::NutritionAnalysis;
use crate::core::summary::HealthSummary;
use crate::core::units::{self, Quantity};
use crate::models::config::UnitSystem;
use crate::models::exercise::ExerciseKind;
use crate::models::nutrition::NutritionFacts;

fn or_dash(v: Option<f64>) -> String {
    v.map_or_else(|| "-".to_string(), |x| format!("{:.2}", x))
}

fn weight_cell(kg: Option<f64>, u: UnitSystem) -> String {
    match kg {
        Some(w) => {
            let (v, unit) = units::to_display(w, Quantity::Weight, u);
            format!("{} {}", v, unit)
        }
        None => "-".to_string(),
    }
}

fn colored_category(c: BmiCategory) -> String {
    let label = c.to_string();
    match c {
        BmiCategory::Normal => label.green().to_string(),
        BmiCategory::Overweight | BmiCategory::Underweight => label.yellow().to_string(),
        BmiCategory::Obese => label.red().to_string(),
        BmiCategory::Unknown => label.dimmed().to_string(),
    }
}

/// Pretty-print the full health summary.
pub fn format_summary(s: &HealthSummary, u: UnitSystem) -> String {
    let m = &s.metrics;
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Weight".to_string(), weight_cell(s.body.weight_kg, u)]);
    table.add_row(vec![
        "BMI".to_string(),
        format!("{} ({})", or_dash(m.bmi), colored_category(m.bmi_category)),
    ]);
    table.add_row(vec!["BMR (kcal)".to_string(), or_dash(m.bmr)]);
    table.add_row(vec!["TDEE (kcal)".to_string(), or_dash(m.tdee)]);
    table.add_row(vec![
        "Ideal weight".to_string(),
        match (m.ideal_weight_min, m.ideal_weight_max) {
            (Some(lo), Some(hi)) => {
                format!("{} - {}", weight_cell(Some(lo), u), weight_cell(Some(hi), u))
            }
            _ => "-".to_string(),
        },
    ]);
    table.add_row(vec![
        "Daily target (kcal)".to_string(),
        or_dash(m.daily_calorie_target),
    ]);
    table.add_row(vec!["Body fat (%)".to_string(), or_dash(s.body_fat_percentage)]);
    table.add_row(vec![
        "Water".to_string(),
        s.water_ml.map_or_else(
            || "-".to_string(),
            |ml| {
                let (v, unit) = units::to_display(f64::from(ml), Quantity::Water, u);
                format!("{} {}", v, unit)
            },
        ),
    ]);

    let mut out = format!(
        "{}\n{}",
        format!(
            "=== Health Summary ({}, {}) ===",
            s.activity.activity_level, s.activity.goal
        )
        .bold(),
        table
    );
    if let Some(ref split) = s.macros {
        out.push('\n');
        out.push_str(&format_macros(split));
    }
    if m.bmr.is_none() {
        out.push_str(&format!(
            "\n{}",
            "Complete your profile (weight, height, birth year, sex) for energy metrics."
                .yellow()
        ));
    }
    out
}

pub fn format_macros(split: &MacroSplit) -> String {
    let p = &split.percentages;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Macro", "Grams", "Share"]);
    table.add_row(vec![
        "Protein".to_string(),
        format!("{:.2}", split.protein_g),
        format!("{}%", p.protein),
    ]);
    table.add_row(vec![
        "Carbs".to_string(),
        format!("{:.2}", split.carbs_g),
        format!("{}%", p.carbs),
    ]);
    table.add_row(vec![
        "Fats".to_string(),
        format!("{:.2}", split.fats_g),
        format!("{}%", p.fats),
    ]);
    format!("Macros for {:.0} kcal\n{}", split.daily_calories, table)
}

pub fn format_burn(b: &BurnResult) -> String {
    let mut line = format!(
        "{} {} min ({}) => {} kcal  [MET {} x{}]",
        b.exercise,
        b.duration_minutes,
        b.intensity,
        format!("{:.2}", b.calories_burned).bold(),
        b.met_value,
        intensity_multiplier(b.intensity)
    );
    if !b.known_exercise {
        line.push_str(&format!("\n{}", "unknown exercise, default MET used".yellow()));
    }
    line
}

pub fn format_catalog(entries: &[CatalogEntry]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Exercise", "MET", "Category"]);
    for e in entries {
        table.add_row(vec![
            e.name.to_string(),
            format!("{:.1}", e.met_value),
            e.category.to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_recommendations(kinds: &[ExerciseKind], bmi: f64, category: BmiCategory) -> String {
    let names: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
    format!(
        "BMI {:.2} ({})\nRecommended: {}",
        bmi,
        colored_category(category),
        names.join(", ")
    )
}

pub fn format_nutrition(n: &NutritionFacts) -> String {
    format!(
        "{:.2} kcal | protein {:.2} g | carbs {:.2} g | fats {:.2} g | fiber {:.2} g",
        n.calories, n.protein, n.carbs, n.fats, n.fiber
    )
}

pub fn format_analysis(a: &NutritionAnalysis) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["", "Consumed", "Target", "Diff", "%"]);
    let rows = [
        ("Calories", a.consumed.calories, a.target.calories, a.difference.calories, a.percentage.calories),
        ("Protein", a.consumed.protein, a.target.protein, a.difference.protein, a.percentage.protein),
        ("Carbs", a.consumed.carbs, a.target.carbs, a.difference.carbs, a.percentage.carbs),
        ("Fats", a.consumed.fats, a.target.fats, a.difference.fats, a.percentage.fats),
    ];
    for (name, consumed, target, diff, pct) in rows {
        table.add_row(vec![
            name.to_string(),
            format!("{:.2}", consumed),
            format!("{:.2}", target),
            format!("{:+.2}", diff),
            format!("{:.2}", pct),
        ]);
    }

    let mut out = table.to_string();
    if a.recommendations.is_empty() {
        out.push_str(&format!("\n{}", "On track.".green()));
    }
    for r in &a.recommendations {
        out.push_str(&format!("\n{} {}", "!!".yellow(), r.message));
    }
    out
}

pub fn format_balance(b: &DailyBalance) -> String {
    format!(
        "Consumed: {:.2} kcal | Burned: {:.2} kcal | Net: {:.2} kcal\n\
         Protein {:.2} g | Carbs {:.2} g | Fats {:.2} g\n\
         Calories {:.2}% of {:.0} | Water {} ml ({:.2}%) | Steps {} ({:.2}%)",
        b.calories_consumed,
        b.calories_burned,
        b.net_calories,
        b.protein,
        b.carbs,
        b.fats,
        b.calorie_progress,
        b.calorie_target,
        b.water_ml,
        b.water_progress,
        b.steps,
        b.steps_progress
    )
}
