//! Metric/imperial conversion at the edges. Everything inside the engine is
//! metric; these helpers only touch CLI input and human output.

use crate::models::config::UnitSystem;

const LBS_PER_KG: f64 = 2.20462;
const CM_PER_FT: f64 = 30.48;
const ML_PER_FLOZ: f64 = 29.5735;

/// A physical quantity the CLI reads or prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Weight,
    Height,
    Water,
}

impl Quantity {
    pub fn unit(self, system: UnitSystem) -> &'static str {
        match (self, system) {
            (Self::Weight, UnitSystem::Metric) => "kg",
            (Self::Weight, UnitSystem::Imperial) => "lbs",
            (Self::Height, UnitSystem::Metric) => "cm",
            (Self::Height, UnitSystem::Imperial) => "ft",
            (Self::Water, UnitSystem::Metric) => "ml",
            (Self::Water, UnitSystem::Imperial) => "fl oz",
        }
    }

    /// How many display units make up one metric unit.
    fn per_metric_unit(self, system: UnitSystem) -> f64 {
        match (self, system) {
            (_, UnitSystem::Metric) => 1.0,
            (Self::Weight, UnitSystem::Imperial) => LBS_PER_KG,
            (Self::Height, UnitSystem::Imperial) => 1.0 / CM_PER_FT,
            (Self::Water, UnitSystem::Imperial) => 1.0 / ML_PER_FLOZ,
        }
    }
}

/// Metric value to display value (1 dp when converted) and unit label.
pub fn to_display(value: f64, quantity: Quantity, system: UnitSystem) -> (f64, &'static str) {
    let unit = quantity.unit(system);
    if system == UnitSystem::Metric {
        return (value, unit);
    }
    (round1(value * quantity.per_metric_unit(system)), unit)
}

/// Value typed in the configured system, converted to metric.
pub fn from_input(value: f64, quantity: Quantity, system: UnitSystem) -> f64 {
    value / quantity.per_metric_unit(system)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
