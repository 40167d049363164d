pub mod dashboard;
pub mod exercise;
pub mod macros;
pub mod metrics;
pub mod nutrition;
pub mod summary;
pub mod units;

/// Round to 2 decimal places, half away from zero.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
