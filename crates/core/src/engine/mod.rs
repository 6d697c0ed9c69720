pub mod brackets;
pub mod pricing;
pub mod ranking;
pub mod region;
pub mod scoring;
pub mod service;
pub mod tiers;

/// Monetary/score rounding used throughout the engine: two decimal places,
/// half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
