use crate::config::EPSILON;

use super::limits::VitalRange;
use super::types::Severity;

fn above(value: f64, bound: Option<f64>) -> bool {
    bound.is_some_and(|b| value - b > EPSILON)
}

fn below(value: f64, bound: Option<f64>) -> bool {
    bound.is_some_and(|b| b - value > EPSILON)
}

/// Classify a reading against its range.
///
/// The margin is `tolerance * upper` (zero without an upper bound) and is
/// applied on both sides. Hard breaches are checked before the near bands
/// so a warning never masks a breach. Returns the severity and whether it
/// is a near-band warning.
pub fn classify(value: f64, range: &VitalRange, tolerance: f64) -> (Severity, bool) {
    let margin = range.upper.map_or(0.0, |upper| tolerance * upper);

    if above(value, range.upper) {
        (Severity::High, false)
    } else if below(value, range.lower) {
        (Severity::Low, false)
    } else if range.upper.is_some_and(|u| value > u - margin - EPSILON) {
        (Severity::NearHigh, true)
    } else if range.lower.is_some_and(|l| value < l + margin + EPSILON) {
        (Severity::NearLow, true)
    } else {
        (Severity::Normal, false)
    }
}
