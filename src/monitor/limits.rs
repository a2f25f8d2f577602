use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Vital;

use super::types::MonitorError;

/// Reference range for one vital. `None` means no limit on that side.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VitalRange {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl VitalRange {
    pub const fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self { lower, upper }
    }

    pub const fn between(lower: f64, upper: f64) -> Self {
        Self::new(Some(lower), Some(upper))
    }

    pub const fn at_least(lower: f64) -> Self {
        Self::new(Some(lower), None)
    }
}

/// Lower and upper reference limits per vital. Fixed after construction.
#[derive(Debug, Clone, Serialize)]
pub struct LimitProfile {
    ranges: BTreeMap<Vital, VitalRange>,
}

impl Default for LimitProfile {
    fn default() -> Self {
        Self::adult()
    }
}

impl LimitProfile {
    /// Adult resting reference limits. Temperature in °F.
    pub fn adult() -> Self {
        Self::from_ranges([
            (Vital::Temperature, VitalRange::between(95.0, 102.0)),
            (Vital::PulseRate, VitalRange::between(60.0, 100.0)),
            (Vital::OxygenSaturation, VitalRange::at_least(90.0)),
            (Vital::BloodSugar, VitalRange::between(70.0, 110.0)),
            (Vital::BloodPressure, VitalRange::between(90.0, 150.0)),
            (Vital::RespiratoryRate, VitalRange::between(12.0, 20.0)),
        ])
    }

    pub fn from_ranges(ranges: impl IntoIterator<Item = (Vital, VitalRange)>) -> Self {
        Self {
            ranges: ranges.into_iter().collect(),
        }
    }

    /// Limits for a vital. A vital absent from the profile is a wiring error.
    pub fn range(&self, vital: Vital) -> Result<VitalRange, MonitorError> {
        self.ranges
            .get(&vital)
            .copied()
            .ok_or_else(|| MonitorError::UnknownVital(vital.as_str().to_string()))
    }

    pub fn lower(&self, vital: Vital) -> Option<f64> {
        self.ranges.get(&vital).and_then(|r| r.lower)
    }

    pub fn upper(&self, vital: Vital) -> Option<f64> {
        self.ranges.get(&vital).and_then(|r| r.upper)
    }

    pub fn contains(&self, vital: Vital) -> bool {
        self.ranges.contains_key(&vital)
    }
}
