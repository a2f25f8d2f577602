use serde::{Deserialize, Serialize};

use crate::monitor::helpers::parse_temperature_fahrenheit;
use crate::monitor::types::MonitorError;

/// A tracked physiological measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Vital {
    Temperature,
    PulseRate,
    OxygenSaturation,
    BloodSugar,
    BloodPressure,
    RespiratoryRate,
}

impl Vital {
    pub const COUNT: usize = 6;

    /// Canonical sweep order.
    pub const ALL: [Vital; Vital::COUNT] = [
        Vital::Temperature,
        Vital::PulseRate,
        Vital::OxygenSaturation,
        Vital::BloodSugar,
        Vital::BloodPressure,
        Vital::RespiratoryRate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Vital::Temperature => "Temperature",
            Vital::PulseRate => "PulseRate",
            Vital::OxygenSaturation => "OxygenSaturation",
            Vital::BloodSugar => "BloodSugar",
            Vital::BloodPressure => "BloodPressure",
            Vital::RespiratoryRate => "RespiratoryRate",
        }
    }

    /// Canonical unit the value is stored in.
    pub fn unit(self) -> &'static str {
        match self {
            Vital::Temperature => "°F",
            Vital::PulseRate => "bpm",
            Vital::OxygenSaturation => "%",
            Vital::BloodSugar => "mg/dL",
            Vital::BloodPressure => "mmHg",
            Vital::RespiratoryRate => "breaths/min",
        }
    }
}

impl std::fmt::Display for Vital {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Vital {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vital::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| MonitorError::UnknownVital(s.to_string()))
    }
}

type Accessor = fn(&VitalReadings) -> Option<f64>;

fn temperature(r: &VitalReadings) -> Option<f64> {
    Some(r.temperature)
}

fn pulse_rate(r: &VitalReadings) -> Option<f64> {
    Some(r.pulse_rate)
}

fn oxygen_saturation(r: &VitalReadings) -> Option<f64> {
    r.oxygen_saturation
}

fn blood_sugar(r: &VitalReadings) -> Option<f64> {
    Some(r.blood_sugar)
}

fn blood_pressure(r: &VitalReadings) -> Option<f64> {
    Some(r.blood_pressure)
}

fn respiratory_rate(r: &VitalReadings) -> Option<f64> {
    Some(r.respiratory_rate)
}

/// Registration table for the full sweep, in `Vital::ALL` order.
pub(crate) const REGISTRY: [(Vital, Accessor); Vital::COUNT] = [
    (Vital::Temperature, temperature),
    (Vital::PulseRate, pulse_rate),
    (Vital::OxygenSaturation, oxygen_saturation),
    (Vital::BloodSugar, blood_sugar),
    (Vital::BloodPressure, blood_pressure),
    (Vital::RespiratoryRate, respiratory_rate),
];

/// Current readings for one monitored subject.
/// Temperature is always held in degrees Fahrenheit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalReadings {
    pub temperature: f64,
    pub pulse_rate: f64,
    /// `None` until a reading has been taken.
    pub oxygen_saturation: Option<f64>,
    pub blood_sugar: f64,
    pub blood_pressure: f64,
    pub respiratory_rate: f64,
    #[serde(skip)]
    temperature_text: Option<String>,
}

impl VitalReadings {
    pub fn new(
        temperature: f64,
        pulse_rate: f64,
        oxygen_saturation: Option<f64>,
        blood_sugar: f64,
        blood_pressure: f64,
        respiratory_rate: f64,
    ) -> Self {
        Self {
            temperature,
            pulse_rate,
            oxygen_saturation,
            blood_sugar,
            blood_pressure,
            respiratory_rate,
            temperature_text: None,
        }
    }

    /// Value of a vital, or `None` when no reading exists.
    pub fn value(&self, vital: Vital) -> Option<f64> {
        REGISTRY
            .iter()
            .find(|(v, _)| *v == vital)
            .and_then(|(_, accessor)| accessor(self))
    }

    /// All readings as `(vital, value)` pairs in sweep order.
    pub fn iter(&self) -> impl Iterator<Item = (Vital, Option<f64>)> + '_ {
        REGISTRY.iter().map(move |(v, accessor)| (*v, accessor(self)))
    }

    /// Store a temperature that is already in degrees Fahrenheit.
    pub fn set_temperature(&mut self, fahrenheit: f64) {
        self.temperature = fahrenheit;
        self.temperature_text = None;
    }

    /// Store a temperature given as text such as `"37C"` or `"98.6F"`.
    ///
    /// Malformed input, and a repeat of the text already stored, are ignored.
    /// Returns whether the stored value was updated.
    pub fn set_temperature_text(&mut self, text: &str) -> bool {
        if self.temperature_text.as_deref() == Some(text) {
            tracing::debug!(input = text, "Temperature text unchanged, ignoring");
            return false;
        }
        match parse_temperature_fahrenheit(text) {
            Some(fahrenheit) => {
                self.temperature = fahrenheit;
                self.temperature_text = Some(text.to_string());
                true
            }
            None => {
                tracing::debug!(input = text, "Unparseable temperature text, ignoring");
                false
            }
        }
    }

    /// Text of the last accepted temperature input, if any.
    pub fn temperature_text(&self) -> Option<&str> {
        self.temperature_text.as_deref()
    }
}
