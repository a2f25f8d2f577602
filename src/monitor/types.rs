use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::Vital;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Outcome of checking one reading against its reference range.
/// Ordered from furthest below the range to furthest above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Below the lower bound.
    Low,
    /// Inside the range, within the tolerance margin of the lower bound.
    NearLow,
    Normal,
    /// Inside the range, within the tolerance margin of the upper bound.
    NearHigh,
    /// Above the upper bound.
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::NearLow => "near_low",
            Self::Normal => "normal",
            Self::NearHigh => "near_high",
            Self::High => "high",
        }
    }

    /// Hard breach of a bound. Fails the sweep.
    pub fn is_breach(&self) -> bool {
        matches!(self, Self::Low | Self::High)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::NearLow | Self::NearHigh)
    }
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// Classification of one vital, with the message sent to the sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub vital: Vital,
    pub value: f64,
    pub severity: Severity,
    pub warning: bool,
    pub message: String,
}

// ---------------------------------------------------------------------------
// SweepReport & SeverityCounts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub breaches: usize,
    pub warnings: usize,
    pub normal: usize,
}

impl SeverityCounts {
    pub fn record(&mut self, severity: Severity) {
        if severity.is_breach() {
            self.breaches += 1;
        } else if severity.is_warning() {
            self.warnings += 1;
        } else {
            self.normal += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.breaches + self.warnings + self.normal
    }
}

/// Result of one full sweep over a reading set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub id: Uuid,
    pub evaluated_at: NaiveDateTime,
    /// Language profile actually used, after fallback.
    pub language: String,
    pub assessments: Vec<Assessment>,
    pub counts: SeverityCounts,
    /// False when any vital breached a bound.
    pub passed: bool,
    pub processing_time_us: u64,
}

impl SweepReport {
    pub fn breaches(&self) -> impl Iterator<Item = &Assessment> {
        self.assessments.iter().filter(|a| a.severity.is_breach())
    }

    pub fn assessment(&self, vital: Vital) -> Option<&Assessment> {
        self.assessments.iter().find(|a| a.vital == vital)
    }
}

// ---------------------------------------------------------------------------
// AlertSink
// ---------------------------------------------------------------------------

/// Receives every rendered alert message, one call per classified vital.
pub trait AlertSink {
    fn display_alert(&self, message: &str);
}

impl<T: AlertSink + ?Sized> AlertSink for &T {
    fn display_alert(&self, message: &str) {
        (**self).display_alert(message)
    }
}

impl<T: AlertSink + ?Sized> AlertSink for Box<T> {
    fn display_alert(&self, message: &str) {
        (**self).display_alert(message)
    }
}

// ---------------------------------------------------------------------------
// MonitorError
// ---------------------------------------------------------------------------

/// Wiring and reference-data errors. Severity outcomes are never errors.
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Unknown vital: {0}")]
    UnknownVital(String),

    #[error("Invalid reading for {vital}: {value}")]
    InvalidReading { vital: Vital, value: f64 },

    #[error("Missing translation for {vital} in language profile '{language}'")]
    MissingTranslation { language: String, vital: String },

    #[error("Language profile '{0}' has an empty warning prefix")]
    EmptyWarningPrefix(String),

    #[error("Language profile '{0}' is defined more than once")]
    DuplicateLanguage(String),

    #[error("Default language profile '{0}' is not loaded")]
    DefaultLanguageMissing(String),

    #[error("Reference data load failed ({0}): {1}")]
    ReferenceDataLoad(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    ReferenceDataParse(String, String),
}
