use std::time::Instant;

use uuid::Uuid;

use crate::config::WARNING_TOLERANCE;
use crate::models::{Vital, VitalReadings};

use super::classify::classify;
use super::limits::LimitProfile;
use super::messages::{LanguageProfile, Localizer};
use super::types::{AlertSink, Assessment, MonitorError, SeverityCounts, SweepReport};

/// Vitals checked by [`VitalsMonitor::quick_check`], in order.
pub const QUICK_CHECK_VITALS: [Vital; 3] =
    [Vital::Temperature, Vital::PulseRate, Vital::OxygenSaturation];

/// Range evaluator for one monitored subject.
///
/// Holds the fixed limit profile, the phrase tables and the sink. The active
/// language is passed to every call and never stored.
pub struct VitalsMonitor<S: AlertSink> {
    sink: S,
    limits: LimitProfile,
    localizer: Localizer,
    tolerance: f64,
}

impl<S: AlertSink> VitalsMonitor<S> {
    pub fn new(sink: S, limits: LimitProfile, localizer: Localizer) -> Self {
        Self {
            sink,
            limits,
            localizer,
            tolerance: WARNING_TOLERANCE,
        }
    }

    /// Adult limits and the bundled language profiles.
    pub fn with_defaults(sink: S) -> Result<Self, MonitorError> {
        Ok(Self::new(sink, LimitProfile::adult(), Localizer::builtin()?))
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn limits(&self) -> &LimitProfile {
        &self.limits
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Classify one value and render its message without alerting.
    pub fn assess(
        &self,
        vital: Vital,
        value: f64,
        language: &str,
    ) -> Result<Assessment, MonitorError> {
        self.assess_in(self.localizer.profile(language), vital, value)
    }

    /// Classify a value for a vital given by name. Unknown names are errors.
    pub fn classify_one(
        &self,
        name: &str,
        value: f64,
        language: &str,
    ) -> Result<Assessment, MonitorError> {
        let vital: Vital = name.parse()?;
        self.assess(vital, value, language)
    }

    fn assess_in(
        &self,
        profile: &LanguageProfile,
        vital: Vital,
        value: f64,
    ) -> Result<Assessment, MonitorError> {
        check_reading(vital, value)?;
        let range = self.limits.range(vital)?;
        let (severity, warning) = classify(value, &range, self.tolerance);
        Ok(Assessment {
            vital,
            value,
            severity,
            warning,
            message: profile.render(vital, severity),
        })
    }

    fn assess_and_alert(
        &self,
        profile: &LanguageProfile,
        vital: Vital,
        value: f64,
    ) -> Result<Assessment, MonitorError> {
        let assessment = self.assess_in(profile, vital, value)?;
        if assessment.severity.is_breach() {
            tracing::warn!(
                vital = vital.as_str(),
                value,
                unit = vital.unit(),
                severity = assessment.severity.as_str(),
                "Vital out of range"
            );
        }
        self.sink.display_alert(&assessment.message);
        Ok(assessment)
    }

    /// Classify every vital in canonical order and alert one message per vital.
    ///
    /// A vital with no reading (oxygen saturation not yet taken) is skipped
    /// and produces no message. A non-finite reading rejects the whole set
    /// before anything is alerted.
    pub fn sweep(
        &self,
        readings: &VitalReadings,
        language: &str,
    ) -> Result<SweepReport, MonitorError> {
        let start = Instant::now();
        let profile = self.localizer.profile(language);

        let mut present = Vec::with_capacity(Vital::COUNT);
        for (vital, value) in readings.iter() {
            match value {
                Some(value) => {
                    check_reading(vital, value)?;
                    present.push((vital, value));
                }
                None => tracing::debug!(vital = vital.as_str(), "No reading, skipping"),
            }
        }

        let mut assessments = Vec::with_capacity(present.len());
        let mut counts = SeverityCounts::default();
        for (vital, value) in present {
            let assessment = self.assess_and_alert(profile, vital, value)?;
            counts.record(assessment.severity);
            assessments.push(assessment);
        }

        let passed = counts.breaches == 0;
        let processing_time_us = start.elapsed().as_micros() as u64;

        tracing::info!(
            language = profile.language(),
            assessed = counts.total(),
            breaches = counts.breaches,
            warnings = counts.warnings,
            passed,
            processing_us = processing_time_us,
            "Vitals sweep complete"
        );

        Ok(SweepReport {
            id: Uuid::new_v4(),
            evaluated_at: chrono::Local::now().naive_local(),
            language: profile.language().to_string(),
            assessments,
            counts,
            passed,
            processing_time_us,
        })
    }

    /// Full sweep reduced to pass/fail. Only Low and High fail it.
    pub fn evaluate_all(
        &self,
        readings: &VitalReadings,
        language: &str,
    ) -> Result<bool, MonitorError> {
        Ok(self.sweep(readings, language)?.passed)
    }

    /// Pass/fail over temperature, pulse rate and oxygen saturation.
    ///
    /// All three are always classified and alerted, even after an earlier breach.
    pub fn quick_check(
        &self,
        temperature: f64,
        pulse_rate: f64,
        oxygen_saturation: f64,
        language: &str,
    ) -> Result<bool, MonitorError> {
        let values = [temperature, pulse_rate, oxygen_saturation];
        for (vital, value) in QUICK_CHECK_VITALS.into_iter().zip(values) {
            check_reading(vital, value)?;
        }

        let profile = self.localizer.profile(language);
        let mut ok = true;
        for (vital, value) in QUICK_CHECK_VITALS.into_iter().zip(values) {
            let assessment = self.assess_and_alert(profile, vital, value)?;
            ok &= !assessment.severity.is_breach();
        }
        Ok(ok)
    }
}

/// NaN and infinities fail every range comparison and would read as normal.
fn check_reading(vital: Vital, value: f64) -> Result<(), MonitorError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MonitorError::InvalidReading { vital, value })
    }
}
