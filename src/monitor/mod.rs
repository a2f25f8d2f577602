//! Range evaluation and alerting for vital signs.
//!
//! Readings are classified against a fixed limit profile into one of five
//! severities, rendered through a language profile and handed to an
//! [`AlertSink`], one message per classified vital.

pub mod classify;
pub mod display;
pub mod engine;
pub mod helpers;
pub mod limits;
pub mod messages;
pub mod types;

pub use classify::classify;
pub use display::{CollectingDisplay, ConsoleDisplay};
pub use engine::{VitalsMonitor, QUICK_CHECK_VITALS};
pub use limits::{LimitProfile, VitalRange};
pub use messages::{LanguageProfile, Localizer, Phrases};
pub use types::{AlertSink, Assessment, MonitorError, Severity, SeverityCounts, SweepReport};
