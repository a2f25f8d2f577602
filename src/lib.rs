pub mod config;
pub mod models;
pub mod monitor;

pub use models::{Vital, VitalReadings};
pub use monitor::{
    AlertSink, Assessment, CollectingDisplay, ConsoleDisplay, LanguageProfile, LimitProfile,
    Localizer, MonitorError, Severity, SweepReport, VitalRange, VitalsMonitor,
};

use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber honouring `RUST_LOG`.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();

    tracing::debug!("{} v{} tracing initialised", config::APP_NAME, config::APP_VERSION);
}
