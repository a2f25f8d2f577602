/// Application-level constants
pub const APP_NAME: &str = "vitals-monitor";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Absolute slack applied to every bound comparison.
/// Comparisons are strict, so a value sitting exactly on a bound is in range.
pub const EPSILON: f64 = 1e-5;

/// Fraction of a vital's upper bound that defines the "near" band.
/// Shared by all vitals.
pub const WARNING_TOLERANCE: f64 = 0.015;

/// Language code used when a requested language has no profile.
pub const DEFAULT_LANGUAGE: &str = "en";

/// File name of the language profile table inside a resources directory.
pub const LANGUAGE_PROFILES_FILE: &str = "language_profiles.json";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "vitals_monitor=info"
}
