pub mod vital;

pub use vital::{Vital, VitalReadings};
