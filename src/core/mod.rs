//! Aggregates the measurement-side layer: samples, ingest, settings, errors.

pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod rng;
pub mod sample;
pub mod window;

// re-export frequently-used items for convenience
pub use config::{ChartConfig, ChartConfigBuilder};
pub use constants::{MAGNITUDE_EPSILON, REACTIVE_EPSILON, REACTIVE_UNIT_SCALE, REFERENCE_IMPEDANCE};
pub use data::{ParseSweepError, read_sweep, read_sweep_from_path};
pub use error::{AxisError, ConfigError, SweepError};
pub use sample::{Complex, Sample};
pub use window::FrequencyWindow;
