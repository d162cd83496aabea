//! Public-facing crate root – re-exports + one-shot helper.

pub mod axis;
pub mod cli;
pub mod core;

pub use crate::core::{
    config::{ChartConfig, ChartConfigBuilder},
    data::{ParseSweepError, read_sweep, read_sweep_from_path},
    error::{AxisError, ConfigError, SweepError},
    sample::{Complex, Sample},
    window::FrequencyWindow,
};

pub use crate::axis::{
    AxisRange, Chart, CoordinateMapper, PlotGeometry, Redraw, Tick, TickStep, Variant,
    VariantDescriptor, compute_range, format_si, generate_ticks,
};

/// Convenience function for a single frame: auto-ranges `variant` over the
/// sweep and returns range + gridlines, or `None` when there is nothing to
/// draw.
///
/// # Errors
/// `AxisError::InvalidGeometry` when the plot height is not positive.
pub fn redraw_once(
    variant: Variant,
    config: ChartConfig,
    geometry: PlotGeometry,
    data: &[Sample],
    reference: &[Sample],
) -> Result<Option<Redraw>, AxisError> {
    Chart::new(variant, geometry)
        .with_config(config)
        .redraw(data, reference)
}
