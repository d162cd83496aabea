//! Horizontal gridline positions for a computed range.

use crate::{
    axis::{
        mapper::{CoordinateMapper, PlotGeometry, to_row},
        range::AxisRange,
        variant::{TickStep, VariantDescriptor},
    },
    core::error::AxisError,
};

/// One gridline. `skip_label` marks the minimum, which is labelled at the
/// bottom edge instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub row: i32,
    pub skip_label: bool,
}

/// Gridlines for `range`, top-down for pixel stepping, bottom-up for value
/// stepping. At most one per `tick_spacing_px`.
///
/// `logarithmic` is ignored for variants that are not log-capable.
///
/// # Errors
/// `AxisError::InvalidGeometry` when `geometry.height_px <= 0`.
#[allow(clippy::float_cmp)]
pub fn generate_ticks(
    range: &AxisRange,
    geometry: PlotGeometry,
    descriptor: &VariantDescriptor,
    logarithmic: bool,
) -> Result<Vec<Tick>, AxisError> {
    let mapper = CoordinateMapper::new(
        range,
        geometry,
        logarithmic && descriptor.log_capable,
    )?;
    let count = geometry.height_px / descriptor.tick_spacing_px.max(1);
    let n = f64::from(count);
    let height = f64::from(geometry.height_px);

    let ticks = (0..count)
        .map(|i| match descriptor.tick_step {
            TickStep::Value => {
                let value = range.min + (f64::from(i) / n) * range.span;
                Tick {
                    value,
                    row: mapper.value_to_row(value),
                    skip_label: value == range.min,
                }
            }
            TickStep::Pixel => {
                let row = geometry
                    .top_margin_px
                    .saturating_add(to_row(f64::from(i) * height / n));
                Tick {
                    value: mapper.row_to_value(row),
                    row,
                    skip_label: false,
                }
            }
        })
        .collect();
    Ok(ticks)
}
