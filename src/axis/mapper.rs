//! Value <-> pixel-row transforms for the vertical axis.

use crate::{axis::range::AxisRange, core::error::AxisError};

/// Off-scale values are pinned this many plot heights past either edge.
const OFF_SCALE_HEIGHTS: f64 = 2.0;

/// Vertical placement of the plot area inside the widget.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlotGeometry {
    pub height_px: i32,
    pub top_margin_px: i32,
}

impl PlotGeometry {
    #[inline]
    #[must_use]
    pub const fn new(height_px: i32, top_margin_px: i32) -> Self {
        Self {
            height_px,
            top_margin_px,
        }
    }

    /// # Errors
    /// `AxisError::InvalidGeometry` when the height is not positive.
    #[inline]
    pub fn validate(self) -> Result<Self, AxisError> {
        if self.height_px <= 0 {
            return Err(AxisError::InvalidGeometry {
                height_px: self.height_px,
            });
        }
        Ok(self)
    }

    /// Row of the bottom edge of the plot area.
    #[inline]
    #[must_use]
    pub const fn bottom(self) -> i32 {
        self.top_margin_px.saturating_add(self.height_px)
    }
}

/// Pure, `Copy` transform for one range + geometry.
///
/// Rows grow downwards: `max` sits on `top_margin_px`, `min` on the bottom
/// edge. Row quantisation uses ties-to-even rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    min: f64,
    max: f64,
    span: f64,
    log_span: f64,
    top: i32,
    height: i32,
    logarithmic: bool,
}

impl CoordinateMapper {
    /// Log scale expects `range.min > 0`, which the scaler guarantees for
    /// log-capable variants.
    ///
    /// # Errors
    /// `AxisError::InvalidGeometry` when `geometry.height_px <= 0`.
    pub fn new(
        range: &AxisRange,
        geometry: PlotGeometry,
        logarithmic: bool,
    ) -> Result<Self, AxisError> {
        let geometry = geometry.validate()?;
        let mut log_span = range.max.ln() - range.min.ln();
        if logarithmic && !(log_span > 0.0 && log_span.is_finite()) {
            // collapsed range: stretch by the substituted span instead
            log_span = (range.span / range.min).ln_1p();
        }
        Ok(Self {
            min: range.min,
            max: range.max,
            span: range.span,
            log_span,
            top: geometry.top_margin_px,
            height: geometry.height_px,
            logarithmic,
        })
    }

    #[inline]
    #[must_use]
    pub fn is_logarithmic(&self) -> bool {
        self.logarithmic
    }

    /// Value resolution of a single row at linear scale.
    #[inline]
    #[must_use]
    pub fn value_per_row(&self) -> f64 {
        self.span / f64::from(self.height)
    }

    /// Row for a metric value.
    ///
    /// * non-finite → `top` (off the top of the plot)
    /// * zero (or below) on log scale → `top - height`
    /// * other values outside `[min, max]` land past the matching edge, at
    ///   most `OFF_SCALE_HEIGHTS` plot heights away
    #[must_use]
    pub fn value_to_row(&self, value: f64) -> i32 {
        if self.logarithmic && value <= 0.0 {
            return self.top.saturating_sub(self.height);
        }
        if !value.is_finite() {
            return self.top;
        }
        let frac = if self.logarithmic {
            (self.max.ln() - value.ln()) / self.log_span
        } else {
            (self.max - value) / self.span
        };
        let height = f64::from(self.height);
        let offset = (frac * height).clamp(
            -OFF_SCALE_HEIGHTS * height,
            (1.0 + OFF_SCALE_HEIGHTS) * height,
        );
        self.top.saturating_add(to_row(offset))
    }

    /// Value under a row; exact inverse of [`value_to_row`](Self::value_to_row)
    /// up to row quantisation.
    #[must_use]
    pub fn row_to_value(&self, row: i32) -> f64 {
        let offset = f64::from(row) - f64::from(self.top);
        let height = f64::from(self.height);
        if self.logarithmic {
            (self.max.ln() - offset * self.log_span / height).exp()
        } else {
            self.max - (offset / height * self.span)
        }
    }

    #[inline]
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Round a pixel offset; out-of-range values saturate.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn to_row(offset: f64) -> i32 {
    offset.round_ties_even() as i32
}
