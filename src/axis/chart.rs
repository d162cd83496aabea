//! Per-chart state between redraws.
//!
//! A `Chart` pairs a variant with its settings and geometry and keeps the last
//! computed range, together with the mapping it was drawn with, so pointer
//! queries can be answered without rescanning data. Settings changed after a
//! redraw only take effect on the next one.

use crate::{
    axis::{
        mapper::{CoordinateMapper, PlotGeometry},
        range::{AxisRange, compute_range},
        ticks::{Tick, generate_ticks},
        variant::{TickStep, Variant, VariantDescriptor},
    },
    core::{config::ChartConfig, error::AxisError, sample::Sample, window::FrequencyWindow},
};

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Redraw {
    pub window: FrequencyWindow,
    pub range: AxisRange,
    pub ticks: Vec<Tick>,
    /// Label for the top edge; pixel-stepped charts already label it via
    /// their first tick.
    pub top_label: Option<String>,
    pub bottom_label: String,
}

#[derive(Clone, Debug)]
pub struct Chart {
    variant: Variant,
    config: ChartConfig,
    geometry: PlotGeometry,
    fixed_window: Option<FrequencyWindow>,
    last_range: Option<AxisRange>,
    last_mapper: Option<CoordinateMapper>,
}

impl Chart {
    #[must_use]
    pub fn new(variant: Variant, geometry: PlotGeometry) -> Self {
        Self {
            variant,
            config: ChartConfig::default(),
            geometry,
            fixed_window: None,
            last_range: None,
            last_mapper: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Pin the frequency window instead of following the sweep.
    #[must_use]
    pub fn with_fixed_window(mut self, window: Option<FrequencyWindow>) -> Self {
        self.fixed_window = window;
        self
    }

    pub fn set_config(&mut self, config: ChartConfig) {
        self.config = config;
    }

    pub fn set_geometry(&mut self, geometry: PlotGeometry) {
        self.geometry = geometry;
    }

    #[inline]
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    #[must_use]
    pub fn descriptor(&self) -> &'static VariantDescriptor {
        self.variant.descriptor()
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn geometry(&self) -> PlotGeometry {
        self.geometry
    }

    /// Log scale as actually applied (requested *and* supported).
    #[inline]
    #[must_use]
    pub fn logarithmic(&self) -> bool {
        self.config.logarithmic_y && self.descriptor().log_capable
    }

    #[inline]
    #[must_use]
    pub fn last_range(&self) -> Option<&AxisRange> {
        self.last_range.as_ref()
    }

    /// Recompute range and gridlines from the current sweeps.
    ///
    /// Returns `Ok(None)` without touching the retained range when both
    /// sweeps are empty.
    ///
    /// # Errors
    /// `AxisError::InvalidGeometry` when the plot height is not positive.
    pub fn redraw(
        &mut self,
        data: &[Sample],
        reference: &[Sample],
    ) -> Result<Option<Redraw>, AxisError> {
        let Some(window) = FrequencyWindow::resolve(self.fixed_window, data, reference) else {
            return Ok(None);
        };
        self.geometry.validate()?;

        let desc = self.descriptor();
        let logarithmic = self.logarithmic();
        let range = compute_range(data, reference, &window, desc, &self.config);
        let mapper = CoordinateMapper::new(&range, self.geometry, logarithmic)?;
        let ticks = generate_ticks(&range, self.geometry, desc, logarithmic)?;
        log::debug!(
            "{} redraw: {} + {} samples, range {:e}..{:e}, {} ticks",
            desc.name,
            data.len(),
            reference.len(),
            range.min,
            range.max,
            ticks.len()
        );
        self.last_range = Some(range);
        self.last_mapper = Some(mapper);

        let top_label = (desc.tick_step == TickStep::Value).then(|| desc.label(range.max));
        Ok(Some(Redraw {
            window,
            range,
            ticks,
            top_label,
            bottom_label: desc.label(range.min),
        }))
    }

    /// Mapping of the last drawn frame, `None` before the first redraw.
    ///
    /// Carries the geometry and scale that frame was drawn with, not the
    /// current settings.
    #[inline]
    #[must_use]
    pub fn mapper(&self) -> Option<CoordinateMapper> {
        self.last_mapper
    }

    /// Value under a pointer row in display units, i.e. scaled by
    /// `unit_scale` like the fixed-mode bounds.
    #[must_use]
    pub fn value_at_row(&self, row: i32) -> Option<f64> {
        let scale = self.descriptor().unit_scale;
        self.last_mapper.map(|m| m.row_to_value(row) * scale)
    }

    /// Row at which a sample is plotted.
    #[must_use]
    pub fn row_for_sample(&self, sample: &Sample) -> Option<i32> {
        let value = self.descriptor().extract(sample);
        self.last_mapper.map(|m| m.value_to_row(value))
    }
}
