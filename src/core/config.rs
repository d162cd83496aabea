//! Run-time chart settings + fluent builder.

use crate::core::{
    constants::{DEFAULT_MAX_DISPLAY_VALUE, DEFAULT_MIN_DISPLAY_VALUE},
    error::ConfigError,
};

/// Immutable vertical-axis settings handed to the scaler.
///
/// `min_display_value`/`max_display_value` are in display units (axis value
/// times the variant's `unit_scale`) and only matter while `fixed_values` is
/// set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    pub fixed_values: bool,
    pub min_display_value: f64,
    pub max_display_value: f64,
    pub logarithmic_y: bool,
}

impl ChartConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> ChartConfigBuilder {
        ChartConfigBuilder::new()
    }

    /// User-fixed bounds, if fixed mode is enabled.
    #[inline]
    #[must_use]
    pub fn fixed_bounds(&self) -> Option<(f64, f64)> {
        self.fixed_values
            .then_some((self.min_display_value, self.max_display_value))
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            fixed_values: false,
            min_display_value: DEFAULT_MIN_DISPLAY_VALUE,
            max_display_value: DEFAULT_MAX_DISPLAY_VALUE,
            logarithmic_y: false,
        }
    }
}

/// Fluent builder; validation happens once in `build`.
#[derive(Debug, Default)]
pub struct ChartConfigBuilder {
    fixed_values: bool,
    min_display_value: Option<f64>,
    max_display_value: Option<f64>,
    logarithmic_y: bool,
}

impl ChartConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn fixed(mut self, low: f64, high: f64) -> Self {
        self.fixed_values = true;
        self.min_display_value = Some(low);
        self.max_display_value = Some(high);
        self
    }
    #[inline]
    #[must_use]
    pub fn fixed_values(mut self, on: bool) -> Self {
        self.fixed_values = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn min_display_value(mut self, v: f64) -> Self {
        self.min_display_value = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_display_value(mut self, v: f64) -> Self {
        self.max_display_value = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn logarithmic_y(mut self, on: bool) -> Self {
        self.logarithmic_y = on;
        self
    }

    /// # Errors
    /// `ConfigError` when a display bound is non-finite or the bounds are
    /// inverted. Equal bounds are accepted; the scaler handles the zero span.
    pub fn build(self) -> Result<ChartConfig, ConfigError> {
        let low = self.min_display_value.unwrap_or(DEFAULT_MIN_DISPLAY_VALUE);
        let high = self.max_display_value.unwrap_or(DEFAULT_MAX_DISPLAY_VALUE);
        if !low.is_finite() {
            return Err(ConfigError::NonFinite("min_display_value"));
        }
        if !high.is_finite() {
            return Err(ConfigError::NonFinite("max_display_value"));
        }
        if low > high {
            return Err(ConfigError::InvalidRange { low, high });
        }
        Ok(ChartConfig {
            fixed_values: self.fixed_values,
            min_display_value: low,
            max_display_value: high,
            logarithmic_y: self.logarithmic_y,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ChartConfigBuilder> for Result<ChartConfig, ConfigError> {
    fn from(b: ChartConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_auto_linear() {
        let cfg = ChartConfig::builder().build().unwrap();
        assert_eq!(cfg, ChartConfig::default());
        assert!(cfg.fixed_bounds().is_none());
    }

    #[test]
    fn fixed_bounds_exposed_only_when_enabled() {
        let cfg = ChartConfig::builder().fixed(1.0, 5.0).build().unwrap();
        assert_eq!(cfg.fixed_bounds(), Some((1.0, 5.0)));

        let cfg = ChartConfig::builder()
            .min_display_value(1.0)
            .max_display_value(5.0)
            .build()
            .unwrap();
        assert_eq!(cfg.fixed_bounds(), None);
    }

    #[test]
    fn rejects_inverted_and_non_finite_bounds() {
        assert_eq!(
            ChartConfig::builder().fixed(5.0, 1.0).build(),
            Err(ConfigError::InvalidRange {
                low: 5.0,
                high: 1.0
            })
        );
        assert_eq!(
            ChartConfig::builder().fixed(f64::NAN, 1.0).build(),
            Err(ConfigError::NonFinite("min_display_value"))
        );
    }

    #[test]
    fn equal_bounds_are_allowed() {
        assert!(ChartConfig::builder().fixed(3.0, 3.0).build().is_ok());
    }
}
