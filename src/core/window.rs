//! Frequency window used to restrict reference samples during auto-ranging.

use crate::core::{error::ConfigError, sample::Sample};

/// Inclusive `[start, stop]` in Hz.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencyWindow {
    pub start: f64,
    pub stop: f64,
}

impl FrequencyWindow {
    /// # Errors
    /// `ConfigError::InvalidWindow` when `start > stop` or either end is NaN.
    pub fn new(start: f64, stop: f64) -> Result<Self, ConfigError> {
        if start.is_nan() || stop.is_nan() || start > stop {
            return Err(ConfigError::InvalidWindow { start, stop });
        }
        Ok(Self { start, stop })
    }

    /// Window that lets every sample through.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: f64::NEG_INFINITY,
            stop: f64::INFINITY,
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, freq_hz: f64) -> bool {
        self.start <= freq_hz && freq_hz <= self.stop
    }

    /// Frequency extent of a sweep; `None` when it is empty.
    #[must_use]
    pub fn extent(samples: &[Sample]) -> Option<Self> {
        let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
        for s in samples {
            low = low.min(s.freq_hz);
            high = high.max(s.freq_hz);
        }
        (low <= high).then_some(Self {
            start: low,
            stop: high,
        })
    }

    /// The window a redraw works with.
    ///
    /// A user-fixed span wins, then the primary sweep's extent, then the
    /// reference sweep's. `None` only when there is nothing to draw.
    #[must_use]
    pub fn resolve(fixed: Option<Self>, data: &[Sample], reference: &[Sample]) -> Option<Self> {
        fixed
            .or_else(|| Self::extent(data))
            .or_else(|| Self::extent(reference))
    }
}

impl Default for FrequencyWindow {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample::Complex;

    fn at(freq: f64) -> Sample {
        Sample::new(freq, Complex::default())
    }

    #[test]
    fn contains_is_inclusive() {
        let w = FrequencyWindow::new(10.0, 20.0).unwrap();
        assert!(w.contains(10.0));
        assert!(w.contains(20.0));
        assert!(!w.contains(9.999));
        assert!(!w.contains(20.001));
    }

    #[test]
    fn rejects_inverted_window() {
        assert!(FrequencyWindow::new(20.0, 10.0).is_err());
    }

    #[test]
    fn extent_does_not_assume_ordering() {
        let data = [at(30.0), at(10.0), at(20.0)];
        let w = FrequencyWindow::extent(&data).unwrap();
        assert_eq!((w.start, w.stop), (10.0, 30.0));
    }

    #[test]
    fn resolve_priority() {
        let data = [at(1.0), at(2.0)];
        let reference = [at(5.0), at(9.0)];
        let fixed = FrequencyWindow::new(0.0, 100.0).unwrap();

        assert_eq!(
            FrequencyWindow::resolve(Some(fixed), &data, &reference),
            Some(fixed)
        );
        assert_eq!(
            FrequencyWindow::resolve(None, &data, &reference).map(|w| w.stop),
            Some(2.0)
        );
        assert_eq!(
            FrequencyWindow::resolve(None, &[], &reference).map(|w| w.start),
            Some(5.0)
        );
        assert_eq!(FrequencyWindow::resolve(None, &[], &[]), None);
    }
}
