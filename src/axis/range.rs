//! Axis scaler: turns a sweep snapshot (or fixed user bounds) into a range.

use crate::{
    axis::variant::VariantDescriptor,
    core::{config::ChartConfig, sample::Sample, window::FrequencyWindow},
};

/// Vertical range for one redraw.
///
/// `span` is always positive. It equals `max - min` unless `degenerate` is
/// set, in which case `min == max` and `span` is the variant's epsilon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub span: f64,
    pub fixed: bool,
    pub degenerate: bool,
}

impl AxisRange {
    /// Build a range, substituting `epsilon` for a zero span.
    #[must_use]
    pub fn new(min: f64, max: f64, epsilon: f64, fixed: bool) -> Self {
        let span = max - min;
        if span > 0.0 {
            return Self {
                min,
                max,
                span,
                fixed,
                degenerate: false,
            };
        }
        Self {
            min,
            max,
            span: epsilon,
            fixed,
            degenerate: true,
        }
    }
}

/// Running extrema over finite values only.
#[derive(Clone, Copy, Debug)]
struct Extrema {
    low: f64,
    high: f64,
}

impl Extrema {
    const EMPTY: Self = Self {
        low: f64::INFINITY,
        high: f64::NEG_INFINITY,
    };

    #[inline]
    fn push(&mut self, v: f64) {
        if !v.is_finite() {
            return;
        }
        self.low = self.low.min(v);
        self.high = self.high.max(v);
    }

    fn get(self) -> Option<(f64, f64)> {
        (self.low <= self.high).then_some((self.low, self.high))
    }
}

/// Compute the vertical range for a redraw.
///
/// * Fixed mode divides the configured display bounds by `unit_scale` and
///   never looks at the data.
/// * Auto mode scans every primary sample plus the reference samples inside
///   `window`, ignoring non-finite metrics.
///
/// Log scale is honoured only for log-capable variants; a non-positive
/// minimum is then raised to `epsilon`. Callers skip this entirely when both
/// sweeps are empty.
#[must_use]
pub fn compute_range(
    data: &[Sample],
    reference: &[Sample],
    window: &FrequencyWindow,
    descriptor: &VariantDescriptor,
    config: &ChartConfig,
) -> AxisRange {
    let logarithmic = config.logarithmic_y && descriptor.log_capable;

    let (mut min, mut max, fixed) = if let Some((low, high)) = config.fixed_bounds() {
        (
            low / descriptor.unit_scale,
            high / descriptor.unit_scale,
            true,
        )
    } else {
        let (low, high) = scan(data, reference, window, descriptor);
        if descriptor.round_range_to_tens {
            (10.0 * (low / 10.0).floor(), 10.0 * (high / 10.0).ceil(), false)
        } else {
            (low, high, false)
        }
    };

    if logarithmic && min <= 0.0 {
        min = descriptor.epsilon;
    }
    // the log floor may overtake a non-positive maximum
    if max < min {
        max = min;
    }

    let range = AxisRange::new(min, max, descriptor.epsilon, fixed);
    if range.degenerate {
        log::info!(
            "span is zero for {} chart, using {:e}",
            descriptor.name,
            descriptor.epsilon
        );
    }
    range
}

fn scan(
    data: &[Sample],
    reference: &[Sample],
    window: &FrequencyWindow,
    descriptor: &VariantDescriptor,
) -> (f64, f64) {
    let mut ext = Extrema::EMPTY;
    for s in data {
        ext.push(descriptor.extract(s));
    }
    for s in reference.iter().filter(|s| window.contains(s.freq_hz)) {
        ext.push(descriptor.extract(s));
    }
    ext.get().unwrap_or_else(|| {
        log::debug!(
            "no finite {} values in sweep, using fallback range",
            descriptor.name
        );
        descriptor.fallback_range
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::variant::{CAPACITANCE, MAGNITUDE, VariantDescriptor};
    use crate::core::sample::Complex;

    // Metric is carried in gamma.re so tests can pick values directly.
    fn raw(s: &Sample) -> f64 {
        s.gamma.re
    }

    const RAW_MAG: VariantDescriptor = VariantDescriptor {
        extractor: raw,
        ..MAGNITUDE
    };
    const RAW_CAP: VariantDescriptor = VariantDescriptor {
        extractor: raw,
        ..CAPACITANCE
    };

    fn pt(freq: f64, metric: f64) -> Sample {
        Sample::new(freq, Complex::new(metric, 0.0))
    }

    fn auto() -> ChartConfig {
        ChartConfig::default()
    }

    fn log_auto() -> ChartConfig {
        ChartConfig::builder().logarithmic_y(true).build().unwrap()
    }

    #[test]
    fn magnitude_rounds_to_tens() {
        let data = [pt(1.0, 23.4), pt(2.0, 67.1)];
        let r = compute_range(&data, &[], &FrequencyWindow::unbounded(), &RAW_MAG, &auto());
        assert_eq!((r.min, r.max, r.span), (20.0, 70.0, 50.0));
        assert!(!r.fixed && !r.degenerate);
    }

    #[test]
    fn reactive_range_is_not_rounded() {
        let data = [pt(1.0, 2.5e-12), pt(2.0, 7.5e-12)];
        let r = compute_range(&data, &[], &FrequencyWindow::unbounded(), &RAW_CAP, &auto());
        assert_eq!((r.min, r.max), (2.5e-12, 7.5e-12));
    }

    #[test]
    fn constant_data_gets_epsilon_span() {
        let data = [pt(1.0, 5.0e-12), pt(2.0, 5.0e-12), pt(3.0, 5.0e-12)];
        let r = compute_range(&data, &[], &FrequencyWindow::unbounded(), &RAW_CAP, &auto());
        assert!(r.degenerate);
        assert_eq!(r.min, r.max);
        assert_eq!(r.span, 1e-15);

        let data = [pt(1.0, 5.0), pt(2.0, 5.0)];
        let r = compute_range(&data, &[], &FrequencyWindow::unbounded(), &RAW_CAP, &auto());
        assert_eq!(r.span, CAPACITANCE.epsilon);
    }

    #[test]
    fn non_finite_values_are_skipped() {
        let data = [
            pt(1.0, f64::INFINITY),
            pt(2.0, 31.0),
            pt(3.0, f64::NAN),
            pt(4.0, 12.0),
            pt(5.0, f64::NEG_INFINITY),
        ];
        let r = compute_range(&data, &[], &FrequencyWindow::unbounded(), &RAW_MAG, &auto());
        assert_eq!((r.min, r.max), (10.0, 40.0));
    }

    #[test]
    fn reference_is_windowed_but_primary_is_not() {
        let window = FrequencyWindow::new(100.0, 200.0).unwrap();
        // primary sample far outside the window still counts
        let data = [pt(1.0, 50.0), pt(1000.0, 60.0)];
        let reference = [pt(50.0, 1.0), pt(100.0, 45.0), pt(200.0, 80.0), pt(201.0, 500.0)];
        let r = compute_range(&data, &reference, &window, &RAW_MAG, &auto());
        assert_eq!((r.min, r.max), (40.0, 80.0));
    }

    #[test]
    fn reference_alone_is_enough() {
        let reference = [pt(10.0, 3.0e-12), pt(20.0, 4.0e-12)];
        let r = compute_range(&[], &reference, &FrequencyWindow::unbounded(), &RAW_CAP, &auto());
        assert_eq!((r.min, r.max), (3.0e-12, 4.0e-12));
    }

    #[test]
    fn log_scale_clamps_non_positive_min() {
        let data = [pt(1.0, 3.0), pt(2.0, 67.0)];
        let r = compute_range(&data, &[], &FrequencyWindow::unbounded(), &RAW_MAG, &log_auto());
        assert_eq!(r.min, 0.01);
        assert_eq!(r.max, 70.0);

        let fixed = ChartConfig::builder()
            .fixed(0.0, 1000.0)
            .logarithmic_y(true)
            .build()
            .unwrap();
        let r = compute_range(&data, &[], &FrequencyWindow::unbounded(), &RAW_MAG, &fixed);
        assert!(r.fixed);
        assert_eq!((r.min, r.max), (0.01, 1000.0));
        assert_eq!(r.span, 1000.0 - 0.01);
    }

    #[test]
    fn log_request_ignored_when_not_capable() {
        let fixed = ChartConfig::builder()
            .fixed(-50.0, 50.0)
            .logarithmic_y(true)
            .build()
            .unwrap();
        let r = compute_range(&[], &[], &FrequencyWindow::unbounded(), &RAW_CAP, &fixed);
        assert_eq!(r.min, -50.0 / 10e11);
    }

    #[test]
    fn fixed_mode_applies_unit_scale_and_skips_scan() {
        let data = [pt(1.0, 1.0)];
        let cfg = ChartConfig::builder().fixed(10.0, 100.0).build().unwrap();
        let r = compute_range(&data, &[], &FrequencyWindow::unbounded(), &RAW_CAP, &cfg);
        assert_eq!(r.min, 10.0 / 10e11);
        assert_eq!(r.max, 100.0 / 10e11);
        assert!(r.fixed);

        let r = compute_range(&data, &[], &FrequencyWindow::unbounded(), &RAW_MAG, &cfg);
        assert_eq!((r.min, r.max), (10.0, 100.0));
    }

    #[test]
    fn all_zero_log_magnitude_stays_ordered() {
        let data = [pt(1.0, 0.0), pt(2.0, 0.0)];
        let r = compute_range(&data, &[], &FrequencyWindow::unbounded(), &RAW_MAG, &log_auto());
        assert!(r.min <= r.max);
        assert!(r.span > 0.0);
        assert_eq!(r.min, 0.01);
    }

    #[test]
    fn no_finite_values_falls_back() {
        let data = [pt(1.0, f64::INFINITY)];
        let r = compute_range(&data, &[], &FrequencyWindow::unbounded(), &RAW_CAP, &auto());
        assert_eq!((r.min, r.max), (-1.0, 1.0));

        let r = compute_range(&data, &[], &FrequencyWindow::unbounded(), &RAW_MAG, &auto());
        assert_eq!((r.min, r.max), (0.0, 10.0));
    }

    #[test]
    fn ordering_and_positive_span_hold_across_inputs() {
        let sets: [&[f64]; 6] = [
            &[0.0],
            &[-3.0, -3.0],
            &[f64::NAN, 1.0],
            &[1e300, -1e300],
            &[0.004, 0.006],
            &[99.0, 101.0, f64::INFINITY],
        ];
        for values in sets {
            let data: Vec<Sample> = values.iter().map(|&v| pt(1.0, v)).collect();
            for desc in [&RAW_CAP, &RAW_MAG] {
                for cfg in [auto(), log_auto()] {
                    let r = compute_range(&data, &[], &FrequencyWindow::unbounded(), desc, &cfg);
                    assert!(r.min <= r.max, "{values:?}");
                    assert!(r.span > 0.0, "{values:?}");
                }
            }
        }
    }
}
