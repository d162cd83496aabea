//! A collection of constants.

/// Reference impedance the reflection coefficients are measured against.
pub const REFERENCE_IMPEDANCE: f64 = 50.0;

/// Span substituted for capacitance/inductance axes when all values coincide.
pub const REACTIVE_EPSILON: f64 = 1e-15;
/// Span substituted for the impedance axis, also its smallest log-scale minimum.
pub const MAGNITUDE_EPSILON: f64 = 0.01;

/// One horizontal gridline per 60 pixels on the reactive charts
pub const REACTIVE_TICK_SPACING_PX: i32 = 60;
/// One horizontal gridline per 50 pixels on the impedance chart
pub const MAGNITUDE_TICK_SPACING_PX: i32 = 50;

/// Divisor applied to user-entered capacitance/inductance display bounds.
///
/// Note this is `10e11` (= 1e12 written the long way round), kept as-is so
/// saved display bounds keep meaning the same thing.
pub const REACTIVE_UNIT_SCALE: f64 = 10e11;

/// Significant digits used when labelling reactive axes.
///
/// 4.7e-12 becomes "5p"
pub const REACTIVE_LABEL_DIGITS: usize = 1;
/// Significant digits used when labelling the impedance axis.
pub const MAGNITUDE_LABEL_DIGITS: usize = 4;

/// Default fixed-mode display bounds.
pub const DEFAULT_MIN_DISPLAY_VALUE: f64 = 0.0;
pub const DEFAULT_MAX_DISPLAY_VALUE: f64 = 100.0;
