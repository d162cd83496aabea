//! The three chart kinds, expressed as data for the shared engine.

use std::{fmt, str::FromStr};

use crate::{
    axis::format::format_si,
    core::{
        constants::{
            MAGNITUDE_EPSILON, MAGNITUDE_LABEL_DIGITS, MAGNITUDE_TICK_SPACING_PX,
            REACTIVE_EPSILON, REACTIVE_LABEL_DIGITS, REACTIVE_TICK_SPACING_PX,
            REACTIVE_UNIT_SCALE,
        },
        sample::Sample,
    },
};

/// How gridlines are laid out along the vertical axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickStep {
    /// Evenly spaced values, rows derived from them.
    Value,
    /// Evenly spaced rows, values read back through the inverse mapping.
    Pixel,
}

/// Everything that differs between the charts. Immutable, one per kind.
#[derive(Clone, Copy, Debug)]
pub struct VariantDescriptor {
    pub name: &'static str,
    pub unit: &'static str,
    pub extractor: fn(&Sample) -> f64,
    /// Span used when max == min; also the log-scale floor.
    pub epsilon: f64,
    pub tick_spacing_px: i32,
    pub tick_step: TickStep,
    pub round_range_to_tens: bool,
    pub log_capable: bool,
    /// Fixed display bounds are divided by this to get axis units.
    pub unit_scale: f64,
    pub label_digits: usize,
    /// Range used when auto mode finds no finite value at all.
    pub fallback_range: (f64, f64),
}

impl VariantDescriptor {
    #[inline]
    #[must_use]
    pub fn extract(&self, sample: &Sample) -> f64 {
        (self.extractor)(sample)
    }

    /// Tick / boundary label for an axis value.
    #[must_use]
    pub fn label(&self, value: f64) -> String {
        format_si(value, self.label_digits)
    }
}

pub const CAPACITANCE: VariantDescriptor = VariantDescriptor {
    name: "Capacitance",
    unit: "F",
    extractor: Sample::capacitive_equivalent,
    epsilon: REACTIVE_EPSILON,
    tick_spacing_px: REACTIVE_TICK_SPACING_PX,
    tick_step: TickStep::Value,
    round_range_to_tens: false,
    log_capable: false,
    unit_scale: REACTIVE_UNIT_SCALE,
    label_digits: REACTIVE_LABEL_DIGITS,
    fallback_range: (-1.0, 1.0),
};

pub const INDUCTANCE: VariantDescriptor = VariantDescriptor {
    name: "Inductance",
    unit: "H",
    extractor: Sample::inductive_equivalent,
    ..CAPACITANCE
};

pub const MAGNITUDE: VariantDescriptor = VariantDescriptor {
    name: "|Z|",
    unit: "\u{3a9}",
    extractor: Sample::impedance_magnitude,
    epsilon: MAGNITUDE_EPSILON,
    tick_spacing_px: MAGNITUDE_TICK_SPACING_PX,
    tick_step: TickStep::Pixel,
    round_range_to_tens: true,
    log_capable: true,
    unit_scale: 1.0,
    label_digits: MAGNITUDE_LABEL_DIGITS,
    fallback_range: (0.0, 1.0),
};

/// Selector for the built-in descriptors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Variant {
    Capacitance,
    Inductance,
    Magnitude,
}

impl Variant {
    pub const ALL: [Self; 3] = [Self::Capacitance, Self::Inductance, Self::Magnitude];

    #[must_use]
    pub const fn descriptor(self) -> &'static VariantDescriptor {
        match self {
            Self::Capacitance => &CAPACITANCE,
            Self::Inductance => &INDUCTANCE,
            Self::Magnitude => &MAGNITUDE,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Capacitance => "capacitance",
            Self::Inductance => "inductance",
            Self::Magnitude => "magnitude",
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown chart `{0}`")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "capacitance" | "c" => Ok(Self::Capacitance),
            "inductance" | "l" => Ok(Self::Inductance),
            "magnitude" | "impedance" | "z" | "|z|" => Ok(Self::Magnitude),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}
