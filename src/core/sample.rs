//! One point of a frequency sweep and the scalars derived from it.

use std::f64::consts::TAU;
use std::ops::{Add, Div, Mul, Sub};

use crate::core::constants::REFERENCE_IMPEDANCE;

/// Just enough complex arithmetic for Γ → Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ONE: Self = Self::new(1.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline]
    #[must_use]
    pub fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }

    #[inline]
    #[must_use]
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.re * k, self.im * k)
    }
}

impl Add for Complex {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for Complex {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        Self::new(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        )
    }
}

// --- Sample ---

/// Immutable sweep point: frequency plus measured reflection coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub freq_hz: f64,
    pub gamma: Complex,
}

impl Sample {
    #[inline]
    #[must_use]
    pub const fn new(freq_hz: f64, gamma: Complex) -> Self {
        Self { freq_hz, gamma }
    }

    /// Load impedance seen through the 50 Ω reference.
    ///
    /// Γ == 1 is an open circuit and yields an infinite impedance.
    #[must_use]
    pub fn impedance(&self) -> Complex {
        let denom = Complex::ONE - self.gamma;
        if denom.re == 0.0 && denom.im == 0.0 {
            return Complex::new(f64::INFINITY, 0.0);
        }
        ((Complex::ONE + self.gamma) / denom).scale(REFERENCE_IMPEDANCE)
    }

    /// Capacitance (F) that would present the measured reactance.
    #[must_use]
    pub fn capacitive_equivalent(&self) -> f64 {
        if self.freq_hz == 0.0 {
            return f64::NEG_INFINITY;
        }
        let x = self.impedance().im;
        if x == 0.0 {
            return f64::INFINITY;
        }
        -1.0 / (TAU * self.freq_hz * x)
    }

    /// Inductance (H) that would present the measured reactance.
    #[must_use]
    pub fn inductive_equivalent(&self) -> f64 {
        if self.freq_hz == 0.0 {
            return 0.0;
        }
        self.impedance().im / (TAU * self.freq_hz)
    }

    /// |Z| in ohms; may be `+inf`.
    #[must_use]
    pub fn impedance_magnitude(&self) -> f64 {
        self.impedance().norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    #[test]
    fn matched_load_is_fifty_ohm() {
        let s = Sample::new(1e6, Complex::new(0.0, 0.0));
        let z = s.impedance();
        assert!(close(z.re, 50.0, 1e-12));
        assert!(close(z.im, 0.0, 1e-12));
        assert!(close(s.impedance_magnitude(), 50.0, 1e-12));
    }

    #[test]
    fn open_circuit_is_infinite() {
        let s = Sample::new(1e6, Complex::ONE);
        assert!(s.impedance_magnitude().is_infinite());
    }

    #[test]
    fn reactive_equivalents_round_trip_through_gamma() {
        // 100 pF at 10 MHz: X = -1/(2π f C)
        let f = 10e6;
        let c = 100e-12;
        let z = Complex::new(50.0, -1.0 / (TAU * f * c));
        let gamma = (z - Complex::new(50.0, 0.0)) / (z + Complex::new(50.0, 0.0));
        let s = Sample::new(f, gamma);
        assert!(close(s.capacitive_equivalent(), c, 1e-9));

        // 1 µH at 10 MHz: X = 2π f L
        let l = 1e-6;
        let z = Complex::new(50.0, TAU * f * l);
        let gamma = (z - Complex::new(50.0, 0.0)) / (z + Complex::new(50.0, 0.0));
        let s = Sample::new(f, gamma);
        assert!(close(s.inductive_equivalent(), l, 1e-9));
    }

    #[test]
    fn dc_and_zero_reactance_edge_cases() {
        let dc = Sample::new(0.0, Complex::new(0.2, 0.1));
        assert_eq!(dc.capacitive_equivalent(), f64::NEG_INFINITY);
        assert_eq!(dc.inductive_equivalent(), 0.0);

        let resistive = Sample::new(1e6, Complex::new(0.2, 0.0));
        assert_eq!(resistive.capacitive_equivalent(), f64::INFINITY);
    }
}
