//! Seeded LCG + Box-Muller, used to add measurement noise to demo sweeps.
//! Avoids rand dependency

#[derive(Clone)]
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub fn seed(seed: u64) -> Self {
        Self(seed)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 32) as u32
    }

    /// Uniform sample in `[0, 1]`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Standard normal 𝒩(0, 1) sample.
    #[inline]
    pub fn randn(&mut self) -> f64 {
        let u1 = self.next_f64().max(f64::MIN_POSITIVE);
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Lcg::seed(7);
        let mut b = Lcg::seed(7);
        for _ in 0..16 {
            assert_eq!(a.randn().to_bits(), b.randn().to_bits());
        }
    }

    #[test]
    fn uniform_stays_in_unit_interval() {
        let mut r = Lcg::seed(42);
        for _ in 0..1000 {
            let u = r.next_f64();
            assert!((0.0..=1.0).contains(&u));
        }
    }
}
