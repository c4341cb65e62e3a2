//! Time-varying radial ripple height field.

use crate::params::RipplePhysics;

/// Pure height function of the ripple surface
#[derive(Debug, Clone)]
pub struct RippleWave {
    physics: RipplePhysics,
}

impl RippleWave {
    pub fn new(physics: RipplePhysics) -> Self {
        Self { physics }
    }

    pub fn physics(&self) -> &RipplePhysics {
        &self.physics
    }

    /// Signed height at world coordinate `(x, y)` and time `time_s`
    ///
    /// Rings travel outward from the origin, damped by an exponential
    /// envelope and a hyperbolic falloff with radius.
    pub fn height(&self, x: f64, y: f64, time_s: f64) -> f64 {
        let p = &self.physics;
        let r = (x * x + y * y).sqrt();
        let wave = (r * p.frequency - time_s * p.speed).cos();
        let envelope = (-r * p.decay).exp();
        wave * envelope * self.amplitude_bound(r)
    }

    /// Largest possible magnitude of [`height`](Self::height) at radius `r`
    pub fn amplitude_bound(&self, r: f64) -> f64 {
        self.physics.height_scale / (1.0 + self.physics.falloff * r)
    }
}

impl Default for RippleWave {
    fn default() -> Self {
        Self::new(RipplePhysics::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_peak_at_start() {
        let wave = RippleWave::default();
        assert!((wave.height(0.0, 0.0, 0.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_sample() {
        let wave = RippleWave::default();
        let r = 2f64.sqrt();
        let expected = (r * 0.65).cos() * (-r * 0.015).exp() * 20.0 / (1.0 + 0.06 * r);
        assert!((wave.height(1.0, -1.0, 0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_radially_symmetric() {
        let wave = RippleWave::default();
        let a = wave.height(3.0, 4.0, 1.3);
        let b = wave.height(-5.0, 0.0, 1.3);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_bounded_and_finite() {
        let wave = RippleWave::default();
        for xi in -30..=30 {
            for yi in (-30..=30).step_by(3) {
                for t in [0.0, 0.37, 2.5, 100.0, 12345.6] {
                    let (x, y) = (xi as f64 * 0.9, yi as f64 * 1.1);
                    let h = wave.height(x, y, t);
                    let r = (x * x + y * y).sqrt();
                    assert!(h.is_finite());
                    assert!(h.abs() <= wave.amplitude_bound(r) + 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_wave_moves_with_time() {
        let wave = RippleWave::default();
        assert_ne!(wave.height(5.0, 0.0, 0.0), wave.height(5.0, 0.0, 0.5));
    }
}
