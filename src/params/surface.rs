//! Ripple wave constants and sample grid layout.

/// Ripple wave function parameters
///
/// Height at radius `r` and time `t`:
/// `cos(r * frequency - t * speed) * exp(-r * decay) * height_scale / (1 + falloff * r)`
#[derive(Debug, Clone, PartialEq)]
pub struct RipplePhysics {
    /// Angular frequency of the ring pattern (radians per world unit)
    pub frequency: f64,

    /// Phase speed of the outward travelling rings (radians per second)
    pub speed: f64,

    /// Exponential envelope decay (per world unit)
    pub decay: f64,

    /// Peak height at the center (world units), also the color normalization
    pub height_scale: f64,

    /// Hyperbolic amplitude falloff with radius (per world unit)
    pub falloff: f64,
}

impl Default for RipplePhysics {
    fn default() -> Self {
        Self {
            frequency: 0.65,
            speed: 4.0,
            decay: 0.015,
            height_scale: 20.0,
            falloff: 0.06,
        }
    }
}

impl RipplePhysics {
    /// Validate parameters (finite, positive height scale, non-negative damping)
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("frequency", self.frequency),
            ("speed", self.speed),
            ("decay", self.decay),
            ("height_scale", self.height_scale),
            ("falloff", self.falloff),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("Ripple {} must be finite, got {}", name, value));
        }
        if self.height_scale <= 0.0 {
            return Err(format!(
                "Height scale must be > 0, got {}",
                self.height_scale
            ));
        }
        if self.decay < 0.0 || self.falloff < 0.0 {
            return Err("Decay and falloff must be >= 0".to_string());
        }
        Ok(())
    }
}

/// Largest accepted number of samples per side (about 16.8M samples total)
pub const MAX_GRID_DIMENSION: usize = 4097;

/// Square sample grid covering `[-radius, radius]` on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Half-extent of the sampled area (world units)
    pub radius: u32,

    /// Distance between neighbouring samples (world units)
    pub step: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            radius: 20,
            step: 1,
        }
    }
}

impl GridConfig {
    /// Samples per side: `2 * radius / step + 1`
    pub fn dimension(&self) -> usize {
        (2 * self.radius as u64 / self.step.max(1) as u64) as usize + 1
    }

    /// Total number of samples in the grid
    pub fn sample_count(&self) -> usize {
        self.dimension() * self.dimension()
    }

    /// World coordinate of sample index `i` along either axis
    pub fn world_coord(&self, i: usize) -> f64 {
        -(self.radius as f64) + i as f64 * self.step as f64
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.radius == 0 {
            return Err("Grid radius must be > 0".to_string());
        }
        if self.step == 0 {
            return Err("Grid step must be >= 1".to_string());
        }
        let Some(width) = self.radius.checked_mul(2) else {
            return Err(format!("Grid radius {} is too large", self.radius));
        };
        if self.step > width {
            return Err(format!(
                "Grid step {} exceeds grid width {}",
                self.step, width
            ));
        }
        if self.dimension() > MAX_GRID_DIMENSION {
            return Err(format!(
                "Grid of {} samples per side exceeds the limit of {}",
                self.dimension(),
                MAX_GRID_DIMENSION
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimension() {
        let grid = GridConfig { radius: 1, step: 1 };
        assert_eq!(grid.dimension(), 3);
        assert_eq!(grid.sample_count(), 9);

        let grid = GridConfig { radius: 20, step: 3 };
        assert_eq!(grid.dimension(), 14);
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let huge = GridConfig {
            radius: 3_000_000_000,
            step: 1,
        };
        assert!(huge.validate().is_err());

        let wide = GridConfig {
            radius: 100_000,
            step: 1,
        };
        assert!(wide.validate().is_err());

        let coarse = GridConfig {
            radius: 100_000,
            step: 50,
        };
        assert_eq!(coarse.dimension(), 4001);
        assert!(coarse.validate().is_ok());

        let limit = GridConfig {
            radius: 2048,
            step: 1,
        };
        assert_eq!(limit.dimension(), MAX_GRID_DIMENSION);
        assert!(limit.validate().is_ok());
    }

    #[test]
    fn test_world_coord() {
        let grid = GridConfig { radius: 4, step: 2 };
        assert_eq!(grid.world_coord(0), -4.0);
        assert_eq!(grid.world_coord(2), 0.0);
        assert_eq!(grid.world_coord(4), 4.0);
    }

    #[test]
    fn test_validation() {
        assert!(GridConfig::default().validate().is_ok());
        assert!(GridConfig { radius: 0, step: 1 }.validate().is_err());
        assert!(GridConfig { radius: 5, step: 0 }.validate().is_err());
        assert!(GridConfig { radius: 2, step: 5 }.validate().is_err());

        assert!(RipplePhysics::default().validate().is_ok());
        let bad = RipplePhysics {
            height_scale: 0.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        let nan = RipplePhysics {
            speed: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }
}
