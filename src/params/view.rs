//! Viewer placement, presentation tilt and perspective projection.

/// Fixed-camera view of the spinning surface
#[derive(Debug, Clone, PartialEq)]
pub struct ViewParams {
    /// Distance from the viewer to the surface origin along the view axis (world units)
    pub viewer_distance: f64,

    /// Presentation tilt about the screen X axis (degrees)
    /// 55° shows the rings in three-quarter view
    pub base_tilt_deg: f64,

    /// Spin about the vertical axis (radians per second)
    pub spin_rate_rad_per_s: f64,

    /// Samples at or below this depth are not projected (world units)
    pub near_plane: f64,

    /// Perspective scale (pixels per unit of `x / depth`)
    pub fov: f64,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            viewer_distance: 90.0,
            base_tilt_deg: 55.0,
            spin_rate_rad_per_s: 0.25,
            near_plane: 0.01,
            fov: 700.0,
        }
    }
}

impl ViewParams {
    pub fn base_tilt_rad(&self) -> f64 {
        self.base_tilt_deg.to_radians()
    }

    /// Spin angle at time `t` (radians)
    pub fn spin_angle(&self, time_s: f64) -> f64 {
        time_s * self.spin_rate_rad_per_s
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.near_plane.is_finite() || self.near_plane <= 0.0 {
            return Err(format!("Near plane must be > 0, got {}", self.near_plane));
        }
        if !self.viewer_distance.is_finite() || self.viewer_distance <= self.near_plane {
            return Err(format!(
                "Viewer distance must exceed the near plane ({}), got {}",
                self.near_plane, self.viewer_distance
            ));
        }
        if !self.fov.is_finite() || self.fov <= 0.0 {
            return Err(format!("FOV must be > 0, got {}", self.fov));
        }
        if !self.base_tilt_deg.is_finite() || !self.spin_rate_rad_per_s.is_finite() {
            return Err("Tilt and spin rate must be finite".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(ViewParams::default().validate().is_ok());
    }

    #[test]
    fn test_spin_angle() {
        let view = ViewParams::default();
        assert_eq!(view.spin_angle(0.0), 0.0);
        assert!((view.spin_angle(4.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_projection() {
        let view = ViewParams {
            fov: 0.0,
            ..Default::default()
        };
        assert!(view.validate().is_err());

        let view = ViewParams {
            viewer_distance: 0.005,
            ..Default::default()
        };
        assert!(view.validate().is_err());
    }
}
