//! Spin, presentation tilt and perspective projection of the sample grid.

use glam::{DMat3, DVec2, DVec3};

use super::grid::{GridPoint, ProjectedPoint, SampleGrid};
use super::wave::RippleWave;
use crate::params::ViewParams;

/// Canvas the grid is projected onto (pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// False for zero, negative or non-finite sizes (e.g. mid-resize)
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// World-to-screen mapping for one frame
pub struct ViewTransform {
    rotation: DMat3,
    viewer_distance: f64,
    near_plane: f64,
    fov: f64,
    center: DVec2,
}

impl ViewTransform {
    /// Build the frame transform: spin about Z by `t * spin_rate`, then tilt about X
    pub fn new(view: &ViewParams, time_s: f64, viewport: Viewport, fov: f64) -> Self {
        let spin = DMat3::from_rotation_z(view.spin_angle(time_s));
        let tilt = DMat3::from_rotation_x(view.base_tilt_rad());
        Self {
            rotation: tilt * spin,
            viewer_distance: view.viewer_distance,
            near_plane: view.near_plane,
            fov,
            center: viewport.center(),
        }
    }

    /// Project a world-space sample; `None` when it lies at or behind the near plane
    pub fn project(&self, world: DVec3) -> Option<ProjectedPoint> {
        let rotated = self.rotation * world;
        let depth = self.viewer_distance + rotated.z;
        if !depth.is_finite() || depth <= self.near_plane {
            return None;
        }

        let factor = self.fov / depth;
        let screen = DVec2::new(rotated.x * factor, -rotated.y * factor) + self.center;
        Some(ProjectedPoint {
            screen,
            depth,
            amplitude: world.z.abs(),
        })
    }
}

/// Evaluate the wave over the grid and project every sample in place
///
/// Each slot is overwritten as a whole with `Valid` or `Invalid`, so nothing
/// from a previous frame survives. A degenerate viewport or field of view
/// leaves the whole grid invalid.
pub fn transform_grid(
    grid: &mut SampleGrid,
    wave: &RippleWave,
    view: &ViewParams,
    time_s: f64,
    viewport: Viewport,
    fov: f64,
) {
    if !viewport.is_drawable() || !fov.is_finite() || fov <= 0.0 {
        log::debug!(
            "Degenerate projection ({}x{}, fov {}), skipping frame geometry",
            viewport.width,
            viewport.height,
            fov
        );
        grid.invalidate_all();
        return;
    }

    let transform = ViewTransform::new(view, time_s, viewport, fov);
    let config = *grid.config();

    for (row, points) in grid.rows_mut() {
        let x = config.world_coord(row);
        for (col, slot) in points.iter_mut().enumerate() {
            let y = config.world_coord(col);
            let z = wave.height(x, y, time_s);
            *slot = match transform.project(DVec3::new(x, y, z)) {
                Some(p) => GridPoint::Valid(p),
                None => GridPoint::Invalid,
            };
        }
    }
}
