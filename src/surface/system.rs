//! Per-frame geometry pipeline: wave, projection, faces, depth order.

use super::grid::SampleGrid;
use super::transform::{transform_grid, Viewport};
use super::wave::RippleWave;
use crate::mesh::{assemble_faces, DepthSorter, Face, ResolvedFace};
use crate::params::{GridConfig, RipplePhysics, ViewParams};

/// Spinning ripple surface with reusable grid and face storage
pub struct RippleSurface {
    wave: RippleWave,
    view: ViewParams,
    grid: SampleGrid,
    faces: Vec<Face>,
    sorter: DepthSorter,
    viewport: Viewport,
}

impl RippleSurface {
    /// Create a surface for a canvas of `width` x `height` pixels
    pub fn new(
        physics: RipplePhysics,
        view: ViewParams,
        grid: GridConfig,
        width: f64,
        height: f64,
    ) -> Self {
        let grid = SampleGrid::new(grid);
        let cell_count = cell_count(&grid);
        Self {
            wave: RippleWave::new(physics),
            view,
            grid,
            faces: Vec::with_capacity(cell_count),
            sorter: DepthSorter::new(),
            viewport: Viewport::new(width, height),
        }
    }

    /// Update the canvas size used by [`render`](Self::render)
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn set_fov(&mut self, fov: f64) {
        self.view.fov = fov;
    }

    pub fn fov(&self) -> f64 {
        self.view.fov
    }

    /// Height normalization for edge colors
    pub fn height_scale(&self) -> f64 {
        self.wave.physics().height_scale
    }

    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    /// Replace the grid layout, reallocating sample and face storage
    pub fn set_grid_config(&mut self, config: GridConfig) {
        if *self.grid.config() == config {
            return;
        }
        self.grid = SampleGrid::new(config);
        self.faces = Vec::with_capacity(cell_count(&self.grid));
        self.sorter.reset();
    }

    /// Frame at `time_s` using the stored canvas size and field of view
    pub fn render(&mut self, time_s: f64) -> Frame<'_> {
        let Viewport { width, height } = self.viewport;
        let fov = self.view.fov;
        self.compute_frame(time_s, width, height, fov)
    }

    /// Compute the back-to-front face list for one frame
    ///
    /// Every sample is recomputed from the arguments alone, so identical
    /// inputs give identical frames. A non-positive canvas or field of view
    /// yields an empty frame.
    pub fn compute_frame(
        &mut self,
        time_s: f64,
        width: f64,
        height: f64,
        fov: f64,
    ) -> Frame<'_> {
        transform_grid(
            &mut self.grid,
            &self.wave,
            &self.view,
            time_s,
            Viewport::new(width, height),
            fov,
        );
        assemble_faces(&self.grid, &mut self.faces);
        self.sorter.sort(&mut self.faces, cell_count(&self.grid));

        log::trace!("t={:.3}s: {} faces", time_s, self.faces.len());

        Frame {
            grid: &self.grid,
            faces: &self.faces,
        }
    }
}

fn cell_count(grid: &SampleGrid) -> usize {
    let cells_per_side = grid.dimension().saturating_sub(1);
    cells_per_side * cells_per_side
}

/// Read-only view of one computed frame, valid until the surface is next mutated
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    grid: &'a SampleGrid,
    faces: &'a [Face],
}

impl<'a> Frame<'a> {
    pub fn grid(&self) -> &'a SampleGrid {
        self.grid
    }

    /// Faces in draw order, farthest first
    pub fn faces(&self) -> &'a [Face] {
        self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Faces in draw order with corner points resolved
    pub fn resolved(&self) -> impl Iterator<Item = ResolvedFace> + 'a {
        let (grid, faces) = (self.grid, self.faces);
        faces.iter().filter_map(move |face| {
            let resolved = face.resolve(grid);
            debug_assert!(
                resolved.is_some(),
                "face {} references a sample invalidated after assembly",
                face.cell
            );
            resolved
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::GridPoint;

    fn surface(radius: u32) -> RippleSurface {
        RippleSurface::new(
            RipplePhysics::default(),
            ViewParams::default(),
            GridConfig { radius, step: 1 },
            100.0,
            100.0,
        )
    }

    #[test]
    fn test_small_grid_scenario() {
        let mut surface = surface(1);
        let frame = surface.compute_frame(0.0, 100.0, 100.0, 700.0);

        assert_eq!(frame.grid().dimension(), 3);
        assert_eq!(frame.len(), 4);
        let center = frame
            .grid()
            .get(1, 1)
            .and_then(GridPoint::projected)
            .unwrap();
        assert!((center.amplitude - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_is_depth_ordered() {
        let mut surface = surface(20);
        for t in [0.0, 0.8, 3.3, 17.0] {
            let frame = surface.compute_frame(t, 960.0, 720.0, 700.0);
            assert!(!frame.is_empty());
            assert!(frame.len() <= 40 * 40);
            for pair in frame.faces().windows(2) {
                assert!(pair[0].avg_depth >= pair[1].avg_depth);
            }
        }
    }

    #[test]
    fn test_deterministic_frames() {
        let mut surface = surface(12);
        let first: Vec<ResolvedFace> = surface
            .compute_frame(2.5, 800.0, 600.0, 650.0)
            .resolved()
            .collect();
        // Different frame in between to disturb the sorter's history
        surface.compute_frame(9.0, 800.0, 600.0, 650.0);
        let second: Vec<ResolvedFace> = surface
            .compute_frame(2.5, 800.0, 600.0, 650.0)
            .resolved()
            .collect();
        assert_eq!(first, second);

        let mut fresh = self::surface(12);
        let third: Vec<ResolvedFace> = fresh
            .compute_frame(2.5, 800.0, 600.0, 650.0)
            .resolved()
            .collect();
        assert_eq!(first, third);
    }

    #[test]
    fn test_every_face_resolves() {
        let mut surface = surface(10);
        for t in [0.0, 1.1, 6.4] {
            let frame = surface.compute_frame(t, 640.0, 480.0, 700.0);
            assert_eq!(frame.resolved().count(), frame.len());
        }
    }

    #[test]
    fn test_degenerate_canvas_yields_no_faces() {
        let mut surface = surface(5);
        assert!(surface.compute_frame(1.0, 0.0, 600.0, 700.0).is_empty());
        assert!(surface.compute_frame(1.0, 800.0, -1.0, 700.0).is_empty());
        assert!(!surface.compute_frame(1.0, 800.0, 600.0, 700.0).is_empty());
    }

    #[test]
    fn test_near_plane_culls_faces() {
        // Surface flipped towards the viewer: depth = distance - height,
        // so only the 20-unit center peak crosses the near plane
        let view = ViewParams {
            viewer_distance: 17.0,
            base_tilt_deg: 180.0,
            ..Default::default()
        };
        let mut surface = RippleSurface::new(
            RipplePhysics::default(),
            view,
            GridConfig { radius: 2, step: 1 },
            100.0,
            100.0,
        );
        let frame = surface.compute_frame(0.0, 100.0, 100.0, 700.0);

        let center = frame.grid().index(2, 2);
        assert!(!frame.grid().points()[center].is_valid());
        assert!(frame.faces().iter().all(|f| !f.corners.contains(&center)));
        assert_eq!(frame.grid().valid_count(), 24);
        assert_eq!(frame.len(), 12);
    }

    #[test]
    fn test_canvas_and_fov_setters() {
        let mut surface = surface(3);
        surface.set_canvas_size(320.0, 200.0);
        surface.set_fov(400.0);
        assert_eq!(surface.fov(), 400.0);
        assert_eq!(surface.height_scale(), 20.0);

        let via_render: Vec<ResolvedFace> = surface.render(1.0).resolved().collect();
        let explicit: Vec<ResolvedFace> = surface
            .compute_frame(1.0, 320.0, 200.0, 400.0)
            .resolved()
            .collect();
        assert_eq!(via_render, explicit);
    }

    #[test]
    fn test_grid_reconfiguration() {
        let mut surface = surface(2);
        assert_eq!(surface.compute_frame(0.5, 100.0, 100.0, 700.0).len(), 16);

        surface.set_grid_config(GridConfig { radius: 4, step: 2 });
        assert_eq!(surface.grid().dimension(), 5);
        assert_eq!(surface.compute_frame(0.5, 100.0, 100.0, 700.0).len(), 16);

        surface.set_grid_config(GridConfig { radius: 3, step: 1 });
        assert_eq!(surface.compute_frame(0.5, 100.0, 100.0, 700.0).len(), 36);
    }
}
