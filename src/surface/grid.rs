//! Fixed-size arena of projected samples, addressed by `(row, col)`.

use glam::DVec2;

use crate::params::GridConfig;

/// A sample that survived the near plane this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Screen position (pixels)
    pub screen: DVec2,
    /// Distance from the viewer along the view axis
    pub depth: f64,
    /// Absolute wave height at the sample
    pub amplitude: f64,
}

/// Per-sample state, decided afresh every frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GridPoint {
    Valid(ProjectedPoint),
    #[default]
    Invalid,
}

impl GridPoint {
    pub fn projected(&self) -> Option<&ProjectedPoint> {
        match self {
            GridPoint::Valid(p) => Some(p),
            GridPoint::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, GridPoint::Valid(_))
    }
}

/// Square grid of [`GridPoint`]s stored row-major in one allocation
///
/// Row `i` holds world `x = -R + i*s`, column `j` holds world `y = -R + j*s`.
pub struct SampleGrid {
    config: GridConfig,
    dimension: usize,
    points: Vec<GridPoint>,
}

impl SampleGrid {
    pub fn new(config: GridConfig) -> Self {
        let dimension = config.dimension();
        log::debug!(
            "Allocating {}x{} sample grid (radius {}, step {})",
            dimension,
            dimension,
            config.radius,
            config.step
        );
        Self {
            config,
            dimension,
            points: vec![GridPoint::Invalid; dimension * dimension],
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Samples per side
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Flat index of `(row, col)`
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.dimension + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&GridPoint> {
        if row < self.dimension && col < self.dimension {
            self.points.get(self.index(row, col))
        } else {
            None
        }
    }

    /// Point at a flat index
    pub fn point(&self, index: usize) -> Option<&GridPoint> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Rows of the grid as mutable slices, each paired with its row index
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (usize, &mut [GridPoint])> + '_ {
        self.points.chunks_mut(self.dimension).enumerate()
    }

    /// Mark every sample invalid
    pub fn invalidate_all(&mut self) {
        self.points.fill(GridPoint::Invalid);
    }

    pub fn valid_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_valid()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_allocation() {
        let grid = SampleGrid::new(GridConfig { radius: 2, step: 1 });
        assert_eq!(grid.dimension(), 5);
        assert_eq!(grid.points().len(), 25);
        assert_eq!(grid.valid_count(), 0);
    }

    #[test]
    fn test_row_major_indexing() {
        let grid = SampleGrid::new(GridConfig { radius: 1, step: 1 });
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(1, 2), 5);
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(2, 2).is_some());
    }

    #[test]
    fn test_rows_mut_covers_grid() {
        let mut grid = SampleGrid::new(GridConfig { radius: 1, step: 1 });
        for (row, points) in grid.rows_mut() {
            for (col, point) in points.iter_mut().enumerate() {
                *point = GridPoint::Valid(ProjectedPoint {
                    screen: DVec2::new(row as f64, col as f64),
                    depth: 1.0,
                    amplitude: 0.0,
                });
            }
        }
        assert_eq!(grid.valid_count(), 9);
        let p = grid.get(2, 1).and_then(GridPoint::projected).unwrap();
        assert_eq!(p.screen, DVec2::new(2.0, 1.0));

        grid.invalidate_all();
        assert_eq!(grid.valid_count(), 0);
    }
}
