//! Grid cell faces holding indices into the sample arena.

use crate::surface::{ProjectedPoint, SampleGrid};

/// One grid cell whose four corners were all valid this frame
///
/// Corners are flat grid indices in winding order
/// `(i,j), (i+1,j), (i+1,j+1), (i,j+1)`. Only meaningful for the frame
/// in which the face was assembled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Cell index `i * (dim - 1) + j`
    pub cell: usize,
    pub corners: [usize; 4],
    /// Mean of the four corner depths
    pub avg_depth: f64,
}

impl Face {
    /// Corner points looked up in `grid`, `None` if any corner is no longer valid
    pub fn resolve(&self, grid: &SampleGrid) -> Option<ResolvedFace> {
        let mut corners = [None; 4];
        for (slot, &index) in corners.iter_mut().zip(&self.corners) {
            *slot = grid.point(index)?.projected().copied();
        }
        Some(ResolvedFace {
            corners: [corners[0]?, corners[1]?, corners[2]?, corners[3]?],
            avg_depth: self.avg_depth,
        })
    }
}

/// A face with its corner points copied out of the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedFace {
    pub corners: [ProjectedPoint; 4],
    pub avg_depth: f64,
}

impl ResolvedFace {
    /// Edges as corner index pairs: `(0,1), (1,2), (2,3), (3,0)`
    pub const EDGES: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 3), (3, 0)];

    /// Mean amplitude of the two corners of an edge
    pub fn edge_amplitude(&self, a: usize, b: usize) -> f64 {
        (self.corners[a].amplitude + self.corners[b].amplitude) * 0.5
    }
}
