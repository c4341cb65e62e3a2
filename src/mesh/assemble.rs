//! Build quad faces from 2x2 neighbourhoods of valid samples.

use super::face::Face;
use crate::surface::SampleGrid;

/// Rebuild `faces` from the current grid contents
///
/// Cells with any invalid corner produce no face, so a sample behind the
/// near plane removes every face touching it. `faces` is cleared first and
/// filled in cell order; its capacity is kept between frames.
pub fn assemble_faces(grid: &SampleGrid, faces: &mut Vec<Face>) {
    faces.clear();

    let dim = grid.dimension();
    if dim < 2 {
        return;
    }

    let points = grid.points();
    for i in 0..dim - 1 {
        for j in 0..dim - 1 {
            let corners = [
                grid.index(i, j),
                grid.index(i + 1, j),
                grid.index(i + 1, j + 1),
                grid.index(i, j + 1),
            ];

            let mut depth_sum = 0.0;
            let mut all_valid = true;
            for &index in &corners {
                match points[index].projected() {
                    Some(p) => depth_sum += p.depth,
                    None => {
                        all_valid = false;
                        break;
                    }
                }
            }
            if !all_valid {
                continue;
            }

            faces.push(Face {
                cell: i * (dim - 1) + j,
                corners,
                avg_depth: depth_sum * 0.25,
            });
        }
    }
}
