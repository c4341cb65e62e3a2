//! Painter's-algorithm ordering of faces, farthest first.

use std::cmp::Ordering;

use super::face::Face;

/// Back-to-front sorter that carries the previous frame's order forward
///
/// Consecutive frames of a slowly spinning surface produce almost the same
/// order, so faces are first laid out in last frame's order and then
/// insertion-sorted. Ties on depth are broken by cell index, which makes the
/// result independent of the starting order.
#[derive(Debug, Default)]
pub struct DepthSorter {
    /// Cell indices in the order they were drawn last frame
    previous: Vec<usize>,
    /// Scratch slots indexed by cell
    slots: Vec<Option<Face>>,
    /// Faces whose cell was already taken during replay
    spill: Vec<Face>,
}

/// Farther faces first; equal depths by ascending cell
pub fn draw_order(a: &Face, b: &Face) -> Ordering {
    b.avg_depth
        .total_cmp(&a.avg_depth)
        .then_with(|| a.cell.cmp(&b.cell))
}

impl DepthSorter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous order (e.g. after the grid layout changed)
    pub fn reset(&mut self) {
        self.previous.clear();
        self.slots.clear();
        self.spill.clear();
    }

    /// Sort `faces` in place, farthest `avg_depth` first
    ///
    /// `cell_count` bounds the cell indices present in `faces`.
    pub fn sort(&mut self, faces: &mut Vec<Face>, cell_count: usize) {
        if self.previous.is_empty() || faces.iter().any(|f| f.cell >= cell_count) {
            faces.sort_by(draw_order);
        } else if self.replay_previous_order(faces, cell_count) {
            insertion_sort(faces);
        } else {
            faces.sort_by(draw_order);
        }

        self.previous.clear();
        self.previous.extend(faces.iter().map(|f| f.cell));
    }

    /// Reorder `faces` so cells seen last frame come first, in last frame's order
    ///
    /// Returns false, with every face still in `faces`, when a cell appears
    /// more than once and the replay cannot place them all.
    fn replay_previous_order(&mut self, faces: &mut Vec<Face>, cell_count: usize) -> bool {
        self.slots.clear();
        self.slots.resize(cell_count, None);
        self.spill.clear();
        for face in faces.drain(..) {
            let slot = &mut self.slots[face.cell];
            if slot.is_none() {
                *slot = Some(face);
            } else {
                self.spill.push(face);
            }
        }

        if !self.spill.is_empty() {
            faces.extend(self.slots.iter_mut().filter_map(Option::take));
            faces.append(&mut self.spill);
            return false;
        }

        for &cell in &self.previous {
            if let Some(face) = self.slots.get_mut(cell).and_then(Option::take) {
                faces.push(face);
            }
        }
        // Cells that became visible this frame, in cell order
        faces.extend(self.slots.iter_mut().filter_map(Option::take));
        true
    }
}

/// Stable insertion sort, linear on nearly sorted input
fn insertion_sort(faces: &mut [Face]) {
    for i in 1..faces.len() {
        let current = faces[i];
        let mut j = i;
        while j > 0 && draw_order(&faces[j - 1], &current) == Ordering::Greater {
            faces[j] = faces[j - 1];
            j -= 1;
        }
        faces[j] = current;
    }
}
