//! Quad faces over the projected grid, ordered back to front.

mod assemble;
mod face;
mod sort;

pub use assemble::assemble_faces;
pub use face::{Face, ResolvedFace};
pub use sort::DepthSorter;
