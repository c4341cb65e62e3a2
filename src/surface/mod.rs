//! Ripple height field sampled on a grid and projected to the screen.

mod grid;
mod system;
mod transform;
mod wave;

pub use grid::{GridPoint, ProjectedPoint, SampleGrid};
pub use system::{Frame, RippleSurface};
pub use transform::{transform_grid, ViewTransform, Viewport};
pub use wave::RippleWave;
