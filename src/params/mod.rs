//! Parameter definitions with units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Units (world units, seconds, radians, pixels)
//! - Documented ranges and meanings
//! - A `validate` method per struct

mod render;
mod surface;
mod view;

// Re-export all types
pub use render::{RecordingConfig, RenderConfig};
pub use surface::{GridConfig, RipplePhysics, MAX_GRID_DIMENSION};
pub use view::ViewParams;
