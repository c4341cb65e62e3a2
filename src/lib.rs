//! Sombrero library - spinning ripple surface with hidden-line wireframe

pub mod color;
pub mod mesh;
pub mod params;
pub mod raster;
pub mod rendering;
pub mod surface;
