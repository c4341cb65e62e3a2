//! Hidden-line face rendering through a pluggable draw target.

use glam::DVec2;

use crate::color::{hue_to_rgb, Rgb};
use crate::mesh::ResolvedFace;
use crate::surface::Frame;

/// Drawing surface supplied by the host
pub trait DrawTarget {
    /// Paint the whole canvas
    fn clear(&mut self, color: Rgb);

    /// Fill a quadrilateral given in screen coordinates
    fn fill_polygon(&mut self, points: &[DVec2; 4], color: Rgb);

    /// Stroke a line segment between two screen points
    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgb);
}

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    FillPolygon { points: [DVec2; 4], color: Rgb },
    StrokeLine { from: DVec2, to: DVec2, color: Rgb },
}

/// Draw target that records commands instead of painting
#[derive(Debug, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands, keeping the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl DrawTarget for CommandRecorder {
    fn clear(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_polygon(&mut self, points: &[DVec2; 4], color: Rgb) {
        self.commands.push(DrawCommand::FillPolygon {
            points: *points,
            color,
        });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgb) {
        self.commands.push(DrawCommand::StrokeLine { from, to, color });
    }
}

/// Paints ordered faces as background-filled quads with amplitude-colored edges
///
/// Each face is filled before its edges are stroked, so a nearer face hides
/// the edges of the faces drawn before it.
pub struct FaceRenderer {
    background: Rgb,
    height_scale: f64,
}

impl FaceRenderer {
    pub fn new(background: Rgb, height_scale: f64) -> Self {
        Self {
            background,
            height_scale,
        }
    }

    /// Edge color for the mean amplitude of its two corners
    pub fn edge_color(&self, avg_amplitude: f64) -> Rgb {
        let hue = if self.height_scale > 0.0 {
            (avg_amplitude / self.height_scale).min(1.0)
        } else {
            0.0
        };
        hue_to_rgb(hue)
    }

    /// Clear the canvas and draw every face of `frame` in order
    pub fn render(&self, frame: &Frame<'_>, target: &mut impl DrawTarget) {
        target.clear(self.background);
        for face in frame.resolved() {
            self.render_face(&face, target);
        }
    }

    /// One background fill followed by four edge strokes
    pub fn render_face(&self, face: &ResolvedFace, target: &mut impl DrawTarget) {
        let points = face.corners.map(|c| c.screen);
        target.fill_polygon(&points, self.background);

        for (a, b) in ResolvedFace::EDGES {
            let color = self.edge_color(face.edge_amplitude(a, b));
            target.stroke_line(points[a], points[b], color);
        }
    }
}
