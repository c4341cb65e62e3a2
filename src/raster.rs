//! Software draw target backed by an RGB image.

use glam::DVec2;
use image::{Rgb as Pixel, RgbImage};

use crate::color::Rgb;
use crate::rendering::DrawTarget;

/// CPU canvas for headless frame output
///
/// Polygons use even-odd scanline filling sampled at pixel centers; lines
/// are one pixel wide. Everything outside the image is clipped silently.
pub struct PixelCanvas {
    image: RgbImage,
    /// Scanline crossing scratch buffer
    crossings: Vec<f64>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
            crossings: Vec::with_capacity(8),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    #[inline]
    fn put(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64 {
            self.image.put_pixel(x as u32, y as u32, Pixel(color));
        }
    }

    fn fill_span(&mut self, y: i64, x_start: f64, x_end: f64, color: [u8; 3]) {
        // Pixel columns whose centers fall inside [x_start, x_end)
        let first = (x_start - 0.5).ceil().max(0.0) as i64;
        let last = ((x_end - 0.5).ceil() as i64).min(self.width() as i64);
        for x in first..last {
            self.put(x, y, color);
        }
    }
}

impl DrawTarget for PixelCanvas {
    fn clear(&mut self, color: Rgb) {
        let pixel = Pixel(color.to_rgb8());
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    fn fill_polygon(&mut self, points: &[DVec2; 4], color: Rgb) {
        if points.iter().any(|p| !p.is_finite()) {
            return;
        }
        let rgb = color.to_rgb8();

        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let first_row = (min_y - 0.5).ceil().max(0.0) as i64;
        let last_row = ((max_y - 0.5).ceil() as i64).min(self.height() as i64);

        let mut crossings = std::mem::take(&mut self.crossings);
        for row in first_row..last_row {
            let y = row as f64 + 0.5;
            crossings.clear();
            for k in 0..points.len() {
                let a = points[k];
                let b = points[(k + 1) % points.len()];
                // Half-open rule so shared vertices count once
                if (a.y <= y && y < b.y) || (b.y <= y && y < a.y) {
                    crossings.push(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for span in crossings.chunks_exact(2) {
                self.fill_span(row, span[0], span[1], rgb);
            }
        }
        self.crossings = crossings;
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgb) {
        if !from.is_finite() || !to.is_finite() {
            return;
        }
        let rgb = color.to_rgb8();

        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0);
        // Skip segments absurdly far off-canvas rather than walk them
        if steps > 4.0 * (self.width() + self.height()) as f64 + 4.0 {
            return;
        }
        let increment = delta / steps;
        let mut p = from;
        for _ in 0..=steps as usize {
            self.put(p.x.floor() as i64, p.y.floor() as i64, rgb);
            p += increment;
        }
    }
}
