//! Hue to RGB conversion with a process-wide lookup table.
//!
//! Edge colors only ever use full saturation and value, so those hues are
//! served from a table of [`HUE_BUCKETS`] entries filled once on first use.

use std::sync::OnceLock;

/// Number of evenly spaced hues in the lookup table
pub const HUE_BUCKETS: usize = 256;

/// Linear RGB color with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(
            rgb[0] as f64 / 255.0,
            rgb[1] as f64 / 255.0,
            rgb[2] as f64 / 255.0,
        )
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

/// Read-only table of fully saturated, full-value hues
pub struct ColorCache {
    table: [Rgb; HUE_BUCKETS],
}

impl ColorCache {
    fn build() -> Self {
        let mut table = [Rgb::BLACK; HUE_BUCKETS];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = hsv_to_rgb_exact(i as f64 / HUE_BUCKETS as f64, 1.0, 1.0);
        }
        Self { table }
    }

    /// Shared table, built on first access
    pub fn global() -> &'static ColorCache {
        static CACHE: OnceLock<ColorCache> = OnceLock::new();
        CACHE.get_or_init(ColorCache::build)
    }

    /// Bucket index for a hue: `floor(hue * N)` clamped to `[0, N)`
    pub fn bucket(hue: f64) -> usize {
        let hue = clamp_hue(hue);
        ((hue * HUE_BUCKETS as f64) as usize).min(HUE_BUCKETS - 1)
    }

    pub fn lookup(&self, hue: f64) -> Rgb {
        self.table[Self::bucket(hue)]
    }
}

fn clamp_hue(hue: f64) -> f64 {
    // NaN lands on red rather than poisoning the lookup
    if hue.is_nan() {
        0.0
    } else {
        hue.clamp(0.0, 1.0)
    }
}

/// Convert HSV (all components in `[0, 1]`) to RGB
///
/// Hue is clamped to `[0, 1]`. Full saturation and value are answered from
/// the shared [`ColorCache`]; anything else is computed directly.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    if s == 1.0 && v == 1.0 {
        return ColorCache::global().lookup(h);
    }
    hsv_to_rgb_exact(h, s, v)
}

/// Edge color for a normalized amplitude in `[0, 1]`
pub fn hue_to_rgb(hue: f64) -> Rgb {
    ColorCache::global().lookup(hue)
}

/// Hexagonal-sector HSV to RGB conversion without the lookup table
pub fn hsv_to_rgb_exact(h: f64, s: f64, v: f64) -> Rgb {
    let h = clamp_hue(h);

    let scaled = h * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match (sector as u32) % 6 {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}
