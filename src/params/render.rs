//! Rendering and recording configuration.

use std::path::PathBuf;

use crate::color::Rgb;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas width (pixels)
    pub width: u32,

    /// Canvas height (pixels)
    pub height: u32,

    /// Fill color of every face and of the cleared canvas
    pub background: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 720,
            background: [10, 12, 18],
        }
    }
}

impl RenderConfig {
    pub fn background_rgb(&self) -> Rgb {
        Rgb::from_rgb8(self.background)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Canvas must be non-empty, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f64,

    /// Animation time of the first frame (seconds)
    pub start_time_s: f64,

    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs,
            start_time_s: 0.0,
            output_dir: PathBuf::from("recording"),
            fps: 60,
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f64).ceil().max(0.0) as usize
    }

    /// Animation time of frame `index` (seconds)
    pub fn frame_time(&self, index: usize) -> f64 {
        self.start_time_s + index as f64 / self.fps.max(1) as f64
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> PathBuf {
        self.output_dir.join("frames")
    }

    /// Path of the PNG for frame `index`
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.frames_dir().join(format!("frame_{:05}.png", index))
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(format!(
                "Recording duration must be > 0, got {}",
                self.duration_secs
            ));
        }
        if !self.start_time_s.is_finite() || self.start_time_s < 0.0 {
            return Err(format!(
                "Start time must be finite and >= 0, got {}",
                self.start_time_s
            ));
        }
        if self.fps == 0 {
            return Err("FPS must be > 0".to_string());
        }
        Ok(())
    }
}
