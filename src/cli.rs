//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use sombrero::params::{GridConfig, RecordingConfig, RenderConfig, ViewParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "sombrero")]
#[command(about = "Render the spinning ripple surface to PNG frames", long_about = None)]
pub struct Args {
    /// Length of the recording (seconds of animation)
    #[arg(long, value_name = "SECONDS", default_value_t = 2.0)]
    pub duration: f64,

    /// Frames per second of animation time
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Animation time of the first frame (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    pub start_time: f64,

    /// Canvas width (pixels)
    #[arg(long, default_value_t = 960)]
    pub width: u32,

    /// Canvas height (pixels)
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Perspective scale (pixels)
    #[arg(long, default_value_t = 700.0)]
    pub fov: f64,

    /// Half-extent of the sampled surface (world units)
    #[arg(long, default_value_t = 20)]
    pub radius: u32,

    /// Distance between samples (world units)
    #[arg(long, default_value_t = 1)]
    pub step: u32,

    /// Output directory (frames go to <DIR>/frames)
    #[arg(long, value_name = "DIR", default_value = "recording")]
    pub output: PathBuf,
}

impl Args {
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            radius: self.radius,
            step: self.step,
        }
    }

    pub fn view_params(&self) -> ViewParams {
        ViewParams {
            fov: self.fov,
            ..Default::default()
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            ..Default::default()
        }
    }

    pub fn recording_config(&self) -> RecordingConfig {
        RecordingConfig {
            start_time_s: self.start_time,
            output_dir: self.output.clone(),
            fps: self.fps,
            ..RecordingConfig::new(self.duration)
        }
    }

    /// Validate every derived configuration
    pub fn validate(&self) -> Result<(), String> {
        self.grid_config().validate()?;
        self.view_params().validate()?;
        self.render_config().validate()?;
        self.recording_config().validate()
    }
}
