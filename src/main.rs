//! Sombrero - a spinning ripple surface drawn as a hidden-line wireframe
//!
//! Renders a fixed-length animation headlessly and writes one PNG per frame.

mod cli;

use std::time::Instant;

use clap::Parser;

use cli::Args;
use sombrero::params::{RecordingConfig, RipplePhysics};
use sombrero::raster::PixelCanvas;
use sombrero::rendering::FaceRenderer;
use sombrero::surface::RippleSurface;

/// Main application state
struct App {
    surface: RippleSurface,
    renderer: FaceRenderer,
    canvas: PixelCanvas,
    recording: RecordingConfig,
}

impl App {
    fn new(args: &Args) -> Self {
        let physics = RipplePhysics::default();
        let render_config = args.render_config();

        let surface = RippleSurface::new(
            physics,
            args.view_params(),
            args.grid_config(),
            render_config.width as f64,
            render_config.height as f64,
        );
        let renderer = FaceRenderer::new(render_config.background_rgb(), surface.height_scale());
        let canvas = PixelCanvas::new(render_config.width, render_config.height);

        Self {
            surface,
            renderer,
            canvas,
            recording: args.recording_config(),
        }
    }

    /// Render and save a single frame
    fn render_frame(&mut self, index: usize) -> Result<(), Box<dyn std::error::Error>> {
        let time_s = self.recording.frame_time(index);
        let frame = self.surface.render(time_s);
        if frame.is_empty() {
            log::warn!("Frame {} at t={:.3}s has no visible faces", index, time_s);
        }
        self.renderer.render(&frame, &mut self.canvas);

        let path = self.recording.frame_path(index);
        self.canvas.image().save(&path)?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }

    /// Render every frame of the recording; frames are the only stopping points
    fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::create_dir_all(self.recording.frames_dir())?;

        let total = self.recording.total_frames();
        let started = Instant::now();
        for index in 0..total {
            self.render_frame(index)?;
            if (index + 1) % self.recording.fps.max(1) as usize == 0 {
                log::info!("Rendered {}/{} frames", index + 1, total);
            }
        }

        let elapsed = started.elapsed().as_secs_f64();
        log::info!(
            "Done: {} frames in {:.2}s ({:.1} fps) -> {}",
            total,
            elapsed,
            total as f64 / elapsed.max(1e-9),
            self.recording.frames_dir().display()
        );
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    args.validate()?;

    log::info!(
        "Sombrero: {}x{} canvas, {}s at {} fps, grid radius {} step {}",
        args.width,
        args.height,
        args.duration,
        args.fps,
        args.radius,
        args.step
    );

    let mut app = App::new(&args);
    app.run()
}
