//! Command-line argument parsing for the orrery.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;
use crate::settings::{SpeedMode, ViewMode};

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Headless orrery camera choreography driver")]
pub struct CliArgs {
    /// Orbital speed preset.
    #[arg(long, value_enum)]
    pub speed: Option<SpeedMode>,

    /// Camera view preset.
    #[arg(long, value_enum)]
    pub view: Option<ViewMode>,

    /// Body to select once the session starts.
    #[arg(long)]
    pub select: Option<String>,

    /// Camera transition duration in seconds.
    #[arg(long)]
    pub transition_seconds: Option<f32>,

    /// Simulated frames per second.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Frames to simulate per scripted step.
    #[arg(long)]
    pub frames: Option<u32>,

    /// RON body catalog replacing the built-in solar system.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(speed) = args.speed {
            self.simulation.settings.speed_mode = speed;
        }
        if let Some(view) = args.view {
            self.simulation.settings.view_mode = view;
        }
        if let Some(seconds) = args.transition_seconds {
            self.camera.transition_seconds = seconds;
        }
        if let Some(fps) = args.fps {
            self.simulation.target_fps = fps;
        }
        if let Some(frames) = args.frames {
            self.simulation.frames_per_step = frames;
        }
        if let Some(ref path) = args.catalog {
            self.catalog.path = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
