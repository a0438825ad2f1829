//! Headless orrery driver.
//!
//! Loads configuration and the body catalog, then plays a short scripted
//! session (select, change view, drag, clear) at a fixed frame rate and
//! logs where the camera ends up after each step.

use std::sync::Arc;

use clap::Parser;
use glam::Vec2;
use orrery_app::{AppError, FrameClock, OrrerySession, SceneFrame};
use orrery_bodies::{BodyDescriptor, BodyRegistry, solar_system};
use orrery_camera::DragInput;
use orrery_config::{CliArgs, Config, ViewMode};
use tracing::info;

fn main() -> Result<(), AppError> {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(Config::default_dir)
        .ok_or(AppError::NoConfigDir)?;

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config
        .debug
        .log_dir
        .clone()
        .unwrap_or_else(|| config_dir.join("logs"));
    let file_log_dir = config.debug.file_logging.then_some(log_dir.as_path());
    orrery_log::init_logging(file_log_dir, cfg!(debug_assertions), Some(&config));

    let registry = match &config.catalog.path {
        Some(path) => BodyRegistry::load(path)?,
        None => solar_system()?,
    };
    info!("Loaded {} bodies", registry.len());

    let target = args.select.as_deref().unwrap_or("earth");
    run_script(Arc::new(registry), &config, target);
    Ok(())
}

fn run_script(registry: Arc<BodyRegistry>, config: &Config, target: &str) {
    let mut clock = FrameClock::new();
    let mut session = OrrerySession::new(registry, config, clock.now());
    session.subscribe(|body: Option<&BodyDescriptor>| match body {
        Some(body) => info!("Info panel: {} - {}", body.name, body.facts.description),
        None => info!("Info panel closed"),
    });

    let pacing = Pacing {
        frame_time: 1.0 / f64::from(config.simulation.target_fps.max(1)),
        frames: config.simulation.frames_per_step.max(1),
    };
    let run = |session: &mut OrrerySession, clock: &mut FrameClock, step: &str| {
        let frame = pacing.run(session, clock);
        report(step, &frame);
    };

    run(&mut session, &mut clock, "startup");

    if !session.select_body(target, clock.now()) {
        info!("No body named '{target}' in the catalog");
    }
    run(&mut session, &mut clock, "select");

    let next_view = match session.settings().view_mode {
        ViewMode::TopDown => ViewMode::Side,
        _ => ViewMode::TopDown,
    };
    session.set_view_mode(next_view, clock.now());
    run(&mut session, &mut clock, "view change with selection");

    session.apply_drag(DragInput::Rotate { dx: 120.0, dy: -40.0 });
    session.apply_drag(DragInput::Zoom { lines: 3.0 });
    run(&mut session, &mut clock, "drag");

    session.clear_selection(clock.now());
    run(&mut session, &mut clock, "clear selection");

    if let Some(cursor) = session.pointer_moved(Vec2::ZERO) {
        info!("Cursor at screen center: {cursor:?}");
    }
    session.set_view_mode(ViewMode::Free, clock.now());
    run(&mut session, &mut clock, "free view");
}

/// Fixed frame rate of the scripted run.
struct Pacing {
    frame_time: f64,
    frames: u32,
}

impl Pacing {
    /// Run one scripted step and return its last frame.
    fn run(&self, session: &mut OrrerySession, clock: &mut FrameClock) -> SceneFrame {
        let mut frame = session.frame(clock.advance(self.frame_time));
        for _ in 1..self.frames {
            frame = session.frame(clock.advance(self.frame_time));
        }
        frame
    }
}

fn report(step: &str, frame: &SceneFrame) {
    info!(
        "[{step}] t={:.2}s frame={} camera={} look_at={} transition={:?} selected={}",
        frame.now,
        frame.frame,
        frame.camera.position,
        frame.camera.look_at,
        frame.transition,
        frame
            .selected
            .as_ref()
            .map_or("none", |id| id.as_str())
    );
}
