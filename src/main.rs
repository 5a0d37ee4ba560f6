//! Headless demo: sweep a pointer across a repel field and report what happened.
//!
//! Run with: `cargo run -- [config.json] [frames]`

use repel_field::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => FieldConfig::load(path)?,
        None => FieldConfig::for_viewport(WIDTH, HEIGHT),
    };
    let frames: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(240);

    let viewport = Viewport::new(WIDTH, HEIGHT);
    let projector = Projector::new(config.camera, viewport);
    let mut scene = Scene::mount(config, RecordingSurface::new(projector))?;
    scene.resize(WIDTH, HEIGHT)?;

    let mut clock = FrameClock::fixed(1.0 / 60.0);
    let mut displaced = 0;
    let mut missed = 0;
    let mut released = false;

    for frame in 0..frames {
        // Pointer crosses the window left to right along a shallow sine,
        // then leaves the window for the last quarter of the run.
        let t = frame as f32 / frames.max(1) as f32;
        if t < 0.75 {
            let x = t / 0.75 * WIDTH as f32;
            let y = HEIGHT as f32 * (0.5 + 0.25 * (t * std::f32::consts::TAU).sin());
            let Some(ndc) = viewport.to_ndc(x, y) else {
                continue;
            };
            match scene.pointer_moved(ndc)? {
                PointerOutcome::Applied(report) => displaced += report.displaced,
                PointerOutcome::Missed => missed += 1,
                PointerOutcome::Released(_) => {}
            }
        } else if !released {
            scene.pointer_left()?;
            released = true;
        }

        let tick = clock.advance();
        scene.frame(tick.delta)?;
    }

    let field = scene.field();
    let at_rest = field
        .positions()?
        .iter()
        .zip(field.rest_positions()?)
        .filter(|(p, r)| p == r)
        .count();
    info!(
        particles = field.len(),
        frames,
        drawn = scene.frames_drawn(),
        displaced,
        missed,
        at_rest,
        "sweep finished"
    );

    scene.unmount();
    Ok(())
}
