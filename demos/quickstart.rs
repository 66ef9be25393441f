//! # Quickstart
//!
//! Runs the helicopter demo against the logging trace backend.
//!
//! Keys: ArrowUp/ArrowDown throttle, hold ArrowLeft to circle, S toggles
//! wireframe, Space drops a cargo box, 1-4 pick camera presets, A/D/W/X
//! nudge the camera, Escape quits.
//!
//! ```bash
//! RUST_LOG=heliscene=debug cargo run --example quickstart
//! ```

use anyhow::Result;
use heliscene::{HeliApp, TraceBackend};

fn main() -> Result<()> {
    env_logger::init();

    let mut app = HeliApp::new(Box::new(TraceBackend::new()));

    // Start a touch slower than real time so the motion is easy to watch
    app.panel_mut().world_speed = 0.8;

    app.run();
    Ok(())
}
