//! Core simulation trait
//!
//! Defines the lifecycle the app shell drives once per frame: apply any
//! pending input commands, advance the motion model by a fixed simulated
//! step, then compose the scene into the graphics backend.

use cgmath::Matrix4;

use crate::gfx::backend::GraphicsBackend;
use crate::input::SimCommand;
use crate::scene::composer::Composer;

/// A per-frame simulation driven by the app shell
///
/// There is exactly one mutator and one reader per frame (the frame
/// driver itself); `update` and `compose` together must complete before
/// the next frame is scheduled.
pub trait Simulation {
    /// Called once before the first frame
    ///
    /// Use this to initialize backend meshes and any static scene data.
    fn initialize(&mut self, backend: &mut dyn GraphicsBackend);

    /// Applies one discrete input command (edge-triggered key events)
    fn apply(&mut self, command: SimCommand);

    /// Advances the simulation by `dt` simulated seconds
    fn update(&mut self, dt: f32);

    /// Walks the scene for this frame, issuing draw calls
    ///
    /// `view` is the camera view matrix seeding the transform stack root.
    fn compose(
        &mut self,
        composer: &mut Composer,
        view: Matrix4<f32>,
        backend: &mut dyn GraphicsBackend,
    );

    /// Simulation name for display
    fn name(&self) -> &str;

    /// Whether the simulation is currently advancing
    fn is_running(&self) -> bool;

    /// Start/pause
    fn set_running(&mut self, running: bool);

    /// Reset to initial state
    fn reset(&mut self);
}
