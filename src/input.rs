//! Input mapping
//!
//! Translates winit keyboard events into discrete simulation commands
//! (edge-triggered: key repeats are ignored, and the lateral move is the
//! only command with a release edge), and defines the [`ControlPanel`]
//! slider struct a host GUI writes into between frames.

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::gfx::camera::OrbitCamera;
use crate::simulation::helicopter_sim::HelicopterSim;

/// Discrete commands consumed by a [`Simulation`]
///
/// [`Simulation`]: crate::simulation::traits::Simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimCommand {
    MotorUp,
    MotorDown,
    BeginMoveLeft,
    EndMoveLeft,
    ToggleFillMode,
    DropBox,
}

/// Maps a keyboard event to a simulation command, if any
///
/// Repeats are filtered so holding a key applies its command exactly
/// once; `ArrowLeft` additionally maps its release edge.
pub fn map_key_event(event: &KeyEvent) -> Option<SimCommand> {
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };
    map_key(code, event.state, event.repeat)
}

/// Key-code level mapping behind [`map_key_event`]
pub fn map_key(code: KeyCode, state: ElementState, repeat: bool) -> Option<SimCommand> {
    if state == ElementState::Released {
        return match code {
            KeyCode::ArrowLeft => Some(SimCommand::EndMoveLeft),
            _ => None,
        };
    }
    if repeat {
        return None;
    }

    match code {
        KeyCode::ArrowUp => Some(SimCommand::MotorUp),
        KeyCode::ArrowDown => Some(SimCommand::MotorDown),
        KeyCode::ArrowLeft => Some(SimCommand::BeginMoveLeft),
        KeyCode::KeyS => Some(SimCommand::ToggleFillMode),
        KeyCode::Space => Some(SimCommand::DropBox),
        _ => None,
    }
}

/// Continuous GUI-driven parameters
///
/// A thin adapter between host GUI widgets and the simulation/camera
/// configuration: the host writes fields at any time, and the app shell
/// copies them in atomically at the start of the next frame.
#[derive(Debug, Clone, Copy)]
pub struct ControlPanel {
    /// Camera distance from the scene center
    pub zoom: f32,
    pub camera_yaw: f32,
    pub camera_pitch: f32,
    /// Multiplier on the per-frame simulated step
    pub world_speed: f32,
    /// Flight ceiling
    pub ceiling: f32,
    /// Helicopter model scale
    pub heli_scale: f32,
    /// Multiplier on vertical flight speed
    pub heli_speed: f32,
    /// Radius of the lateral orbit
    pub orbit_radius: f32,
    /// Mass-like coefficient of the cargo fall
    pub box_gravity: f32,
    /// Cargo box edge length
    pub box_scale: f32,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            zoom: 5.0,
            camera_yaw: 0.6,
            camera_pitch: 0.4,
            world_speed: 1.0,
            ceiling: 2.0,
            heli_scale: 0.5,
            heli_speed: 1.0,
            orbit_radius: 1.6,
            box_gravity: 0.49,
            box_scale: 0.1,
        }
    }
}

impl ControlPanel {
    /// Copies the slider values into the live configuration
    ///
    /// Called by the frame driver before stepping, so a frame never sees
    /// a half-applied panel.
    pub fn apply(&self, sim: &mut HelicopterSim, camera: &mut OrbitCamera) {
        camera.set_distance(self.zoom);
        camera.set_yaw(self.camera_yaw);
        camera.set_pitch(self.camera_pitch);

        let flight = sim.flight_cfg_mut();
        flight.ceiling = self.ceiling;
        flight.speed_factor = self.heli_speed;
        flight.orbit_radius = self.orbit_radius;

        sim.cargo_cfg_mut().gravity_coeff = self.box_gravity;
        sim.set_heli_scale(self.heli_scale);
        sim.set_box_scale(self.box_scale);
    }
}
