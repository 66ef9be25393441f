//! Application shell
//!
//! Winit-driven frame loop: each `RedrawRequested` applies the control
//! panel, advances the simulation by one fixed simulated step, and walks
//! the scene into the graphics backend; `about_to_wait` then requests the
//! next frame. Stopping the loop is just withholding that request.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::KeyCode,
    window::{Window, WindowAttributes},
};

use crate::gfx::backend::GraphicsBackend;
use crate::gfx::camera::{CameraPreset, OrbitCamera};
use crate::input::{map_key_event, ControlPanel};
use crate::scene::composer::Composer;
use crate::simulation::helicopter_sim::HelicopterSim;
use crate::simulation::traits::Simulation;

/// Simulated seconds per rendered frame, before the world-speed scale
pub const FRAME_STEP: f32 = 1.0 / 60.0;

const CAMERA_NUDGE: f32 = 0.05;

pub struct HeliApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    backend: Box<dyn GraphicsBackend>,
    simulation: HelicopterSim,
    composer: Composer,
    camera: OrbitCamera,
    panel: ControlPanel,
}

impl HeliApp {
    /// Creates an application rendering through `backend`
    pub fn new(backend: Box<dyn GraphicsBackend>) -> Self {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        let panel = ControlPanel::default();
        let camera = OrbitCamera::new(
            panel.zoom,
            panel.camera_pitch,
            panel.camera_yaw,
            cgmath::Vector3::new(0.0, 0.0, 0.0),
        );

        Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                backend,
                simulation: HelicopterSim::new(),
                composer: Composer::new(),
                camera,
                panel,
            },
        }
    }

    /// GUI-facing slider values, applied at the start of the next frame
    pub fn panel_mut(&mut self) -> &mut ControlPanel {
        &mut self.app_state.panel
    }

    pub fn simulation(&self) -> &HelicopterSim {
        &self.app_state.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut HelicopterSim {
        &mut self.app_state.simulation
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) {
        let event_loop = self.event_loop.take().expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .expect("Failed to run event loop");
    }
}

impl AppState {
    /// Camera keys write into the panel so the per-frame panel apply
    /// stays the single source of truth for the view.
    fn handle_camera_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::KeyA => self.panel.camera_yaw -= CAMERA_NUDGE,
            KeyCode::KeyD => self.panel.camera_yaw += CAMERA_NUDGE,
            KeyCode::KeyW => self.panel.camera_pitch += CAMERA_NUDGE,
            KeyCode::KeyX => self.panel.camera_pitch -= CAMERA_NUDGE,
            KeyCode::Digit1 | KeyCode::Digit2 | KeyCode::Digit3 | KeyCode::Digit4 => {
                let digit = match code {
                    KeyCode::Digit1 => 1,
                    KeyCode::Digit2 => 2,
                    KeyCode::Digit3 => 3,
                    _ => 4,
                };
                if let Some(preset) = CameraPreset::from_digit(digit) {
                    let (distance, pitch, yaw) = preset.orbit_parameters();
                    self.panel.zoom = distance;
                    self.panel.camera_pitch = pitch;
                    self.panel.camera_yaw = yaw;
                }
            }
            _ => return false,
        }
        true
    }

    fn render_frame(&mut self) {
        self.panel.apply(&mut self.simulation, &mut self.camera);
        self.simulation.update(FRAME_STEP * self.panel.world_speed);
        self.simulation.compose(
            &mut self.composer,
            self.camera.view_matrix(),
            self.backend.as_mut(),
        );
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Ok(window) = event_loop.create_window(
            WindowAttributes::default().with_inner_size(winit::dpi::LogicalSize::new(1200, 800)),
        ) {
            self.window = Some(Arc::new(window));
            self.simulation.initialize(self.backend.as_mut());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let winit::keyboard::PhysicalKey::Code(code) = event.physical_key {
                    if matches!(code, KeyCode::Escape) {
                        event_loop.exit();
                        return;
                    }
                    if event.state == ElementState::Pressed && self.handle_camera_key(code) {
                        return;
                    }
                }
                if let Some(command) = map_key_event(&event) {
                    self.simulation.apply(command);
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                // Projection is the backend's concern; just record it
                log::debug!("resized to {width}x{height}");
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
