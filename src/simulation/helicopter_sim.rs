//! Helicopter demo simulation
//!
//! Ties the flight dynamics, the cargo-drop model and the scene builders
//! together behind the [`Simulation`] trait: input commands mutate the
//! flight state, `update` advances both motion models by the frame step,
//! and `compose` renders the static world plus the dynamic helicopter
//! and cargo subtrees.

use cgmath::Matrix4;

use crate::gfx::backend::{FillMode, GraphicsBackend, MeshKind};
use crate::input::SimCommand;
use crate::scene::composer::Composer;
use crate::scene::helicopter::{cargo_part, helicopter_part};
use crate::scene::part::ScenePart;
use crate::scene::world::world_part;
use crate::simulation::cargo::{step_boxes, CargoBox, CargoConfig};
use crate::simulation::flight::{FlightConfig, FlightState};
use crate::simulation::traits::Simulation;

pub struct HelicopterSim {
    flight_cfg: FlightConfig,
    cargo_cfg: CargoConfig,
    state: FlightState,
    boxes: Vec<CargoBox>,
    world: ScenePart,
    fill_mode: FillMode,
    heli_scale: f32,
    box_scale: f32,
    running: bool,
}

impl HelicopterSim {
    pub fn new() -> Self {
        Self {
            flight_cfg: FlightConfig::default(),
            cargo_cfg: CargoConfig::default(),
            state: FlightState::new(),
            boxes: Vec::new(),
            world: world_part(),
            fill_mode: FillMode::default(),
            heli_scale: 0.5,
            box_scale: 0.1,
            running: true,
        }
    }

    // Numeric readouts for a host display layer

    pub fn height(&self) -> f32 {
        self.state.height
    }

    pub fn motor_level(&self) -> u8 {
        self.state.motor_level
    }

    pub fn live_box_count(&self) -> usize {
        self.boxes.len()
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    pub fn flight_state(&self) -> &FlightState {
        &self.state
    }

    // Configuration access for GUI adapters; written between frames only

    pub fn flight_cfg_mut(&mut self) -> &mut FlightConfig {
        &mut self.flight_cfg
    }

    pub fn cargo_cfg_mut(&mut self) -> &mut CargoConfig {
        &mut self.cargo_cfg
    }

    pub fn set_heli_scale(&mut self, scale: f32) {
        self.heli_scale = scale;
    }

    pub fn set_box_scale(&mut self, scale: f32) {
        self.box_scale = scale;
    }
}

impl Default for HelicopterSim {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for HelicopterSim {
    fn initialize(&mut self, backend: &mut dyn GraphicsBackend) {
        for kind in MeshKind::ALL {
            backend.init_mesh(kind);
        }
    }

    fn apply(&mut self, command: SimCommand) {
        match command {
            SimCommand::MotorUp => self.state.motor_up(),
            SimCommand::MotorDown => self.state.motor_down(),
            SimCommand::BeginMoveLeft => self.state.begin_move_left(),
            SimCommand::EndMoveLeft => self.state.end_move_left(),
            SimCommand::ToggleFillMode => {
                self.fill_mode = self.fill_mode.toggled();
                log::debug!("fill mode -> {:?}", self.fill_mode);
            }
            SimCommand::DropBox => {
                self.boxes.push(CargoBox::release(&self.state));
                log::debug!("dropped box ({} live)", self.boxes.len());
            }
        }
    }

    fn update(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        self.state.step(dt, &self.flight_cfg);
        step_boxes(&mut self.boxes, dt, &self.cargo_cfg);
    }

    fn compose(
        &mut self,
        composer: &mut Composer,
        view: Matrix4<f32>,
        backend: &mut dyn GraphicsBackend,
    ) {
        let heli = helicopter_part(&self.state, &self.flight_cfg, self.heli_scale);
        let cargo_parts: Vec<ScenePart> = self
            .boxes
            .iter()
            .enumerate()
            .map(|(index, cargo)| {
                cargo_part(index, cargo, &self.flight_cfg, &self.cargo_cfg, self.box_scale)
            })
            .collect();

        let roots = std::iter::once(&self.world)
            .chain(std::iter::once(&heli))
            .chain(cargo_parts.iter());
        composer.render(view, roots, backend, self.fill_mode);
    }

    fn name(&self) -> &str {
        "helicopter"
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    fn reset(&mut self) {
        self.state = FlightState::new();
        self.boxes.clear();
        self.fill_mode = FillMode::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::composer::recording::RecordingBackend;
    use cgmath::SquareMatrix;

    const DT: f32 = 1.0 / 60.0;

    fn climb(sim: &mut HelicopterSim, seconds: f32) {
        let frames = (seconds / DT) as usize;
        for _ in 0..frames {
            sim.update(DT);
        }
    }

    #[test]
    fn test_commands_drive_flight_state() {
        let mut sim = HelicopterSim::new();
        sim.apply(SimCommand::MotorUp);
        sim.apply(SimCommand::MotorUp);
        assert_eq!(sim.motor_level(), 2);

        sim.apply(SimCommand::MotorDown);
        assert_eq!(sim.motor_level(), 1);

        sim.apply(SimCommand::ToggleFillMode);
        assert_eq!(sim.fill_mode(), FillMode::Solid);
    }

    #[test]
    fn test_dropped_boxes_live_and_expire() {
        let mut sim = HelicopterSim::new();
        for _ in 0..8 {
            sim.apply(SimCommand::MotorUp);
        }
        climb(&mut sim, 5.0);
        assert!(sim.height() > 0.0);

        sim.apply(SimCommand::DropBox);
        sim.apply(SimCommand::DropBox);
        assert_eq!(sim.live_box_count(), 2);

        climb(&mut sim, 6.0);
        assert_eq!(sim.live_box_count(), 0);
    }

    #[test]
    fn test_paused_sim_does_not_advance() {
        let mut sim = HelicopterSim::new();
        sim.apply(SimCommand::MotorUp);
        sim.set_running(false);
        climb(&mut sim, 2.0);
        assert_eq!(sim.flight_state().time, 0.0);
    }

    #[test]
    fn test_compose_draws_world_helicopter_and_boxes() {
        let mut sim = HelicopterSim::new();
        let mut backend = RecordingBackend::new();
        let mut composer = Composer::new();
        sim.initialize(&mut backend);

        sim.compose(&mut composer, Matrix4::identity(), &mut backend);
        let without_boxes = backend.draws().len();

        sim.apply(SimCommand::DropBox);
        let mut backend = RecordingBackend::new();
        sim.compose(&mut composer, Matrix4::identity(), &mut backend);
        assert_eq!(backend.draws().len(), without_boxes + 1);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut sim = HelicopterSim::new();
        sim.apply(SimCommand::MotorUp);
        sim.apply(SimCommand::DropBox);
        sim.apply(SimCommand::ToggleFillMode);
        climb(&mut sim, 1.0);

        sim.reset();
        assert_eq!(sim.motor_level(), 0);
        assert_eq!(sim.live_box_count(), 0);
        assert_eq!(sim.fill_mode(), FillMode::Wireframe);
        assert_eq!(sim.flight_state().time, 0.0);
    }
}
