//! Helicopter part tree
//!
//! Builds the articulated helicopter model as declarative [`ScenePart`]
//! data each frame, parameterized by the current [`FlightState`]: orbit
//! phase and height place the craft, blade phase spins both rotors, and
//! the applied lean banks the whole model while it translates.

use crate::gfx::backend::MeshKind;
use crate::scene::part::{ScenePart, TransformOp};
use crate::simulation::cargo::{CargoBox, CargoConfig};
use crate::simulation::flight::{FlightConfig, FlightState};

const FUSELAGE_COLOR: [f32; 3] = [0.75, 0.1, 0.1];
const ROTOR_COLOR: [f32; 3] = [0.2, 0.2, 0.25];
const SKID_COLOR: [f32; 3] = [0.6, 0.6, 0.65];
const CARGO_COLOR: [f32; 3] = [0.55, 0.4, 0.2];

/// Builds the helicopter subtree for the current frame
///
/// The craft sits on a fixed-radius orbit: rotate by the orbit phase,
/// translate out to the radius and up to the current height, face along
/// the tangent, then bank by the applied lean.
pub fn helicopter_part(state: &FlightState, cfg: &FlightConfig, model_scale: f32) -> ScenePart {
    let lean = state.applied_lean_deg();

    ScenePart::new("helicopter")
        .op(TransformOp::RotateY(state.orbit_phase_deg))
        .op(TransformOp::Translate(cfg.orbit_radius, state.height, 0.0))
        .op(TransformOp::RotateY(90.0))
        .op(TransformOp::RotateZ(-lean))
        .op(TransformOp::RotateX(lean))
        .op(TransformOp::Scale(model_scale, model_scale, model_scale))
        .child(fuselage())
        .child(main_rotor(state.blade_phase_deg))
        .child(tail_rotor(state.blade_phase_deg))
        .child(skids())
}

fn fuselage() -> ScenePart {
    ScenePart::new("fuselage")
        .colored(FUSELAGE_COLOR)
        .child(
            ScenePart::new("body")
                .op(TransformOp::Scale(0.9, 0.5, 0.5))
                .mesh(MeshKind::Sphere),
        )
        .child(
            ScenePart::new("tail-boom")
                .op(TransformOp::Translate(0.75, 0.1, 0.0))
                .op(TransformOp::Scale(0.9, 0.15, 0.15))
                .mesh(MeshKind::Sphere),
        )
        .child(
            ScenePart::new("tail-fin")
                .op(TransformOp::Translate(1.2, 0.165, 0.0))
                .op(TransformOp::RotateZ(60.0))
                .op(TransformOp::Scale(0.3, 0.15, 0.15))
                .mesh(MeshKind::Sphere),
        )
}

/// Mast plus four blades spinning about the mast axis
fn main_rotor(blade_phase_deg: f32) -> ScenePart {
    let mut rotor = ScenePart::new("main-rotor")
        .colored(ROTOR_COLOR)
        .op(TransformOp::RotateY(blade_phase_deg))
        .child(
            ScenePart::new("mast")
                .op(TransformOp::Translate(0.0, 0.3, 0.0))
                .op(TransformOp::Scale(0.025, 0.08, 0.025))
                .mesh(MeshKind::Cylinder),
        );

    for quarter in 0..4 {
        rotor = rotor.child(
            ScenePart::new(format!("blade-{quarter}"))
                .op(TransformOp::RotateY(90.0 * quarter as f32))
                .op(TransformOp::Translate(0.5, 0.3, 0.0))
                .op(TransformOp::Scale(1.0, 0.015, 0.05))
                .mesh(MeshKind::Sphere),
        );
    }
    rotor
}

/// Tail rotor hub and two blades spinning about the hub's Z axis
fn tail_rotor(blade_phase_deg: f32) -> ScenePart {
    let mut assembly = ScenePart::new("tail-rotor").colored(ROTOR_COLOR).child(
        ScenePart::new("hub")
            .op(TransformOp::Translate(1.22, 0.175, 0.1))
            .op(TransformOp::RotateX(90.0))
            .op(TransformOp::Scale(0.025, 0.08, 0.025))
            .mesh(MeshKind::Cylinder),
    );

    // Tail blades turn faster than the mains on a small rotor
    let mut blades = ScenePart::new("tail-blades")
        .op(TransformOp::Translate(1.22, 0.175, 0.11))
        .op(TransformOp::RotateZ(blade_phase_deg * 3.0));
    for half in 0..2 {
        blades = blades.child(
            ScenePart::new(format!("tail-blade-{half}"))
                .op(TransformOp::RotateZ(180.0 * half as f32))
                .op(TransformOp::Translate(0.1, 0.0, 0.0))
                .op(TransformOp::Scale(0.2, 0.015, 0.015))
                .mesh(MeshKind::Sphere),
        );
    }
    assembly = assembly.child(blades);
    assembly
}

fn skids() -> ScenePart {
    let mut skids = ScenePart::new("skids").colored(SKID_COLOR);
    for (index, z) in [-0.18_f32, 0.18].into_iter().enumerate() {
        skids = skids.child(
            ScenePart::new(format!("skid-{index}"))
                .op(TransformOp::Translate(0.0, -0.32, z))
                .op(TransformOp::RotateZ(90.0))
                .op(TransformOp::Scale(0.02, 0.9, 0.02))
                .mesh(MeshKind::Cylinder),
        );
    }
    skids
}

/// Builds the subtree for one live cargo box
///
/// The box falls straight down under the release point (the snapshotted
/// orbit phase and radius), then slides outward and spins while grounded.
pub fn cargo_part(
    index: usize,
    cargo: &CargoBox,
    flight_cfg: &FlightConfig,
    cargo_cfg: &CargoConfig,
    box_scale: f32,
) -> ScenePart {
    let half = 0.5 * box_scale;
    ScenePart::new(format!("cargo-{index}"))
        .colored(CARGO_COLOR)
        .op(TransformOp::RotateY(cargo.spawn_orbit_deg))
        .op(TransformOp::Translate(
            flight_cfg.orbit_radius + cargo.slide_distance(cargo_cfg),
            cargo.height(cargo_cfg) + half,
            0.0,
        ))
        .op(TransformOp::RotateY(cargo.spin_deg(cargo_cfg)))
        .op(TransformOp::Scale(box_scale, box_scale, box_scale))
        .mesh(MeshKind::Cube)
}
