//! Static world scenery
//!
//! The fixed backdrop the helicopter flies over: a ground slab, a block
//! of buildings with window cubes, a perimeter wall, and a tank. All of
//! it is plain [`ScenePart`] data built once at startup and walked by
//! the generic composer; nothing here reads simulation state.

use crate::gfx::backend::MeshKind;
use crate::scene::part::{ScenePart, TransformOp};

const GROUND_COLOR: [f32; 3] = [0.25, 0.45, 0.2];
const BUILDING_COLOR: [f32; 3] = [0.5, 0.5, 0.55];
const WINDOW_COLOR: [f32; 3] = [0.9, 0.85, 0.4];
const WALL_COLOR: [f32; 3] = [0.45, 0.35, 0.3];
const TANK_COLOR: [f32; 3] = [0.3, 0.35, 0.25];
const ROOF_COLOR: [f32; 3] = [0.6, 0.3, 0.25];

/// Builds the whole static world tree
pub fn world_part() -> ScenePart {
    ScenePart::new("world")
        .child(ground())
        .child(buildings())
        .child(perimeter_wall())
        .child(tank())
}

fn ground() -> ScenePart {
    ScenePart::new("ground")
        .colored(GROUND_COLOR)
        .op(TransformOp::Translate(0.0, -0.05, 0.0))
        .op(TransformOp::Scale(6.0, 0.1, 6.0))
        .mesh(MeshKind::Cube)
}

/// A small block of buildings, each with a grid of window cubes
fn buildings() -> ScenePart {
    // (x, z, width, height) per building
    let footprints = [
        (-2.0_f32, -2.0_f32, 0.5_f32, 1.2_f32),
        (-1.2, -2.2, 0.4, 0.8),
        (-2.2, -1.0, 0.6, 1.6),
    ];

    let mut block = ScenePart::new("buildings");
    for (index, (x, z, width, height)) in footprints.into_iter().enumerate() {
        let mut building = ScenePart::new(format!("building-{index}"))
            .op(TransformOp::Translate(x, 0.0, z))
            .child(
                ScenePart::new("walls")
                    .colored(BUILDING_COLOR)
                    .op(TransformOp::Translate(0.0, height / 2.0, 0.0))
                    .op(TransformOp::Scale(width, height, width))
                    .mesh(MeshKind::Cube),
            )
            .child(
                ScenePart::new("roof")
                    .colored(ROOF_COLOR)
                    .op(TransformOp::Translate(0.0, height, 0.0))
                    .op(TransformOp::Scale(width * 1.1, width * 0.5, width * 1.1))
                    .mesh(MeshKind::Pyramid),
            );

        // Two columns of windows up the front face
        let floors = (height / 0.3) as i32;
        let mut windows = ScenePart::new("windows").colored(WINDOW_COLOR);
        for floor in 0..floors {
            for column in [-1.0_f32, 1.0] {
                windows = windows.child(
                    ScenePart::new(format!("window-{floor}-{column}"))
                        .op(TransformOp::Translate(
                            column * width * 0.22,
                            0.2 + floor as f32 * 0.3,
                            width / 2.0,
                        ))
                        .op(TransformOp::Scale(0.08, 0.12, 0.02))
                        .mesh(MeshKind::Cube),
                );
            }
        }
        building = building.child(windows);
        block = block.child(building);
    }
    block
}

/// Four wall segments boxing the compound corner
fn perimeter_wall() -> ScenePart {
    // (x, z, length, rotate_y)
    let segments = [
        (0.0_f32, -2.8_f32, 5.6_f32, 0.0_f32),
        (0.0, 2.8, 5.6, 0.0),
        (-2.8, 0.0, 5.6, 90.0),
        (2.8, 0.0, 5.6, 90.0),
    ];

    let mut wall = ScenePart::new("perimeter-wall").colored(WALL_COLOR);
    for (index, (x, z, length, rotate)) in segments.into_iter().enumerate() {
        wall = wall.child(
            ScenePart::new(format!("wall-{index}"))
                .op(TransformOp::Translate(x, 0.15, z))
                .op(TransformOp::RotateY(rotate))
                .op(TransformOp::Scale(length, 0.3, 0.08))
                .mesh(MeshKind::Cube),
        );
    }
    wall
}

/// Hull, turret and barrel parked by the wall
fn tank() -> ScenePart {
    ScenePart::new("tank")
        .colored(TANK_COLOR)
        .op(TransformOp::Translate(1.8, 0.0, 1.8))
        .op(TransformOp::RotateY(-135.0))
        .child(
            ScenePart::new("hull")
                .op(TransformOp::Translate(0.0, 0.12, 0.0))
                .op(TransformOp::Scale(0.7, 0.2, 0.4))
                .mesh(MeshKind::Cube),
        )
        .child(
            ScenePart::new("turret")
                .op(TransformOp::Translate(0.0, 0.28, 0.0))
                .op(TransformOp::Scale(0.3, 0.15, 0.3))
                .mesh(MeshKind::Sphere),
        )
        .child(
            ScenePart::new("barrel")
                .op(TransformOp::Translate(0.3, 0.3, 0.0))
                .op(TransformOp::RotateZ(90.0))
                .op(TransformOp::Scale(0.03, 0.5, 0.03))
                .mesh(MeshKind::Cylinder),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_has_expected_top_level_parts() {
        let world = world_part();
        let names: Vec<&str> = world.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["ground", "buildings", "perimeter-wall", "tank"]);
    }

    #[test]
    fn test_world_is_pure_data() {
        // Building the world twice yields identical draw counts; it reads
        // no simulation state.
        assert_eq!(world_part().leaf_count(), world_part().leaf_count());
        assert!(world_part().leaf_count() > 10);
    }
}
