//! Declarative scene parts
//!
//! A scene is a tree of [`ScenePart`] nodes: each node carries an ordered
//! list of local transform operations, an optional color, optional leaf
//! geometry, and child parts. Static scenery is defined once as literal
//! data; dynamic parts (helicopter, cargo boxes) are rebuilt each frame
//! from the current simulation state.

use crate::gfx::backend::MeshKind;
use crate::gfx::transform_stack::TransformStack;

/// One local transform operation, applied in declared order
///
/// Each op right-multiplies the current top of the transform stack, so a
/// part's ops are expressed in its parent's local frame. Rotations are in
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    Translate(f32, f32, f32),
    Scale(f32, f32, f32),
    RotateX(f32),
    RotateY(f32),
    RotateZ(f32),
}

impl TransformOp {
    /// Composes this op into the current stack frame
    pub fn apply(self, stack: &mut TransformStack) {
        match self {
            TransformOp::Translate(x, y, z) => stack.translate(x, y, z),
            TransformOp::Scale(x, y, z) => stack.scale(x, y, z),
            TransformOp::RotateX(deg) => stack.rotate_x(deg),
            TransformOp::RotateY(deg) => stack.rotate_y(deg),
            TransformOp::RotateZ(deg) => stack.rotate_z(deg),
        }
    }
}

/// A named node in the scene tree
#[derive(Debug, Clone)]
pub struct ScenePart {
    pub name: String,
    /// Local transforms, applied in order after entering this node's scope
    pub ops: Vec<TransformOp>,
    /// Active color for this subtree; restored for siblings afterwards
    pub color: Option<[f32; 3]>,
    /// Leaf geometry, drawn with the composed transform
    pub primitive: Option<MeshKind>,
    pub children: Vec<ScenePart>,
}

impl ScenePart {
    /// Creates an empty composite node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ops: Vec::new(),
            color: None,
            primitive: None,
            children: Vec::new(),
        }
    }

    /// Builder-style: appends a local transform op
    pub fn op(mut self, op: TransformOp) -> Self {
        self.ops.push(op);
        self
    }

    /// Builder-style: sets the subtree color
    pub fn colored(mut self, color: [f32; 3]) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder-style: makes this node a leaf drawing `kind`
    pub fn mesh(mut self, kind: MeshKind) -> Self {
        self.primitive = Some(kind);
        self
    }

    /// Builder-style: appends a child part
    pub fn child(mut self, child: ScenePart) -> Self {
        self.children.push(child);
        self
    }

    /// Number of draw calls this subtree will issue
    pub fn leaf_count(&self) -> usize {
        let own = usize::from(self.primitive.is_some());
        own + self
            .children
            .iter()
            .map(ScenePart::leaf_count)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_shape() {
        let part = ScenePart::new("rotor")
            .op(TransformOp::Translate(0.0, 0.3, 0.0))
            .op(TransformOp::RotateY(90.0))
            .child(ScenePart::new("blade").mesh(MeshKind::Sphere))
            .child(ScenePart::new("mast").mesh(MeshKind::Cylinder));

        assert_eq!(part.name, "rotor");
        assert_eq!(part.ops.len(), 2);
        assert_eq!(part.children.len(), 2);
        assert_eq!(part.leaf_count(), 2);
    }

    #[test]
    fn test_op_apply_matches_stack_helpers() {
        use cgmath::assert_relative_eq;

        let mut by_op = TransformStack::new();
        TransformOp::Translate(1.0, 2.0, 3.0).apply(&mut by_op);
        TransformOp::RotateZ(30.0).apply(&mut by_op);

        let mut by_hand = TransformStack::new();
        by_hand.translate(1.0, 2.0, 3.0);
        by_hand.rotate_z(30.0);

        assert_relative_eq!(by_op.current(), by_hand.current());
    }
}
