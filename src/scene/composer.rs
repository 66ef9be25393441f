//! Scene composer
//!
//! Depth-first, pre-order traversal of a [`ScenePart`] tree against a
//! [`TransformStack`] and a [`GraphicsBackend`]. Every node's body runs
//! inside a scoped stack frame, so a part's local transforms can never
//! leak into the siblings rendered after it. The active draw color is
//! not part of the stack and is saved/restored explicitly around any
//! subtree that changes it.

use cgmath::Matrix4;

use crate::gfx::backend::{FillMode, GraphicsBackend};
use crate::gfx::transform_stack::TransformStack;
use crate::scene::part::ScenePart;

/// Color used until a part sets its own
pub const DEFAULT_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

/// Walks scene trees and issues draw calls
///
/// Owns the transform stack between frames; [`Composer::render`] reseeds
/// it from the camera view, walks each root part in declared order, and
/// leaves the stack balanced at depth one.
pub struct Composer {
    stack: TransformStack,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            stack: TransformStack::new(),
        }
    }

    /// Renders one frame: seeds the stack with `view`, then walks `roots`
    pub fn render<'a>(
        &mut self,
        view: Matrix4<f32>,
        roots: impl IntoIterator<Item = &'a ScenePart>,
        backend: &mut dyn GraphicsBackend,
        fill: FillMode,
    ) {
        self.stack.reset(view);
        let mut active_color = DEFAULT_COLOR;
        backend.set_color(active_color);
        for part in roots {
            render_part(part, &mut self.stack, backend, fill, &mut active_color);
        }
    }

    /// The stack as left by the last render (for diagnostics/tests)
    pub fn stack(&self) -> &TransformStack {
        &self.stack
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one part subtree inside its own scoped stack frame
pub fn render_part(
    part: &ScenePart,
    stack: &mut TransformStack,
    backend: &mut dyn GraphicsBackend,
    fill: FillMode,
    active_color: &mut [f32; 3],
) {
    stack.scoped(|stack| {
        for op in &part.ops {
            op.apply(stack);
        }

        let saved_color = *active_color;
        if let Some(color) = part.color {
            if color != *active_color {
                backend.set_color(color);
                *active_color = color;
            }
        }

        if let Some(kind) = part.primitive {
            backend.upload_transform(stack.current());
            backend.draw_mesh(kind, fill);
        }

        for child in &part.children {
            render_part(child, stack, backend, fill, active_color);
        }

        if *active_color != saved_color {
            backend.set_color(saved_color);
            *active_color = saved_color;
        }
    });
}
