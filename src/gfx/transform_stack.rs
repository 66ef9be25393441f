//! Model-view transform stack
//!
//! Maintains the current composed transform as a stack of 4x4 matrices.
//! Every renderable part reads the top of this stack at the moment it
//! issues a draw call; composite parts enter a scoped frame so their
//! local transforms never leak to siblings.

use cgmath::{Deg, Matrix4, SquareMatrix, Vector3};
use thiserror::Error;

/// Errors raised by [`TransformStack`]
///
/// Underflow is a programming-contract violation: balanced traversal via
/// [`TransformStack::scoped`] can never produce it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StackError {
    #[error("transform stack underflow: cannot pop the root frame")]
    Underflow,
}

/// Stack of composed model-view matrices
///
/// The stack always contains at least one matrix (the root frame), so
/// [`TransformStack::current`] is total. `push` duplicates the top,
/// `pop` restores the previous frame, and the multiply helpers compose
/// local transforms on the right of the inherited frame.
#[derive(Debug, Clone)]
pub struct TransformStack {
    matrices: Vec<Matrix4<f32>>,
}

impl TransformStack {
    /// Creates a stack seeded with a single identity root frame
    pub fn new() -> Self {
        Self {
            matrices: vec![Matrix4::identity()],
        }
    }

    /// Discards everything and re-seeds the stack with `root`
    ///
    /// Called once at the start of each frame with the camera view matrix.
    pub fn reset(&mut self, root: Matrix4<f32>) {
        self.matrices.clear();
        self.matrices.push(root);
    }

    /// Duplicates the current top frame
    pub fn push(&mut self) {
        let top = self.current();
        self.matrices.push(top);
    }

    /// Discards the top frame, restoring the previous one
    ///
    /// Fails with [`StackError::Underflow`] if only the root remains.
    pub fn pop(&mut self) -> Result<(), StackError> {
        if self.matrices.len() <= 1 {
            return Err(StackError::Underflow);
        }
        self.matrices.pop();
        Ok(())
    }

    /// Replaces the top frame unconditionally
    pub fn load(&mut self, matrix: Matrix4<f32>) {
        *self.top_mut() = matrix;
    }

    /// Right-multiplies the top frame: `top := top * matrix`
    pub fn mult(&mut self, matrix: Matrix4<f32>) {
        let top = self.top_mut();
        *top = *top * matrix;
    }

    /// Composes a translation into the current frame
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.mult(Matrix4::from_translation(Vector3::new(x, y, z)));
    }

    /// Composes a (possibly non-uniform) scale into the current frame
    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        self.mult(Matrix4::from_nonuniform_scale(x, y, z));
    }

    /// Composes a rotation about the X axis, in degrees
    pub fn rotate_x(&mut self, degrees: f32) {
        self.mult(Matrix4::from_angle_x(Deg(degrees)));
    }

    /// Composes a rotation about the Y axis, in degrees
    pub fn rotate_y(&mut self, degrees: f32) {
        self.mult(Matrix4::from_angle_y(Deg(degrees)));
    }

    /// Composes a rotation about the Z axis, in degrees
    pub fn rotate_z(&mut self, degrees: f32) {
        self.mult(Matrix4::from_angle_z(Deg(degrees)));
    }

    /// Returns the current composed transform (the top frame)
    pub fn current(&self) -> Matrix4<f32> {
        // Invariant: matrices is never empty
        self.matrices[self.matrices.len() - 1]
    }

    /// Current stack depth, including the root frame
    pub fn depth(&self) -> usize {
        self.matrices.len()
    }

    /// Runs `body` inside a pushed frame, popping on every exit path
    ///
    /// This is the only way the scene composer touches push/pop, which
    /// makes stack imbalance structurally impossible: the frame pushed
    /// here is always the one popped, so sibling parts never observe
    /// each other's local transforms.
    pub fn scoped<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        let base = self.matrices.len();
        self.push();
        let result = body(self);
        // Unwind our frame plus anything the body left behind
        self.matrices.truncate(base);
        debug_assert_eq!(self.matrices.len(), base);
        result
    }

    fn top_mut(&mut self) -> &mut Matrix4<f32> {
        let last = self.matrices.len() - 1;
        &mut self.matrices[last]
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::assert_relative_eq;

    #[test]
    fn test_new_stack_is_identity() {
        let stack = TransformStack::new();
        assert_eq!(stack.depth(), 1);
        assert_relative_eq!(stack.current(), Matrix4::identity());
    }

    #[test]
    fn test_balanced_push_pop_round_trips() {
        let mut stack = TransformStack::new();
        stack.translate(1.0, 2.0, 3.0);
        let before = stack.current();

        stack.push();
        stack.rotate_y(90.0);
        stack.scale(2.0, 2.0, 2.0);
        stack.push();
        stack.translate(-5.0, 0.0, 0.0);
        stack.pop().unwrap();
        stack.pop().unwrap();

        assert_relative_eq!(stack.current(), before);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_pop_root_underflows() {
        let mut stack = TransformStack::new();
        assert_eq!(stack.pop(), Err(StackError::Underflow));

        stack.push();
        assert_eq!(stack.pop(), Ok(()));
        assert_eq!(stack.pop(), Err(StackError::Underflow));
    }

    #[test]
    fn test_scoped_restores_on_exit() {
        let mut stack = TransformStack::new();
        stack.translate(0.5, 0.0, 0.0);
        let before = stack.current();

        stack.scoped(|s| {
            s.rotate_z(45.0);
            s.translate(10.0, 10.0, 10.0);
        });

        assert_relative_eq!(stack.current(), before);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_scoped_unwinds_unbalanced_body() {
        let mut stack = TransformStack::new();
        let before = stack.current();

        // A body that pushes without popping must not corrupt siblings
        stack.scoped(|s| {
            s.push();
            s.push();
            s.translate(7.0, 7.0, 7.0);
        });

        assert_eq!(stack.depth(), 1);
        assert_relative_eq!(stack.current(), before);
    }

    #[test]
    fn test_load_replaces_top_only() {
        let mut stack = TransformStack::new();
        stack.push();
        stack.load(Matrix4::from_translation(cgmath::Vector3::new(
            1.0, 0.0, 0.0,
        )));
        stack.pop().unwrap();
        assert_relative_eq!(stack.current(), Matrix4::identity());
    }

    #[test]
    fn test_mult_composes_on_the_right() {
        let mut stack = TransformStack::new();
        stack.translate(1.0, 0.0, 0.0);
        stack.scale(2.0, 2.0, 2.0);

        let expected = Matrix4::from_translation(cgmath::Vector3::new(1.0, 0.0, 0.0))
            * Matrix4::from_nonuniform_scale(2.0, 2.0, 2.0);
        assert_relative_eq!(stack.current(), expected);
    }
}
