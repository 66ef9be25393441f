//! Scene definition and composition
//!
//! Scenes are trees of declarative [`ScenePart`] records walked by the
//! [`Composer`]: depth-first, pre-order, every node inside its own
//! scoped transform frame. The helicopter and cargo subtrees are rebuilt
//! each frame from simulation state; the world subtree is built once.
//!
//! [`ScenePart`]: part::ScenePart
//! [`Composer`]: composer::Composer

pub mod composer;
pub mod helicopter;
pub mod part;
pub mod world;

// Re-export main types
pub use composer::Composer;
pub use part::{ScenePart, TransformOp};
