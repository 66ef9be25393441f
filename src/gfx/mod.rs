//! # Graphics Module
//!
//! Graphics-side concerns of the engine: the model-view transform stack,
//! the pluggable draw-call backend, and the orbit camera.
//!
//! Rendering itself is external: the scene composer drives any
//! [`GraphicsBackend`] implementation; this crate only ships the logging
//! [`TraceBackend`].
//!
//! [`GraphicsBackend`]: backend::GraphicsBackend
//! [`TraceBackend`]: backend::TraceBackend

pub mod backend;
pub mod camera;
pub mod transform_stack;

// Re-export commonly used types
pub use backend::{FillMode, GraphicsBackend, MeshKind, TraceBackend};
pub use camera::{CameraPreset, OrbitCamera};
pub use transform_stack::{StackError, TransformStack};
