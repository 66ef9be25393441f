// src/lib.rs
//! Heliscene
//!
//! A hierarchical 3D scene composition and toy helicopter flight
//! simulation library. Scenes are declarative part trees composed
//! against a model-view transform stack; all drawing goes through a
//! pluggable [`GraphicsBackend`], so the core carries no GPU code.
//!
//! [`GraphicsBackend`]: gfx::backend::GraphicsBackend

pub mod app;
pub mod gfx;
pub mod input;
pub mod scene;
pub mod simulation;

// Re-export main types for convenience
pub use app::HeliApp;
pub use gfx::backend::TraceBackend;

/// Creates a default application instance with the logging backend
pub fn default() -> HeliApp {
    HeliApp::new(Box::new(TraceBackend::new()))
}
