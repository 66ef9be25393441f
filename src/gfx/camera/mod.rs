pub mod orbit_camera;
pub mod presets;

// Re-export main types
pub use orbit_camera::{OrbitCamera, OrbitCameraBounds};
pub use presets::CameraPreset;
