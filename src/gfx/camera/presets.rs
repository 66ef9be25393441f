//! Discrete camera presets
//!
//! Number-key views that replace the orbit parameters wholesale; the
//! continuous slider/drag controls then adjust from the new position.

use super::orbit_camera::OrbitCamera;

/// Canned viewpoints selectable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPreset {
    /// Looking down the -Z axis at the scene center
    Front,
    /// Directly overhead
    Top,
    /// Side-on along the X axis
    Side,
    /// Three-quarter view, the startup default
    Oblique,
}

impl CameraPreset {
    /// (distance, pitch, yaw) for this preset
    pub fn orbit_parameters(self) -> (f32, f32, f32) {
        match self {
            CameraPreset::Front => (5.0, 0.1, 0.0),
            CameraPreset::Top => (6.0, 1.45, 0.0),
            CameraPreset::Side => (5.0, 0.1, std::f32::consts::FRAC_PI_2),
            CameraPreset::Oblique => (5.0, 0.4, 0.6),
        }
    }

    /// Applies this preset to `camera`, replacing its orbit parameters
    pub fn apply(self, camera: &mut OrbitCamera) {
        let (distance, pitch, yaw) = self.orbit_parameters();
        camera.set_distance(distance);
        camera.set_pitch(pitch);
        camera.set_yaw(yaw);
    }

    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(CameraPreset::Front),
            2 => Some(CameraPreset::Top),
            3 => Some(CameraPreset::Side),
            4 => Some(CameraPreset::Oblique),
            _ => None,
        }
    }
}
