//! Graphics backend interface
//!
//! The composer renders through this trait rather than talking to a GPU
//! API directly, so the same scene traversal can drive a real renderer,
//! a logging backend, or a recording backend in tests.

use cgmath::Matrix4;

/// Mesh primitives the backend knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Sphere,
    Cube,
    Cylinder,
    Pyramid,
}

impl MeshKind {
    /// All primitive kinds, for one-time backend initialization
    pub const ALL: [MeshKind; 4] = [
        MeshKind::Sphere,
        MeshKind::Cube,
        MeshKind::Cylinder,
        MeshKind::Pyramid,
    ];
}

/// Wireframe vs solid rendering, a process-wide toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    #[default]
    Wireframe,
    Solid,
}

impl FillMode {
    pub fn toggled(self) -> Self {
        match self {
            FillMode::Wireframe => FillMode::Solid,
            FillMode::Solid => FillMode::Wireframe,
        }
    }
}

/// Draw-call sink consumed by the scene composer
///
/// Contract: `upload_transform` and `set_color` establish the uniform
/// state used by every subsequent `draw_mesh` until changed.
/// `init_mesh` is called once per distinct kind at startup.
pub trait GraphicsBackend {
    fn init_mesh(&mut self, kind: MeshKind);

    /// Sets the active model-view transform for subsequent draws
    fn upload_transform(&mut self, matrix: Matrix4<f32>);

    /// Sets the active RGB color for subsequent draws
    fn set_color(&mut self, color: [f32; 3]);

    /// Issues one draw call for `kind` using the active uniform state
    fn draw_mesh(&mut self, kind: MeshKind, mode: FillMode);
}

/// Backend that logs every call and counts draws
///
/// Useful for headless runs and as the demo default; pair the trace log
/// level with `RUST_LOG=heliscene=trace`.
#[derive(Debug, Default)]
pub struct TraceBackend {
    draw_calls: u64,
    frames_color: [f32; 3],
}

impl TraceBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total draw calls issued since creation
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }
}

impl GraphicsBackend for TraceBackend {
    fn init_mesh(&mut self, kind: MeshKind) {
        log::debug!("init mesh {:?}", kind);
    }

    fn upload_transform(&mut self, matrix: Matrix4<f32>) {
        log::trace!("upload transform {:?}", matrix);
    }

    fn set_color(&mut self, color: [f32; 3]) {
        self.frames_color = color;
        log::trace!("set color {:?}", color);
    }

    fn draw_mesh(&mut self, kind: MeshKind, mode: FillMode) {
        self.draw_calls += 1;
        log::trace!(
            "draw {:?} ({:?}) color {:?}",
            kind,
            mode,
            self.frames_color
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::SquareMatrix;

    #[test]
    fn test_fill_mode_toggle() {
        assert_eq!(FillMode::Wireframe.toggled(), FillMode::Solid);
        assert_eq!(FillMode::Solid.toggled(), FillMode::Wireframe);
        assert_eq!(FillMode::default(), FillMode::Wireframe);
    }

    #[test]
    fn test_trace_backend_counts_draws() {
        let mut backend = TraceBackend::new();
        backend.upload_transform(Matrix4::identity());
        backend.draw_mesh(MeshKind::Cube, FillMode::Solid);
        backend.draw_mesh(MeshKind::Sphere, FillMode::Wireframe);
        assert_eq!(backend.draw_calls(), 2);
    }
}
