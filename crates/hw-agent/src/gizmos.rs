//! Editor debug drawing.

use hw_core::Vec3;

/// Linear RGBA color.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const YELLOW: Color = Color { r: 1.0, g: 0.92, b: 0.016, a: 1.0 };
}

/// Destination for diagnostic shapes.  Drawing has no effect on behavior.
pub trait GizmoSink {
    fn wire_sphere(&mut self, center: Vec3, radius: f32, color: Color);
}

/// A shape captured by [`GizmoRecorder`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GizmoShape {
    WireSphere { center: Vec3, radius: f32, color: Color },
}

/// A [`GizmoSink`] that keeps every shape it is given, for tests and for
/// hosts that render gizmos later in the frame.
#[derive(Clone, Debug, Default)]
pub struct GizmoRecorder {
    pub shapes: Vec<GizmoShape>,
}

impl GizmoRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

impl GizmoSink for GizmoRecorder {
    fn wire_sphere(&mut self, center: Vec3, radius: f32, color: Color) {
        self.shapes.push(GizmoShape::WireSphere { center, radius, color });
    }
}
