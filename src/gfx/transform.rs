//! Software matrix stack shared by the backends.

use glam::{Mat4, Vec3};

/// A model-view matrix with push/pop semantics.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl MatrixStack {
    pub fn new() -> Self {
        MatrixStack {
            current: Mat4::IDENTITY,
            saved: Vec::new(),
        }
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restores the last pushed matrix.
    ///
    /// Returns false (and leaves the current matrix alone) when nothing was pushed.
    pub fn pop(&mut self) -> bool {
        match self.saved.pop() {
            Some(matrix) => {
                self.current = matrix;
                true
            }
            None => false,
        }
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.current *= Mat4::from_translation(offset);
    }

    pub fn scale(&mut self, factor: Vec3) {
        self.current *= Mat4::from_scale(factor);
    }

    /// Rotation about an arbitrary axis. A zero axis is ignored.
    pub fn rotate(&mut self, degrees: f32, axis: Vec3) {
        let axis = axis.normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }
        self.current *= Mat4::from_axis_angle(axis, degrees.to_radians());
    }

    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Number of matrices pushed and not yet popped.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.current.transform_point3(point)
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}
