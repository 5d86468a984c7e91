//! Recording backend
//!
//! [`RecordingGraphics`] keeps every call in order instead of drawing it. It
//! also tracks the matrix stack and enabled capabilities so callers can check
//! that a frame left the pipeline the way it found it.

use std::collections::HashSet;

use glam::{Mat4, Vec3};
use log::warn;

use super::{Capability, Color, Graphics, MatrixStack, Quad, TextureId};

/// One recorded graphics call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Enable(Capability),
    Disable(Capability),
    ClearDepth,
    PushMatrix,
    PopMatrix,
    Translate(Vec3),
    Scale(Vec3),
    Rotate { degrees: f32, axis: Vec3 },
    BindTexture(TextureId),
    /// A quad together with the model-view matrix it was drawn under
    DrawQuad { quad: Quad, transform: Mat4 },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        transform: Mat4,
    },
}

#[derive(Debug, Default)]
pub struct RecordingGraphics {
    commands: Vec<DrawCommand>,
    matrices: MatrixStack,
    enabled: HashSet<Capability>,
    bound_texture: Option<TextureId>,
    unbalanced_pops: usize,
}

impl RecordingGraphics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_enabled(&self, capability: Capability) -> bool {
        self.enabled.contains(&capability)
    }

    pub fn bound_texture(&self) -> Option<TextureId> {
        self.bound_texture
    }

    pub fn matrix_depth(&self) -> usize {
        self.matrices.depth()
    }

    /// True when no matrix is left pushed, no capability is left enabled and
    /// no pop was issued on an empty stack.
    pub fn is_balanced(&self) -> bool {
        self.matrices.depth() == 0 && self.enabled.is_empty() && self.unbalanced_pops == 0
    }

    /// Quads in draw order, each with the transform it was drawn under.
    pub fn quads(&self) -> impl Iterator<Item = (&Quad, &Mat4)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::DrawQuad { quad, transform } => Some((quad, transform)),
            _ => None,
        })
    }

    /// Number of recorded commands matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }
}

impl Graphics for RecordingGraphics {
    fn enable(&mut self, capability: Capability) {
        self.enabled.insert(capability);
        self.commands.push(DrawCommand::Enable(capability));
    }

    fn disable(&mut self, capability: Capability) {
        self.enabled.remove(&capability);
        self.commands.push(DrawCommand::Disable(capability));
    }

    fn clear_depth(&mut self) {
        self.commands.push(DrawCommand::ClearDepth);
    }

    fn push_matrix(&mut self) {
        self.matrices.push();
        self.commands.push(DrawCommand::PushMatrix);
    }

    fn pop_matrix(&mut self) {
        if !self.matrices.pop() {
            warn!("Matrix stack underflow");
            self.unbalanced_pops += 1;
        }
        self.commands.push(DrawCommand::PopMatrix);
    }

    fn translate(&mut self, x: f32, y: f32, z: f32) {
        let offset = Vec3::new(x, y, z);
        self.matrices.translate(offset);
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn scale(&mut self, x: f32, y: f32, z: f32) {
        let factor = Vec3::new(x, y, z);
        self.matrices.scale(factor);
        self.commands.push(DrawCommand::Scale(factor));
    }

    fn rotate(&mut self, degrees: f32, x: f32, y: f32, z: f32) {
        let axis = Vec3::new(x, y, z);
        self.matrices.rotate(degrees, axis);
        self.commands.push(DrawCommand::Rotate { degrees, axis });
    }

    fn bind_texture(&mut self, texture: TextureId) {
        self.bound_texture = Some(texture);
        self.commands.push(DrawCommand::BindTexture(texture));
    }

    fn draw_quad(&mut self, quad: &Quad) {
        self.commands.push(DrawCommand::DrawQuad {
            quad: *quad,
            transform: self.matrices.current(),
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
            transform: self.matrices.current(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_recorder_is_balanced() {
        let gfx = RecordingGraphics::new();
        assert!(gfx.is_balanced());
        assert!(gfx.commands().is_empty());
    }

    #[test]
    fn test_enabled_capability_unbalances() {
        let mut gfx = RecordingGraphics::new();
        gfx.enable(Capability::Texture2D);
        assert!(gfx.is_enabled(Capability::Texture2D));
        assert!(!gfx.is_balanced());
        gfx.disable(Capability::Texture2D);
        assert!(gfx.is_balanced());
    }

    #[test]
    fn test_pop_underflow_is_recorded() {
        let mut gfx = RecordingGraphics::new();
        gfx.pop_matrix();
        assert!(!gfx.is_balanced());
        assert_eq!(gfx.matrix_depth(), 0);
    }

    #[test]
    fn test_quads_capture_transform() {
        let mut gfx = RecordingGraphics::new();
        gfx.push_matrix();
        gfx.translate(20.0, 20.0, 0.0);
        gfx.draw_quad(&Quad::rect(0.0, 0.0, 1.0, 1.0, Vec2::ZERO, Vec2::ONE, Color::WHITE));
        gfx.pop_matrix();

        let (quad, transform) = gfx.quads().next().unwrap();
        let corner = transform.transform_point3(quad.vertices[0].position);
        assert_eq!(corner, Vec3::new(20.0, 20.0, 0.0));
        assert_eq!(gfx.count(|c| matches!(c, DrawCommand::DrawQuad { .. })), 1);
    }

    #[test]
    fn test_bind_texture_tracks_binding() {
        let mut gfx = RecordingGraphics::new();
        gfx.bind_texture(7);
        assert_eq!(gfx.bound_texture(), Some(7));
    }
}
