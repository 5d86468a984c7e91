//! Immediate-mode graphics
//!
//! Widgets draw through the [`Graphics`] trait, which mirrors a fixed-function
//! pipeline: capabilities are switched on and off, a matrix stack carries the
//! current transform, and primitives are emitted one at a time.
//!
//! # Backends
//!
//! - [`RecordingGraphics`] - records every call, used by tests and headless runs
//! - `CanvasGraphics` - SDL2 canvas renderer (feature `sdl`)
//!
//! State changes made while drawing should go through the guards in
//! [`scope`] so that every enable and push is undone on all exit paths.

pub mod recording;
pub mod scope;
pub mod text;
pub mod transform;

#[cfg(feature = "sdl")]
pub mod canvas;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

pub use recording::{DrawCommand, RecordingGraphics};
pub use scope::{EnabledGuard, MatrixGuard};
pub use transform::MatrixStack;

/// Backend handle of a loaded texture.
pub type TextureId = u32;

/// Pipeline state that can be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    DepthTest,
    Texture2D,
}

/// RGBA colour, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Multiplies the colour channels by `factor` (clamped to 0..=1).
    /// Alpha is left untouched.
    pub fn scaled(self, factor: f32) -> Color {
        let factor = factor.clamp(0.0, 1.0);
        let channel = |c: u8| (c as f32 * factor).round() as u8;
        Color {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
            a: self.a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// A single corner of a quad in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    /// Normalised texture coordinate into the bound texture
    pub uv: Vec2,
    pub color: Color,
}

impl Vertex {
    pub fn new(position: Vec3, uv: Vec2, color: Color) -> Self {
        Vertex { position, uv, color }
    }
}

/// Four vertices in winding order (top-left, top-right, bottom-right, bottom-left
/// for screen-aligned quads).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub vertices: [Vertex; 4],
}

impl Quad {
    pub fn new(vertices: [Vertex; 4]) -> Self {
        Quad { vertices }
    }

    /// Builds a flat rectangle in the z = 0 plane.
    pub fn rect(x: f32, y: f32, width: f32, height: f32, uv_min: Vec2, uv_max: Vec2, color: Color) -> Self {
        Quad {
            vertices: [
                Vertex::new(Vec3::new(x, y, 0.0), uv_min, color),
                Vertex::new(Vec3::new(x + width, y, 0.0), Vec2::new(uv_max.x, uv_min.y), color),
                Vertex::new(Vec3::new(x + width, y + height, 0.0), uv_max, color),
                Vertex::new(Vec3::new(x, y + height, 0.0), Vec2::new(uv_min.x, uv_max.y), color),
            ],
        }
    }
}

/// Fixed-function style drawing surface.
///
/// Implementations never fail: a backend that cannot honour a call logs the
/// problem and carries on, so a broken asset only ever leaves a blank slot.
pub trait Graphics {
    fn enable(&mut self, capability: Capability);
    fn disable(&mut self, capability: Capability);

    /// Resets the depth buffer so the next primitives are tested against an empty scene.
    fn clear_depth(&mut self);

    fn push_matrix(&mut self);
    fn pop_matrix(&mut self);
    fn translate(&mut self, x: f32, y: f32, z: f32);
    fn scale(&mut self, x: f32, y: f32, z: f32);

    /// Rotates by `degrees` around the axis `(x, y, z)`.
    fn rotate(&mut self, degrees: f32, x: f32, y: f32, z: f32);

    fn bind_texture(&mut self, texture: TextureId);
    fn draw_quad(&mut self, quad: &Quad);

    /// Fills an untextured rectangle in the current transform.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
}
