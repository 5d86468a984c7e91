//! SDL2 canvas backend
//!
//! SDL2's 2D renderer has no matrix stack or depth buffer, so this backend
//! keeps its own [`MatrixStack`], projects vertices orthographically (x and y
//! are screen pixels, z only orders primitives) and emulates the depth test
//! with painter's ordering.
//!
//! - Textured, screen-aligned quads are copied from the bound texture
//! - Every other quad is filled with its first vertex colour
//! - While depth testing is on, primitives are queued and drawn back to
//!   front when the test is switched off or the depth buffer is cleared

use std::collections::{HashMap, HashSet};
use std::path::Path;

use glam::{Vec2, Vec3};
use log::warn;
use sdl2::image::LoadTexture;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use super::{Capability, Color, Graphics, MatrixStack, Quad, TextureId};
use crate::assets::TextureRegistry;

/// Tolerance in pixels when deciding whether a quad is screen-aligned.
const ALIGN_EPSILON: f32 = 0.01;

/// SDL textures keyed by registry id.
pub type SdlTextures<'t> = HashMap<TextureId, Texture<'t>>;

/// Loads every registered texture from `<root>/<module>/textures/<name>.png`.
///
/// Textures that fail to load are logged and left out; quads using them
/// fall back to flat colour.
pub fn load_textures<'t>(
    texture_creator: &'t TextureCreator<WindowContext>,
    registry: &TextureRegistry,
    root: &Path,
) -> SdlTextures<'t> {
    let mut textures = HashMap::new();

    for texture in registry.iter() {
        let path = texture.uri().texture_path(root);
        match texture_creator.load_texture(&path) {
            Ok(loaded) => {
                textures.insert(texture.id(), loaded);
            }
            Err(e) => warn!("Failed to load {} from {}: {}", texture.uri(), path.display(), e),
        }
    }

    textures
}

enum Primitive {
    Textured {
        texture: TextureId,
        src: Rect,
        dst: Rect,
        depth: f32,
    },
    Filled {
        points: [Vec2; 4],
        color: Color,
        depth: f32,
    },
}

impl Primitive {
    fn depth(&self) -> f32 {
        match self {
            Primitive::Textured { depth, .. } | Primitive::Filled { depth, .. } => *depth,
        }
    }
}

pub struct CanvasGraphics<'a, 't> {
    canvas: &'a mut Canvas<Window>,
    textures: &'a SdlTextures<'t>,
    matrices: MatrixStack,
    enabled: HashSet<Capability>,
    bound_texture: Option<TextureId>,
    deferred: Vec<Primitive>,
}

impl<'a, 't> CanvasGraphics<'a, 't> {
    pub fn new(canvas: &'a mut Canvas<Window>, textures: &'a SdlTextures<'t>) -> Self {
        CanvasGraphics {
            canvas,
            textures,
            matrices: MatrixStack::new(),
            enabled: HashSet::new(),
            bound_texture: None,
            deferred: Vec::new(),
        }
    }

    /// Draws everything queued behind the depth test, farthest first.
    pub fn flush(&mut self) {
        let mut deferred = std::mem::take(&mut self.deferred);
        deferred.sort_by(|a, b| a.depth().total_cmp(&b.depth()));
        for primitive in &deferred {
            self.draw(primitive);
        }
    }

    fn emit(&mut self, primitive: Primitive) {
        if self.enabled.contains(&Capability::DepthTest) {
            self.deferred.push(primitive);
        } else {
            self.draw(&primitive);
        }
    }

    fn draw(&mut self, primitive: &Primitive) {
        let result = match primitive {
            Primitive::Textured { texture, src, dst, .. } => match self.textures.get(texture) {
                Some(texture) => self.canvas.copy(texture, *src, *dst),
                None => Ok(()),
            },
            Primitive::Filled { points, color, .. } => self.fill_quad(points, *color),
        };

        if let Err(e) = result {
            warn!("Canvas draw failed: {}", e);
        }
    }

    fn fill_quad(&mut self, points: &[Vec2; 4], color: Color) -> Result<(), String> {
        self.canvas
            .set_draw_color(sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a));

        if is_screen_aligned(points) {
            return self.canvas.fill_rect(bounding_rect(points));
        }

        // Scanline fill; quads are convex so each row is a single span
        let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min).floor() as i32;
        let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max).ceil() as i32;

        for y in min_y..=max_y {
            let scan = y as f32 + 0.5;
            let mut span: Option<(f32, f32)> = None;

            for i in 0..4 {
                let (a, b) = (points[i], points[(i + 1) % 4]);
                if (a.y <= scan && b.y > scan) || (b.y <= scan && a.y > scan) {
                    let x = a.x + (scan - a.y) / (b.y - a.y) * (b.x - a.x);
                    span = Some(match span {
                        Some((lo, hi)) => (lo.min(x), hi.max(x)),
                        None => (x, x),
                    });
                }
            }

            if let Some((lo, hi)) = span {
                self.canvas
                    .draw_line(Point::new(lo.round() as i32, y), Point::new(hi.round() as i32, y))?;
            }
        }

        Ok(())
    }

    fn project(&self, point: Vec3) -> Vec3 {
        self.matrices.transform_point(point)
    }

    fn textured_source(&self, quad: &Quad) -> Option<(TextureId, Rect)> {
        if !self.enabled.contains(&Capability::Texture2D) {
            return None;
        }
        let id = self.bound_texture?;
        let query = self.textures.get(&id)?.query();

        let uv_min = quad.vertices[0].uv;
        let uv_max = quad.vertices[2].uv;
        let src = Rect::new(
            (uv_min.x * query.width as f32).round() as i32,
            (uv_min.y * query.height as f32).round() as i32,
            (((uv_max.x - uv_min.x) * query.width as f32).round() as u32).max(1),
            (((uv_max.y - uv_min.y) * query.height as f32).round() as u32).max(1),
        );
        Some((id, src))
    }
}

impl Drop for CanvasGraphics<'_, '_> {
    fn drop(&mut self) {
        self.flush();
    }
}

impl Graphics for CanvasGraphics<'_, '_> {
    fn enable(&mut self, capability: Capability) {
        self.enabled.insert(capability);
    }

    fn disable(&mut self, capability: Capability) {
        self.enabled.remove(&capability);
        if capability == Capability::DepthTest {
            self.flush();
        }
    }

    fn clear_depth(&mut self) {
        self.flush();
    }

    fn push_matrix(&mut self) {
        self.matrices.push();
    }

    fn pop_matrix(&mut self) {
        if !self.matrices.pop() {
            warn!("Matrix stack underflow");
        }
    }

    fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.matrices.translate(Vec3::new(x, y, z));
    }

    fn scale(&mut self, x: f32, y: f32, z: f32) {
        self.matrices.scale(Vec3::new(x, y, z));
    }

    fn rotate(&mut self, degrees: f32, x: f32, y: f32, z: f32) {
        self.matrices.rotate(degrees, Vec3::new(x, y, z));
    }

    fn bind_texture(&mut self, texture: TextureId) {
        self.bound_texture = Some(texture);
    }

    fn draw_quad(&mut self, quad: &Quad) {
        let projected = quad.vertices.map(|v| self.project(v.position));
        let points = projected.map(|p| p.truncate());
        let depth = projected.iter().map(|p| p.z).sum::<f32>() / 4.0;

        let primitive = match self.textured_source(quad) {
            Some((texture, src)) if is_screen_aligned(&points) => Primitive::Textured {
                texture,
                src,
                dst: bounding_rect(&points),
                depth,
            },
            _ => Primitive::Filled {
                points,
                color: quad.vertices[0].color,
                depth,
            },
        };

        self.emit(primitive);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let corners = [
            Vec3::new(x, y, 0.0),
            Vec3::new(x + width, y, 0.0),
            Vec3::new(x + width, y + height, 0.0),
            Vec3::new(x, y + height, 0.0),
        ];
        let projected = corners.map(|p| self.project(p));
        let depth = projected.iter().map(|p| p.z).sum::<f32>() / 4.0;

        self.emit(Primitive::Filled {
            points: projected.map(|p| p.truncate()),
            color,
            depth,
        });
    }
}

/// True for quads whose edges run along the screen axes, in either winding.
fn is_screen_aligned(points: &[Vec2; 4]) -> bool {
    let close = |a: f32, b: f32| (a - b).abs() < ALIGN_EPSILON;
    let [p0, p1, p2, p3] = *points;

    (close(p0.y, p1.y) && close(p1.x, p2.x) && close(p2.y, p3.y) && close(p3.x, p0.x))
        || (close(p0.x, p1.x) && close(p1.y, p2.y) && close(p2.x, p3.x) && close(p3.y, p0.y))
}

fn bounding_rect(points: &[Vec2; 4]) -> Rect {
    let min = points.iter().copied().fold(Vec2::splat(f32::INFINITY), Vec2::min);
    let max = points.iter().copied().fold(Vec2::splat(f32::NEG_INFINITY), Vec2::max);

    Rect::new(
        min.x.round() as i32,
        min.y.round() as i32,
        ((max.x - min.x).round() as u32).max(1),
        ((max.y - min.y).round() as u32).max(1),
    )
}
