use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::assets::AssetUri;
use crate::gfx::{Color, Graphics, Quad, Vertex};

/// Tiles per row and column in the terrain atlas.
pub const TERRAIN_ATLAS_TILES: u32 = 16;

/// Atlas tiles (column, row) for each face group of a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTiles {
    pub top: (u32, u32),
    pub side: (u32, u32),
    pub bottom: (u32, u32),
}

impl BlockTiles {
    /// Same tile on every face.
    pub fn uniform(tile: (u32, u32)) -> Self {
        BlockTiles {
            top: tile,
            side: tile,
            bottom: tile,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl Side {
    pub const ALL: [Side; 6] = [Side::Top, Side::Bottom, Side::Left, Side::Right, Side::Front, Side::Back];

    /// Brightness applied on top of the light value.
    pub fn shade(self) -> f32 {
        match self {
            Side::Top => 1.0,
            Side::Bottom => 0.5,
            _ => 0.8,
        }
    }

    /// Corners of this face on the unit cube centred at the origin, in
    /// top-left, top-right, bottom-right, bottom-left order as seen from outside.
    fn corners(self) -> [Vec3; 4] {
        const H: f32 = 0.5;
        match self {
            Side::Top => [
                Vec3::new(-H, H, -H),
                Vec3::new(H, H, -H),
                Vec3::new(H, H, H),
                Vec3::new(-H, H, H),
            ],
            Side::Bottom => [
                Vec3::new(-H, -H, H),
                Vec3::new(H, -H, H),
                Vec3::new(H, -H, -H),
                Vec3::new(-H, -H, -H),
            ],
            Side::Left => [
                Vec3::new(-H, H, -H),
                Vec3::new(-H, H, H),
                Vec3::new(-H, -H, H),
                Vec3::new(-H, -H, -H),
            ],
            Side::Right => [
                Vec3::new(H, H, H),
                Vec3::new(H, H, -H),
                Vec3::new(H, -H, -H),
                Vec3::new(H, -H, H),
            ],
            Side::Front => [
                Vec3::new(-H, H, H),
                Vec3::new(H, H, H),
                Vec3::new(H, -H, H),
                Vec3::new(-H, -H, H),
            ],
            Side::Back => [
                Vec3::new(H, H, -H),
                Vec3::new(-H, H, -H),
                Vec3::new(-H, -H, -H),
                Vec3::new(H, -H, -H),
            ],
        }
    }
}

/// A concrete block variant with its appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    uri: AssetUri,
    tiles: BlockTiles,
    tint: Color,
}

impl Block {
    pub fn new(uri: AssetUri, tiles: BlockTiles, tint: Color) -> Self {
        Block { uri, tiles, tint }
    }

    pub fn uri(&self) -> &AssetUri {
        &self.uri
    }

    pub fn tiles(&self) -> BlockTiles {
        self.tiles
    }

    pub fn tile(&self, side: Side) -> (u32, u32) {
        match side {
            Side::Top => self.tiles.top,
            Side::Bottom => self.tiles.bottom,
            _ => self.tiles.side,
        }
    }

    /// Vertex colour of `side` at the given light value (clamped to 0..=1).
    pub fn face_color(&self, side: Side, light: f32) -> Color {
        self.tint.scaled(side.shade() * light.clamp(0.0, 1.0))
    }

    /// Draws the unit cube in the current transform, one quad per face,
    /// sampling the currently bound terrain atlas.
    pub fn render_with_light_value(&self, gfx: &mut dyn Graphics, light: f32) {
        let tile_size = 1.0 / TERRAIN_ATLAS_TILES as f32;

        for side in Side::ALL {
            let (column, row) = self.tile(side);
            let uv_min = Vec2::new(column as f32 * tile_size, row as f32 * tile_size);
            let uv_max = uv_min + Vec2::splat(tile_size);
            let uvs = [
                uv_min,
                Vec2::new(uv_max.x, uv_min.y),
                uv_max,
                Vec2::new(uv_min.x, uv_max.y),
            ];
            let color = self.face_color(side, light);
            let corners = side.corners();

            let vertices = std::array::from_fn(|i| Vertex::new(corners[i], uvs[i], color));
            gfx.draw_quad(&Quad::new(vertices));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::RecordingGraphics;

    fn grass() -> Block {
        Block::new(
            AssetUri::new("engine", "grass"),
            BlockTiles {
                top: (0, 0),
                side: (3, 0),
                bottom: (2, 0),
            },
            Color::rgb(200, 200, 200),
        )
    }

    #[test]
    fn test_renders_six_faces() {
        let mut gfx = RecordingGraphics::new();
        grass().render_with_light_value(&mut gfx, 1.0);
        assert_eq!(gfx.quads().count(), 6);
        assert!(gfx.is_balanced());
    }

    #[test]
    fn test_face_shading() {
        let block = grass();
        assert_eq!(block.face_color(Side::Top, 1.0), Color::rgb(200, 200, 200));
        assert_eq!(block.face_color(Side::Front, 1.0), Color::rgb(160, 160, 160));
        assert_eq!(block.face_color(Side::Bottom, 1.0), Color::rgb(100, 100, 100));
        assert_eq!(block.face_color(Side::Top, 0.5), Color::rgb(100, 100, 100));
    }

    #[test]
    fn test_light_value_is_clamped() {
        let block = grass();
        assert_eq!(block.face_color(Side::Top, 4.0), block.face_color(Side::Top, 1.0));
        assert_eq!(block.face_color(Side::Top, -1.0), Color::BLACK);
    }

    #[test]
    fn test_tiles_map_to_atlas_uvs() {
        let mut gfx = RecordingGraphics::new();
        grass().render_with_light_value(&mut gfx, 1.0);

        // Left is the third face drawn and uses the side tile (3, 0)
        let (left, _) = gfx.quads().nth(2).unwrap();
        assert_eq!(left.vertices[0].uv, Vec2::new(3.0 / 16.0, 0.0));
        assert_eq!(left.vertices[2].uv, Vec2::new(4.0 / 16.0, 1.0 / 16.0));
    }

    #[test]
    fn test_faces_lie_on_unit_cube() {
        for side in Side::ALL {
            for corner in side.corners() {
                assert_eq!(corner.abs(), Vec3::splat(0.5));
            }
        }
    }
}
