//! Named icons
//!
//! An icon is either a tile of the item atlas or a block family drawn as a
//! small cube. Icons are registered once from the asset manifest and looked
//! up by name when an item is drawn.

use std::collections::HashMap;
use std::rc::Rc;

use glam::Vec2;
use log::debug;

use crate::assets::{self, AssetError, AssetManifest, AssetUri, Texture, TextureRegistry};
use crate::block::{BlockFamily, BlockRegistry};
use crate::gfx::{Capability, Color, EnabledGuard, Graphics, Quad};

/// Icon drawn for block items whose family could not be resolved.
pub const QUESTION_MARK: &str = "questionmark";

/// Tiles per row and column in the item atlas.
pub const ITEM_ATLAS_TILES: u32 = 16;

/// Edge length of a flat icon on screen, in pixels.
pub const ICON_SIZE: f32 = 32.0;

#[derive(Debug, Clone)]
pub enum IconKind {
    /// Tile (column, row) of the item atlas
    Atlas { texture: Texture, tile: (u32, u32) },

    /// Block family shown as a preview cube
    Block { family: Rc<BlockFamily>, terrain: Texture },
}

#[derive(Debug, Clone)]
pub struct Icon {
    name: String,
    kind: IconKind,
}

impl Icon {
    pub fn atlas(name: impl Into<String>, texture: Texture, tile: (u32, u32)) -> Self {
        Icon {
            name: name.into().to_lowercase(),
            kind: IconKind::Atlas { texture, tile },
        }
    }

    pub fn block(name: impl Into<String>, family: Rc<BlockFamily>, terrain: Texture) -> Self {
        Icon {
            name: name.into().to_lowercase(),
            kind: IconKind::Block { family, terrain },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &IconKind {
        &self.kind
    }

    /// Draws the icon centred on the current origin.
    pub fn render(&self, gfx: &mut dyn Graphics) {
        match &self.kind {
            IconKind::Atlas { texture, tile } => {
                let tile_size = 1.0 / ITEM_ATLAS_TILES as f32;
                let uv_min = Vec2::new(tile.0 as f32 * tile_size, tile.1 as f32 * tile_size);
                let uv_max = uv_min + Vec2::splat(tile_size);
                let half = ICON_SIZE / 2.0;

                let mut textured = EnabledGuard::new(gfx, Capability::Texture2D);
                textured.bind_texture(texture.id());
                textured.draw_quad(&Quad::rect(-half, -half, ICON_SIZE, ICON_SIZE, uv_min, uv_max, Color::WHITE));
            }
            IconKind::Block { family, terrain } => family.render_preview(gfx, terrain),
        }
    }
}

/// Icons by lowercase name.
#[derive(Debug, Default)]
pub struct IconRegistry {
    icons: HashMap<String, Icon>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from the manifest's `icons` list.
    ///
    /// Atlas icons use the `engine:items` texture and block icons the
    /// `engine:terrain` texture; both are registered in `textures`.
    pub fn from_manifest(
        manifest: &AssetManifest,
        textures: &mut TextureRegistry,
        blocks: &BlockRegistry,
    ) -> Result<Self, AssetError> {
        let items = textures.load(&assets::items_uri());
        let terrain = textures.load(&assets::terrain_uri());
        let mut registry = Self::new();

        for def in &manifest.icons {
            let icon = match (&def.atlas, &def.block) {
                (Some(tile), None) => Icon::atlas(&def.name, items.clone(), *tile),
                (None, Some(block)) => {
                    let uri = AssetUri::parse(block)?;
                    let family = blocks
                        .get(&uri)
                        .ok_or_else(|| AssetError::UnknownBlockFamily(uri.to_string()))?;
                    Icon::block(&def.name, family, terrain.clone())
                }
                _ => return Err(AssetError::InvalidIcon(def.name.clone())),
            };
            registry.register(icon)?;
        }

        Ok(registry)
    }

    /// Returns error if an icon with this name already exists.
    pub fn register(&mut self, icon: Icon) -> Result<(), AssetError> {
        if self.icons.contains_key(icon.name()) {
            return Err(AssetError::Duplicate(icon.name().to_string()));
        }

        debug!("Registered icon '{}'", icon.name());
        self.icons.insert(icon.name().to_string(), icon);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Icon> {
        self.icons.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
