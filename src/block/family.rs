use crate::assets::{AssetUri, Texture};
use crate::gfx::{Capability, EnabledGuard, Graphics, MatrixGuard};

use super::Block;

/// A group of related block variants.
///
/// Only the archetype is kept; it is the variant used whenever the family is
/// shown as a whole, e.g. in an inventory slot.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockFamily {
    uri: AssetUri,
    archetype: Block,
}

impl BlockFamily {
    pub fn new(uri: AssetUri, archetype: Block) -> Self {
        BlockFamily { uri, archetype }
    }

    pub fn uri(&self) -> &AssetUri {
        &self.uri
    }

    pub fn archetype_block(&self) -> &Block {
        &self.archetype
    }

    /// Draws the archetype as a small tilted cube around the current origin,
    /// textured from `terrain` and fully lit.
    pub fn render_preview(&self, gfx: &mut dyn Graphics, terrain: &Texture) {
        let mut textured = EnabledGuard::new(gfx, Capability::Texture2D);
        let mut matrix = MatrixGuard::new(&mut *textured);

        matrix.translate(4.0, 0.0, 0.0);
        matrix.scale(20.0, 20.0, 20.0);
        matrix.rotate(170.0, 1.0, 0.0, 0.0);
        matrix.rotate(-16.0, 0.0, 1.0, 0.0);
        matrix.bind_texture(terrain.id());

        self.archetype.render_with_light_value(&mut *matrix, 1.0);
    }
}
