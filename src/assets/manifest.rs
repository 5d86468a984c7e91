//! Asset manifest
//!
//! The manifest is a JSON file listing the icons and block families the
//! game knows about:
//!
//! ```json
//! {
//!   "icons": [
//!     { "name": "pickaxe", "atlas": [0, 0] },
//!     { "name": "grass", "block": "engine:grass" }
//!   ],
//!   "block_families": [
//!     { "uri": "engine:grass", "tiles": { "top": [0, 0], "side": [3, 0], "bottom": [2, 0] } }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::AssetError;
use crate::block::BlockTiles;
use crate::gfx::Color;

/// One entry of the `icons` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconDef {
    pub name: String,

    /// Tile position in the item atlas (column, row)
    #[serde(default)]
    pub atlas: Option<(u32, u32)>,

    /// Block family uri rendered as a block preview
    #[serde(default)]
    pub block: Option<String>,
}

/// One entry of the `block_families` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockFamilyDef {
    pub uri: String,
    pub tiles: BlockTiles,
    #[serde(default)]
    pub tint: Color,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub icons: Vec<IconDef>,
    #[serde(default)]
    pub block_families: Vec<BlockFamilyDef>,
}

impl AssetManifest {
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let manifest = Self::from_json(&json)?;

        info!(
            "Loaded asset manifest {} ({} icons, {} block families)",
            path.display(),
            manifest.icons.len(),
            manifest.block_families.len()
        );

        Ok(manifest)
    }
}
