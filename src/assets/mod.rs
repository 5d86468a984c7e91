// Asset module
//
// Asset naming and lookup for the item cell:
// - `module:name` uris
// - Texture handles shared between widgets and backends
// - The JSON manifest that declares icons and block families

pub mod error;
pub mod manifest;
pub mod texture;
pub mod uri;

pub use error::AssetError;
pub use manifest::{AssetManifest, BlockFamilyDef, IconDef};
pub use texture::{Texture, TextureRegistry};
pub use uri::AssetUri;

/// Terrain atlas used for block previews.
pub fn terrain_uri() -> AssetUri {
    AssetUri::new("engine", "terrain")
}

/// Item atlas used for flat icons.
pub fn items_uri() -> AssetUri {
    AssetUri::new("engine", "items")
}
