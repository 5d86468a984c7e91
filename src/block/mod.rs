// Block model
//
// Just enough of the voxel block model to preview a block in the UI:
// - Block definitions and their cube mesh
// - Block families and their archetype block
// - A registry built from the asset manifest

pub mod definition;
pub mod family;
pub mod registry;

pub use definition::{Block, BlockTiles, Side, TERRAIN_ATLAS_TILES};
pub use family::BlockFamily;
pub use registry::BlockRegistry;
