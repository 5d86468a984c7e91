use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use super::{Block, BlockFamily};
use crate::assets::{AssetError, AssetManifest, AssetUri};

/// Registry of block families by uri.
///
/// Families are handed out as `Rc` so item components can keep a reference
/// to the family they place.
#[derive(Debug, Default)]
pub struct BlockRegistry {
    families: HashMap<AssetUri, Rc<BlockFamily>>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from the manifest's `block_families` list.
    pub fn from_manifest(manifest: &AssetManifest) -> Result<Self, AssetError> {
        let mut registry = Self::new();

        for def in &manifest.block_families {
            let uri = AssetUri::parse(&def.uri)?;
            let archetype = Block::new(uri.clone(), def.tiles, def.tint);
            registry.register(BlockFamily::new(uri, archetype))?;
        }

        Ok(registry)
    }

    /// Returns error if a family with this uri already exists.
    pub fn register(&mut self, family: BlockFamily) -> Result<Rc<BlockFamily>, AssetError> {
        if self.families.contains_key(family.uri()) {
            return Err(AssetError::Duplicate(family.uri().to_string()));
        }

        debug!("Registered block family {}", family.uri());
        let family = Rc::new(family);
        self.families.insert(family.uri().clone(), Rc::clone(&family));
        Ok(family)
    }

    pub fn get(&self, uri: &AssetUri) -> Option<Rc<BlockFamily>> {
        self.families.get(uri).cloned()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}
