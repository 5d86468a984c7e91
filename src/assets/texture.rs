use std::collections::HashMap;

use log::debug;

use super::AssetUri;
use crate::gfx::TextureId;

/// Handle to a texture known to the registry.
///
/// The handle only names the texture; backends upload the pixels and map
/// the id to their own resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    id: TextureId,
    uri: AssetUri,
}

impl Texture {
    pub fn id(&self) -> TextureId {
        self.id
    }

    pub fn uri(&self) -> &AssetUri {
        &self.uri
    }
}

/// Hands out texture ids by uri.
///
/// Loading the same uri twice returns the same handle. Ids start at 1 and
/// are never reused.
#[derive(Debug)]
pub struct TextureRegistry {
    textures: HashMap<AssetUri, Texture>,
    next_id: TextureId,
}

impl TextureRegistry {
    pub fn new() -> Self {
        TextureRegistry {
            textures: HashMap::new(),
            next_id: 1,
        }
    }

    /// Returns the handle for `uri`, registering it on first use.
    pub fn load(&mut self, uri: &AssetUri) -> Texture {
        if let Some(texture) = self.textures.get(uri) {
            return texture.clone();
        }

        let texture = Texture {
            id: self.next_id,
            uri: uri.clone(),
        };
        self.next_id += 1;
        debug!("Registered texture {} as id {}", uri, texture.id);

        self.textures.insert(uri.clone(), texture.clone());
        texture
    }

    pub fn get(&self, uri: &AssetUri) -> Option<&Texture> {
        self.textures.get(uri)
    }

    /// All registered textures, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Texture> {
        let mut textures: Vec<&Texture> = self.textures.values().collect();
        textures.sort_by_key(|texture| texture.id);
        textures.into_iter()
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
