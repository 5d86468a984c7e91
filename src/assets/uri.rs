use std::fmt;
use std::path::{Path, PathBuf};

use super::AssetError;

/// Name of an asset inside a module, written `module:name`.
///
/// Both parts are stored lowercase, so `Engine:Terrain` and `engine:terrain`
/// refer to the same asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetUri {
    module: String,
    name: String,
}

impl AssetUri {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        AssetUri {
            module: module.into().to_lowercase(),
            name: name.into().to_lowercase(),
        }
    }

    pub fn parse(uri: &str) -> Result<Self, AssetError> {
        match uri.split_once(':') {
            Some((module, name))
                if !module.is_empty() && !name.is_empty() && !name.contains(':') =>
            {
                Ok(AssetUri::new(module, name))
            }
            _ => Err(AssetError::InvalidUri(uri.to_string())),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the texture image for this uri below `root`.
    pub fn texture_path(&self, root: &Path) -> PathBuf {
        root.join(&self.module)
            .join("textures")
            .join(format!("{}.png", self.name))
    }
}

impl fmt::Display for AssetUri {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.name)
    }
}
