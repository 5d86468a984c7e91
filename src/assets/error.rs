use std::fmt;

/// Errors that can occur while loading or registering assets
#[derive(Debug)]
pub enum AssetError {
    /// Reading an asset file failed
    Io(std::io::Error),

    /// Manifest JSON could not be parsed
    Parse(serde_json::Error),

    /// URI was not of the form `module:name`
    InvalidUri(String),

    /// An asset with this name is already registered
    Duplicate(String),

    /// Icon definition names neither or both of an atlas tile and a block
    InvalidIcon(String),

    /// Icon refers to a block family that was never registered
    UnknownBlockFamily(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssetError::Io(e) => write!(f, "IO error: {}", e),
            AssetError::Parse(e) => write!(f, "Manifest parse error: {}", e),
            AssetError::InvalidUri(uri) => write!(f, "Invalid asset uri: '{}'", uri),
            AssetError::Duplicate(name) => write!(f, "Asset '{}' already registered", name),
            AssetError::InvalidIcon(name) => {
                write!(f, "Icon '{}' must name exactly one of an atlas tile or a block", name)
            }
            AssetError::UnknownBlockFamily(uri) => write!(f, "Unknown block family: {}", uri),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        AssetError::Io(err)
    }
}

impl From<serde_json::Error> for AssetError {
    fn from(err: serde_json::Error) -> Self {
        AssetError::Parse(err)
    }
}

impl From<AssetError> for String {
    fn from(error: AssetError) -> Self {
        error.to_string()
    }
}
