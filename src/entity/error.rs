use std::fmt;

use super::EntityId;

/// Errors that can occur when mutating the entity store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// Operation targeted the null entity
    NullEntity,

    /// Entity was destroyed or never existed
    NoSuchEntity(EntityId),
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntityError::NullEntity => write!(f, "Operation on the null entity"),
            EntityError::NoSuchEntity(id) => write!(f, "Entity not found: {}", id.0),
        }
    }
}

impl std::error::Error for EntityError {}

impl From<EntityError> for String {
    fn from(error: EntityError) -> Self {
        error.to_string()
    }
}
