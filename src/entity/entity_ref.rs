use std::fmt;

/// Identifier of a live entity in an [`EntityManager`](super::EntityManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// Non-owning reference to an entity.
///
/// `Null` stands for "no entity": every component query against it comes
/// back empty, so holders never need a separate presence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityRef {
    #[default]
    Null,
    Entity(EntityId),
}

impl EntityRef {
    pub const NULL: EntityRef = EntityRef::Null;

    pub fn is_null(&self) -> bool {
        matches!(self, EntityRef::Null)
    }

    pub fn id(&self) -> Option<EntityId> {
        match self {
            EntityRef::Null => None,
            EntityRef::Entity(id) => Some(*id),
        }
    }
}

impl From<EntityId> for EntityRef {
    fn from(id: EntityId) -> Self {
        EntityRef::Entity(id)
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntityRef::Null => write!(f, "EntityRef::NULL"),
            EntityRef::Entity(id) => write!(f, "EntityRef({})", id.0),
        }
    }
}
