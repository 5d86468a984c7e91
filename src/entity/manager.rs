use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};

use log::debug;

use super::{EntityError, EntityId, EntityRef};

/// Marker trait for data that can be attached to an entity.
pub trait Component: Any {}

/// Per-type component storage keyed by entity.
///
/// Queries take an [`EntityRef`] and return `None` for the null entity,
/// destroyed entities and missing components alike.
#[derive(Default)]
pub struct EntityManager {
    next_id: u64,
    alive: HashSet<EntityId>,
    stores: HashMap<TypeId, HashMap<EntityId, Box<dyn Any>>>,
}

impl EntityManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_entity(&mut self) -> EntityRef {
        self.next_id += 1;
        let id = EntityId(self.next_id);
        self.alive.insert(id);
        EntityRef::Entity(id)
    }

    pub fn exists(&self, entity: EntityRef) -> bool {
        entity.id().is_some_and(|id| self.alive.contains(&id))
    }

    pub fn entity_count(&self) -> usize {
        self.alive.len()
    }

    /// Removes the entity and all of its components.
    pub fn destroy_entity(&mut self, entity: EntityRef) -> Result<(), EntityError> {
        let id = self.live_id(entity)?;
        self.alive.remove(&id);
        for store in self.stores.values_mut() {
            store.remove(&id);
        }
        debug!("Destroyed {}", entity);
        Ok(())
    }

    /// Attaches `component`, replacing any existing component of the same type.
    pub fn add_component<C: Component>(&mut self, entity: EntityRef, component: C) -> Result<(), EntityError> {
        let id = self.live_id(entity)?;
        self.stores
            .entry(TypeId::of::<C>())
            .or_default()
            .insert(id, Box::new(component));
        Ok(())
    }

    /// Detaches and returns the component of type `C`, if any.
    pub fn remove_component<C: Component>(&mut self, entity: EntityRef) -> Result<Option<C>, EntityError> {
        let id = self.live_id(entity)?;
        let removed = self
            .stores
            .get_mut(&TypeId::of::<C>())
            .and_then(|store| store.remove(&id))
            .and_then(|boxed| boxed.downcast::<C>().ok())
            .map(|boxed| *boxed);
        Ok(removed)
    }

    pub fn get_component<C: Component>(&self, entity: EntityRef) -> Option<&C> {
        let id = entity.id()?;
        self.stores.get(&TypeId::of::<C>())?.get(&id)?.downcast_ref::<C>()
    }

    pub fn get_component_mut<C: Component>(&mut self, entity: EntityRef) -> Option<&mut C> {
        let id = entity.id()?;
        self.stores.get_mut(&TypeId::of::<C>())?.get_mut(&id)?.downcast_mut::<C>()
    }

    pub fn has_component<C: Component>(&self, entity: EntityRef) -> bool {
        self.get_component::<C>(entity).is_some()
    }

    fn live_id(&self, entity: EntityRef) -> Result<EntityId, EntityError> {
        let id = entity.id().ok_or(EntityError::NullEntity)?;
        if self.alive.contains(&id) {
            Ok(id)
        } else {
            Err(EntityError::NoSuchEntity(id))
        }
    }
}
