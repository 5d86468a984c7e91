// Entity module
//
// A small entity store for item data:
// - Null-able entity references
// - Type-keyed component storage
// - The item and block-item components read by the UI

pub mod components;
pub mod entity_ref;
pub mod error;
pub mod manager;

pub use components::{BlockItemComponent, ItemComponent};
pub use entity_ref::{EntityId, EntityRef};
pub use error::EntityError;
pub use manager::{Component, EntityManager};
