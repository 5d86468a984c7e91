use std::rc::Rc;

use super::Component;
use crate::block::BlockFamily;

/// Item data carried by every item entity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemComponent {
    /// Display name
    pub name: String,

    /// How many items the stack holds
    pub stack_count: u32,

    /// Name of the icon to show; empty for block items, which render a preview
    pub icon: String,
}

impl ItemComponent {
    pub fn new(name: impl Into<String>, stack_count: u32, icon: impl Into<String>) -> Self {
        ItemComponent {
            name: name.into(),
            stack_count,
            icon: icon.into(),
        }
    }
}

impl Component for ItemComponent {}

/// Marks an item that places a block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockItemComponent {
    /// Family placed by the item; `None` if it could not be resolved
    pub block_family: Option<Rc<BlockFamily>>,
}

impl BlockItemComponent {
    pub fn new(block_family: Rc<BlockFamily>) -> Self {
        BlockItemComponent {
            block_family: Some(block_family),
        }
    }

    pub fn unresolved() -> Self {
        BlockItemComponent { block_family: None }
    }
}

impl Component for BlockItemComponent {}
