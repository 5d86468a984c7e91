//! Screen-Space GUI System
//!
//! A small retained GUI tree drawn through immediate-mode [`Graphics`](crate::gfx::Graphics)
//! calls once per frame.
//!
//! # Architecture
//!
//! GUI elements:
//! - Implement [`DisplayElement`] (`update` then `render`, every frame)
//! - Draw in local coordinates; parents place them with [`render_transformed`]
//! - Read game state through a [`UiContext`] instead of holding it
//!
//! # Available Components
//!
//! - [`DisplayContainer`] - Ordered group of child elements
//! - [`TextLabel`] - Bitmap text
//! - [`ItemCellIcon`] - Icon and stack count of one inventory cell
//!
//! # Example Usage
//!
//! ```ignore
//! let mut cell = ItemCellIcon::new(&mut textures);
//! cell.set_item_entity(item);
//!
//! // Each frame
//! let ctx = UiContext::new(&entities, &icons);
//! cell.update(&ctx);
//! render_transformed(&cell, &mut gfx, &ctx);
//! ```

pub mod container;
pub mod element;
pub mod icon;
pub mod item_cell_icon;
pub mod label;

pub use container::DisplayContainer;
pub use element::{DisplayElement, UiContext, render_transformed};
pub use icon::{Icon, IconKind, IconRegistry};
pub use item_cell_icon::ItemCellIcon;
pub use label::TextLabel;
