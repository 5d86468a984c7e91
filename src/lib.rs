//! Inventory item cell rendering
//!
//! This crate draws the icon and stack-count label of a single inventory
//! cell. The cell reads item data from an entity store and renders either a
//! flat icon from the item atlas or a small 3D preview of a block, through
//! an immediate-mode [`gfx::Graphics`] backend.
//!
//! # Architecture
//!
//! - `gfx`: immediate-mode graphics trait, scoped state guards, backends
//! - `entity`: entity references, component storage, item components
//! - `block`: block families and their archetype block meshes
//! - `assets`: asset URIs, texture handles, the JSON asset manifest
//! - `gui`: display elements, labels, icons and the item cell widget
//! - `config` / `logging`: runtime configuration and logger setup

pub mod assets;
pub mod block;
pub mod config;
pub mod entity;
pub mod gfx;
pub mod gui;
pub mod logging;
