use glam::Vec2;

use super::IconRegistry;
use crate::entity::EntityManager;
use crate::gfx::{Graphics, MatrixGuard};

/// What elements can read while updating and rendering.
#[derive(Clone, Copy)]
pub struct UiContext<'a> {
    pub entities: &'a EntityManager,
    pub icons: &'a IconRegistry,
}

impl<'a> UiContext<'a> {
    pub fn new(entities: &'a EntityManager, icons: &'a IconRegistry) -> Self {
        UiContext { entities, icons }
    }
}

/// A node in the GUI tree.
///
/// Elements draw in their own local space; the parent positions them
/// through [`render_transformed`].
pub trait DisplayElement {
    /// Called once per frame, before [`render`](Self::render).
    fn update(&mut self, ctx: &UiContext<'_>);

    fn render(&self, gfx: &mut dyn Graphics, ctx: &UiContext<'_>);

    fn layout(&mut self) {}

    /// Offset from the parent's origin in pixels
    fn position(&self) -> Vec2;

    fn is_visible(&self) -> bool {
        true
    }
}

/// Renders `element` at its position, or not at all if it is hidden.
pub fn render_transformed(element: &dyn DisplayElement, gfx: &mut dyn Graphics, ctx: &UiContext<'_>) {
    if !element.is_visible() {
        return;
    }

    let position = element.position();
    let mut matrix = MatrixGuard::new(gfx);
    matrix.translate(position.x, position.y, 0.0);
    element.render(&mut *matrix, ctx);
}
