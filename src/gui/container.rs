use glam::Vec2;

use super::{DisplayElement, UiContext, render_transformed};
use crate::gfx::Graphics;

/// Ordered list of child elements sharing one origin.
///
/// Children are updated, laid out and rendered in insertion order.
pub struct DisplayContainer {
    position: Vec2,
    visible: bool,
    children: Vec<Box<dyn DisplayElement>>,
}

impl DisplayContainer {
    pub fn new() -> Self {
        DisplayContainer {
            position: Vec2::ZERO,
            visible: true,
            children: Vec::new(),
        }
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn add_display_element(&mut self, element: Box<dyn DisplayElement>) {
        self.children.push(element);
    }

    pub fn children(&self) -> &[Box<dyn DisplayElement>] {
        &self.children
    }

    pub fn update_children(&mut self, ctx: &UiContext<'_>) {
        for child in &mut self.children {
            child.update(ctx);
        }
    }

    pub fn render_children(&self, gfx: &mut dyn Graphics, ctx: &UiContext<'_>) {
        for child in &self.children {
            render_transformed(child.as_ref(), gfx, ctx);
        }
    }

    pub fn layout_children(&mut self) {
        for child in &mut self.children {
            child.layout();
        }
    }
}

impl Default for DisplayContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayElement for DisplayContainer {
    fn update(&mut self, ctx: &UiContext<'_>) {
        self.update_children(ctx);
    }

    fn render(&self, gfx: &mut dyn Graphics, ctx: &UiContext<'_>) {
        self.render_children(gfx, ctx);
    }

    fn layout(&mut self) {
        self.layout_children();
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
