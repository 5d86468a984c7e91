use glam::Vec2;

use super::{DisplayElement, UiContext};
use crate::gfx::text::draw_text;
use crate::gfx::{Color, Graphics};

/// Single line of bitmap text.
#[derive(Debug, Clone)]
pub struct TextLabel {
    text: String,
    position: Vec2,
    visible: bool,
    color: Color,
    scale: f32,
}

impl TextLabel {
    pub fn new() -> Self {
        TextLabel {
            text: String::new(),
            position: Vec2::ZERO,
            visible: true,
            color: Color::WHITE,
            scale: 1.0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

impl Default for TextLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayElement for TextLabel {
    fn update(&mut self, _ctx: &UiContext<'_>) {}

    fn render(&self, gfx: &mut dyn Graphics, _ctx: &UiContext<'_>) {
        draw_text(gfx, &self.text, 0.0, 0.0, self.color, self.scale);
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityManager;
    use crate::gfx::{DrawCommand, RecordingGraphics};
    use crate::gui::{IconRegistry, render_transformed};

    #[test]
    fn test_label_defaults() {
        let label = TextLabel::new();
        assert_eq!(label.text(), "");
        assert!(label.is_visible());
        assert_eq!(label.position(), Vec2::ZERO);
        assert_eq!(label.color(), Color::WHITE);
    }

    #[test]
    fn test_label_draws_in_its_color() {
        let entities = EntityManager::new();
        let icons = IconRegistry::new();
        let ctx = UiContext::new(&entities, &icons);

        let mut label = TextLabel::new();
        label.set_text("7");
        label.set_color(Color::rgb(255, 255, 0));

        let mut gfx = RecordingGraphics::new();
        render_transformed(&label, &mut gfx, &ctx);

        assert!(gfx.count(|c| matches!(c, DrawCommand::FillRect { .. })) > 0);
        assert_eq!(
            gfx.count(|c| matches!(c, DrawCommand::FillRect { color, .. } if *color != Color::rgb(255, 255, 0))),
            0
        );
        assert!(gfx.is_balanced());
    }
}
