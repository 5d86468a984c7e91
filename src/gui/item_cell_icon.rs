//! Item cell icon
//!
//! Displays a little icon and the stack count for one inventory cell. The
//! cell only holds a reference to the item entity; everything it shows is
//! read from the entity's components each frame.

use std::cell::RefCell;
use std::collections::HashSet;

use glam::Vec2;
use log::debug;

use super::icon::QUESTION_MARK;
use super::{DisplayContainer, DisplayElement, Icon, TextLabel, UiContext, render_transformed};
use crate::assets::{self, Texture, TextureRegistry};
use crate::block::BlockFamily;
use crate::entity::{BlockItemComponent, EntityRef, ItemComponent};
use crate::gfx::{Capability, EnabledGuard, Graphics, MatrixGuard};

/// Where the stack count is drawn, relative to the cell.
pub const ITEM_COUNT_POSITION: Vec2 = Vec2::new(26.0, 5.0);

/// Centre of the icon, relative to the cell.
const ICON_OFFSET: Vec2 = Vec2::new(20.0, 20.0);

pub struct ItemCellIcon {
    item_entity: EntityRef,
    item_count: TextLabel,
    terrain_texture: Texture,
    container: DisplayContainer,

    /// Icon names already reported as missing, so each is logged once
    reported_missing: RefCell<HashSet<String>>,
}

impl ItemCellIcon {
    pub fn new(textures: &mut TextureRegistry) -> Self {
        let terrain_texture = textures.load(&assets::terrain_uri());

        let mut item_count = TextLabel::new();
        item_count.set_visible(false);
        item_count.set_position(ITEM_COUNT_POSITION);

        ItemCellIcon {
            item_entity: EntityRef::NULL,
            item_count,
            terrain_texture,
            container: DisplayContainer::new(),
            reported_missing: RefCell::new(HashSet::new()),
        }
    }

    pub fn item_entity(&self) -> EntityRef {
        self.item_entity
    }

    pub fn set_item_entity(&mut self, item_entity: EntityRef) {
        self.item_entity = item_entity;
    }

    pub fn item_count(&self) -> &TextLabel {
        &self.item_count
    }

    pub fn item_count_mut(&mut self) -> &mut TextLabel {
        &mut self.item_count
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.container.set_position(position);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.container.set_visible(visible);
    }

    /// Adds an extra child drawn after the count label. Children are
    /// rendered with the cell but never updated by it.
    pub fn add_display_element(&mut self, element: Box<dyn DisplayElement>) {
        self.container.add_display_element(element);
    }

    fn report_missing_icon(&self, name: &str) {
        if self.reported_missing.borrow_mut().insert(name.to_string()) {
            debug!("No icon named '{}' for {}", name, self.item_entity);
        }
    }

    fn render_children(&self, gfx: &mut dyn Graphics, ctx: &UiContext<'_>) {
        render_transformed(&self.item_count, gfx, ctx);
        self.container.render_children(gfx, ctx);
    }

    fn render_icon(&self, gfx: &mut dyn Graphics, icon: &Icon) {
        let mut depth = EnabledGuard::new(gfx, Capability::DepthTest);
        depth.clear_depth();
        let mut matrix = MatrixGuard::new(&mut *depth);
        matrix.translate(ICON_OFFSET.x, ICON_OFFSET.y, 0.0);
        icon.render(&mut *matrix);
    }

    fn render_block_icon(&self, gfx: &mut dyn Graphics, ctx: &UiContext<'_>, block_family: Option<&BlockFamily>) {
        let Some(block_family) = block_family else {
            match ctx.icons.get(QUESTION_MARK) {
                Some(icon) => self.render_icon(gfx, icon),
                None => self.report_missing_icon(QUESTION_MARK),
            }
            return;
        };

        let mut depth = EnabledGuard::new(gfx, Capability::DepthTest);
        depth.clear_depth();
        let mut matrix = MatrixGuard::new(&mut *depth);
        matrix.translate(ICON_OFFSET.x, ICON_OFFSET.y, 0.0);
        block_family.render_preview(&mut *matrix, &self.terrain_texture);
    }
}

impl DisplayElement for ItemCellIcon {
    fn update(&mut self, ctx: &UiContext<'_>) {
        if let Some(item) = ctx.entities.get_component::<ItemComponent>(self.item_entity) {
            if item.stack_count > 1 {
                self.item_count.set_visible(true);
                self.item_count.set_text(item.stack_count.to_string());
            } else {
                self.item_count.set_visible(false);
            }
        }
    }

    /// Draws the icon, then the children. Without an item component nothing
    /// is drawn at all, children included.
    fn render(&self, gfx: &mut dyn Graphics, ctx: &UiContext<'_>) {
        let Some(item) = ctx.entities.get_component::<ItemComponent>(self.item_entity) else {
            return;
        };

        if item.icon.is_empty() {
            if let Some(block_item) = ctx.entities.get_component::<BlockItemComponent>(self.item_entity) {
                self.render_block_icon(gfx, ctx, block_item.block_family.as_deref());
            }
        } else {
            match ctx.icons.get(&item.icon) {
                Some(icon) => self.render_icon(gfx, icon),
                None => self.report_missing_icon(&item.icon),
            }
        }

        self.render_children(gfx, ctx);
    }

    fn layout(&mut self) {}

    fn position(&self) -> Vec2 {
        self.container.position()
    }

    fn is_visible(&self) -> bool {
        self.container.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetUri;
    use crate::block::{Block, BlockTiles};
    use crate::entity::EntityManager;
    use crate::gfx::{Color, DrawCommand, RecordingGraphics};
    use crate::gui::IconRegistry;
    use glam::Vec3;
    use std::rc::Rc;
    use std::sync::{Mutex, Once};

    struct Fixture {
        entities: EntityManager,
        icons: IconRegistry,
        textures: TextureRegistry,
        dirt: Rc<BlockFamily>,
    }

    impl Fixture {
        fn new(with_question_mark: bool) -> Self {
            let mut textures = TextureRegistry::new();
            let items = textures.load(&assets::items_uri());

            let mut icons = IconRegistry::new();
            icons.register(Icon::atlas("pickaxe", items.clone(), (0, 0))).unwrap();
            if with_question_mark {
                icons.register(Icon::atlas(QUESTION_MARK, items, (4, 0))).unwrap();
            }

            let uri = AssetUri::new("engine", "dirt");
            let dirt = Rc::new(BlockFamily::new(
                uri.clone(),
                Block::new(uri, BlockTiles::uniform((2, 0)), Color::WHITE),
            ));

            Fixture {
                entities: EntityManager::new(),
                icons,
                textures,
                dirt,
            }
        }

        fn item(&mut self, stack_count: u32, icon: &str) -> EntityRef {
            let entity = self.entities.create_entity();
            self.entities
                .add_component(entity, ItemComponent::new("item", stack_count, icon))
                .unwrap();
            entity
        }

        fn block_item(&mut self, stack_count: u32, block_item: BlockItemComponent) -> EntityRef {
            let entity = self.item(stack_count, "");
            self.entities.add_component(entity, block_item).unwrap();
            entity
        }

        fn cell(&mut self, entity: EntityRef) -> ItemCellIcon {
            let mut cell = ItemCellIcon::new(&mut self.textures);
            cell.set_item_entity(entity);
            cell
        }

        fn texture_id(&self, uri: &AssetUri) -> u32 {
            self.textures.get(uri).unwrap().id()
        }

        fn update(&self, cell: &mut ItemCellIcon) {
            cell.update(&UiContext::new(&self.entities, &self.icons));
        }

        fn render(&self, cell: &ItemCellIcon) -> RecordingGraphics {
            let mut gfx = RecordingGraphics::new();
            cell.render(&mut gfx, &UiContext::new(&self.entities, &self.icons));
            gfx
        }
    }

    fn state_changes(gfx: &RecordingGraphics) -> Vec<DrawCommand> {
        gfx.commands()
            .iter()
            .filter(|c| !matches!(c, DrawCommand::DrawQuad { .. } | DrawCommand::FillRect { .. }))
            .cloned()
            .collect()
    }

    #[test]
    fn test_new_cell() {
        let mut fixture = Fixture::new(true);
        let cell = ItemCellIcon::new(&mut fixture.textures);

        assert_eq!(cell.item_entity(), EntityRef::NULL);
        assert!(!cell.item_count().is_visible());
        assert_eq!(cell.item_count().position(), ITEM_COUNT_POSITION);
        assert!(fixture.textures.get(&assets::terrain_uri()).is_some());
    }

    #[test]
    fn test_set_item_entity() {
        let mut fixture = Fixture::new(true);
        let entity = fixture.item(1, "pickaxe");
        let mut cell = fixture.cell(EntityRef::NULL);

        cell.set_item_entity(entity);
        assert_eq!(cell.item_entity(), entity);
        cell.set_item_entity(EntityRef::NULL);
        assert_eq!(cell.item_entity(), EntityRef::NULL);
    }

    #[test]
    fn test_update_shows_count_above_one() {
        let mut fixture = Fixture::new(true);
        for count in [2, 5, 64, 1000] {
            let entity = fixture.item(count, "pickaxe");
            let mut cell = fixture.cell(entity);
            fixture.update(&mut cell);

            assert!(cell.item_count().is_visible());
            assert_eq!(cell.item_count().text(), count.to_string());
        }
    }

    #[test]
    fn test_update_hides_count_of_one_or_less() {
        let mut fixture = Fixture::new(true);
        for count in [0, 1] {
            let entity = fixture.item(count, "pickaxe");
            let mut cell = fixture.cell(entity);
            cell.item_count_mut().set_visible(true);
            fixture.update(&mut cell);

            assert!(!cell.item_count().is_visible());
        }
    }

    #[test]
    fn test_update_without_item_keeps_label() {
        let mut fixture = Fixture::new(true);
        let stack = fixture.item(5, "pickaxe");
        let bare = fixture.entities.create_entity();
        let mut cell = fixture.cell(stack);
        fixture.update(&mut cell);

        for entity in [bare, EntityRef::NULL] {
            cell.set_item_entity(entity);
            fixture.update(&mut cell);
            assert!(cell.item_count().is_visible());
            assert_eq!(cell.item_count().text(), "5");
        }
    }

    #[test]
    fn test_render_without_item_draws_nothing() {
        let mut fixture = Fixture::new(true);
        let stack = fixture.item(5, "pickaxe");
        let mut cell = fixture.cell(stack);
        fixture.update(&mut cell);
        assert!(cell.item_count().is_visible());

        cell.set_item_entity(EntityRef::NULL);
        assert!(fixture.render(&cell).commands().is_empty());

        let bare = fixture.entities.create_entity();
        cell.set_item_entity(bare);
        assert!(fixture.render(&cell).commands().is_empty());
    }

    #[test]
    fn test_render_flat_icon() {
        let mut fixture = Fixture::new(true);
        let entity = fixture.item(1, "pickaxe");
        let mut cell = fixture.cell(entity);
        fixture.update(&mut cell);

        let gfx = fixture.render(&cell);
        let items = fixture.texture_id(&assets::items_uri());

        assert_eq!(
            state_changes(&gfx),
            vec![
                DrawCommand::Enable(Capability::DepthTest),
                DrawCommand::ClearDepth,
                DrawCommand::PushMatrix,
                DrawCommand::Translate(Vec3::new(20.0, 20.0, 0.0)),
                DrawCommand::Enable(Capability::Texture2D),
                DrawCommand::BindTexture(items),
                DrawCommand::Disable(Capability::Texture2D),
                DrawCommand::PopMatrix,
                DrawCommand::Disable(Capability::DepthTest),
            ]
        );
        assert_eq!(gfx.quads().count(), 1);
        assert!(gfx.is_balanced());
    }

    #[test]
    fn test_flat_icon_is_centred_on_cell_offset() {
        let mut fixture = Fixture::new(true);
        let entity = fixture.item(1, "pickaxe");
        let cell = fixture.cell(entity);

        let gfx = fixture.render(&cell);
        let (quad, transform) = gfx.quads().next().unwrap();
        assert_eq!(transform.transform_point3(quad.vertices[0].position), Vec3::new(4.0, 4.0, 0.0));
        assert_eq!(transform.transform_point3(quad.vertices[2].position), Vec3::new(36.0, 36.0, 0.0));
    }

    #[test]
    fn test_render_unknown_icon_draws_only_children() {
        let mut fixture = Fixture::new(true);
        let entity = fixture.item(3, "no_such_icon");
        let mut cell = fixture.cell(entity);
        fixture.update(&mut cell);

        let gfx = fixture.render(&cell);
        assert_eq!(gfx.quads().count(), 0);
        assert_eq!(gfx.count(|c| matches!(c, DrawCommand::Enable(_))), 0);
        assert!(gfx.count(|c| matches!(c, DrawCommand::FillRect { .. })) > 0);
        assert!(gfx.is_balanced());
    }

    #[test]
    fn test_render_block_preview() {
        let mut fixture = Fixture::new(true);
        let dirt = BlockItemComponent::new(Rc::clone(&fixture.dirt));
        let entity = fixture.block_item(1, dirt);
        let cell = fixture.cell(entity);

        let gfx = fixture.render(&cell);
        let terrain = fixture.texture_id(&assets::terrain_uri());

        assert_eq!(
            state_changes(&gfx),
            vec![
                DrawCommand::Enable(Capability::DepthTest),
                DrawCommand::ClearDepth,
                DrawCommand::PushMatrix,
                DrawCommand::Translate(Vec3::new(20.0, 20.0, 0.0)),
                DrawCommand::Enable(Capability::Texture2D),
                DrawCommand::PushMatrix,
                DrawCommand::Translate(Vec3::new(4.0, 0.0, 0.0)),
                DrawCommand::Scale(Vec3::splat(20.0)),
                DrawCommand::Rotate { degrees: 170.0, axis: Vec3::X },
                DrawCommand::Rotate { degrees: -16.0, axis: Vec3::Y },
                DrawCommand::BindTexture(terrain),
                DrawCommand::PopMatrix,
                DrawCommand::Disable(Capability::Texture2D),
                DrawCommand::PopMatrix,
                DrawCommand::Disable(Capability::DepthTest),
            ]
        );
        assert_eq!(gfx.quads().count(), 6);
        assert!(gfx.is_balanced());
    }

    #[test]
    fn test_render_block_without_family_draws_question_mark() {
        let mut fixture = Fixture::new(true);
        let entity = fixture.block_item(1, BlockItemComponent::unresolved());
        let cell = fixture.cell(entity);

        let gfx = fixture.render(&cell);
        let items = fixture.texture_id(&assets::items_uri());

        assert_eq!(
            state_changes(&gfx),
            vec![
                DrawCommand::Enable(Capability::DepthTest),
                DrawCommand::ClearDepth,
                DrawCommand::PushMatrix,
                DrawCommand::Translate(Vec3::new(20.0, 20.0, 0.0)),
                DrawCommand::Enable(Capability::Texture2D),
                DrawCommand::BindTexture(items),
                DrawCommand::Disable(Capability::Texture2D),
                DrawCommand::PopMatrix,
                DrawCommand::Disable(Capability::DepthTest),
            ]
        );
        assert_eq!(gfx.bound_texture(), Some(items));
        assert_eq!(gfx.quads().count(), 1);
        let (quad, _) = gfx.quads().next().unwrap();
        assert_eq!(quad.vertices[0].uv, Vec2::new(4.0 / 16.0, 0.0));
        assert!(gfx.is_balanced());
    }

    #[test]
    fn test_render_block_without_family_or_question_mark() {
        let mut fixture = Fixture::new(false);
        let entity = fixture.block_item(1, BlockItemComponent::unresolved());
        let cell = fixture.cell(entity);

        let gfx = fixture.render(&cell);
        assert!(gfx.commands().is_empty());
    }

    #[test]
    fn test_render_empty_icon_without_block_item() {
        let mut fixture = Fixture::new(true);
        let entity = fixture.item(1, "");
        let cell = fixture.cell(entity);

        assert!(fixture.render(&cell).commands().is_empty());
    }

    #[test]
    fn test_icon_name_wins_over_block_item() {
        let mut fixture = Fixture::new(true);
        let entity = fixture.item(1, "pickaxe");
        fixture
            .entities
            .add_component(entity, BlockItemComponent::new(Rc::clone(&fixture.dirt)))
            .unwrap();
        let cell = fixture.cell(entity);

        let gfx = fixture.render(&cell);
        assert_eq!(gfx.quads().count(), 1);
        assert!(gfx.is_balanced());
    }

    #[test]
    fn test_count_label_drawn_at_offset_after_icon() {
        let mut fixture = Fixture::new(true);
        let entity = fixture.item(7, "pickaxe");
        let mut cell = fixture.cell(entity);
        fixture.update(&mut cell);

        let gfx = fixture.render(&cell);
        let first_quad = gfx
            .commands()
            .iter()
            .position(|c| matches!(c, DrawCommand::DrawQuad { .. }))
            .unwrap();
        let first_fill = gfx
            .commands()
            .iter()
            .position(|c| matches!(c, DrawCommand::FillRect { .. }))
            .unwrap();
        assert!(first_quad < first_fill);

        // '7' lights its whole top row, so the first pixel sits on the label origin
        match &gfx.commands()[first_fill] {
            DrawCommand::FillRect { x, y, transform, .. } => {
                assert_eq!(transform.transform_point3(Vec3::new(*x, *y, 0.0)), Vec3::new(26.0, 5.0, 0.0));
            }
            _ => unreachable!(),
        }
        assert!(gfx.is_balanced());
    }

    struct CountingChild {
        updates: Rc<std::cell::Cell<u32>>,
        renders: Rc<std::cell::Cell<u32>>,
    }

    impl DisplayElement for CountingChild {
        fn update(&mut self, _ctx: &UiContext<'_>) {
            self.updates.set(self.updates.get() + 1);
        }

        fn render(&self, _gfx: &mut dyn Graphics, _ctx: &UiContext<'_>) {
            self.renders.set(self.renders.get() + 1);
        }

        fn position(&self) -> Vec2 {
            Vec2::ZERO
        }
    }

    #[test]
    fn test_extra_children_are_rendered_but_not_updated() {
        let mut fixture = Fixture::new(true);
        let entity = fixture.item(1, "pickaxe");
        let mut cell = fixture.cell(entity);

        let updates = Rc::new(std::cell::Cell::new(0));
        let renders = Rc::new(std::cell::Cell::new(0));
        cell.add_display_element(Box::new(CountingChild {
            updates: Rc::clone(&updates),
            renders: Rc::clone(&renders),
        }));

        fixture.update(&mut cell);
        fixture.render(&cell);
        assert_eq!(updates.get(), 0);
        assert_eq!(renders.get(), 1);

        // no item component: update is a no-op and nothing is drawn
        cell.set_item_entity(EntityRef::NULL);
        fixture.update(&mut cell);
        fixture.render(&cell);
        assert_eq!(updates.get(), 0);
        assert_eq!(renders.get(), 1);
    }

    struct CapturedLog(Mutex<Vec<String>>);

    static CAPTURED: CapturedLog = CapturedLog(Mutex::new(Vec::new()));

    impl log::Log for CapturedLog {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    fn captured_lines_containing(text: &str) -> usize {
        static INSTALL: Once = Once::new();
        INSTALL.call_once(|| {
            let _ = log::set_logger(&CAPTURED);
            log::set_max_level(log::LevelFilter::Debug);
        });
        CAPTURED.0.lock().unwrap().iter().filter(|line| line.contains(text)).count()
    }

    #[test]
    fn test_missing_icon_is_reported_once() {
        captured_lines_containing("");

        let mut fixture = Fixture::new(true);
        let entity = fixture.item(2, "lantern_of_nowhere");
        let mut cell = fixture.cell(entity);

        for _ in 0..60 {
            fixture.update(&mut cell);
            fixture.render(&cell);
        }

        assert_eq!(captured_lines_containing("lantern_of_nowhere"), 1);
    }

    #[test]
    fn test_hidden_cell_is_not_rendered_by_parent() {
        let mut fixture = Fixture::new(true);
        let entity = fixture.item(1, "pickaxe");
        let mut cell = fixture.cell(entity);
        cell.set_visible(false);

        let mut gfx = RecordingGraphics::new();
        render_transformed(&cell, &mut gfx, &UiContext::new(&fixture.entities, &fixture.icons));
        assert!(gfx.commands().is_empty());
    }
}
