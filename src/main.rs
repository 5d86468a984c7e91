use log::{info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use glam::Vec2;
use item_cell_icon::assets::{AssetManifest, AssetUri, TextureRegistry};
use item_cell_icon::block::BlockRegistry;
use item_cell_icon::config::UiConfig;
use item_cell_icon::entity::{BlockItemComponent, EntityManager, EntityRef, ItemComponent};
use item_cell_icon::gfx::Graphics;
use item_cell_icon::gfx::canvas::{CanvasGraphics, load_textures};
use item_cell_icon::gui::{DisplayContainer, DisplayElement, IconRegistry, ItemCellIcon, UiContext, render_transformed};
use item_cell_icon::logging;

/// Margin around the row of cells
const ROW_MARGIN: f32 = 16.0;

/// Largest stack the number keys can build
const MAX_STACK: u32 = 99;

/// Creates one item entity, with a block item component if `block` is set.
fn spawn_item(
    entities: &mut EntityManager,
    name: &str,
    stack_count: u32,
    icon: &str,
    block: Option<BlockItemComponent>,
) -> Result<EntityRef, String> {
    let entity = entities.create_entity();
    entities
        .add_component(entity, ItemComponent::new(name, stack_count, icon))
        .map_err(|e| format!("Failed to add item to {}: {}", entity, e))?;

    if let Some(block) = block {
        entities
            .add_component(entity, block)
            .map_err(|e| format!("Failed to add block item to {}: {}", entity, e))?;
    }

    Ok(entity)
}

/// The demo inventory row, one entity per cell
///
/// The first entity is the stack the number keys change.
fn spawn_items(entities: &mut EntityManager, blocks: &BlockRegistry) -> Result<Vec<EntityRef>, String> {
    let dirt = match blocks.get(&AssetUri::new("engine", "dirt")) {
        Some(family) => BlockItemComponent::new(family),
        None => {
            warn!("No engine:dirt block family in the manifest");
            BlockItemComponent::unresolved()
        }
    };

    Ok(vec![
        spawn_item(entities, "dirt", 12, "", Some(dirt))?,
        spawn_item(entities, "pickaxe", 1, "pickaxe", None)?,
        spawn_item(entities, "torch", 5, "torch", None)?,
        spawn_item(entities, "mystery", 3, "nosuchicon", None)?,
        spawn_item(entities, "lost block", 1, "", Some(BlockItemComponent::unresolved()))?,
        spawn_item(entities, "grass", 64, "grassblock", None)?,
    ])
}

fn cell_origin(config: &UiConfig, index: usize) -> Vec2 {
    Vec2::new(
        ROW_MARGIN + index as f32 * (config.cell_size + config.cell_spacing),
        ROW_MARGIN,
    )
}

fn digit_key(keycode: Keycode) -> Option<u32> {
    match keycode {
        Keycode::Num0 => Some(0),
        Keycode::Num1 => Some(1),
        Keycode::Num2 => Some(2),
        Keycode::Num3 => Some(3),
        Keycode::Num4 => Some(4),
        Keycode::Num5 => Some(5),
        Keycode::Num6 => Some(6),
        Keycode::Num7 => Some(7),
        Keycode::Num8 => Some(8),
        Keycode::Num9 => Some(9),
        _ => None,
    }
}

fn main() -> Result<(), String> {
    let config = UiConfig::load().map_err(|e| format!("Failed to load config: {}", e))?;
    let _logger = logging::init(&config.log_level)?;

    // Assets
    let manifest = AssetManifest::load_from_file(config.manifest_path())?;
    let blocks = BlockRegistry::from_manifest(&manifest)?;
    let mut textures = TextureRegistry::new();
    let icons = IconRegistry::from_manifest(&manifest, &mut textures, &blocks)?;
    info!("Registered {} block families and {} icons", blocks.len(), icons.len());

    // Items and the cells showing them
    let mut entities = EntityManager::new();
    let items = spawn_items(&mut entities, &blocks)?;
    let stack = items[0];

    let mut row = DisplayContainer::new();
    for (index, item) in items.iter().enumerate() {
        let mut cell = ItemCellIcon::new(&mut textures);
        cell.set_item_entity(*item);
        cell.set_position(cell_origin(&config, index));
        cell.item_count_mut().set_color(config.label_color);
        row.add_display_element(Box::new(cell));
    }

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(&config.window_title, config.window_width, config.window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_blend_mode(sdl2::render::BlendMode::Blend);

    let texture_creator = canvas.texture_creator();
    let sdl_textures = load_textures(&texture_creator, &textures, &config.asset_root);
    let mut event_pump = sdl_context.event_pump()?;

    info!("Controls: 1-9 add to the first stack, 0 resets it, Escape quits");

    let background = config.background;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => {
                    let Some(digit) = digit_key(keycode) else {
                        continue;
                    };
                    if let Some(item) = entities.get_component_mut::<ItemComponent>(stack) {
                        item.stack_count = if digit == 0 {
                            1
                        } else {
                            (item.stack_count + digit).min(MAX_STACK)
                        };
                        info!("{} stack is now {}", item.name, item.stack_count);
                    }
                }
                _ => {}
            }
        }

        let ctx = UiContext::new(&entities, &icons);
        row.update(&ctx);

        canvas.set_draw_color(sdl2::pixels::Color::RGBA(
            background.r,
            background.g,
            background.b,
            background.a,
        ));
        canvas.clear();

        {
            let mut gfx = CanvasGraphics::new(&mut canvas, &sdl_textures);

            for index in 0..items.len() {
                let origin = cell_origin(&config, index);
                gfx.fill_rect(origin.x, origin.y, config.cell_size, config.cell_size, config.slot_color);
            }

            render_transformed(&row, &mut gfx, &ctx);
        }

        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
