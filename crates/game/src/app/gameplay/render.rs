use engine::tilemap::tile_pixel_position;
use engine::{map_to_screen_px, Camera2D, Frame, Image, PixelRect, Vec2, ENTITY_SIZE_PX};

use super::types::{GameWorld, Sprite, SpriteImages};

const BACKGROUND_COLOR: [u8; 4] = [120, 180, 255, 255];
const COLLIDER_OUTLINE_COLOR: [u8; 4] = [255, 0, 0, 255];

/// Draws one frame: background, map layers, player, enemies, potions, and
/// collider outlines when enabled. Later draws cover earlier ones.
pub(crate) fn render_world(world: &GameWorld, images: &SpriteImages, frame: &mut Frame<'_>) {
    frame.fill(BACKGROUND_COLOR);
    draw_tilemap(world, frame);

    draw_sprite(frame, &world.player.sprite, images, &world.camera);
    for enemy in &world.enemies {
        draw_sprite(frame, &enemy.sprite, images, &world.camera);
    }
    for potion in &world.potions {
        draw_sprite(frame, &potion.sprite, images, &world.camera);
    }

    if world.show_colliders {
        draw_collider_outlines(world, frame);
    }
}

fn draw_tilemap(world: &GameWorld, frame: &mut Frame<'_>) {
    for (layer, tileset) in world.tilemap.layers() {
        for (index, id) in layer.occupied_cells() {
            let Some(source) = tileset.lookup(id) else {
                continue;
            };
            let (tile_x, tile_y) = tile_pixel_position(index, layer.width());
            let tile_y = tile_y + tileset.vertical_draw_offset(&source);
            let (screen_x, screen_y) =
                map_to_screen_px(Vec2::new(tile_x as f32, tile_y as f32), &world.camera);
            frame.draw_image(source.image, source.region, screen_x, screen_y);
        }
    }
}

fn draw_sprite(frame: &mut Frame<'_>, sprite: &Sprite, images: &SpriteImages, camera: &Camera2D) {
    let (screen_x, screen_y) = map_to_screen_px(sprite.body.position, camera);
    draw_entity_image(frame, images.get(sprite.kind), screen_x, screen_y);
}

fn draw_entity_image(frame: &mut Frame<'_>, image: &Image, x: i32, y: i32) {
    let region = PixelRect::from_origin_size(0, 0, ENTITY_SIZE_PX, ENTITY_SIZE_PX);
    frame.draw_image(image, region, x, y);
}

fn draw_collider_outlines(world: &GameWorld, frame: &mut Frame<'_>) {
    for collider in &world.colliders {
        let corner = Vec2::new(collider.min_x as f32, collider.min_y as f32);
        let (screen_x, screen_y) = map_to_screen_px(corner, &world.camera);
        let outline = collider.translate(screen_x - collider.min_x, screen_y - collider.min_y);
        frame.stroke_rect(outline, COLLIDER_OUTLINE_COLOR);
    }
}
