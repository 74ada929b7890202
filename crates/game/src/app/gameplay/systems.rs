use engine::{InputAction, InputSnapshot, Vec2, ENTITY_SIZE_PX};
use tracing::info;

use super::types::GameWorld;

const PLAYER_SPEED_PX_PER_TICK: f32 = 2.0;
const ENEMY_SPEED_PX_PER_TICK: f32 = 1.0;

/// Runs one simulation tick: player, enemies, potions, then camera.
pub(crate) fn tick(world: &mut GameWorld, input: &InputSnapshot) {
    update_player(world, input);
    update_enemies(world);
    apply_potions(world);
    update_camera(world);
}

/// Sum of every held direction. Opposite keys cancel and diagonals are not
/// normalized.
pub(crate) fn movement_velocity(input: &InputSnapshot) -> Vec2 {
    let mut velocity = Vec2::ZERO;
    if input.is_down(InputAction::MoveRight) {
        velocity.x += PLAYER_SPEED_PX_PER_TICK;
    }
    if input.is_down(InputAction::MoveLeft) {
        velocity.x -= PLAYER_SPEED_PX_PER_TICK;
    }
    if input.is_down(InputAction::MoveDown) {
        velocity.y += PLAYER_SPEED_PX_PER_TICK;
    }
    if input.is_down(InputAction::MoveUp) {
        velocity.y -= PLAYER_SPEED_PX_PER_TICK;
    }
    velocity
}

pub(crate) fn update_player(world: &mut GameWorld, input: &InputSnapshot) {
    let body = &mut world.player.sprite.body;
    body.velocity = movement_velocity(input);
    body.step(&world.colliders);
}

pub(crate) fn update_enemies(world: &mut GameWorld) {
    let target = world.player.sprite.body.position;
    for enemy in &mut world.enemies {
        let body = &mut enemy.sprite.body;
        body.velocity = Vec2::ZERO;
        if enemy.follows_player {
            body.velocity.x = chase_step(body.position.x, target.x);
            body.velocity.y = chase_step(body.position.y, target.y);
        }
        body.step(&world.colliders);
    }
}

fn chase_step(from: f32, to: f32) -> f32 {
    if from < to {
        ENEMY_SPEED_PX_PER_TICK
    } else if from > to {
        -ENEMY_SPEED_PX_PER_TICK
    } else {
        0.0
    }
}

/// Heals once per potion for every tick the player stands right of it.
pub(crate) fn apply_potions(world: &mut GameWorld) {
    let player = &mut world.player;
    for potion in &world.potions {
        if player.sprite.body.position.x > potion.sprite.body.position.x {
            player.health += potion.heal_amount;
            info!(
                heal_amount = potion.heal_amount,
                health = player.health,
                "potion_picked_up"
            );
        }
    }
}

/// Centers the camera on the player, then keeps the view inside the map.
pub(crate) fn update_camera(world: &mut GameWorld) {
    let half_entity = ENTITY_SIZE_PX as f32 / 2.0;
    let position = world.player.sprite.body.position;
    let viewport_width = world.viewport.width as f32;
    let viewport_height = world.viewport.height as f32;
    let (map_width, map_height) = world.tilemap.pixel_size();

    world.camera.follow_target(
        position.x + half_entity,
        position.y + half_entity,
        viewport_width,
        viewport_height,
    );
    world.camera.constrain(
        map_width as f32,
        map_height as f32,
        viewport_width,
        viewport_height,
    );
}
