use engine::{Frame, InputSnapshot, Scene, SceneCommand};
use tracing::info;

use super::render::render_world;
use super::systems;
use super::types::{GameWorld, SpriteImages};

pub(crate) struct GameplayScene {
    world: GameWorld,
    images: SpriteImages,
}

impl GameplayScene {
    pub(crate) fn new(world: GameWorld, images: SpriteImages) -> Self {
        Self { world, images }
    }

    #[cfg(test)]
    pub(crate) fn world(&self) -> &GameWorld {
        &self.world
    }
}

impl Scene for GameplayScene {
    fn load(&mut self) {
        systems::update_camera(&mut self.world);
        let (map_width_px, map_height_px) = self.world.tilemap.pixel_size();
        info!(
            enemy_count = self.world.enemies.len(),
            potion_count = self.world.potions.len(),
            collider_count = self.world.colliders.len(),
            layer_count = self.world.tilemap.layer_count(),
            map_width_px,
            map_height_px,
            "scene_loaded"
        );
    }

    fn update(&mut self, input: &InputSnapshot) -> SceneCommand {
        if input.quit_requested() {
            return SceneCommand::Quit;
        }

        if input.toggle_colliders_pressed() {
            self.world.show_colliders = !self.world.show_colliders;
            info!(
                enabled = self.world.show_colliders,
                "collider_overlay_toggled"
            );
        }

        systems::tick(&mut self.world, input);
        SceneCommand::None
    }

    fn render(&self, frame: &mut Frame<'_>) {
        render_world(&self.world, &self.images, frame);
    }

    fn unload(&mut self) {
        info!(health = self.world.player.health, "scene_unloaded");
    }
}
