mod render;
mod scene_impl;
mod systems;
mod types;

use engine::{load_image, load_tilemap, AppPaths, AssetError, Scene, Viewport};

use scene_impl::GameplayScene;
use types::{GameWorld, SpriteImages};

const NINJA_IMAGE: &str = "images/ninja.png";
const SKELETON_IMAGE: &str = "images/skeleton.png";
const POTION_IMAGE: &str = "images/potion.png";
const SPAWN_MAP: &str = "maps/spawn.json";

/// Loads every startup asset and builds the gameplay scene. Any missing or
/// malformed asset is fatal.
pub(crate) fn build_scene(
    paths: &AppPaths,
    viewport: Viewport,
) -> Result<Box<dyn Scene>, AssetError> {
    let images = load_sprite_images(paths)?;
    let tilemap = load_tilemap(&paths.asset(SPAWN_MAP))?;
    let world = GameWorld::spawn(tilemap, viewport);
    Ok(Box::new(GameplayScene::new(world, images)))
}

fn load_sprite_images(paths: &AppPaths) -> Result<SpriteImages, AssetError> {
    Ok(SpriteImages {
        ninja: load_image(&paths.asset(NINJA_IMAGE))?,
        skeleton: load_image(&paths.asset(SKELETON_IMAGE))?,
        potion: load_image(&paths.asset(POTION_IMAGE))?,
    })
}

#[cfg(test)]
mod tests;
