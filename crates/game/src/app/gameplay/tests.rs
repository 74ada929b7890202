use std::path::{Path, PathBuf};

use engine::{
    AppPaths, AssetError, Frame, Image, InputAction, InputSnapshot, PixelRect, Scene,
    SceneCommand, TileLayer, Tilemap, Tileset, Vec2, Viewport,
};

use super::build_scene;
use super::render::render_world;
use super::scene_impl::GameplayScene;
use super::systems::{
    apply_potions, movement_velocity, tick, update_camera, update_enemies, update_player,
};
use super::types::{GameWorld, SpriteImages};

const FLOOR: [u8; 4] = [10, 120, 10, 255];
const TREE: [u8; 4] = [0, 60, 0, 255];
const NINJA: [u8; 4] = [20, 20, 20, 255];
const SKELETON: [u8; 4] = [230, 230, 230, 255];
const POTION: [u8; 4] = [200, 0, 200, 255];
const BACKGROUND: [u8; 4] = [120, 180, 255, 255];
const OUTLINE: [u8; 4] = [255, 0, 0, 255];

fn floor_map(width: u32, height: u32, tile_id: u32) -> Tilemap {
    let layer = TileLayer::new("floor", width, height, vec![tile_id; (width * height) as usize])
        .expect("layer");
    let tileset = Tileset::uniform(1, 1, Image::solid(16, 16, FLOOR));
    Tilemap::new(vec![layer], vec![tileset]).expect("tilemap")
}

fn world_on(tilemap: Tilemap) -> GameWorld {
    GameWorld::spawn(tilemap, Viewport::default())
}

fn world() -> GameWorld {
    world_on(floor_map(40, 30, 1))
}

fn images() -> SpriteImages {
    SpriteImages {
        ninja: Image::solid(16, 16, NINJA),
        skeleton: Image::solid(16, 16, SKELETON),
        potion: Image::solid(16, 16, POTION),
    }
}

fn snapshot_from_actions(actions: &[InputAction]) -> InputSnapshot {
    let mut snapshot = InputSnapshot::empty();
    for action in actions {
        snapshot = snapshot.with_action_down(*action, true);
    }
    snapshot
}

fn place_player(world: &mut GameWorld, x: f32, y: f32) {
    world.player.sprite.body.position = Vec2::new(x, y);
}

fn render(world: &GameWorld) -> Vec<u8> {
    let mut pixels = vec![0u8; 320 * 240 * 4];
    let mut frame = Frame::new(&mut pixels, 320, 240);
    render_world(world, &images(), &mut frame);
    pixels
}

fn pixel_at(pixels: &[u8], x: usize, y: usize) -> [u8; 4] {
    let offset = (y * 320 + x) * 4;
    let mut out = [0u8; 4];
    out.copy_from_slice(&pixels[offset..offset + 4]);
    out
}

#[test]
fn every_direction_combination_sums_per_axis() {
    for mask in 0u8..16 {
        let up = mask & 1 != 0;
        let down = mask & 2 != 0;
        let left = mask & 4 != 0;
        let right = mask & 8 != 0;
        let snapshot = InputSnapshot::empty()
            .with_action_down(InputAction::MoveUp, up)
            .with_action_down(InputAction::MoveDown, down)
            .with_action_down(InputAction::MoveLeft, left)
            .with_action_down(InputAction::MoveRight, right);

        let expected_x = if right { 2.0 } else { 0.0 } - if left { 2.0 } else { 0.0 };
        let expected_y = if down { 2.0 } else { 0.0 } - if up { 2.0 } else { 0.0 };
        assert_eq!(
            movement_velocity(&snapshot),
            Vec2::new(expected_x, expected_y),
            "mask {mask:04b}"
        );
    }
}

#[test]
fn player_moves_by_velocity_in_open_space() {
    let mut world = world();
    let input = snapshot_from_actions(&[InputAction::MoveRight, InputAction::MoveDown]);

    update_player(&mut world, &input);

    assert_eq!(world.player.sprite.body.position, Vec2::new(52.0, 52.0));
    assert_eq!(world.player.sprite.body.velocity, Vec2::new(2.0, 2.0));
}

#[test]
fn velocity_resets_when_keys_are_released() {
    let mut world = world();
    update_player(&mut world, &snapshot_from_actions(&[InputAction::MoveLeft]));
    update_player(&mut world, &InputSnapshot::empty());

    assert_eq!(world.player.sprite.body.velocity, Vec2::ZERO);
    assert_eq!(world.player.sprite.body.position, Vec2::new(48.0, 50.0));
}

#[test]
fn player_walking_right_stops_flush_against_collider() {
    let mut world = world();
    place_player(&mut world, 70.0, 100.0);
    let input = snapshot_from_actions(&[InputAction::MoveRight]);

    for _ in 0..20 {
        update_player(&mut world, &input);
    }

    assert_eq!(world.player.sprite.body.position, Vec2::new(84.0, 100.0));
}

#[test]
fn player_walking_left_stops_at_collider_right_edge() {
    let mut world = world();
    place_player(&mut world, 130.0, 104.0);
    let input = snapshot_from_actions(&[InputAction::MoveLeft]);

    for _ in 0..20 {
        update_player(&mut world, &input);
    }

    assert_eq!(world.player.sprite.body.position, Vec2::new(116.0, 104.0));
}

#[test]
fn player_walking_vertically_is_blocked_both_ways() {
    let mut world = world();
    place_player(&mut world, 100.0, 70.0);
    let down = snapshot_from_actions(&[InputAction::MoveDown]);
    for _ in 0..20 {
        update_player(&mut world, &down);
    }
    assert_eq!(world.player.sprite.body.position, Vec2::new(100.0, 84.0));

    place_player(&mut world, 100.0, 130.0);
    let up = snapshot_from_actions(&[InputAction::MoveUp]);
    for _ in 0..20 {
        update_player(&mut world, &up);
    }
    assert_eq!(world.player.sprite.body.position, Vec2::new(100.0, 116.0));
}

#[test]
fn stationary_player_inside_collider_is_not_pushed_out() {
    let mut world = world();
    place_player(&mut world, 104.0, 104.0);

    update_player(&mut world, &InputSnapshot::empty());

    assert_eq!(world.player.sprite.body.position, Vec2::new(104.0, 104.0));
}

#[test]
fn overlapping_colliders_resolve_in_list_order() {
    let mut world = world();
    world.colliders = vec![
        PixelRect::new(100, 100, 116, 116),
        PixelRect::new(90, 100, 106, 116),
    ];
    place_player(&mut world, 83.0, 100.0);

    update_player(&mut world, &snapshot_from_actions(&[InputAction::MoveRight]));

    // The first correction lands at 84, which still overlaps the second
    // collider, so the second correction wins.
    assert_eq!(world.player.sprite.body.position.x, 74.0);
}

#[test]
fn chasing_enemy_steps_one_unit_per_axis_toward_player() {
    let mut world = world();
    world.colliders.clear();

    update_enemies(&mut world);

    assert_eq!(world.enemies[0].sprite.body.position, Vec2::new(99.0, 99.0));
    assert_eq!(world.enemies[0].sprite.body.velocity, Vec2::new(-1.0, -1.0));
}

#[test]
fn chasing_enemy_stops_on_axis_once_aligned() {
    let mut world = world();
    world.colliders.clear();
    place_player(&mut world, 100.0, 60.0);

    update_enemies(&mut world);
    assert_eq!(world.enemies[0].sprite.body.position, Vec2::new(100.0, 99.0));

    for _ in 0..100 {
        update_enemies(&mut world);
    }
    assert_eq!(world.enemies[0].sprite.body.position, Vec2::new(100.0, 60.0));
    assert_eq!(world.enemies[0].sprite.body.velocity, Vec2::ZERO);
}

#[test]
fn stationary_enemies_never_move() {
    let mut world = world();
    world.colliders.clear();
    let input = snapshot_from_actions(&[InputAction::MoveRight]);

    for _ in 0..30 {
        tick(&mut world, &input);
    }

    assert_eq!(world.enemies[1].sprite.body.position, Vec2::new(150.0, 150.0));
    assert_eq!(world.enemies[2].sprite.body.position, Vec2::new(75.0, 75.0));
}

#[test]
fn enemy_spawned_inside_collider_is_snapped_out_when_chasing() {
    let mut world = world();

    update_enemies(&mut world);

    // Moving left out of (100,100)-(116,116) snaps to its right edge.
    assert_eq!(world.enemies[0].sprite.body.position.x, 116.0);
}

#[test]
fn potion_heals_every_tick_player_is_right_of_it() {
    let mut world = world();
    let input = snapshot_from_actions(&[InputAction::MoveRight]);
    let mut expected_health = 3;

    for _ in 0..100 {
        tick(&mut world, &input);
        if world.player.sprite.body.position.x > 210.0 {
            expected_health += 1;
        }
        assert_eq!(world.player.health, expected_health);
    }

    assert!(world.player.health > 3);
    assert_eq!(world.potions.len(), 1);
}

#[test]
fn potion_ignores_player_at_exact_potion_x() {
    let mut world = world();
    place_player(&mut world, 210.0, 400.0);

    apply_potions(&mut world);
    assert_eq!(world.player.health, 3);

    place_player(&mut world, 210.5, 400.0);
    apply_potions(&mut world);
    apply_potions(&mut world);
    assert_eq!(world.player.health, 5);
}

#[test]
fn camera_centers_player_inside_large_map() {
    let mut world = world();
    place_player(&mut world, 300.0, 200.0);

    update_camera(&mut world);

    assert_eq!(world.camera.offset, Vec2::new(-148.0, -88.0));
}

#[test]
fn camera_clamps_at_both_map_edges() {
    let mut world = world();

    update_camera(&mut world);
    assert_eq!(world.camera.offset, Vec2::ZERO);

    place_player(&mut world, 630.0, 470.0);
    update_camera(&mut world);
    assert_eq!(world.camera.offset, Vec2::new(-320.0, -240.0));
}

#[test]
fn camera_stays_fixed_when_map_matches_viewport() {
    let mut world = world_on(floor_map(20, 15, 1));
    for (x, y) in [(0.0, 0.0), (150.0, 110.0), (310.0, 230.0)] {
        place_player(&mut world, x, y);
        update_camera(&mut world);
        assert_eq!(world.camera.offset, Vec2::ZERO);
    }
}

#[test]
fn render_draws_layers_then_player_enemies_and_potions() {
    let world = world_on(floor_map(20, 15, 1));
    let pixels = render(&world);

    assert_eq!(pixel_at(&pixels, 5, 5), FLOOR);
    assert_eq!(pixel_at(&pixels, 50, 50), NINJA);
    assert_eq!(pixel_at(&pixels, 65, 65), NINJA);
    assert_eq!(pixel_at(&pixels, 150, 150), SKELETON);
    assert_eq!(pixel_at(&pixels, 210, 100), POTION);
}

#[test]
fn later_draws_occlude_earlier_ones() {
    let mut world = world_on(floor_map(20, 15, 1));
    world.potions[0].sprite.body.position = Vec2::new(50.0, 50.0);
    world.enemies[2].sprite.body.position = Vec2::new(50.0, 50.0);

    let pixels = render(&world);

    assert_eq!(pixel_at(&pixels, 55, 55), POTION);
}

#[test]
fn empty_cells_show_background() {
    let world = world_on(floor_map(20, 15, 0));
    let pixels = render(&world);

    assert_eq!(pixel_at(&pixels, 5, 5), BACKGROUND);
    assert_eq!(pixel_at(&pixels, 319, 239), BACKGROUND);
}

#[test]
fn unknown_tile_ids_are_skipped() {
    let world = world_on(floor_map(20, 15, 99));
    let pixels = render(&world);

    assert_eq!(pixel_at(&pixels, 5, 5), BACKGROUND);
}

#[test]
fn out_of_range_tile_ids_render_as_background() {
    let world = world_on(floor_map(20, 15, u32::MAX));
    let pixels = render(&world);

    assert_eq!(pixel_at(&pixels, 5, 5), BACKGROUND);
}

#[test]
fn render_applies_camera_offset() {
    let mut world = world_on(floor_map(20, 15, 0));
    world.camera.offset = Vec2::new(-10.0, -20.0);

    let pixels = render(&world);

    assert_eq!(pixel_at(&pixels, 40, 30), NINJA);
    assert_eq!(pixel_at(&pixels, 39, 30), BACKGROUND);
}

#[test]
fn tall_collection_tiles_are_lifted() {
    let mut tiles = vec![0u32; 20 * 15];
    tiles[5 * 20 + 2] = 1;
    let layer = TileLayer::new("props", 20, 15, tiles).expect("layer");
    let tileset = Tileset::collection(1, vec![Image::solid(16, 32, TREE)]);
    let world = world_on(Tilemap::new(vec![layer], vec![tileset]).expect("tilemap"));

    let pixels = render(&world);

    // Cell (2, 5) sits at (32, 80); a 32px tall tile is lifted by 48.
    assert_eq!(pixel_at(&pixels, 32, 32), TREE);
    assert_eq!(pixel_at(&pixels, 47, 63), TREE);
    assert_eq!(pixel_at(&pixels, 32, 31), BACKGROUND);
    assert_eq!(pixel_at(&pixels, 32, 64), BACKGROUND);
}

#[test]
fn collider_outlines_draw_last_only_when_enabled() {
    let mut world = world_on(floor_map(20, 15, 1));

    let hidden = render(&world);
    assert_eq!(pixel_at(&hidden, 100, 100), SKELETON);

    world.show_colliders = true;
    let shown = render(&world);
    assert_eq!(pixel_at(&shown, 100, 100), OUTLINE);
    assert_eq!(pixel_at(&shown, 115, 115), OUTLINE);
    assert_eq!(pixel_at(&shown, 108, 108), SKELETON);
}

#[test]
fn scene_toggle_flips_collider_overlay_once_per_press() {
    let mut scene = GameplayScene::new(world(), images());
    let press = InputSnapshot::empty().with_toggle_colliders_pressed(true);

    assert_eq!(scene.update(&press), SceneCommand::None);
    assert!(scene.world().show_colliders);

    scene.update(&InputSnapshot::empty());
    assert!(scene.world().show_colliders);

    scene.update(&press);
    assert!(!scene.world().show_colliders);
}

#[test]
fn scene_update_runs_a_tick() {
    let mut scene = GameplayScene::new(world(), images());
    let input = snapshot_from_actions(&[InputAction::MoveDown]);

    assert_eq!(scene.update(&input), SceneCommand::None);
    assert_eq!(
        scene.world().player.sprite.body.position,
        Vec2::new(50.0, 52.0)
    );
}

#[test]
fn scene_quits_on_quit_request() {
    let mut scene = GameplayScene::new(world(), images());
    let input = InputSnapshot::empty().with_quit_requested(true);

    assert_eq!(scene.update(&input), SceneCommand::Quit);
    assert_eq!(
        scene.world().player.sprite.body.position,
        Vec2::new(50.0, 50.0)
    );
}

fn paths_for(assets_dir: &Path) -> AppPaths {
    AppPaths {
        root: assets_dir.parent().map(Path::to_path_buf).unwrap_or_default(),
        assets_dir: assets_dir.to_path_buf(),
    }
}

#[test]
fn missing_sprite_image_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");

    match build_scene(&paths_for(dir.path()), Viewport::default()) {
        Err(AssetError::OpenImage { path, .. }) => {
            assert!(path.ends_with("images/ninja.png"));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("scene should not build without assets"),
    }
}

#[test]
fn bundled_assets_build_scene() {
    let assets_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets");

    let result = build_scene(&paths_for(&assets_dir), Viewport::default());

    if let Err(error) = result {
        panic!("bundled assets failed to load: {error}");
    }
}
