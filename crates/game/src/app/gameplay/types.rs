use engine::{Body, Camera2D, Image, PixelRect, Tilemap, Viewport};

/// Which loaded image a sprite draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpriteKind {
    Ninja,
    Skeleton,
    Potion,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Sprite {
    pub(crate) body: Body,
    pub(crate) kind: SpriteKind,
}

impl Sprite {
    pub(crate) fn new(kind: SpriteKind, x: f32, y: f32) -> Self {
        Self {
            body: Body::at(x, y),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Player {
    pub(crate) sprite: Sprite,
    pub(crate) health: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Enemy {
    pub(crate) sprite: Sprite,
    pub(crate) follows_player: bool,
}

/// Heals on every tick the player is to its right; never used up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Potion {
    pub(crate) sprite: Sprite,
    pub(crate) heal_amount: i32,
}

/// Images for every `SpriteKind`, loaded once at startup.
#[derive(Debug)]
pub(crate) struct SpriteImages {
    pub(crate) ninja: Image,
    pub(crate) skeleton: Image,
    pub(crate) potion: Image,
}

impl SpriteImages {
    pub(crate) fn get(&self, kind: SpriteKind) -> &Image {
        match kind {
            SpriteKind::Ninja => &self.ninja,
            SpriteKind::Skeleton => &self.skeleton,
            SpriteKind::Potion => &self.potion,
        }
    }
}

#[derive(Debug)]
pub(crate) struct GameWorld {
    pub(crate) player: Player,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) potions: Vec<Potion>,
    pub(crate) colliders: Vec<PixelRect>,
    pub(crate) tilemap: Tilemap,
    pub(crate) camera: Camera2D,
    pub(crate) viewport: Viewport,
    pub(crate) show_colliders: bool,
}

impl GameWorld {
    /// The fixed starting layout on `tilemap`.
    pub(crate) fn spawn(tilemap: Tilemap, viewport: Viewport) -> Self {
        Self {
            player: Player {
                sprite: Sprite::new(SpriteKind::Ninja, 50.0, 50.0),
                health: 3,
            },
            enemies: vec![
                Enemy {
                    sprite: Sprite::new(SpriteKind::Skeleton, 100.0, 100.0),
                    follows_player: true,
                },
                Enemy {
                    sprite: Sprite::new(SpriteKind::Skeleton, 150.0, 150.0),
                    follows_player: false,
                },
                Enemy {
                    sprite: Sprite::new(SpriteKind::Skeleton, 75.0, 75.0),
                    follows_player: false,
                },
            ],
            potions: vec![Potion {
                sprite: Sprite::new(SpriteKind::Potion, 210.0, 100.0),
                heal_amount: 1,
            }],
            colliders: vec![PixelRect::new(100, 100, 116, 116)],
            tilemap,
            camera: Camera2D::new(0.0, 0.0),
            viewport,
            show_colliders: false,
        }
    }
}
