use crate::geometry::{PixelRect, Vec2};
use crate::ENTITY_SIZE_PX;

/// Position plus the velocity applied this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Body {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
        }
    }

    /// Entity box; the position is truncated toward zero.
    pub fn bounds(&self) -> PixelRect {
        PixelRect::from_origin_size(
            self.position.x as i32,
            self.position.y as i32,
            ENTITY_SIZE_PX,
            ENTITY_SIZE_PX,
        )
    }

    /// Applies the x velocity and resolves against `colliders`, then does the
    /// same for y.
    pub fn step(&mut self, colliders: &[PixelRect]) {
        self.position.x += self.velocity.x;
        resolve_horizontal(self, colliders);
        self.position.y += self.velocity.y;
        resolve_vertical(self, colliders);
    }
}

/// Snaps `body` out of every overlapping collider along x, in list order.
///
/// Only the sign of the x velocity decides the side; a body with no x motion
/// is left where it is even when embedded.
pub fn resolve_horizontal(body: &mut Body, colliders: &[PixelRect]) {
    let size = ENTITY_SIZE_PX as f32;
    for collider in colliders {
        if !collider.overlaps(&body.bounds()) {
            continue;
        }
        if body.velocity.x > 0.0 {
            body.position.x = collider.min_x as f32 - size;
        } else if body.velocity.x < 0.0 {
            body.position.x = collider.max_x as f32;
        }
    }
}

/// Vertical counterpart of [`resolve_horizontal`].
pub fn resolve_vertical(body: &mut Body, colliders: &[PixelRect]) {
    let size = ENTITY_SIZE_PX as f32;
    for collider in colliders {
        if !collider.overlaps(&body.bounds()) {
            continue;
        }
        if body.velocity.y > 0.0 {
            body.position.y = collider.min_y as f32 - size;
        } else if body.velocity.y < 0.0 {
            body.position.y = collider.max_y as f32;
        }
    }
}
