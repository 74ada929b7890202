use crate::app::Camera2D;
use crate::geometry::Vec2;

/// Fixed logical render area in pixels, independent of the window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(320, 240)
    }
}

/// Screen pixel for a map position with the camera offset applied.
pub fn map_to_screen_px(position: Vec2, camera: &Camera2D) -> (i32, i32) {
    let x = position.x + camera.offset.x;
    let y = position.y + camera.offset.y;
    (x.round() as i32, y.round() as i32)
}
