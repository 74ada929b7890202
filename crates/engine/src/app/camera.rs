use crate::geometry::Vec2;

/// Screen-space translation added to every world draw.
///
/// The offset is the negated top-left corner of the visible window, so it is
/// zero or negative while the view stays inside the map.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera2D {
    pub offset: Vec2,
}

impl Camera2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            offset: Vec2::new(x, y),
        }
    }

    /// Centers `(target_x, target_y)` in a viewport of the given size.
    pub fn follow_target(
        &mut self,
        target_x: f32,
        target_y: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) {
        self.offset.x = -target_x + viewport_width / 2.0;
        self.offset.y = -target_y + viewport_height / 2.0;
    }

    /// Clamps the offset so the viewport never shows outside the map.
    ///
    /// Must run after [`Camera2D::follow_target`] in the same tick. When the
    /// map is smaller than the viewport the lower bound wins.
    pub fn constrain(
        &mut self,
        map_width: f32,
        map_height: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) {
        self.offset.x = self.offset.x.min(0.0);
        self.offset.y = self.offset.y.min(0.0);
        self.offset.x = self.offset.x.max(viewport_width - map_width);
        self.offset.y = self.offset.y.max(viewport_height - map_height);
    }
}
