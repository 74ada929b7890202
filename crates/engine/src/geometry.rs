/// Continuous position or offset in map pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Integer rectangle covering `[min_x, max_x) x [min_y, max_y)`.
///
/// Constructors canonicalize the corners, so `min <= max` holds on both axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl PixelRect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::new(
            x,
            y,
            x.saturating_add(width as i32),
            y.saturating_add(height as i32),
        )
    }

    pub fn width(&self) -> u32 {
        (self.max_x - self.min_x) as u32
    }

    pub fn height(&self) -> u32 {
        (self.max_y - self.min_y) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    /// True when both rects are non-empty and share at least one pixel.
    /// Touching edges do not count.
    pub fn overlaps(&self, other: &PixelRect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    pub fn translate(&self, dx: i32, dy: i32) -> PixelRect {
        PixelRect {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canonicalizes_swapped_corners() {
        let rect = PixelRect::new(116, 116, 100, 100);
        assert_eq!(rect, PixelRect::new(100, 100, 116, 116));
        assert_eq!(rect.width(), 16);
        assert_eq!(rect.height(), 16);
    }

    #[test]
    fn overlap_requires_shared_area() {
        let a = PixelRect::new(0, 0, 16, 16);
        assert!(a.overlaps(&PixelRect::new(15, 15, 31, 31)));
        assert!(!a.overlaps(&PixelRect::new(16, 0, 32, 16)));
        assert!(!a.overlaps(&PixelRect::new(0, 16, 16, 32)));
    }

    #[test]
    fn empty_rect_never_overlaps() {
        let empty = PixelRect::new(4, 4, 4, 10);
        assert!(empty.is_empty());
        assert!(!empty.overlaps(&PixelRect::new(0, 0, 16, 16)));
        assert!(!PixelRect::new(0, 0, 16, 16).overlaps(&empty));
    }

    #[test]
    fn translate_moves_both_corners() {
        let moved = PixelRect::new(1, 2, 3, 4).translate(-1, 10);
        assert_eq!(moved, PixelRect::new(0, 12, 2, 14));
    }
}
