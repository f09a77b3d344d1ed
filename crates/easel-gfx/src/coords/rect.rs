use super::Vec2;

/// Axis-aligned rectangle in surface pixels (top-left origin).
///
/// Sizes are passed through as given: a negative or NaN size is not corrected here
/// and reaches the surface unchanged.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` whose center sits on `center`.
    #[inline]
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(center - size.half(), size)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size.half()
    }
}
