use super::{NormPoint, NormSize, Vec2};

/// Surface size in pixels.
///
/// This is the basis for converting normalized coordinates to pixels. It is read
/// from the surface on every draw, so it always reflects the current size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Pixel center of the surface.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Converts a normalized point to pixels.
    ///
    /// Both axes scale by the surface **width**, so `y = 1.0` is the bottom edge
    /// only on a square surface.
    #[inline]
    pub fn to_pixel(self, point: NormPoint) -> Vec2 {
        Vec2::new(point.x * self.width, point.y * self.width)
    }

    /// Converts a normalized size to pixels, per axis.
    ///
    /// Unlike [`to_pixel`](Self::to_pixel), height scales by the surface height.
    #[inline]
    pub fn size_to_pixel(self, size: NormSize) -> Vec2 {
        Vec2::new(size.width * self.width, size.height * self.height)
    }
}

/// Free-function form of [`SurfaceSize::to_pixel`].
#[inline]
pub fn to_pixel(point: NormPoint, surface: SurfaceSize) -> Vec2 {
    surface.to_pixel(point)
}
