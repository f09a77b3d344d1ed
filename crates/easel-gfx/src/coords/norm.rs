/// Position in normalized surface units.
///
/// `(0, 0)` is the top-left corner, `(1, 0)` the right edge. Values outside
/// `[0, 1]` are allowed and simply land off-surface.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct NormPoint {
    pub x: f32,
    pub y: f32,
}

impl NormPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Extent in normalized surface units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct NormSize {
    pub width: f32,
    pub height: f32,
}

impl NormSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
