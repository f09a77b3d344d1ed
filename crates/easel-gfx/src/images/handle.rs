use std::sync::Arc;

use crate::coords::Vec2;

/// Opaque handle to a loaded image.
///
/// Carries the source it was loaded from and its pixel size; surfaces map the
/// source to whatever texture object they keep.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    src: Arc<str>,
    width: u32,
    height: u32,
}

impl ImageHandle {
    pub fn new(src: impl Into<Arc<str>>, width: u32, height: u32) -> Self {
        Self { src: src.into(), width, height }
    }

    #[inline]
    pub fn src(&self) -> &str {
        &self.src
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel size as a vector.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}
