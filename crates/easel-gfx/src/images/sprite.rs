use crate::context::RenderContext;
use crate::coords::{NormPoint, NormSize, Rect, Vec2};
use crate::surface::Surface;

use super::ImageResource;

/// Source rectangle (sheet pixels) of frame `frame_index` in a single-row sheet.
///
/// Frames run left to right from x = 0. The index is not checked against the
/// sheet width: an index past the last frame yields a rectangle outside the image.
///
/// The offset is multiplied in `f64` and rounded once into the `f32` rect, so it
/// stays the nearest `f32` to `frame_index * frame_width` for any `u32` index.
#[inline]
pub fn frame_source_rect(frame_size: Vec2, frame_index: u32) -> Rect {
    let x = f64::from(frame_index) * f64::from(frame_size.x);
    Rect::new(x as f32, 0.0, frame_size.x, frame_size.y)
}

/// Blits one frame of `sheet` into a rectangle of normalized `size` centered on
/// normalized `center`.
///
/// `frame_size` is in sheet pixels. Skipped while the sheet is loading.
///
/// # Preconditions
/// `frame_index < sheet_width / frame_size.x`. Not enforced.
pub fn draw_sprite_frame<S: Surface + ?Sized>(
    surface: &mut S,
    sheet: &ImageResource,
    frame_size: Vec2,
    frame_index: u32,
    center: NormPoint,
    size: NormSize,
) {
    let Some(handle) = sheet.handle() else {
        log::trace!("sprite sheet '{}' not ready, skipped", sheet.src());
        return;
    };
    let basis = surface.size();
    let dest = Rect::centered(basis.to_pixel(center), basis.size_to_pixel(size));
    surface.draw_image_region(handle, frame_source_rect(frame_size, frame_index), dest);
}

/// A sheet image plus its fixed per-frame pixel size.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    ctx: RenderContext,
    image: ImageResource,
    frame_size: Vec2,
}

impl SpriteSheet {
    pub fn new(ctx: &RenderContext, image: ImageResource, frame_size: Vec2) -> Self {
        Self { ctx: ctx.clone(), image, frame_size }
    }

    #[inline]
    pub fn frame_size(&self) -> Vec2 {
        self.frame_size
    }

    #[inline]
    pub fn image(&self) -> &ImageResource {
        &self.image
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.image.is_ready()
    }

    /// Number of whole frames in the sheet, once its size is known.
    pub fn frame_count(&self) -> Option<u32> {
        let handle = self.image.handle()?;
        if self.frame_size.x <= 0.0 {
            return Some(0);
        }
        Some((handle.width() as f32 / self.frame_size.x) as u32)
    }

    /// Draws frame `frame_index` centered on `center` with `size` (both normalized).
    pub fn draw_frame(&self, frame_index: u32, center: NormPoint, size: NormSize) {
        self.ctx.with_surface(|s| {
            draw_sprite_frame(s, &self.image, self.frame_size, frame_index, center, size);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceCmd;
    use crate::test_support::recording_context;

    #[test]
    fn source_x_is_index_times_frame_width() {
        let frame = Vec2::new(48.0, 32.0);
        for i in [0u32, 1, 2, 7, 100, 4096, 16_777_217, u32::MAX] {
            let r = frame_source_rect(frame, i);
            assert_eq!(r.origin.x, (u64::from(i) * 48) as f32, "frame {i}");
            assert_eq!(r.origin.y, 0.0);
            assert_eq!(r.size, frame);
        }
    }

    #[test]
    fn draw_frame_crops_and_places() {
        let (ctx, surface, loader) = recording_context(800.0, 600.0);
        let sheet = ctx.sprite_sheet("walk.png", Vec2::new(32.0, 32.0));
        loader.complete("walk.png", 128, 32);

        sheet.draw_frame(3, NormPoint::new(0.5, 0.5), NormSize::new(0.1, 0.1));

        let s = surface.borrow();
        let SurfaceCmd::DrawImage { source, dest, .. } = &s.commands()[0].cmd else {
            panic!("expected an image draw");
        };
        assert_eq!(*source, Some(Rect::new(96.0, 0.0, 32.0, 32.0)));
        assert_eq!(dest.center(), Vec2::new(400.0, 400.0));
        assert_eq!(dest.size, Vec2::new(80.0, 60.0));
    }

    #[test]
    fn out_of_range_frame_is_drawn_unchecked() {
        let (ctx, surface, loader) = recording_context(100.0, 100.0);
        let sheet = ctx.sprite_sheet("walk.png", Vec2::new(32.0, 32.0));
        loader.complete("walk.png", 64, 32);
        assert_eq!(sheet.frame_count(), Some(2));

        sheet.draw_frame(9, NormPoint::new(0.5, 0.5), NormSize::new(0.1, 0.1));

        let s = surface.borrow();
        let SurfaceCmd::DrawImage { source, .. } = &s.commands()[0].cmd else {
            panic!("expected an image draw");
        };
        assert_eq!(source.map(|r| r.origin.x), Some(288.0));
    }

    #[test]
    fn unready_sheet_draws_nothing() {
        let (ctx, surface, _loader) = recording_context(100.0, 100.0);
        let sheet = ctx.sprite_sheet("walk.png", Vec2::new(32.0, 32.0));
        sheet.draw_frame(0, NormPoint::new(0.5, 0.5), NormSize::new(0.1, 0.1));
        assert_eq!(sheet.frame_count(), None);
        assert_eq!(surface.borrow().mutation_count(), 0);
    }
}
