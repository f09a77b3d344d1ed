use crate::context::RenderContext;
use crate::coords::{Rect, Vec2};
use crate::transform::with_rotation;

use super::ImageResource;

/// Texture draw parameters (surface pixels).
///
/// `(x, y)` is the center of the drawn image and the pivot of its rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureSpec {
    pub image_src: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Radians.
    pub rotation: f32,
}

impl TextureSpec {
    pub fn new(image_src: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { image_src: image_src.into(), x, y, width, height, rotation: 0.0 }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }
}

/// A rotatable image drawn centered on a fixed pixel position.
///
/// Loading starts at construction. Until the image is ready, [`draw`](Self::draw)
/// issues no surface calls at all.
#[derive(Debug)]
pub struct Texture {
    ctx: RenderContext,
    image: ImageResource,
    center: Vec2,
    size: Vec2,
    rotation: f32,
}

impl Texture {
    pub fn new(ctx: &RenderContext, spec: TextureSpec) -> Self {
        let image = ctx.image(spec.image_src);
        Self::from_image(ctx, image, Vec2::new(spec.x, spec.y), Vec2::new(spec.width, spec.height), spec.rotation)
    }

    /// Builds a texture over an image that is already loading (or loaded).
    pub fn from_image(ctx: &RenderContext, image: ImageResource, center: Vec2, size: Vec2, rotation: f32) -> Self {
        Self { ctx: ctx.clone(), image, center, size, rotation }
    }

    pub fn draw(&self) {
        let Some(handle) = self.image.handle() else {
            log::trace!("texture '{}' not ready, skipped", self.image.src());
            return;
        };
        let dest = Rect::centered(self.center, self.size);
        self.ctx.with_surface(|s| {
            with_rotation(s, self.center, self.rotation, |s| s.draw_image(handle, dest));
        });
    }

    /// Adds `angle` (radians) to the stored rotation. Never wrapped.
    #[inline]
    pub fn update_rotation(&mut self, angle: f32) {
        self.rotation += angle;
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.image.is_ready()
    }

    #[inline]
    pub fn image(&self) -> &ImageResource {
        &self.image
    }

    /// Destination rectangle in surface pixels, before rotation.
    #[inline]
    pub fn dest_rect(&self) -> Rect {
        Rect::centered(self.center, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Surface, SurfaceCmd};
    use crate::test_support::recording_context;

    #[test]
    fn unresolved_texture_never_draws() {
        let (ctx, surface, _loader) = recording_context(800.0, 600.0);
        let texture = Texture::new(&ctx, TextureSpec::new("never.png", 10.0, 10.0, 5.0, 5.0));

        for _ in 0..5 {
            texture.draw();
        }

        let s = surface.borrow();
        let image_draws = s
            .commands()
            .iter()
            .filter(|c| matches!(c.cmd, SurfaceCmd::DrawImage { .. }))
            .count();
        assert_eq!(image_draws, 0);
        assert_eq!(s.mutation_count(), 0);
    }

    #[test]
    fn ready_texture_draws_centered_and_rotated_about_center() {
        let (ctx, surface, loader) = recording_context(800.0, 600.0);
        let mut texture = Texture::new(&ctx, TextureSpec::new("ship.png", 100.0, 50.0, 40.0, 20.0));
        texture.update_rotation(1.0);
        loader.complete("ship.png", 64, 32);

        texture.draw();

        let s = surface.borrow();
        let cmd = &s.commands()[0];
        let SurfaceCmd::DrawImage { dest, source, image } = &cmd.cmd else {
            panic!("expected an image draw");
        };
        assert_eq!(*dest, Rect::new(80.0, 40.0, 40.0, 20.0));
        assert_eq!(*source, None);
        assert_eq!(image.src(), "ship.png");

        let pivot = cmd.transform.transform_point(Vec2::new(100.0, 50.0));
        assert!((pivot.x - 100.0).abs() < 1e-3 && (pivot.y - 50.0).abs() < 1e-3);
        assert!(!cmd.transform.is_identity());
        assert!(s.transform().is_identity());
        assert_eq!(s.save_depth(), 0);
    }

    #[test]
    fn update_rotation_is_cumulative() {
        let (ctx, _surface, _loader) = recording_context(100.0, 100.0);
        let spec = TextureSpec::new("a.png", 0.0, 0.0, 1.0, 1.0).with_rotation(0.5);
        let mut split = Texture::new(&ctx, spec.clone());
        let mut joined = Texture::new(&ctx, spec);

        split.update_rotation(4.0);
        split.update_rotation(3.0);
        joined.update_rotation(4.0 + 3.0);
        assert_eq!(split.rotation(), joined.rotation());
        // Past 2π and not wrapped.
        assert_eq!(split.rotation(), 7.5);
    }

    #[test]
    fn shared_image_becomes_ready_for_every_texture() {
        let (ctx, surface, loader) = recording_context(100.0, 100.0);
        let image = ctx.image("shared.png");
        let a = Texture::from_image(&ctx, image.clone(), Vec2::new(10.0, 10.0), Vec2::new(4.0, 4.0), 0.0);
        let b = Texture::from_image(&ctx, image, Vec2::new(20.0, 20.0), Vec2::new(4.0, 4.0), 0.0);
        loader.complete("shared.png", 4, 4);

        a.draw();
        b.draw();
        assert_eq!(surface.borrow().commands().len(), 2);
    }
}
