use crate::context::RenderContext;
use crate::coords::Rect;

use super::{Texture, TextureSpec};

/// Full-surface image.
///
/// Position and size are taken from the surface when the background is created
/// and never change: a later resize leaves it at the old size. Rotation is zero
/// and cannot be changed.
#[derive(Debug)]
pub struct Background {
    texture: Texture,
}

impl Background {
    pub fn new(ctx: &RenderContext, src: impl Into<String>) -> Self {
        let size = ctx.surface_size();
        let center = size.center();
        let spec = TextureSpec::new(src, center.x, center.y, size.width, size.height);
        Self { texture: Texture::new(ctx, spec) }
    }

    pub fn draw(&self) {
        self.texture.draw();
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.texture.is_ready()
    }

    /// Covered area in surface pixels, as fixed at construction.
    #[inline]
    pub fn dest_rect(&self) -> Rect {
        self.texture.dest_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::surface::SurfaceCmd;
    use crate::test_support::recording_context;

    #[test]
    fn covers_surface_once_ready() {
        let (ctx, surface, loader) = recording_context(800.0, 600.0);
        let bg = ctx.background("bg.png");

        bg.draw();
        assert!(surface.borrow().commands().is_empty());

        loader.complete("bg.png", 1024, 768);
        bg.draw();

        let s = surface.borrow();
        assert_eq!(s.commands().len(), 1);
        let cmd = &s.commands()[0];
        let SurfaceCmd::DrawImage { dest, .. } = &cmd.cmd else {
            panic!("expected an image draw");
        };
        assert_eq!(dest.center(), Vec2::new(400.0, 300.0));
        assert_eq!(dest.size, Vec2::new(800.0, 600.0));
        assert!(cmd.transform.is_identity());
    }

    #[test]
    fn keeps_construction_size_after_resize() {
        let (ctx, surface, loader) = recording_context(800.0, 600.0);
        let bg = Background::new(&ctx, "bg.png");
        loader.complete_all(1, 1);

        surface.borrow_mut().resize(1024.0, 768.0);
        bg.draw();

        assert_eq!(bg.dest_rect(), Rect::new(0.0, 0.0, 800.0, 600.0));
        let s = surface.borrow();
        let SurfaceCmd::DrawImage { dest, .. } = &s.commands()[0].cmd else {
            panic!("expected an image draw");
        };
        assert_eq!(dest.size, Vec2::new(800.0, 600.0));
    }
}
