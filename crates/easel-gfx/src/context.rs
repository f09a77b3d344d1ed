//! Render context shared by every drawable.
//!
//! A [`RenderContext`] bundles the drawing surface and the image loader. It is
//! cheap to clone (two `Rc`s) and every drawable keeps its own clone, so there is
//! no global drawing state and several independent surfaces can coexist.
//!
//! Borrowing: each call borrows the surface for its own duration only. Calls made
//! from inside [`RenderContext::with_rotation`] are therefore fine; calls made from
//! inside [`RenderContext::with_surface`] are not and will panic on the nested borrow.

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::coords::{NormPoint, NormSize, SurfaceSize, Vec2};
use crate::images::{self, Background, ImageLoader, ImageResource, SpriteSheet, Texture, TextureSpec};
use crate::paint::Paint;
use crate::shapes::{self, Circle, CircleSpec, Letters, Rectangle, RectangleSpec, TextSpec};
use crate::surface::Surface;
use crate::transform::rotate_about;

#[derive(Clone)]
pub struct RenderContext {
    surface: Rc<RefCell<dyn Surface>>,
    loader: Rc<dyn ImageLoader>,
}

impl RenderContext {
    pub fn new(surface: Rc<RefCell<dyn Surface>>, loader: Rc<dyn ImageLoader>) -> Self {
        Self { surface, loader }
    }

    /// Current surface size in pixels.
    pub fn surface_size(&self) -> SurfaceSize {
        self.surface.borrow().size()
    }

    /// Runs `f` with exclusive access to the surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut dyn Surface) -> R) -> R {
        let mut surface = self.surface.borrow_mut();
        f(&mut *surface)
    }

    /// Starts loading `src` through this context's loader.
    pub fn image(&self, src: impl Into<Arc<str>>) -> ImageResource {
        ImageResource::load(src, &*self.loader)
    }

    // ── frame-level helpers ───────────────────────────────────────────────

    /// Clears the full surface; see [`shapes::clear`].
    pub fn clear(&self) {
        self.with_surface(|s| shapes::clear(s));
    }

    /// Pushes the surface state. Pair with [`restore_context`](Self::restore_context).
    pub fn save_context(&self) {
        self.with_surface(|s| s.save());
    }

    pub fn restore_context(&self) {
        self.with_surface(|s| s.restore());
    }

    /// Rotates the surface by `rotation` radians about normalized `center`.
    ///
    /// Unscoped: call between [`save_context`](Self::save_context) and
    /// [`restore_context`](Self::restore_context), or use
    /// [`with_rotation`](Self::with_rotation) instead.
    pub fn rotate_canvas(&self, center: NormPoint, rotation: f32) {
        self.with_surface(|s| {
            let pivot = s.size().to_pixel(center);
            rotate_about(s, pivot, rotation);
        });
    }

    /// Runs `body` in a frame rotated by `radians` about `center` (pixels).
    ///
    /// The surface state is restored when this returns, including when `body`
    /// returns an error or panics. `body` may call back into the context.
    pub fn with_rotation<R>(&self, center: Vec2, radians: f32, body: impl FnOnce(&RenderContext) -> R) -> R {
        self.with_surface(|s| {
            s.save();
            rotate_about(s, center, radians);
        });
        let _scope = RestoreOnDrop { ctx: self };
        body(self)
    }

    // ── immediate draws ───────────────────────────────────────────────────

    /// See [`images::draw_image`].
    pub fn draw_image(&self, texture: &ImageResource, center: NormPoint, size: NormSize) {
        self.with_surface(|s| images::draw_image(s, texture, center, size));
    }

    /// See [`images::draw_sprite_frame`].
    pub fn draw_image_sprite_sheet(
        &self,
        sheet: &ImageResource,
        frame_size: Vec2,
        frame_index: u32,
        center: NormPoint,
        size: NormSize,
    ) {
        self.with_surface(|s| images::draw_sprite_frame(s, sheet, frame_size, frame_index, center, size));
    }

    /// See [`shapes::draw_circle`].
    pub fn draw_circle(&self, center: NormPoint, radius: f32, color: &Paint) {
        self.with_surface(|s| shapes::draw_circle(s, center, radius, color));
    }

    // ── drawable factories ────────────────────────────────────────────────

    pub fn circle(&self, spec: CircleSpec) -> Circle {
        Circle::new(self, spec)
    }

    pub fn rectangle(&self, spec: RectangleSpec) -> Rectangle {
        Rectangle::new(self, spec)
    }

    pub fn texture(&self, spec: TextureSpec) -> Texture {
        Texture::new(self, spec)
    }

    pub fn background(&self, src: impl Into<String>) -> Background {
        Background::new(self, src)
    }

    pub fn letters(&self, spec: TextSpec) -> Letters {
        Letters::new(self, spec)
    }

    /// Starts loading `src` as a single-row sheet of `frame_size` pixel frames.
    pub fn sprite_sheet(&self, src: impl Into<Arc<str>>, frame_size: Vec2) -> SpriteSheet {
        SpriteSheet::new(self, self.image(src), frame_size)
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("RenderContext");
        match self.surface.try_borrow() {
            Ok(s) => d.field("surface_size", &s.size()),
            Err(_) => d.field("surface_size", &"<borrowed>"),
        };
        d.finish_non_exhaustive()
    }
}

/// Restore half of [`RenderContext::with_rotation`].
struct RestoreOnDrop<'a> {
    ctx: &'a RenderContext,
}

impl Drop for RestoreOnDrop<'_> {
    fn drop(&mut self) {
        match self.ctx.surface.try_borrow_mut() {
            Ok(mut s) => s.restore(),
            Err(_) => log::error!("surface still borrowed at scope exit; rotation scope not restored"),
        }
    }
}
