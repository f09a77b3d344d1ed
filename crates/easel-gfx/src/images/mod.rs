//! Asynchronously loaded images and the drawables built on them.
//!
//! Readiness model:
//! - an [`ImageResource`] starts `Loading` the moment it is created
//! - the [`ImageLoader`] it was handed to resolves it to `Ready` at most once,
//!   at some later point, through a one-shot [`LoadCompletion`]
//! - there is no failed state: a load that never completes leaves the resource
//!   `Loading` forever
//!
//! Every draw in this module checks readiness first and is a silent no-op
//! (no surface calls at all) while the image is still loading.

mod background;
mod handle;
mod loader;
mod resource;
mod sprite;
mod texture;

pub use background::Background;
pub use handle::ImageHandle;
pub use loader::{DeferredLoader, FileLoader, ImageLoader};
pub use resource::{ImageResource, LoadCompletion, LoadState};
pub use sprite::{draw_sprite_frame, frame_source_rect, SpriteSheet};
pub use texture::{Texture, TextureSpec};

use crate::coords::{NormPoint, NormSize, Rect};
use crate::surface::Surface;

/// Blits `image` into a rectangle of normalized `size` centered on normalized `center`.
///
/// Skipped while the image is loading.
pub fn draw_image<S: Surface + ?Sized>(surface: &mut S, image: &ImageResource, center: NormPoint, size: NormSize) {
    let Some(handle) = image.handle() else {
        log::trace!("draw_image: '{}' not ready, skipped", image.src());
        return;
    };
    let basis = surface.size();
    let dest = Rect::centered(basis.to_pixel(center), basis.size_to_pixel(size));
    surface.draw_image(handle, dest);
}
