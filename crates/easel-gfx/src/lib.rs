//! Easel graphics crate.
//!
//! A thin 2D layer over a canvas-like [`Surface`](surface::Surface):
//! - normalized coordinates ([`coords`])
//! - scoped save/rotate/restore ([`transform`])
//! - circles, rectangles, text ([`shapes`])
//! - asynchronously loaded images, sprite sheets and backgrounds ([`images`])
//!
//! Everything is reached through a [`RenderContext`](context::RenderContext),
//! which owns the surface handle and the image loader.

pub mod context;
pub mod coords;
pub mod images;
pub mod logging;
pub mod paint;
pub mod shapes;
pub mod surface;
pub mod transform;

pub use context::RenderContext;

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::context::RenderContext;
    use crate::images::DeferredLoader;
    use crate::surface::RecordingSurface;

    /// Context over a fresh recording surface and a deferred loader.
    pub(crate) fn recording_context(
        width: f32,
        height: f32,
    ) -> (RenderContext, Rc<RefCell<RecordingSurface>>, Rc<DeferredLoader>) {
        let surface = Rc::new(RefCell::new(RecordingSurface::new(width, height)));
        let loader = Rc::new(DeferredLoader::new());
        let ctx = RenderContext::new(surface.clone(), loader.clone());
        (ctx, surface, loader)
    }
}
