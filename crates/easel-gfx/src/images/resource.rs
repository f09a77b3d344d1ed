use std::sync::{Arc, OnceLock, Weak};

use super::{ImageHandle, ImageLoader};

/// Load state of an [`ImageResource`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadState<'a> {
    Loading,
    Ready(&'a ImageHandle),
}

/// An image that becomes drawable asynchronously.
///
/// Clones share the same readiness slot: completing the load makes every clone ready.
/// The slot is written exactly once, by the [`LoadCompletion`] handed to the loader,
/// and only ever read here.
#[derive(Debug, Clone)]
pub struct ImageResource {
    src: Arc<str>,
    slot: Arc<OnceLock<ImageHandle>>,
}

impl ImageResource {
    /// Creates the resource and starts loading it immediately through `loader`.
    pub fn load(src: impl Into<Arc<str>>, loader: &dyn ImageLoader) -> Self {
        let src: Arc<str> = src.into();
        let slot = Arc::new(OnceLock::new());

        log::debug!("image '{src}': load requested");
        loader.load(LoadCompletion {
            src: Arc::clone(&src),
            slot: Arc::downgrade(&slot),
        });

        Self { src, slot }
    }

    #[inline]
    pub fn src(&self) -> &str {
        &self.src
    }

    #[inline]
    pub fn state(&self) -> LoadState<'_> {
        match self.slot.get() {
            Some(handle) => LoadState::Ready(handle),
            None => LoadState::Loading,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.slot.get().is_some()
    }

    /// The loaded image, once ready.
    #[inline]
    pub fn handle(&self) -> Option<&ImageHandle> {
        self.slot.get()
    }
}

/// One-shot completion for a pending image load.
///
/// `complete` consumes the value, so a load can resolve at most once. Dropping it
/// without completing is how a loader reports failure: the resource stays loading.
#[must_use = "dropping a LoadCompletion leaves its image loading forever"]
#[derive(Debug)]
pub struct LoadCompletion {
    src: Arc<str>,
    slot: Weak<OnceLock<ImageHandle>>,
}

impl LoadCompletion {
    /// Source the resource was created with.
    #[inline]
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Marks the image ready with its pixel size.
    ///
    /// If every owner of the resource is already gone this does nothing.
    pub fn complete(self, width: u32, height: u32) {
        let Some(slot) = self.slot.upgrade() else {
            log::trace!("image '{}': completed after its owners were dropped", self.src);
            return;
        };

        let handle = ImageHandle::new(Arc::clone(&self.src), width, height);
        if slot.set(handle).is_ok() {
            log::debug!("image '{}': ready ({width}x{height})", self.src);
        }
    }
}
