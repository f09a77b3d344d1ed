use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::LoadCompletion;

/// Environment-side image loading.
///
/// `load` must not block. The loader keeps `completion` and calls
/// [`LoadCompletion::complete`] once the image is available, on any later turn
/// (or, for a cache hit, right away). Failures are signalled by dropping it.
pub trait ImageLoader {
    fn load(&self, completion: LoadCompletion);
}

/// Loader that parks every request until the host resolves it.
///
/// Useful for headless hosts and tests that want to pick the exact frame on which
/// images become ready.
#[derive(Debug, Default)]
pub struct DeferredLoader {
    pending: RefCell<Vec<LoadCompletion>>,
}

impl DeferredLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests not yet resolved.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Sources of unresolved requests, in request order.
    pub fn pending_sources(&self) -> Vec<String> {
        self.pending.borrow().iter().map(|c| c.src().to_owned()).collect()
    }

    /// Resolves every pending request for `src`. Returns how many were resolved.
    pub fn complete(&self, src: &str, width: u32, height: u32) -> usize {
        let matched = self.take_where(|c| c.src() == src);
        let n = matched.len();
        for completion in matched {
            completion.complete(width, height);
        }
        n
    }

    /// Resolves every pending request with the same size.
    pub fn complete_all(&self, width: u32, height: u32) -> usize {
        let all = self.take_where(|_| true);
        let n = all.len();
        for completion in all {
            completion.complete(width, height);
        }
        n
    }

    /// Drops every pending request for `src`; those images never become ready.
    pub fn fail(&self, src: &str) -> usize {
        let failed = self.take_where(|c| c.src() == src);
        for completion in &failed {
            log::warn!("image '{}': load failed", completion.src());
        }
        failed.len()
    }

    // Completions run after the borrow is released, so a completion that
    // triggers another load cannot hit a double borrow.
    fn take_where(&self, pred: impl Fn(&LoadCompletion) -> bool) -> Vec<LoadCompletion> {
        let mut pending = self.pending.borrow_mut();
        let (taken, rest): (Vec<_>, Vec<_>) = pending.drain(..).partition(|c| pred(c));
        *pending = rest;
        taken
    }
}

impl ImageLoader for DeferredLoader {
    fn load(&self, completion: LoadCompletion) {
        self.pending.borrow_mut().push(completion);
    }
}

/// Loader that resolves sources as paths under `root` on a worker thread.
///
/// Only the file header is read to learn the pixel size. Unreadable or unknown
/// files are logged and never complete.
#[derive(Debug, Clone)]
pub struct FileLoader {
    root: PathBuf,
}

impl FileLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageLoader for FileLoader {
    fn load(&self, completion: LoadCompletion) {
        let path = self.root.join(completion.src());

        let spawned = std::thread::Builder::new()
            .name("easel-image-load".into())
            .spawn(move || match probe_dimensions(&path) {
                Ok((width, height)) => completion.complete(width, height),
                Err(err) => {
                    log::warn!("image '{}' stays unloaded: {err:#}", completion.src());
                }
            });

        if let Err(err) = spawned {
            log::warn!("image loader thread could not start: {err}");
        }
    }
}

fn probe_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).with_context(|| format!("reading image header of {}", path.display()))
}
