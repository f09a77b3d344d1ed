use crate::coords::{Affine, Rect};
use crate::surface::Surface;
use crate::transform::SavedState;

/// Clears the whole surface regardless of the active transform.
///
/// The transform is reset to identity for the clear and restored afterwards, so
/// this is safe to call from inside a rotation scope.
pub fn clear<S: Surface + ?Sized>(surface: &mut S) {
    let mut scope = SavedState::save(surface);
    scope.set_transform(Affine::IDENTITY);
    let size = scope.size();
    scope.clear_rect(Rect::new(0.0, 0.0, size.width, size.height));
}
