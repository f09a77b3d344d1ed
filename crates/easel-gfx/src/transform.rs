//! Scoped transform discipline.
//!
//! Any draw that needs a rotated frame runs inside a [`SavedState`]: the surface
//! state is saved on entry and restored when the guard drops. Because the restore
//! lives in `Drop`, it also runs on early returns and while unwinding from a panic,
//! so a failing draw cannot leave a rotated transform behind for the rest of the frame.

use core::ops::{Deref, DerefMut};

use crate::coords::Vec2;
use crate::surface::Surface;

/// RAII guard pairing a `save` with a guaranteed `restore`.
///
/// Derefs to the surface, so draw calls go through the guard while it is alive.
pub struct SavedState<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SavedState<'a, S> {
    /// Saves the surface state and returns the guard that will restore it.
    pub fn save(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for SavedState<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SavedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SavedState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// Rotates the current frame by `radians` about `pivot` (pixels).
///
/// Unscoped: the caller owns the matching restore.
pub fn rotate_about<S: Surface + ?Sized>(surface: &mut S, pivot: Vec2, radians: f32) {
    surface.translate(pivot);
    surface.rotate(radians);
    surface.translate(-pivot);
}

/// Runs `body` in a frame rotated by `radians` about `pivot` (pixels).
///
/// The surface state seen after this returns (or unwinds) is exactly the state
/// seen before it was called.
pub fn with_rotation<S, R>(surface: &mut S, pivot: Vec2, radians: f32, body: impl FnOnce(&mut S) -> R) -> R
where
    S: Surface + ?Sized,
{
    let mut scope = SavedState::save(surface);
    rotate_about(&mut *scope, pivot, radians);
    body(&mut *scope)
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;
    use crate::coords::{Affine, Rect};
    use crate::surface::RecordingSurface;

    fn unit() -> Rect {
        Rect::new(0.0, 0.0, 1.0, 1.0)
    }

    #[test]
    fn body_sees_rotated_frame_and_caller_does_not() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        with_rotation(&mut s, Vec2::new(50.0, 50.0), 0.7, |s| s.fill_rect(unit()));
        s.fill_rect(unit());

        let cmds = s.commands();
        assert!(!cmds[0].transform.is_identity());
        assert!(cmds[1].transform.is_identity());
        assert_eq!(s.save_depth(), 0);
    }

    #[test]
    fn restores_non_identity_entry_transform() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        s.translate(Vec2::new(3.0, 4.0));
        let before = s.transform();
        with_rotation(&mut s, Vec2::new(10.0, 10.0), 2.0, |s| s.rotate(1.0));
        assert_eq!(s.transform(), before);
    }

    #[test]
    fn restores_after_panicking_body() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        let result = catch_unwind(AssertUnwindSafe(|| {
            with_rotation(&mut s, Vec2::new(5.0, 5.0), 1.0, |s| {
                s.fill_rect(unit());
                panic!("draw failed");
            })
        }));
        assert!(result.is_err());
        assert!(s.transform().is_identity());
        assert_eq!(s.save_depth(), 0);
    }

    #[test]
    fn restores_after_error_return() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        let result: Result<(), &str> = with_rotation(&mut s, Vec2::new(5.0, 5.0), 1.0, |s| {
            s.fill_rect(unit());
            Err("bad spec")
        });
        assert!(result.is_err());
        assert!(s.transform().is_identity());
    }

    #[test]
    fn nested_scopes_unwind_in_order() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        with_rotation(&mut s, Vec2::new(10.0, 10.0), 0.5, |s| {
            let outer = s.transform();
            with_rotation(&mut *s, Vec2::new(20.0, 20.0), 0.25, |s| s.fill_rect(unit()));
            assert_eq!(s.transform(), outer);
            s.fill_rect(unit());
        });
        s.fill_rect(unit());

        let cmds = s.commands();
        assert_ne!(cmds[0].transform, cmds[1].transform);
        assert_eq!(cmds[2].transform, Affine::IDENTITY);
    }

    #[test]
    fn rotate_about_keeps_pivot_in_place() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        let pivot = Vec2::new(30.0, 70.0);
        rotate_about(&mut s, pivot, 2.5);
        let p = s.transform().transform_point(pivot);
        assert!((p.x - pivot.x).abs() < 1e-3);
        assert!((p.y - pivot.y).abs() < 1e-3);
        assert_eq!(s.save_depth(), 0);
    }
}
