//! Primitive drawables.
//!
//! Each drawable is built from a spec struct and keeps the [`RenderContext`] it was
//! created with. Optional style fields follow one rule: `None` skips that step
//! entirely (the surface keeps whatever style it already had), `Some` applies it.
//!
//! [`RenderContext`]: crate::context::RenderContext

mod circle;
mod clear;
mod rect;
mod text;

pub use circle::{draw_circle, Circle, CircleSpec};
pub use clear::clear;
pub use rect::{Rectangle, RectangleSpec};
pub use text::{Letters, TextSpec};
