//! Paint model shared by drawables and surfaces.
//!
//! Scope:
//! - straight-alpha sRGB colors rendered as CSS `rgba()`
//! - paint sources handed to `fill_style` / `stroke_style`
//! - text alignment and baseline settings
//!
//! Geometry types remain in `coords`.

mod color;
mod paint;
mod text_style;

pub use color::Color;
pub use paint::Paint;
pub use text_style::{TextAlign, TextBaseline};
