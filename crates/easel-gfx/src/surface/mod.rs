//! Drawing surfaces.
//!
//! [`Surface`] is the contract every raster target implements: pixel size, a
//! save/restore state stack with a current transform, path/rect/text/image
//! primitives. It mirrors a 2D canvas context so a browser canvas, a software
//! rasterizer or the in-memory [`RecordingSurface`] can sit behind it.
//!
//! The rendering layer never touches a surface's transform outside a
//! save/restore pair; see [`crate::transform`].

mod cmd;
mod recording;

pub use cmd::{PathOp, RecordedCmd, SurfaceCmd};
pub use recording::RecordingSurface;

use crate::coords::{Affine, Rect, SurfaceSize, Vec2};
use crate::images::ImageHandle;
use crate::paint::{Paint, TextAlign, TextBaseline};

/// A 2D raster drawing target.
///
/// Style setters (`set_fill_style`, `set_font`, ...) and the transform are part of
/// the saved state: `restore` brings back whatever `save` captured. An unbalanced
/// `restore` must be a no-op.
pub trait Surface {
    /// Current pixel size.
    fn size(&self) -> SurfaceSize;

    fn save(&mut self);
    fn restore(&mut self);

    fn transform(&self) -> Affine;
    fn set_transform(&mut self, transform: Affine);
    /// Post-multiplies a translation onto the current transform.
    fn translate(&mut self, offset: Vec2);
    /// Post-multiplies a rotation (radians, clockwise on screen) onto the current transform.
    fn rotate(&mut self, radians: f32);

    fn clear_rect(&mut self, rect: Rect);

    fn begin_path(&mut self);
    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32, counterclockwise: bool);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_fill_style(&mut self, paint: &Paint);
    fn set_stroke_style(&mut self, paint: &Paint);
    fn set_line_width(&mut self, width: f32);

    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);

    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn fill_text(&mut self, text: &str, at: Vec2);
    fn stroke_text(&mut self, text: &str, at: Vec2);

    /// Blits the whole image into `dest`.
    fn draw_image(&mut self, image: &ImageHandle, dest: Rect);
    /// Blits the `source` sub-rectangle of the image (image pixels) into `dest`.
    fn draw_image_region(&mut self, image: &ImageHandle, source: Rect, dest: Rect);
}
