use crate::coords::{Affine, Rect, Vec2};
use crate::images::ImageHandle;
use crate::paint::{Paint, TextAlign, TextBaseline};

/// One segment of the path under construction.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOp {
    Arc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    },
    Close,
}

/// A pixel-producing primitive captured by [`RecordingSurface`](super::RecordingSurface).
///
/// Each variant carries the style that was active when it was issued, so tests can
/// assert on output without replaying state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCmd {
    ClearRect {
        rect: Rect,
    },
    FillRect {
        rect: Rect,
        paint: Paint,
    },
    StrokeRect {
        rect: Rect,
        paint: Paint,
        line_width: f32,
    },
    FillPath {
        path: Vec<PathOp>,
        paint: Paint,
    },
    StrokePath {
        path: Vec<PathOp>,
        paint: Paint,
        line_width: f32,
    },
    FillText {
        text: String,
        at: Vec2,
        font: String,
        align: TextAlign,
        baseline: TextBaseline,
        paint: Paint,
    },
    StrokeText {
        text: String,
        at: Vec2,
        font: String,
        align: TextAlign,
        baseline: TextBaseline,
        paint: Paint,
        line_width: f32,
    },
    DrawImage {
        image: ImageHandle,
        /// `None` = the whole image.
        source: Option<Rect>,
        dest: Rect,
    },
}

/// A recorded command together with the transform it was drawn under.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCmd {
    pub cmd: SurfaceCmd,
    pub transform: Affine,
}
