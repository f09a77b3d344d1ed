use crate::context::RenderContext;
use crate::coords::{Rect, Vec2};
use crate::paint::Paint;
use crate::transform::with_rotation;

/// Rectangle draw parameters in surface pixels.
///
/// `(x, y)` is the top-left corner; rotation pivots on the rectangle's center.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Radians.
    pub rotation: f32,
    pub fill_style: Option<Paint>,
    pub stroke_style: Option<Paint>,
    pub line_width: Option<f32>,
}

impl RectangleSpec {
    /// Unrotated, unstyled rectangle. With no fill and no stroke it draws nothing visible.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
            fill_style: None,
            stroke_style: None,
            line_width: None,
        }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_fill(mut self, paint: impl Into<Paint>) -> Self {
        self.fill_style = Some(paint.into());
        self
    }

    pub fn with_stroke(mut self, paint: impl Into<Paint>) -> Self {
        self.stroke_style = Some(paint.into());
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Rotatable rectangle with independent fill and stroke.
#[derive(Debug, Clone)]
pub struct Rectangle {
    ctx: RenderContext,
    spec: RectangleSpec,
}

impl Rectangle {
    pub fn new(ctx: &RenderContext, spec: RectangleSpec) -> Self {
        Self { ctx: ctx.clone(), spec }
    }

    #[inline]
    pub fn spec(&self) -> &RectangleSpec {
        &self.spec
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.spec.rotation
    }

    /// Adds `angle` (radians) to the stored rotation for subsequent draws.
    ///
    /// Cumulative and never wrapped into `[0, 2π)`.
    #[inline]
    pub fn update_rotation(&mut self, angle: f32) {
        self.spec.rotation += angle;
    }

    /// Moves the top-left corner to `(x, y)` pixels.
    #[inline]
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.spec.x = x;
        self.spec.y = y;
    }

    pub fn draw(&self) {
        let spec = &self.spec;
        let rect = spec.rect();
        let pivot = Vec2::new(spec.x + spec.width / 2.0, spec.y + spec.height / 2.0);

        self.ctx.with_surface(|s| {
            with_rotation(s, pivot, spec.rotation, |s| {
                if let Some(fill) = &spec.fill_style {
                    s.set_fill_style(fill);
                    s.fill_rect(rect);
                }
                if let Some(width) = spec.line_width {
                    s.set_line_width(width);
                }
                if let Some(stroke) = &spec.stroke_style {
                    s.set_stroke_style(stroke);
                    s.stroke_rect(rect);
                }
            });
        });
    }
}
