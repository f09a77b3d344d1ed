use core::f32::consts::TAU;

use crate::context::RenderContext;
use crate::coords::{NormPoint, Vec2};
use crate::paint::Paint;
use crate::surface::Surface;

/// Circle draw parameters in surface pixels.
///
/// Both styles are required; `line_width` is applied only when present.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSpec {
    pub center: Vec2,
    pub radius: f32,
    pub fill_style: Paint,
    pub stroke_style: Paint,
    pub line_width: Option<f32>,
}

impl CircleSpec {
    #[inline]
    pub fn new(center: Vec2, radius: f32, fill_style: impl Into<Paint>, stroke_style: impl Into<Paint>) -> Self {
        Self {
            center,
            radius,
            fill_style: fill_style.into(),
            stroke_style: stroke_style.into(),
            line_width: None,
        }
    }

    #[inline]
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }
}

/// Stroked and filled circle.
#[derive(Debug, Clone)]
pub struct Circle {
    ctx: RenderContext,
    spec: CircleSpec,
}

impl Circle {
    pub fn new(ctx: &RenderContext, spec: CircleSpec) -> Self {
        Self { ctx: ctx.clone(), spec }
    }

    #[inline]
    pub fn spec(&self) -> &CircleSpec {
        &self.spec
    }

    /// Strokes, then fills, the same closed arc path.
    ///
    /// Fill goes last so an opaque fill covers the inner half of the stroke.
    pub fn draw(&self) {
        let spec = &self.spec;
        self.ctx.with_surface(|s| {
            s.begin_path();
            s.arc(spec.center, spec.radius, 0.0, TAU, false);
            s.close_path();
            if let Some(width) = spec.line_width {
                s.set_line_width(width);
            }
            s.set_stroke_style(&spec.stroke_style);
            s.stroke();
            s.set_fill_style(&spec.fill_style);
            s.fill();
        });
    }
}

/// Fills a circle given in normalized units.
///
/// `center` goes through [`SurfaceSize::to_pixel`](crate::coords::SurfaceSize::to_pixel).
/// The drawn radius is `2 * radius * surface_width`: `radius` is a fraction of half
/// the surface width, which is what existing callers size their circles against.
pub fn draw_circle<S: Surface + ?Sized>(surface: &mut S, center: NormPoint, radius: f32, color: &Paint) {
    let basis = surface.size();
    surface.begin_path();
    surface.arc(basis.to_pixel(center), 2.0 * radius * basis.width, 0.0, TAU, false);
    surface.close_path();
    surface.set_fill_style(color);
    surface.fill();
}
