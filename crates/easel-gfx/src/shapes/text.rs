use crate::context::RenderContext;
use crate::coords::Vec2;
use crate::paint::{Paint, TextAlign, TextBaseline};

/// Text draw parameters.
///
/// `font` is a CSS font shorthand (`"24px monospace"`). `(x, y)` is in surface
/// pixels and is interpreted according to `align`/`baseline`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub text: String,
    pub font: String,
    pub x: f32,
    pub y: f32,
    pub align: Option<TextAlign>,
    pub baseline: Option<TextBaseline>,
    pub fill_style: Option<Paint>,
    pub stroke_style: Option<Paint>,
    pub line_width: Option<f32>,
}

impl TextSpec {
    pub fn new(text: impl Into<String>, font: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
            x,
            y,
            align: None,
            baseline: None,
            fill_style: None,
            stroke_style: None,
            line_width: None,
        }
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = Some(baseline);
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
}

/// A styled text label.
#[derive(Debug, Clone)]
pub struct Letters {
    ctx: RenderContext,
    spec: TextSpec,
}

impl Letters {
    pub fn new(ctx: &RenderContext, spec: TextSpec) -> Self {
        Self { ctx: ctx.clone(), spec }
    }

    #[inline]
    pub fn spec(&self) -> &TextSpec {
        &self.spec
    }

    /// Replaces the displayed string, keeping every style setting.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.spec.text = text.into();
    }

    /// Sets the font, then each present option, then fills and/or strokes.
    ///
    /// Fill and stroke are independent: both, one or neither may be issued.
    pub fn draw(&self) {
        let spec = &self.spec;
        let at = Vec2::new(spec.x, spec.y);

        self.ctx.with_surface(|s| {
            s.set_font(&spec.font);
            if let Some(width) = spec.line_width {
                s.set_line_width(width);
            }
            if let Some(align) = spec.align {
                s.set_text_align(align);
            }
            if let Some(baseline) = spec.baseline {
                s.set_text_baseline(baseline);
            }
            if let Some(fill) = &spec.fill_style {
                s.set_fill_style(fill);
                s.fill_text(&spec.text, at);
            }
            if let Some(stroke) = &spec.stroke_style {
                s.set_stroke_style(stroke);
                s.stroke_text(&spec.text, at);
            }
        });
    }
}
