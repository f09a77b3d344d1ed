use std::borrow::Cow;

use super::Color;

/// Paint source for filling or stroking geometry and text.
///
/// `Css` carries a style string verbatim (`"red"`, `"#ff000080"`,
/// `"rgba(0, 0, 0, 0.5)"`). It is not parsed here; the surface interprets it.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Css(Cow<'static, str>),
}

impl Paint {
    #[inline]
    pub fn css(style: impl Into<Cow<'static, str>>) -> Self {
        Paint::Css(style.into())
    }

    /// Style string a canvas-like surface accepts for this paint.
    pub fn to_css(&self) -> Cow<'_, str> {
        match self {
            Paint::Solid(c) => Cow::Owned(c.to_css()),
            Paint::Css(s) => Cow::Borrowed(s.as_ref()),
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<&'static str> for Paint {
    #[inline]
    fn from(style: &'static str) -> Self {
        Paint::Css(Cow::Borrowed(style))
    }
}

impl From<String> for Paint {
    #[inline]
    fn from(style: String) -> Self {
        Paint::Css(Cow::Owned(style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_passes_through_verbatim() {
        assert_eq!(Paint::from("red").to_css(), "red");
        assert_eq!(Paint::css(String::from("#0f0")).to_css(), "#0f0");
    }

    #[test]
    fn solid_renders_straight_rgba() {
        let p = Paint::from(Color::from_srgb_u8(255, 0, 0, 255));
        assert_eq!(p.to_css(), "rgba(255, 0, 0, 1)");
    }
}
