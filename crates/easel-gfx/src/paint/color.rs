/// Straight-alpha sRGB color as a canvas style accepts it.
///
/// Channels are 8-bit; alpha is a `[0, 1]` float, matching CSS `rgba()`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// `a` is clamped to `[0, 1]` when rendered, not here.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// All four channels as bytes; alpha `255` is fully opaque.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(r, g, b, a as f32 / 255.0)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        let nibble = |i: usize| u8::from_str_radix(digits.get(i..=i)?, 16).ok().map(|n| n * 17);

        match digits.len() {
            3 => Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` string.
    pub fn to_css(self) -> String {
        let a = if self.a.is_nan() { 0.0 } else { self.a.clamp(0.0, 1.0) };
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_css_formats_rgba() {
        assert_eq!(Color::WHITE.to_css(), "rgba(255, 255, 255, 1)");
        assert_eq!(Color::rgb(0, 0, 255).with_alpha(0.5).to_css(), "rgba(0, 0, 255, 0.5)");
        assert_eq!(Color::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn to_css_clamps_alpha() {
        assert_eq!(Color::rgba(1, 2, 3, 7.0).to_css(), "rgba(1, 2, 3, 1)");
        assert_eq!(Color::rgba(1, 2, 3, f32::NAN).to_css(), "rgba(1, 2, 3, 0)");
    }

    #[test]
    fn from_hex_accepts_short_long_and_alpha_forms() {
        assert_eq!(Color::from_hex("#f00"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("#1e90ff"), Some(Color::rgb(0x1e, 0x90, 0xff)));
        assert_eq!(Color::from_hex("#00000000"), Some(Color::TRANSPARENT));
    }

    #[test]
    fn from_hex_rejects_garbage() {
        for bad in ["", "f00", "#ff", "#gg0000", "#12345", "#éé"] {
            assert_eq!(Color::from_hex(bad), None, "{bad:?}");
        }
    }
}
