use super::Vec2;

/// 2D affine transform in canvas element order `[a, b, c, d, e, f]`.
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// | 0  0  1 |
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub elements: [f32; 6],
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        elements: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    #[inline]
    pub const fn translation(offset: Vec2) -> Self {
        Self {
            elements: [1.0, 0.0, 0.0, 1.0, offset.x, offset.y],
        }
    }

    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self {
            elements: [c, s, -s, c, 0.0, 0.0],
        }
    }

    /// Returns `self * other`: `other` is applied first, then `self`.
    ///
    /// This is how a canvas composes `translate`/`rotate` onto its current matrix.
    pub fn then(&self, other: &Affine) -> Affine {
        let [a1, b1, c1, d1, e1, f1] = self.elements;
        let [a2, b2, c2, d2, e2, f2] = other.elements;
        Affine {
            elements: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * e2 + c1 * f2 + e1,
                b1 * e2 + d1 * f2 + f1,
            ],
        }
    }

    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let [a, b, c, d, e, f] = self.elements;
        Vec2::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_then_is_noop() {
        let t = Affine::translation(Vec2::new(3.0, 4.0));
        assert_eq!(Affine::IDENTITY.then(&t), t);
        assert_eq!(t.then(&Affine::IDENTITY), t);
    }

    #[test]
    fn translate_there_and_back_is_identity() {
        let c = Vec2::new(20.0, 20.0);
        let m = Affine::translation(c)
            .then(&Affine::rotation(0.0))
            .then(&Affine::translation(-c));
        assert!(m.is_identity());
    }

    #[test]
    fn rotation_about_pivot_keeps_pivot_fixed() {
        let pivot = Vec2::new(50.0, 10.0);
        let m = Affine::translation(pivot)
            .then(&Affine::rotation(1.3))
            .then(&Affine::translation(-pivot));
        let p = m.transform_point(pivot);
        assert!((p.x - pivot.x).abs() < 1e-4);
        assert!((p.y - pivot.y).abs() < 1e-4);
    }

    #[test]
    fn quarter_turn_maps_x_axis_to_y_axis() {
        let p = Affine::rotation(FRAC_PI_2).transform_point(Vec2::new(1.0, 0.0));
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }
}
