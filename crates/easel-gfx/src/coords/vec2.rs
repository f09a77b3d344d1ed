use core::ops::{Add, Div, Mul, Neg, Sub};

/// Point or offset in surface pixels, +Y down.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub fn half(self) -> Self {
        self / 2.0
    }

}

macro_rules! componentwise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Vec2 {
            type Output = Vec2;
            #[inline]
            fn $method(self, rhs: Vec2) -> Vec2 {
                Vec2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

macro_rules! scalar {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f32> for Vec2 {
            type Output = Vec2;
            #[inline]
            fn $method(self, k: f32) -> Vec2 {
                Vec2::new(self.x $op k, self.y $op k)
            }
        }
    };
}

componentwise!(Add, add, +);
componentwise!(Sub, sub, -);
scalar!(Mul, mul, *);
scalar!(Div, div, /);

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}
