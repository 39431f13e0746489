use std::ops::*;
use static_assertions::assert_eq_size;

use crate::common::{coord_common, Mask3, Mask4};
use crate::maths::Renormalise;
use crate::numeric::*;

coord_common! {
    doc = "An RGB channel tuple";
    Colour3, "colour3", Mask3,
    3,
    (T, T, T),
    r => 0, g => 1, b => 2
}
coord_common! { @elementwise_self Colour3, r, g, b }
coord_common! { @scalar Colour3, r, g, b }
coord_common! { @scalar_lhs Colour3, r, g, b }

coord_common! {
    doc = "An RGBA channel tuple";
    Colour4, "colour4", Mask4,
    4,
    (T, T, T, T),
    r => 0, g => 1, b => 2, a => 3
}
coord_common! { @elementwise_self Colour4, r, g, b, a }
coord_common! { @scalar Colour4, r, g, b, a }
coord_common! { @scalar_lhs Colour4, r, g, b, a }

assert_eq_size!(Colour3<u8>, [u8; 3]);
assert_eq_size!(Colour4<u8>, [u8; 4]);
assert_eq_size!(Colour4<f32>, [f32; 4]);

impl<T: Numeric> Colour3<T> {
    pub const BLACK: Self = Self { r: T::ZERO, g: T::ZERO, b: T::ZERO };
    pub const WHITE: Self = Self { r: T::ONE, g: T::ONE, b: T::ONE };

    /// Extend with an explicit alpha channel
    #[inline]
    #[must_use]
    pub fn with_alpha(self, a: T) -> Colour4<T> {
        Colour4::new(self.r, self.g, self.b, a)
    }
}

impl<T: Numeric> Colour4<T> {
    pub const BLACK: Self = Self { r: T::ZERO, g: T::ZERO, b: T::ZERO, a: T::ONE };
    pub const WHITE: Self = Self { r: T::ONE, g: T::ONE, b: T::ONE, a: T::ONE };
    pub const RED: Self = Self { r: T::ONE, g: T::ZERO, b: T::ZERO, a: T::ONE };
    pub const GREEN: Self = Self { r: T::ZERO, g: T::ONE, b: T::ZERO, a: T::ONE };
    pub const BLUE: Self = Self { r: T::ZERO, g: T::ZERO, b: T::ONE, a: T::ONE };

    /// Drop the alpha channel
    #[inline]
    #[must_use]
    pub fn drop_alpha(self) -> Colour3<T> {
        Colour3::new(self.r, self.g, self.b)
    }
}

// Channel-wise representation changes, e.g. Colour4<u8> to Colour4<f32>.
impl<T: Numeric + Renormalise<U>, U: Numeric> Renormalise<Colour3<U>> for Colour3<T> {
    fn renormalise(self) -> Colour3<U> {
        Colour3::new(self.r.renormalise(), self.g.renormalise(), self.b.renormalise())
    }
}

impl<T: Numeric + Renormalise<U>, U: Numeric> Renormalise<Colour4<U>> for Colour4<T> {
    fn renormalise(self) -> Colour4<U> {
        Colour4::new(
            self.r.renormalise(),
            self.g.renormalise(),
            self.b.renormalise(),
            self.a.renormalise(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_arithmetic() {
        let a = Colour4::new(0.5f32, 0.25, 0.0, 1.0);
        let b = Colour4::new(0.25f32, 0.25, 0.5, 0.0);

        assert!((a + b).is_approx_eq(Colour4::new(0.75, 0.5, 0.5, 1.0)));
        assert!((a * 2.0).is_approx_eq(Colour4::new(1.0, 0.5, 0.0, 2.0)));
    }

    #[test]
    fn consts() {
        assert_eq!(Colour4::<f32>::RED, Colour4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(Colour4::<u8>::WHITE, Colour4::new(1, 1, 1, 1));
        assert_eq!(Colour3::<f64>::BLACK, Colour3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn alpha_round_trip() {
        let c = Colour3::new(0.1f32, 0.2, 0.3);
        assert_eq!(c.with_alpha(1.0).drop_alpha(), c);
    }

    #[test]
    fn channel_renormalise() {
        let c = Colour4::new(0u8, 255, 128, 255);
        let f: Colour4<f32> = c.renormalise();
        assert_eq!(f.r, 0.0);
        assert_eq!(f.g, 1.0);
        assert_eq!(f.a, 1.0);

        let wide: Colour3<u16> = Colour3::new(0u8, 255, 255).renormalise();
        assert_eq!(wide, Colour3::new(0, u16::MAX, u16::MAX));
    }

    #[test]
    fn named_and_indexed_views_alias() {
        let mut c = Colour4::new(1, 2, 3, 4);
        c[0] = 9;
        assert_eq!(c.r, 9);
        c.a = 7;
        assert_eq!(c[3], 7);
    }

    #[test]
    fn display() {
        assert_eq!(Colour4::new(1, 0, 0, 1).to_string(), "colour4(1, 0, 0, 1)");
    }
}
