use std::ops::*;
use static_assertions::assert_eq_size;

use crate::common::{coord_common, Mask2};
use crate::numeric::*;
use crate::utils::strip_mul;
use crate::vec::Vec2;

coord_common! {
    doc = "A 2D size, non-negative along each axis";
    Extent2, "extent2", Mask2,
    2,
    (T, T),
    w => 0, h => 1;
    assert is_valid
}
coord_common! { @elementwise_self Extent2, w, h }
coord_common! { @elementwise_other Extent2, Vec2; w => x, h => y }
coord_common! { @scalar Extent2, w, h }
coord_common! { @scalar_lhs Extent2, w, h }

assert_eq_size!(Extent2<f32>, [f32; 2]);
assert_eq_size!(Extent2<u8>, [u8; 2]);

impl<T: Numeric> Extent2<T> {
    /// A unit size
    pub const UNIT: Self = <Self as One>::ONE;
    /// The largest representable size
    pub const MAX: Self = Self { w: T::MAX, h: T::MAX };

    /// Check that no component is negative
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.w >= T::ZERO && self.h >= T::ZERO
    }

    /// Calculate the enclosed area
    #[must_use]
    pub fn area(self) -> T {
        strip_mul!(* self.w * self.h)
    }

    /// Calculate the length of the diagonal
    #[must_use]
    pub fn diameter(self) -> T {
        (self.w * self.w + self.h * self.h).sqrt()
    }

    /// Reinterpret the size as a displacement from the base corner
    #[inline(always)]
    #[must_use]
    pub fn as_vec(self) -> Vec2<T> {
        Vec2::new(self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_and_diameter() {
        let e = Extent2::new(3f32, 4.0);
        assert_eq!(e.area(), 12.0);
        assert_eq!(e.diameter(), 5.0);
        assert_eq!(Extent2::new(10u32, 20).area(), 200);
    }

    #[test]
    fn arithmetic() {
        let a = Extent2::new(10, 20);
        let b = Extent2::new(1, 2);
        let v = Vec2::new(5, -3);

        assert_eq!(a + b, Extent2::new(11, 22));
        assert_eq!(a - b, Extent2::new(9, 18));
        assert_eq!(a + v, Extent2::new(15, 17));
        assert_eq!(a * 2, Extent2::new(20, 40));
    }

    #[test]
    fn validity() {
        assert!(Extent2::new(0, 0).is_valid());
        assert!(Extent2::new(3.5f32, 0.0).is_valid());
        assert!(!Extent2 { w: -1, h: 2 }.is_valid());
    }

    #[test]
    #[should_panic]
    fn negative_size_is_rejected() {
        let _ = Extent2::new(-1, 2);
    }

    #[test]
    fn display() {
        assert_eq!(Extent2::new(10, 20).to_string(), "extent2(10, 20)");
    }
}
