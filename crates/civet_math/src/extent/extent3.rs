use std::ops::*;
use static_assertions::assert_eq_size;

use crate::common::{coord_common, Mask3};
use crate::numeric::*;
use crate::utils::strip_mul;
use crate::vec::Vec3;

coord_common! {
    doc = "A 3D size, non-negative along each axis";
    Extent3, "extent3", Mask3,
    3,
    (T, T, T),
    w => 0, h => 1, d => 2;
    assert is_valid
}
coord_common! { @elementwise_self Extent3, w, h, d }
coord_common! { @elementwise_other Extent3, Vec3; w => x, h => y, d => z }
coord_common! { @scalar Extent3, w, h, d }
coord_common! { @scalar_lhs Extent3, w, h, d }

assert_eq_size!(Extent3<f32>, [f32; 3]);
assert_eq_size!(Extent3<u8>, [u8; 3]);

impl<T: Numeric> Extent3<T> {
    /// A unit size
    pub const UNIT: Self = <Self as One>::ONE;
    /// The largest representable size
    pub const MAX: Self = Self { w: T::MAX, h: T::MAX, d: T::MAX };

    /// Check that no component is negative
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.w >= T::ZERO && self.h >= T::ZERO && self.d >= T::ZERO
    }

    /// Calculate the enclosed volume
    #[must_use]
    pub fn area(self) -> T {
        strip_mul!(* self.w * self.h * self.d)
    }

    /// Calculate the length of the diagonal
    #[must_use]
    pub fn diameter(self) -> T {
        (self.w * self.w + self.h * self.h + self.d * self.d).sqrt()
    }

    /// Reinterpret the size as a displacement from the base corner
    #[inline(always)]
    #[must_use]
    pub fn as_vec(self) -> Vec3<T> {
        Vec3::new(self.w, self.h, self.d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_and_diameter() {
        let e = Extent3::new(2f64, 3.0, 6.0);
        assert_eq!(e.area(), 36.0);
        assert_eq!(e.diameter(), 7.0);
    }

    #[test]
    fn arithmetic() {
        let a = Extent3::new(10, 20, 30);
        let v = Vec3::new(1, -2, 3);
        assert_eq!(a + v, Extent3::new(11, 18, 33));
        assert_eq!(a / 10, Extent3::new(1, 2, 3));
    }

    #[test]
    #[should_panic]
    fn negative_size_is_rejected() {
        let _ = Extent3::new(1, -2, 3);
    }

    #[test]
    fn display() {
        assert_eq!(Extent3::new(1, 2, 3).to_string(), "extent3(1, 2, 3)");
    }
}
