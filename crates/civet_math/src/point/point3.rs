use std::ops::*;
use static_assertions::assert_eq_size;

use crate::common::{coord_common, DotProduct, Mask3};
use crate::numeric::*;
use crate::vec::Vec3;

coord_common! {
    doc = "A 3D absolute position";
    Point3, "point3", Mask3,
    3,
    (T, T, T),
    x => 0, y => 1, z => 2
}
coord_common! { @elementwise_other Point3, Vec3; x => x, y => y, z => z }
coord_common! { @flipped Vec3, Point3; x => x, y => y, z => z }
coord_common! { @sub_to Point3, Vec3; x, y, z }
coord_common! { @scalar Point3, x, y, z }
coord_common! { @scalar_lhs Point3, x, y, z }
coord_common! { @scalar_sub_to Point3, Vec3; x, y, z }
coord_common! { @dot Point3, Point3; x => x, y => y, z => z }

assert_eq_size!(Point3<f32>, [f32; 3]);
assert_eq_size!(Point3<u8>, [u8; 3]);

impl<T: Numeric> Point3<T> {
    /// The origin
    pub const ORIGIN: Self = <Self as Zero>::ZERO;

    /// Get the displacement from `self` towards `other`
    #[inline]
    #[must_use]
    pub fn to(self, other: Self) -> Vec3<T> {
        other - self
    }

    /// Reinterpret the position as a displacement from the origin
    #[inline(always)]
    #[must_use]
    pub fn to_vec(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Get the distance to another point
    #[must_use]
    pub fn dist(self, other: Self) -> T {
        self.to(other).len()
    }

    /// Get the square of the distance to another point
    #[must_use]
    pub fn dist_sq(self, other: Self) -> T {
        self.to(other).len_sq()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_vector_arithmetic() {
        let p = Point3::new(1, 2, 3);
        let v = Vec3::new(4, 5, 6);

        assert_eq!(p + v, Point3::new(5, 7, 9));
        assert_eq!(v + p, Point3::new(5, 7, 9));
        assert_eq!(p - v, Point3::new(-3, -3, -3));
    }

    #[test]
    fn displacement_consistency() {
        let a = Point3::new(1f64, 2.0, 3.0);
        let b = Point3::new(0f64, -1.0, 5.0);

        assert!(a.to(b).is_approx_eq(-b.to(a)));
        assert!((a + a.to(b)).is_approx_eq(b));
        assert!((b - a).is_approx_eq(a.to(b)));
    }

    #[test]
    fn distance() {
        let a = Point3::new(0f64, 0.0, 0.0);
        let b = Point3::new(2f64, 3.0, 6.0);
        assert_eq!(a.dist(b), 7.0);
    }

    #[test]
    fn display() {
        assert_eq!(Point3::new(1, 2, 3).to_string(), "point3(1, 2, 3)");
    }
}
