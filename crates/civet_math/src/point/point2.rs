use std::ops::*;
use static_assertions::assert_eq_size;

use crate::common::{coord_common, DotProduct, Mask2};
use crate::numeric::*;
use crate::vec::Vec2;

coord_common! {
    doc = "A 2D absolute position";
    Point2, "point2", Mask2,
    2,
    (T, T),
    x => 0, y => 1
}
coord_common! { @elementwise_other Point2, Vec2; x => x, y => y }
coord_common! { @flipped Vec2, Point2; x => x, y => y }
coord_common! { @sub_to Point2, Vec2; x, y }
coord_common! { @scalar Point2, x, y }
coord_common! { @scalar_lhs Point2, x, y }
coord_common! { @scalar_sub_to Point2, Vec2; x, y }
coord_common! { @dot Point2, Point2; x => x, y => y }

assert_eq_size!(Point2<f32>, [f32; 2]);
assert_eq_size!(Point2<u8>, [u8; 2]);

impl<T: Numeric> Point2<T> {
    /// The origin
    pub const ORIGIN: Self = <Self as Zero>::ZERO;

    /// Get the displacement from `self` towards `other`
    #[inline]
    #[must_use]
    pub fn to(self, other: Self) -> Vec2<T> {
        other - self
    }

    /// Reinterpret the position as a displacement from the origin
    #[inline(always)]
    #[must_use]
    pub fn to_vec(self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
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
        let p = Point2::new(1, 2);
        let v = Vec2::new(3, 5);

        assert_eq!(p + v, Point2::new(4, 7));
        assert_eq!(v + p, Point2::new(4, 7));
        assert_eq!(p - v, Point2::new(-2, -3));

        let mut q = p;
        q += v;
        assert_eq!(q, Point2::new(4, 7));
    }

    #[test]
    fn point_difference_is_a_vector() {
        let a = Point2::new(1f32, 2.0);
        let b = Point2::new(4f32, 6.0);

        let d: Vec2<f32> = b - a;
        assert_eq!(d, Vec2::new(3.0, 4.0));
        assert!(a.to(b).is_approx_eq(-b.to(a)));
        assert!((a + a.to(b)).is_approx_eq(b));
    }

    #[test]
    fn scalar_minus_point_is_a_vector() {
        let p = Point2::new(1, 3);
        let v: Vec2<i32> = 10 - p;
        assert_eq!(v, Vec2::new(9, 7));
    }

    #[test]
    fn approx_eq_is_exact_for_ints() {
        assert!(Point2::new(3, 4).is_approx_eq(Point2::new(3, 4)));
        assert!(!Point2::new(0i32, 0).is_approx_eq(Point2::new(i32::MIN, 0)));
    }

    #[test]
    fn distance() {
        let a = Point2::new(0f32, 0.0);
        let b = Point2::new(3f32, 4.0);
        assert_eq!(a.dist(b), 5.0);
        assert_eq!(a.dist_sq(b), 25.0);
    }

    #[test]
    fn origin() {
        assert_eq!(Point2::<i32>::ORIGIN, Point2::new(0, 0));
    }

    #[test]
    fn display() {
        assert_eq!(Point2::new(1, 2).to_string(), "point2(1, 2)");
    }
}
