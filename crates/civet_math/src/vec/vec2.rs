use std::ops::*;
use static_assertions::assert_eq_size;

use crate::common::{coord_common, DotProduct, Mask2};
use crate::numeric::*;
use crate::vec::Vec3;

coord_common! {
    doc = "A 2D displacement or direction";
    Vec2, "vec2", Mask2,
    2,
    (T, T),
    x => 0, y => 1
}
coord_common! { @elementwise_self Vec2, x, y }
coord_common! { @scalar Vec2, x, y }
coord_common! { @scalar_lhs Vec2, x, y }
coord_common! { @neg Vec2, x, y }
coord_common! { @len_and_normalize Vec2, x, y }
coord_common! { @dot Vec2, Vec2; x => x, y => y }

assert_eq_size!(Vec2<f32>, [f32; 2]);
assert_eq_size!(Vec2<u8>, [u8; 2]);

impl<T: Numeric> Vec2<T> {
    /// Extend the vector with a z component
    #[inline]
    #[must_use]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x, self.y, z)
    }
}

impl<T: Signed + Numeric> Vec2<T> {
    /// Calculate the 2D scalar cross product, the z component of the 3D cross
    /// of the two vectors lifted into the plane
    #[must_use]
    pub fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Get the vector rotated a quarter turn counter-clockwise
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_identities() {
        let v = Vec2::new(3f32, -4.0);
        assert!((v - v).is_approx_eq(Vec2::ZERO));
        assert!((v + Vec2::ZERO).is_approx_eq(v));
    }

    #[test]
    fn equality_reflexive_symmetric() {
        let a = Vec2::new(0.1f64 + 0.2, 1.0);
        let b = Vec2::new(0.3f64, 1.0);
        assert!(a.is_approx_eq(a));
        assert!(a.is_approx_eq(b));
        assert!(b.is_approx_eq(a));
    }

    #[test]
    fn dot_commutes() {
        let a = Vec2::new(2f32, -3.0);
        let b = Vec2::new(4f32, 5.0);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.dot(b), -7.0);
    }

    #[test]
    fn scalar_cross() {
        let a = Vec2::new(1f32, 0.0);
        let b = Vec2::new(0f32, 1.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
        assert_eq!(a.cross(a), 0.0);
    }

    #[test]
    fn perpendicular_is_orthogonal() {
        let v = Vec2::new(3f32, 4.0);
        assert_eq!(v.dot(v.perpendicular()), 0.0);
    }

    #[test]
    fn magnitude() {
        let v = Vec2::new(3f32, 4.0);
        assert_eq!(v.len(), 5.0);
        assert!(v.normalize().is_approx_eq(Vec2::new(0.6, 0.8)));
    }

    #[test]
    fn broadcast() {
        let v = Vec2::new(1, 2);
        assert_eq!(v * 3, Vec2::new(3, 6));
        assert_eq!(3 * v, Vec2::new(3, 6));
        assert_eq!(v % 2, Vec2::new(1, 0));
    }

    #[test]
    fn display() {
        assert_eq!(Vec2::new(1, 2).to_string(), "vec2(1, 2)");
    }

    #[test]
    fn extend() {
        assert_eq!(Vec2::new(1, 2).extend(3), Vec3::new(1, 2, 3));
    }
}
