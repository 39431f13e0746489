use std::ops::*;
use static_assertions::assert_eq_size;

use crate::common::{coord_common, DotProduct, Mask3};
use crate::numeric::*;
use crate::vec::{Vec2, Vec4};

coord_common! {
    doc = "A 3D displacement or direction";
    Vec3, "vec3", Mask3,
    3,
    (T, T, T),
    x => 0, y => 1, z => 2
}
coord_common! { @elementwise_self Vec3, x, y, z }
coord_common! { @scalar Vec3, x, y, z }
coord_common! { @scalar_lhs Vec3, x, y, z }
coord_common! { @neg Vec3, x, y, z }
coord_common! { @len_and_normalize Vec3, x, y, z }
coord_common! { @dot Vec3, Vec3; x => x, y => y, z => z }

assert_eq_size!(Vec3<f32>, [f32; 3]);
assert_eq_size!(Vec3<u8>, [u8; 3]);

impl<T: Numeric> Vec3<T> {
    /// Extend the vector with a w component
    #[inline]
    #[must_use]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Drop the z component
    #[inline]
    #[must_use]
    pub fn shrink(self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }
}

impl<T: Signed + Numeric> Vec3<T> {
    /// Calculate the cross product of 2 vectors
    ///
    /// The cross product `×` has the following properties:
    /// ```text
    /// (u × v) = -(v × u)
    /// (u × u) = 0
    /// ```
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_anticommutes() {
        let a = Vec3::new(1f32, 2.0, 3.0);
        let b = Vec3::new(-4f32, 5.0, 0.5);
        assert!(a.cross(b).is_approx_eq(-b.cross(a)));
        assert!(a.cross(a).is_approx_eq(Vec3::ZERO));
    }

    #[test]
    fn cross_basis() {
        let x = Vec3::new(1f32, 0.0, 0.0);
        let y = Vec3::new(0f32, 1.0, 0.0);
        let z = Vec3::new(0f32, 0.0, 1.0);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
    }

    #[test]
    fn cross_is_orthogonal() {
        let a = Vec3::new(1f32, 2.0, 3.0);
        let b = Vec3::new(4f32, -1.0, 2.0);
        let c = a.cross(b);
        assert!(a.dot(c).is_close_to_zero(1e-6));
        assert!(b.dot(c).is_close_to_zero(1e-6));
    }

    #[test]
    fn magnitude_and_normalize() {
        let v = Vec3::new(2f64, 3.0, 6.0);
        assert_eq!(v.len(), 7.0);
        assert!(v.normalize().is_normalized());
        assert_eq!(Vec3::<f64>::ZERO.normalize_or(v), v);
    }

    #[test]
    fn extend_shrink() {
        let v = Vec3::new(1, 2, 3);
        assert_eq!(v.extend(4), Vec4::new(1, 2, 3, 4));
        assert_eq!(v.shrink(), Vec2::new(1, 2));
    }

    #[test]
    fn display() {
        assert_eq!(Vec3::new(1, 2, 3).to_string(), "vec3(1, 2, 3)");
    }
}
