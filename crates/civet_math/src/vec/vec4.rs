use std::ops::*;
use static_assertions::assert_eq_size;

use crate::common::{coord_common, DotProduct, Mask4};
use crate::numeric::*;
use crate::vec::Vec3;

coord_common! {
    doc = "A 4D displacement, or a 3D homogeneous coordinate";
    Vec4, "vec4", Mask4,
    4,
    (T, T, T, T),
    x => 0, y => 1, z => 2, w => 3
}
coord_common! { @elementwise_self Vec4, x, y, z, w }
coord_common! { @scalar Vec4, x, y, z, w }
coord_common! { @scalar_lhs Vec4, x, y, z, w }
coord_common! { @neg Vec4, x, y, z, w }
coord_common! { @len_and_normalize Vec4, x, y, z, w }
coord_common! { @dot Vec4, Vec4; x => x, y => y, z => z, w => w }

assert_eq_size!(Vec4<f32>, [f32; 4]);
assert_eq_size!(Vec4<u8>, [u8; 4]);

impl<T: Numeric> Vec4<T> {
    /// Drop the w component
    #[inline]
    #[must_use]
    pub fn shrink(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_commutes() {
        let a = Vec4::new(1f32, 2.0, 3.0, 4.0);
        let b = Vec4::new(-2f32, 0.5, 1.0, 2.0);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.dot(b), 10.0);
    }

    #[test]
    fn named_and_indexed_views_alias() {
        let mut v = Vec4::new(1, 2, 3, 4);
        v[3] = 9;
        assert_eq!(v.w, 9);
        v.z = 7;
        assert_eq!(v[2], 7);
        assert_eq!(v.as_array(), &[1, 2, 7, 9]);
    }

    #[test]
    fn shrink() {
        assert_eq!(Vec4::new(1, 2, 3, 4).shrink(), Vec3::new(1, 2, 3));
    }

    #[test]
    fn display() {
        assert_eq!(Vec4::new(1, 2, 3, 4).to_string(), "vec4(1, 2, 3, 4)");
    }
}
