use std::fmt::Display;
use std::mem;
use std::ops::*;

use thiserror::Error;

use crate::common::DotProduct;
use crate::numeric::*;
use crate::point::Point3;
use crate::vec::{Vec3, Vec4};

/// The matrix has no inverse
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("matrix is singular, it cannot be inverted")]
pub struct SingularMatrix;

/// 4x4 matrix (row-major storage, column-vector convention: translation lives
/// in column 3 and an affine matrix has `[0, 0, 0, 1]` as its bottom row)
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Mat4<T: Real> {
    vals: [T; 16],
}

impl<T: Real> Mat4<T> {
    pub const ZERO: Self = Self { vals: [T::ZERO; 16] };

    pub const IDENTITY: Self = Self {
        vals: [
            T::ONE, T::ZERO, T::ZERO, T::ZERO,
            T::ZERO, T::ONE, T::ZERO, T::ZERO,
            T::ZERO, T::ZERO, T::ONE, T::ZERO,
            T::ZERO, T::ZERO, T::ZERO, T::ONE,
        ],
    };

    /// Create a new matrix with the given values
    #[inline]
    #[must_use]
    pub fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self { vals: [m00, m01, m02, m03,
                      m10, m11, m12, m13,
                      m20, m21, m22, m23,
                      m30, m31, m32, m33] }
    }

    /// Create a new matrix with the given rows
    #[inline]
    #[must_use]
    pub fn from_rows(row0: Vec4<T>, row1: Vec4<T>, row2: Vec4<T>, row3: Vec4<T>) -> Self {
        Self { vals: [row0.x, row0.y, row0.z, row0.w,
                      row1.x, row1.y, row1.z, row1.w,
                      row2.x, row2.y, row2.z, row2.w,
                      row3.x, row3.y, row3.z, row3.w] }
    }

    /// Create a new matrix with the given columns
    #[inline]
    #[must_use]
    pub fn from_columns(column0: Vec4<T>, column1: Vec4<T>, column2: Vec4<T>, column3: Vec4<T>) -> Self {
        Self { vals: [column0.x, column1.x, column2.x, column3.x,
                      column0.y, column1.y, column2.y, column3.y,
                      column0.z, column1.z, column2.z, column3.z,
                      column0.w, column1.w, column2.w, column3.w] }
    }

    /// Create a matrix from an array
    #[inline(always)]
    #[must_use]
    pub fn from_array(vals: [T; 16]) -> Self {
        Self { vals }
    }

    /// Get the content of the matrix as an array
    #[inline(always)]
    #[must_use]
    pub fn to_array(self) -> [T; 16] {
        self.vals
    }

    /// Get a reference to the matrix as an array
    #[inline(always)]
    #[must_use]
    pub fn as_array(&self) -> &[T; 16] {
        unsafe { mem::transmute(self) }
    }

    /// Create a 3D scale matrix
    #[must_use]
    pub fn create_scale(scale: Vec3<T>) -> Self {
        let zero = T::ZERO;
        let one = T::ONE;

        Self { vals: [scale.x, zero   , zero   , zero,
                      zero   , scale.y, zero   , zero,
                      zero   , zero   , scale.z, zero,
                      zero   , zero   , zero   , one ] }
    }

    /// Create a 3D translation matrix
    #[must_use]
    pub fn create_translation(trans: Vec3<T>) -> Self {
        let zero = T::ZERO;
        let one = T::ONE;

        Self { vals: [one , zero, zero, trans.x,
                      zero, one , zero, trans.y,
                      zero, zero, one , trans.z,
                      zero, zero, zero, one    ] }
    }

    //--------------------------------------------------------------

    /// Get the row at the given index
    #[inline]
    #[must_use]
    pub fn row(self, index: usize) -> Vec4<T> {
        debug_assert!(index < 4);
        let idx = index * 4;
        Vec4::new(self.vals[idx], self.vals[idx + 1], self.vals[idx + 2], self.vals[idx + 3])
    }

    /// Set the row at the given index
    #[inline]
    pub fn set_row(&mut self, index: usize, row: Vec4<T>) {
        debug_assert!(index < 4);
        let idx = index * 4;
        self.vals[idx] = row.x;
        self.vals[idx + 1] = row.y;
        self.vals[idx + 2] = row.z;
        self.vals[idx + 3] = row.w;
    }

    /// Get the column at the given index
    #[inline]
    #[must_use]
    pub fn column(self, index: usize) -> Vec4<T> {
        debug_assert!(index < 4);
        Vec4::new(self.vals[index], self.vals[index + 4], self.vals[index + 8], self.vals[index + 12])
    }

    /// Set the column at the given index
    #[inline]
    pub fn set_column(&mut self, index: usize, column: Vec4<T>) {
        debug_assert!(index < 4);
        self.vals[index] = column.x;
        self.vals[index + 4] = column.y;
        self.vals[index + 8] = column.z;
        self.vals[index + 12] = column.w;
    }

    /// Get the diagonal
    #[inline]
    #[must_use]
    pub fn diagonal(self) -> Vec4<T> {
        Vec4 { x: self.vals[0], y: self.vals[5], z: self.vals[10], w: self.vals[15] }
    }

    //--------------------------------------------------------------

    /// Calculate the trace
    #[inline]
    #[must_use]
    pub fn trace(self) -> T {
        self[0] + self[5] + self[10] + self[15]
    }

    /// Transpose the matrix
    #[inline]
    #[must_use]
    pub fn transpose(self) -> Self {
        Self { vals: [self[0], self[4], self[ 8], self[12],
                      self[1], self[5], self[ 9], self[13],
                      self[2], self[6], self[10], self[14],
                      self[3], self[7], self[11], self[15]] }
    }

    /// Calculate the determinant
    #[must_use]
    pub fn determinant(self) -> T {
        let minor0_det = self[5] * (self[10] * self[15] - self[11] * self[14]) - self[6] * (self[9] * self[15] - self[11] * self[13]) + self[7] * (self[9] * self[14] - self[10] * self[13]);
        let minor1_det = self[4] * (self[10] * self[15] - self[11] * self[14]) - self[6] * (self[8] * self[15] - self[11] * self[12]) + self[7] * (self[8] * self[14] - self[10] * self[12]);
        let minor2_det = self[4] * (self[ 9] * self[15] - self[11] * self[13]) - self[5] * (self[8] * self[15] - self[11] * self[12]) + self[7] * (self[8] * self[13] - self[ 9] * self[12]);
        let minor3_det = self[4] * (self[ 9] * self[14] - self[10] * self[13]) - self[5] * (self[8] * self[14] - self[10] * self[12]) + self[6] * (self[8] * self[13] - self[ 9] * self[12]);

        self[0] * minor0_det - self[1] * minor1_det + self[2] * minor2_det - self[3] * minor3_det
    }

    /// Calculate the adjugate (transposed cofactor matrix)
    #[must_use]
    pub fn adjugate(self) -> Self {
        let tmp00 = self[5] * (self[10] * self[15] - self[11] * self[14]) - self[6] * (self[9] * self[15] - self[11] * self[13]) + self[7] * (self[9] * self[14] - self[10] * self[13]);
        let tmp01 = self[4] * (self[10] * self[15] - self[11] * self[14]) - self[6] * (self[8] * self[15] - self[11] * self[12]) + self[7] * (self[8] * self[14] - self[10] * self[12]);
        let tmp02 = self[4] * (self[ 9] * self[15] - self[11] * self[13]) - self[5] * (self[8] * self[15] - self[11] * self[12]) + self[7] * (self[8] * self[13] - self[ 9] * self[12]);
        let tmp03 = self[4] * (self[ 9] * self[14] - self[10] * self[13]) - self[5] * (self[8] * self[14] - self[10] * self[12]) + self[6] * (self[8] * self[13] - self[ 9] * self[12]);

        let tmp10 = self[1] * (self[10] * self[15] - self[11] * self[14]) - self[2] * (self[9] * self[15] - self[11] * self[13]) + self[3] * (self[9] * self[14] - self[10] * self[13]);
        let tmp11 = self[0] * (self[10] * self[15] - self[11] * self[14]) - self[2] * (self[8] * self[15] - self[11] * self[12]) + self[3] * (self[8] * self[14] - self[10] * self[12]);
        let tmp12 = self[0] * (self[ 9] * self[15] - self[11] * self[13]) - self[1] * (self[8] * self[15] - self[11] * self[12]) + self[3] * (self[8] * self[13] - self[ 9] * self[12]);
        let tmp13 = self[0] * (self[ 9] * self[14] - self[10] * self[13]) - self[1] * (self[8] * self[14] - self[10] * self[12]) + self[2] * (self[8] * self[13] - self[ 9] * self[12]);

        let tmp20 = self[1] * (self[ 6] * self[15] - self[ 7] * self[14]) - self[2] * (self[5] * self[15] - self[ 7] * self[13]) + self[3] * (self[5] * self[14] - self[ 6] * self[13]);
        let tmp21 = self[0] * (self[ 6] * self[15] - self[ 7] * self[14]) - self[2] * (self[4] * self[15] - self[ 7] * self[12]) + self[3] * (self[4] * self[14] - self[ 6] * self[12]);
        let tmp22 = self[0] * (self[ 5] * self[15] - self[ 7] * self[13]) - self[1] * (self[4] * self[15] - self[ 7] * self[12]) + self[3] * (self[4] * self[13] - self[ 5] * self[12]);
        let tmp23 = self[0] * (self[ 5] * self[14] - self[ 6] * self[13]) - self[1] * (self[4] * self[14] - self[ 6] * self[12]) + self[2] * (self[4] * self[13] - self[ 5] * self[12]);

        let tmp30 = self[1] * (self[ 6] * self[11] - self[ 7] * self[10]) - self[2] * (self[5] * self[11] - self[ 7] * self[ 9]) + self[3] * (self[5] * self[10] - self[ 6] * self[ 9]);
        let tmp31 = self[0] * (self[ 6] * self[11] - self[ 7] * self[10]) - self[2] * (self[4] * self[11] - self[ 7] * self[ 8]) + self[3] * (self[4] * self[10] - self[ 6] * self[ 8]);
        let tmp32 = self[0] * (self[ 5] * self[11] - self[ 7] * self[ 9]) - self[1] * (self[4] * self[11] - self[ 7] * self[ 8]) + self[3] * (self[4] * self[ 9] - self[ 5] * self[ 8]);
        let tmp33 = self[0] * (self[ 5] * self[10] - self[ 6] * self[ 9]) - self[1] * (self[4] * self[10] - self[ 6] * self[ 8]) + self[2] * (self[4] * self[ 9] - self[ 5] * self[ 8]);

        Self { vals: [ tmp00, -tmp10,  tmp20, -tmp30,
                      -tmp01,  tmp11, -tmp21,  tmp31,
                       tmp02, -tmp12,  tmp22, -tmp32,
                      -tmp03,  tmp13, -tmp23,  tmp33] }
    }

    /// Calculate the inverse
    pub fn inverse(self) -> Result<Self, SingularMatrix> {
        let det = self.determinant();
        if det.is_zero() {
            Err(SingularMatrix)
        } else {
            Ok(self.adjugate() * det.rcp())
        }
    }

    /// Invert the matrix in place
    pub fn invert(&mut self) -> Result<(), SingularMatrix> {
        *self = self.inverse()?;
        Ok(())
    }

    //--------------------------------------------------------------

    /// Check that the bottom row is exactly `[0, 0, 0, 1]`, a structural
    /// property checked bit-exact rather than with an epsilon
    #[must_use]
    pub fn is_affine(self) -> bool {
        self[12] == T::ZERO && self[13] == T::ZERO && self[14] == T::ZERO && self[15] == T::ONE
    }

    /// Scale the transform in place
    pub fn scale(&mut self, x: T, y: T, z: T) {
        for row in 0..4 {
            let idx = row * 4;
            self.vals[idx] *= x;
            self.vals[idx + 1] *= y;
            self.vals[idx + 2] *= z;
        }
    }

    /// Translate the transform in place
    pub fn translate(&mut self, x: T, y: T, z: T) {
        let shift = self.column(0) * x + self.column(1) * y + self.column(2) * z + self.column(3);
        self.set_column(3, shift);
    }

    //--------------------------------------------------------------

    /// Transform a `Vec4`
    #[must_use]
    pub fn transform(self, vec: Vec4<T>) -> Vec4<T> {
        Vec4::new(
            self.row(0).dot(vec),
            self.row(1).dot(vec),
            self.row(2).dot(vec),
            self.row(3).dot(vec),
        )
    }

    /// Transform a point into this matrix's coordinate frame, through the
    /// homogeneous extension and back
    #[must_use]
    pub fn to_local(self, p: Point3<T>) -> Point3<T> {
        let h = self.transform(Vec4::new(p.x, p.y, p.z, T::ONE));
        debug_assert!(!h.w.is_zero());
        Point3::new(h.x / h.w, h.y / h.w, h.z / h.w)
    }

    /// Transform a point out of this matrix's coordinate frame
    pub fn to_global(self, p: Point3<T>) -> Result<Point3<T>, SingularMatrix> {
        Ok(self.inverse()?.to_local(p))
    }
}

//--------------------------------------------------------------

impl<T: Real> Index<usize> for Mat4<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.vals[index]
    }
}

impl<T: Real> IndexMut<usize> for Mat4<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.vals[index]
    }
}

impl<T: Real> Mul for Mat4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let row0 = self.row(0);
        let row1 = self.row(1);
        let row2 = self.row(2);
        let row3 = self.row(3);

        let column0 = rhs.column(0);
        let column1 = rhs.column(1);
        let column2 = rhs.column(2);
        let column3 = rhs.column(3);

        Self { vals: [row0.dot(column0), row0.dot(column1), row0.dot(column2), row0.dot(column3),
                      row1.dot(column0), row1.dot(column1), row1.dot(column2), row1.dot(column3),
                      row2.dot(column0), row2.dot(column1), row2.dot(column2), row2.dot(column3),
                      row3.dot(column0), row3.dot(column1), row3.dot(column2), row3.dot(column3)] }
    }
}

impl<T: Real> MulAssign for Mat4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Mul<T> for Mat4<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        for val in self.vals.iter_mut() {
            *val *= rhs;
        }
        self
    }
}

impl<T: Real> ApproxEq<T> for Mat4<T> {
    const EPSILON: T = <T as ApproxEq>::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.vals
            .iter()
            .zip(rhs.vals.iter())
            .all(|(a, b)| a.is_close_to(*b, epsilon))
    }
}

impl<T: Real + Display> Display for Mat4<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[[{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}]]",
                    self[ 0], self[ 1], self[ 2], self[ 3],
                    self[ 4], self[ 5], self[ 6], self[ 7],
                    self[ 8], self[ 9], self[10], self[11],
                    self[12], self[13], self[14], self[15]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Mat4<f64> {
        Mat4::new(
            2.0, 0.0, 0.0, 1.0,
            0.0, 3.0, 1.0, -2.0,
            1.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    #[test]
    fn identity_is_neutral() {
        let m = sample();
        assert!((Mat4::IDENTITY * m).is_approx_eq(m));
        assert!((m * Mat4::IDENTITY).is_approx_eq(m));
        assert_eq!(Mat4::<f64>::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn rows_and_columns() {
        let m = sample();
        assert_eq!(m.row(1), Vec4::new(0.0, 3.0, 1.0, -2.0));
        assert_eq!(m.column(3), Vec4::new(1.0, -2.0, 0.0, 1.0));
        assert_eq!(m.diagonal(), Vec4::new(2.0, 3.0, 1.0, 1.0));
        assert_eq!(m.trace(), 7.0);

        let mut m = m;
        m.set_row(3, Vec4::new(0.0, 0.0, 0.0, 2.0));
        assert!(!m.is_affine());
    }

    #[test]
    fn transpose_round_trips() {
        let m = sample();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().row(0), m.column(0));
    }

    #[test]
    fn determinant_of_scale() {
        let m = Mat4::create_scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m.determinant(), 24.0);
        assert_eq!(sample().determinant(), 6.0);
    }

    #[test]
    fn inverse_round_trips() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert!((m * inv).is_close_to(Mat4::IDENTITY, 1e-12));
        assert!((inv * m).is_close_to(Mat4::IDENTITY, 1e-12));

        let mut m2 = m;
        m2.invert().unwrap();
        m2.invert().unwrap();
        assert!(m2.is_close_to(m, 1e-12));
    }

    #[test]
    fn singular_inverse_fails() {
        let mut m = sample();
        m.set_row(2, Vec4::ZERO);
        assert_eq!(m.inverse(), Err(SingularMatrix));
        assert_eq!(Mat4::<f64>::ZERO.inverse(), Err(SingularMatrix));
    }

    #[test]
    fn affine_check_is_exact() {
        assert!(Mat4::<f64>::IDENTITY.is_affine());
        assert!(sample().is_affine());
        let mut m = sample();
        m[12] = 1e-30;
        assert!(!m.is_affine());
    }

    #[test]
    fn scale_translate_in_place() {
        let mut m = Mat4::<f64>::IDENTITY;
        m.scale(2.0, 3.0, 4.0);
        assert!(m.is_approx_eq(Mat4::create_scale(Vec3::new(2.0, 3.0, 4.0))));

        m.translate(1.0, 1.0, 1.0);
        // scale applies after the translation, column-vector order
        let p = m.to_local(Point3::new(0.0, 0.0, 0.0));
        assert!(p.is_approx_eq(Point3::new(2.0, 3.0, 4.0)));
    }

    #[test]
    fn point_transforms() {
        let m = Mat4::create_translation(Vec3::new(1.0, 2.0, 3.0));
        let p = Point3::new(1.0, 1.0, 1.0);

        let local = m.to_local(p);
        assert!(local.is_approx_eq(Point3::new(2.0, 3.0, 4.0)));

        let back = m.to_global(local).unwrap();
        assert!(back.is_approx_eq(p));
    }

    #[test]
    fn composition_matches_nested_transform() {
        let a = Mat4::create_translation(Vec3::new(1.0, 0.0, 0.0));
        let b = Mat4::create_scale(Vec3::new(2.0, 2.0, 2.0));
        let p = Point3::new(1.0, 1.0, 1.0);

        let composed = (a * b).to_local(p);
        let nested = a.to_local(b.to_local(p));
        assert!(composed.is_approx_eq(nested));
        assert!(composed.is_approx_eq(Point3::new(3.0, 2.0, 2.0)));
    }

    #[test]
    fn display() {
        let d = Mat4::<f64>::IDENTITY.to_string();
        assert!(d.starts_with("[[1, 0, 0, 0], "));
    }
}
