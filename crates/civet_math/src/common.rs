/// A trait to calculate the dot product of 2 elements
pub trait DotProduct<U: Copy>: Copy {
    type Output;

    /// Calculate the dot product between 2 elements
    ///
    /// The dot product `⋅` has the following properties:
    /// ```text
    ///       (u ⋅ v) = (v ⋅ u)
    ///      (su ⋅ v) = s(u ⋅ v)
    /// (u ⋅ (v + w)) = (u ⋅ v) + (u ⋅ w)
    /// ```
    fn dot(self, rhs: U) -> Self::Output;
}

/// Per-component boolean mask, the result of a relational comparison
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Mask2 {
    pub x: bool,
    pub y: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Mask3 {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Mask4 {
    pub x: bool,
    pub y: bool,
    pub z: bool,
    pub w: bool,
}

macro_rules! impl_mask {
    {$iden:ident, $($comp:ident),+} => {
        impl $iden {
            #[inline(always)]
            #[must_use]
            pub const fn new($($comp: bool),+) -> Self {
                Self { $($comp),+ }
            }

            /// Check if any component is set
            #[inline]
            #[must_use]
            pub fn any(self) -> bool {
                $(self.$comp)||+
            }

            /// Check if all components are set
            #[inline]
            #[must_use]
            pub fn all(self) -> bool {
                $(self.$comp)&&+
            }

            /// Check if no component is set
            #[inline]
            #[must_use]
            pub fn none(self) -> bool {
                !self.any()
            }
        }
    };
}
impl_mask! {Mask2, x, y}
impl_mask! {Mask3, x, y, z}
impl_mask! {Mask4, x, y, z, w}

/// Shared implementation arms for the coordinate kinds.
///
/// The main arm generates the struct itself plus everything every kind has
/// (construction, array/tuple views, indexing, comparison, casts, Display).
/// The op arms are invoked per kind pair; a pair without an invocation has
/// no operator impl, so an unsupported combination is rejected by the
/// compiler rather than at runtime.
macro_rules! coord_common {
    (
        $docs:meta;
        $iden:ident, $prefix:literal, $mask:ident,
        $elem_cnt:literal,
        $tup_ty:ty,
        $($comp:ident => $idx:tt),+
        $(; assert $guard:ident)?
    ) => {
        #[$docs]
        #[derive(Clone, Copy, PartialEq, Debug)]
        #[repr(C)]
        pub struct $iden<T: Numeric> {
            $(pub $comp: T),+
        }

        impl<T: Numeric> $iden<T> {
            #[doc = concat!("Create a new ", stringify!($iden), ".")]
            #[inline(always)]
            #[must_use]
            pub fn new($($comp: T),+) -> Self {
                let res = Self { $($comp),+ };
                $(debug_assert!(res.$guard());)?
                res
            }

            #[doc = concat!("Create a ", stringify!($iden), " with all components set to `val`.")]
            #[inline(always)]
            #[must_use]
            pub fn set(val: T) -> Self {
                let res = Self { $($comp: val),+ };
                $(debug_assert!(res.$guard());)?
                res
            }

            //--------------------------------------------------------------

            #[doc = concat!("Create a ", stringify!($iden), " from an array.")]
            #[inline(always)]
            #[must_use]
            pub fn from_array(arr: [T; $elem_cnt]) -> Self {
                let res = Self { $($comp: arr[$idx]),+ };
                $(debug_assert!(res.$guard());)?
                res
            }

            #[doc = concat!("Create a reference to a ", stringify!($iden), " from a reference to an array.")]
            #[inline(always)]
            #[must_use]
            pub fn ref_from_array(arr: &[T; $elem_cnt]) -> &Self {
                unsafe { std::mem::transmute(arr) }
            }

            #[doc = concat!("Create a mutable reference to a ", stringify!($iden), " from a mutable reference to an array.")]
            #[inline(always)]
            #[must_use]
            pub fn mut_ref_from_array(arr: &mut [T; $elem_cnt]) -> &mut Self {
                unsafe { std::mem::transmute(arr) }
            }

            #[doc = concat!("Create a ", stringify!($iden), " from a tuple.")]
            #[inline(always)]
            #[must_use]
            pub fn from_tuple(tup: $tup_ty) -> Self {
                let res = Self { $($comp: tup.$idx),+ };
                $(debug_assert!(res.$guard());)?
                res
            }

            //--------------------------------------------------------------

            #[doc = concat!("Get the contents of the ", stringify!($iden), " as an array.")]
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $elem_cnt] {
                [$(self.$comp),+]
            }

            #[doc = concat!("Get a reference to the ", stringify!($iden), " as an array.")]
            #[inline(always)]
            #[must_use]
            pub fn as_array(&self) -> &[T; $elem_cnt] {
                unsafe { std::mem::transmute(self) }
            }

            #[doc = concat!("Get a mutable reference to the ", stringify!($iden), " as an array.")]
            #[inline(always)]
            #[must_use]
            pub fn as_mut_array(&mut self) -> &mut [T; $elem_cnt] {
                unsafe { std::mem::transmute(self) }
            }

            #[doc = concat!("Get the contents of the ", stringify!($iden), " as a tuple.")]
            #[inline(always)]
            #[must_use]
            pub fn to_tuple(self) -> $tup_ty {
                ($(self.$comp),+)
            }

            //--------------------------------------------------------------

            /// Get the minimum of 2 values, component-wise
            #[must_use]
            pub fn min(self, rhs: Self) -> Self {
                Self { $($comp: self.$comp.min(rhs.$comp)),+ }
            }

            /// Get the maximum of 2 values, component-wise
            #[must_use]
            pub fn max(self, rhs: Self) -> Self {
                Self { $($comp: self.$comp.max(rhs.$comp)),+ }
            }

            /// Clamp component-wise between 2 values
            #[must_use]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self { $($comp: self.$comp.clamp(min.$comp, max.$comp)),+ }
            }

            /// Clamp all components between 2 scalars
            #[must_use]
            pub fn clamp_scalar(self, min: T, max: T) -> Self {
                Self { $($comp: self.$comp.clamp(min, max)),+ }
            }

            /// Get the absolute value, component-wise
            #[must_use]
            pub fn abs(self) -> Self {
                Self { $($comp: self.$comp.abs()),+ }
            }

            /// Linearly interpolate between 2 values
            #[must_use]
            pub fn lerp(self, other: Self, interp: T) -> Self {
                Self { $($comp: self.$comp.lerp(other.$comp, interp)),+ }
            }

            /// Get the minimum component
            #[must_use]
            pub fn min_component(self) -> T {
                coord_common!(@fold_min self, $($comp),+)
            }

            /// Get the maximum component
            #[must_use]
            pub fn max_component(self) -> T {
                coord_common!(@fold_max self, $($comp),+)
            }

            //--------------------------------------------------------------

            /// Compare component-wise with `<`
            #[must_use]
            pub fn cmp_lt(self, rhs: Self) -> $mask {
                $mask::new($(self.$comp < rhs.$comp),+)
            }

            /// Compare component-wise with `<=`
            #[must_use]
            pub fn cmp_le(self, rhs: Self) -> $mask {
                $mask::new($(self.$comp <= rhs.$comp),+)
            }

            /// Compare component-wise with `>`
            #[must_use]
            pub fn cmp_gt(self, rhs: Self) -> $mask {
                $mask::new($(self.$comp > rhs.$comp),+)
            }

            /// Compare component-wise with `>=`
            #[must_use]
            pub fn cmp_ge(self, rhs: Self) -> $mask {
                $mask::new($(self.$comp >= rhs.$comp),+)
            }
        }

        impl<T: Real> $iden<T> {
            /// Round all components to the nearest integer
            #[must_use]
            pub fn round(self) -> Self {
                Self { $($comp: self.$comp.round()),+ }
            }

            /// Get the ceil of all components
            #[must_use]
            pub fn ceil(self) -> Self {
                Self { $($comp: self.$comp.ceil()),+ }
            }

            /// Get the floor of all components
            #[must_use]
            pub fn floor(self) -> Self {
                Self { $($comp: self.$comp.floor()),+ }
            }

            /// Get the fractional part of all components
            #[must_use]
            pub fn fract(self) -> Self {
                Self { $($comp: self.$comp.fract()),+ }
            }

            /// Get the integral part of all components
            #[must_use]
            pub fn trunc(self) -> Self {
                Self { $($comp: self.$comp.trunc()),+ }
            }
        }

        //--------------------------------------------------------------

        impl<T: Numeric> From<[T; $elem_cnt]> for $iden<T> {
            fn from(arr: [T; $elem_cnt]) -> Self {
                Self::from_array(arr)
            }
        }

        impl<T: Numeric> From<$iden<T>> for [T; $elem_cnt] {
            fn from(val: $iden<T>) -> Self {
                val.to_array()
            }
        }

        impl<T: Numeric> From<$tup_ty> for $iden<T> {
            fn from(tup: $tup_ty) -> Self {
                Self::from_tuple(tup)
            }
        }

        impl<T: Numeric> From<$iden<T>> for $tup_ty {
            fn from(val: $iden<T>) -> $tup_ty {
                val.to_tuple()
            }
        }

        //--------------------------------------------------------------

        impl<T: Numeric> Index<usize> for $iden<T> {
            type Output = T;

            fn index(&self, index: usize) -> &Self::Output {
                debug_assert!(index < $elem_cnt);
                &self.as_array()[index]
            }
        }

        impl<T: Numeric> IndexMut<usize> for $iden<T> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                debug_assert!(index < $elem_cnt);
                &mut self.as_mut_array()[index]
            }
        }

        impl<T: Numeric> Zero for $iden<T> {
            const ZERO: Self = Self { $($comp: T::ZERO),+ };
        }

        impl<T: Numeric> One for $iden<T> {
            const ONE: Self = Self { $($comp: T::ONE),+ };
        }

        //--------------------------------------------------------------

        impl<T: Numeric> ApproxEq<T> for $iden<T> {
            const EPSILON: T = <T as ApproxEq>::EPSILON;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                $(self.$comp.is_close_to(rhs.$comp, epsilon))&&+
            }
        }

        impl<T: Numeric> ApproxZero<T> for $iden<T> {
            const ZERO_EPSILON: T = <T as ApproxZero>::ZERO_EPSILON;

            fn is_close_to_zero(self, epsilon: T) -> bool {
                $(self.$comp.is_close_to_zero(epsilon))&&+
            }
        }

        //--------------------------------------------------------------

        impl<T: Numeric + NumericCast<U>, U: Numeric> NumericCast<$iden<U>> for $iden<T> {
            fn cast(self) -> $iden<U> {
                $iden { $($comp: self.$comp.cast()),+ }
            }
        }

        //--------------------------------------------------------------

        impl<T: Numeric + std::fmt::Display> std::fmt::Display for $iden<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(concat!($prefix, "("))?;
                for (i, comp) in self.as_array().iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    std::fmt::Display::fmt(comp, f)?;
                }
                f.write_str(")")
            }
        }
    };
    (@fold_min $self:expr, $comp0:ident $(, $comp:ident)*) => {
        $self.$comp0 $(.min($self.$comp))*
    };
    (@fold_max $self:expr, $comp0:ident $(, $comp:ident)*) => {
        $self.$comp0 $(.max($self.$comp))*
    };
    // K op K -> K for all elementwise operators, plus compound assignment
    (@elementwise_self $iden:ident, $($comp:ident),+) => {
        coord_common!{ @elementwise_other $iden, $iden; $($comp => $comp),+ }
    };
    // K op O -> K elementwise, plus compound assignment (O maps onto K positionally)
    (@elementwise_other $iden:ident, $other:ident; $($comp:ident => $ocomp:ident),+) => {
        impl<T: Numeric> Add<$other<T>> for $iden<T> {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: $other<T>) -> Self {
                Self { $($comp: self.$comp + rhs.$ocomp),+ }
            }
        }

        impl<T: Numeric> AddAssign<$other<T>> for $iden<T> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: $other<T>) {
                $(self.$comp += rhs.$ocomp);+
            }
        }

        impl<T: Numeric> Sub<$other<T>> for $iden<T> {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: $other<T>) -> Self {
                Self { $($comp: self.$comp - rhs.$ocomp),+ }
            }
        }

        impl<T: Numeric> SubAssign<$other<T>> for $iden<T> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: $other<T>) {
                $(self.$comp -= rhs.$ocomp);+
            }
        }

        impl<T: Numeric> Mul<$other<T>> for $iden<T> {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: $other<T>) -> Self {
                Self { $($comp: self.$comp * rhs.$ocomp),+ }
            }
        }

        impl<T: Numeric> MulAssign<$other<T>> for $iden<T> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: $other<T>) {
                $(self.$comp *= rhs.$ocomp);+
            }
        }

        impl<T: Numeric> Div<$other<T>> for $iden<T> {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: $other<T>) -> Self {
                Self { $($comp: self.$comp / rhs.$ocomp),+ }
            }
        }

        impl<T: Numeric> DivAssign<$other<T>> for $iden<T> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: $other<T>) {
                $(self.$comp /= rhs.$ocomp);+
            }
        }

        impl<T: Numeric> Rem<$other<T>> for $iden<T> {
            type Output = Self;

            #[inline(always)]
            fn rem(self, rhs: $other<T>) -> Self {
                Self { $($comp: self.$comp % rhs.$ocomp),+ }
            }
        }

        impl<T: Numeric> RemAssign<$other<T>> for $iden<T> {
            #[inline(always)]
            fn rem_assign(&mut self, rhs: $other<T>) {
                $(self.$comp %= rhs.$ocomp);+
            }
        }
    };
    // L op O -> O (the result kind is the right operand's kind, no assignment)
    (@flipped $lhs:ident, $out:ident; $($lcomp:ident => $ocomp:ident),+) => {
        impl<T: Numeric> Add<$out<T>> for $lhs<T> {
            type Output = $out<T>;

            #[inline(always)]
            fn add(self, rhs: $out<T>) -> $out<T> {
                $out { $($ocomp: self.$lcomp + rhs.$ocomp),+ }
            }
        }

        impl<T: Numeric> Mul<$out<T>> for $lhs<T> {
            type Output = $out<T>;

            #[inline(always)]
            fn mul(self, rhs: $out<T>) -> $out<T> {
                $out { $($ocomp: self.$lcomp * rhs.$ocomp),+ }
            }
        }
    };
    // L - L -> O (displacement; components share names)
    (@sub_to $lhs:ident, $out:ident; $($comp:ident),+) => {
        impl<T: Numeric> Sub for $lhs<T> {
            type Output = $out<T>;

            #[inline(always)]
            fn sub(self, rhs: Self) -> $out<T> {
                $out { $($comp: self.$comp - rhs.$comp),+ }
            }
        }
    };
    // K op scalar broadcast, plus compound assignment
    (@scalar $iden:ident, $($comp:ident),+) => {
        impl<T: Numeric> Add<T> for $iden<T> {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: T) -> Self {
                Self { $($comp: self.$comp + rhs),+ }
            }
        }

        impl<T: Numeric> AddAssign<T> for $iden<T> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: T) {
                $(self.$comp += rhs);+
            }
        }

        impl<T: Numeric> Sub<T> for $iden<T> {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: T) -> Self {
                Self { $($comp: self.$comp - rhs),+ }
            }
        }

        impl<T: Numeric> SubAssign<T> for $iden<T> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: T) {
                $(self.$comp -= rhs);+
            }
        }

        impl<T: Numeric> Mul<T> for $iden<T> {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: T) -> Self {
                Self { $($comp: self.$comp * rhs),+ }
            }
        }

        impl<T: Numeric> MulAssign<T> for $iden<T> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$comp *= rhs);+
            }
        }

        impl<T: Numeric> Div<T> for $iden<T> {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: T) -> Self {
                Self { $($comp: self.$comp / rhs),+ }
            }
        }

        impl<T: Numeric> DivAssign<T> for $iden<T> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: T) {
                $(self.$comp /= rhs);+
            }
        }

        impl<T: Numeric> Rem<T> for $iden<T> {
            type Output = Self;

            #[inline(always)]
            fn rem(self, rhs: T) -> Self {
                Self { $($comp: self.$comp % rhs),+ }
            }
        }

        impl<T: Numeric> RemAssign<T> for $iden<T> {
            #[inline(always)]
            fn rem_assign(&mut self, rhs: T) {
                $(self.$comp %= rhs);+
            }
        }
    };
    // scalar op K -> K, per concrete scalar type
    (@scalar_lhs $iden:ident, $($comp:ident),+) => {
        coord_common!{ @scalar_lhs_one $iden, i8,  $($comp),+ }
        coord_common!{ @scalar_lhs_one $iden, i16, $($comp),+ }
        coord_common!{ @scalar_lhs_one $iden, i32, $($comp),+ }
        coord_common!{ @scalar_lhs_one $iden, i64, $($comp),+ }
        coord_common!{ @scalar_lhs_one $iden, u8,  $($comp),+ }
        coord_common!{ @scalar_lhs_one $iden, u16, $($comp),+ }
        coord_common!{ @scalar_lhs_one $iden, u32, $($comp),+ }
        coord_common!{ @scalar_lhs_one $iden, u64, $($comp),+ }
        coord_common!{ @scalar_lhs_one $iden, f32, $($comp),+ }
        coord_common!{ @scalar_lhs_one $iden, f64, $($comp),+ }
    };
    (@scalar_lhs_one $iden:ident, $ty:ty, $($comp:ident),+) => {
        impl Add<$iden<$ty>> for $ty {
            type Output = $iden<$ty>;

            #[inline(always)]
            fn add(self, rhs: $iden<$ty>) -> $iden<$ty> {
                $iden { $($comp: self + rhs.$comp),+ }
            }
        }

        impl Mul<$iden<$ty>> for $ty {
            type Output = $iden<$ty>;

            #[inline(always)]
            fn mul(self, rhs: $iden<$ty>) -> $iden<$ty> {
                $iden { $($comp: self * rhs.$comp),+ }
            }
        }
    };
    // scalar - K -> O, per concrete scalar type (the scalar broadcasts first)
    (@scalar_sub_to $rhs_kind:ident, $out:ident; $($comp:ident),+) => {
        coord_common!{ @scalar_sub_to_one $rhs_kind, $out, i8;  $($comp),+ }
        coord_common!{ @scalar_sub_to_one $rhs_kind, $out, i16; $($comp),+ }
        coord_common!{ @scalar_sub_to_one $rhs_kind, $out, i32; $($comp),+ }
        coord_common!{ @scalar_sub_to_one $rhs_kind, $out, i64; $($comp),+ }
        coord_common!{ @scalar_sub_to_one $rhs_kind, $out, u8;  $($comp),+ }
        coord_common!{ @scalar_sub_to_one $rhs_kind, $out, u16; $($comp),+ }
        coord_common!{ @scalar_sub_to_one $rhs_kind, $out, u32; $($comp),+ }
        coord_common!{ @scalar_sub_to_one $rhs_kind, $out, u64; $($comp),+ }
        coord_common!{ @scalar_sub_to_one $rhs_kind, $out, f32; $($comp),+ }
        coord_common!{ @scalar_sub_to_one $rhs_kind, $out, f64; $($comp),+ }
    };
    (@scalar_sub_to_one $rhs_kind:ident, $out:ident, $ty:ty; $($comp:ident),+) => {
        impl Sub<$rhs_kind<$ty>> for $ty {
            type Output = $out<$ty>;

            #[inline(always)]
            fn sub(self, rhs: $rhs_kind<$ty>) -> $out<$ty> {
                $out { $($comp: self - rhs.$comp),+ }
            }
        }
    };
    // negation for signed element types
    (@neg $iden:ident, $($comp:ident),+) => {
        impl<T: Numeric + Signed> Neg for $iden<T> {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self { $($comp: -self.$comp),+ }
            }
        }
    };
    // Euclidean length and normalization
    (@len_and_normalize $iden:ident, $($comp:ident),+) => {
        impl<T: Numeric> $iden<T> {
            #[doc = concat!("Calculate the square of the length of the `", stringify!($iden), "`.")]
            #[must_use]
            pub fn len_sq(self) -> T {
                $crate::utils::strip_plus!($(+ self.$comp * self.$comp)+)
            }

            #[doc = concat!("Calculate the length of the `", stringify!($iden), "`.")]
            #[must_use]
            pub fn len(self) -> T {
                self.len_sq().sqrt()
            }
        }

        impl<T: Real> $iden<T> {
            /// Get a normalized version of the value.
            ///
            /// A zero length is a precondition violation; the release build
            /// produces a NaN-filled result the caller has to detect.
            #[must_use]
            pub fn normalize(self) -> Self {
                debug_assert!(!self.len_sq().is_zero());
                self * self.len_sq().rsqrt()
            }

            /// Normalize the value if the length is not 0, return `or` otherwise.
            #[must_use]
            pub fn normalize_or(self, or: Self) -> Self {
                if self.len_sq().is_zero() {
                    or
                } else {
                    self.normalize()
                }
            }

            /// Check if the length is close to 1, given an epsilon
            pub fn is_close_to_normalized(self, epsilon: T) -> bool {
                self.len_sq().is_close_to(T::ONE, epsilon)
            }

            /// Check if the length is close to 1, using the machine epsilon
            pub fn is_normalized(self) -> bool {
                self.len_sq().is_approx_eq(T::ONE)
            }
        }
    };
    // dot product; both operands share the scalar type by construction
    (@dot $iden:ident, $other:ident; $($comp:ident => $ocomp:ident),+) => {
        impl<T: Numeric> DotProduct<$other<T>> for $iden<T> {
            type Output = T;

            fn dot(self, rhs: $other<T>) -> T {
                $crate::utils::strip_plus!($(+ self.$comp * rhs.$ocomp)+)
            }
        }
    };
}
pub(crate) use coord_common;
