use std::ops::*;

/// Defines a type which has a 0-value, i.e. the additive identity
pub trait Zero: Sized {
    const ZERO: Self;

    fn zero() -> Self {
        Self::ZERO
    }
}

/// Defines a type which has a 1-value, i.e. the multiplicative identity
pub trait One: Sized {
    const ONE: Self;

    fn one() -> Self {
        Self::ONE
    }
}

macro_rules! impl_identities {
    {$($ty:ty),*} => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0 as $ty;
            }
            impl One for $ty {
                const ONE: Self = 1 as $ty;
            }
        )*
    };
}
impl_identities! {i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}

/// Defines a type that is a partial implementation of a `Numeric`
pub trait NumericBase : Sized + Clone + Copy + Zero + One + PartialEq + PartialOrd +
                    Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> + Rem<Output = Self> +
                    AddAssign + SubAssign + MulAssign + DivAssign + RemAssign
{
    /// Machine epsilon (zero for the integer types)
    const EPSILON : Self;
    /// Smallest representable value
    const MIN : Self;
    /// Largest representable value
    const MAX : Self;
    /// Half the smallest representable value; the base corner of a maximal region
    const HALF_MIN : Self;

    /// Get the minimum of 2 `Numeric`s
    fn min(self, rhs: Self) -> Self;
    /// Get the maximum of 2 `Numeric`s
    fn max(self, rhs: Self) -> Self;

    /// Clamp a value between 2 values
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Calculate the absolute difference of 2 values
    fn abs_diff(self, rhs: Self) -> Self;
    /// Calculate the absolute value
    fn abs(self) -> Self;

    /// Get the sign of the value: 0 for 0, +1 for positive, and -1 for negative
    fn sign(self) -> Self;

    /// Calculate the square root of a value
    fn sqrt(self) -> Self;
    /// Calculate the reciprocal of the square root of the value
    fn rsqrt(self) -> Self {
        self.sqrt().rcp()
    }
    /// Calculate the reciprocal of the value
    fn rcp(self) -> Self {
        Self::ONE / self
    }

    /// Linearly interpolate between 2 values
    fn lerp(self, other: Self, interp: Self) -> Self {
        self + (other - self) * interp
    }

    /// Create a numeric from an `i32`
    fn from_i32(val: i32) -> Self;
}

macro_rules! impl_numeric {
    {@signed $ty:ty} => {
        impl NumericBase for $ty {
            const EPSILON  : Self = 0;
            const MIN      : Self = <$ty>::MIN;
            const MAX      : Self = <$ty>::MAX;
            const HALF_MIN : Self = <$ty>::MIN / 2;

            fn min(self, rhs: Self) -> Self {
                core::cmp::min(self, rhs)
            }

            fn max(self, rhs: Self) -> Self {
                core::cmp::max(self, rhs)
            }

            fn abs_diff(self, rhs: Self) -> Self {
                // the unsigned difference can exceed Self::MAX, saturate instead of wrapping
                let diff = self.abs_diff(rhs);
                if diff > <$ty>::MAX as _ { <$ty>::MAX } else { diff as $ty }
            }

            fn abs(self) -> Self {
                self.abs()
            }

            fn sign(self) -> Self {
                if self < 0 { -1 } else if self > 0 { 1 } else { 0 }
            }

            fn sqrt(self) -> Self {
                (self as f64).sqrt() as $ty
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }
        }
    };
    {@unsigned $ty:ty} => {
        impl NumericBase for $ty {
            const EPSILON  : Self = 0;
            const MIN      : Self = <$ty>::MIN;
            const MAX      : Self = <$ty>::MAX;
            const HALF_MIN : Self = 0;

            fn min(self, rhs: Self) -> Self {
                core::cmp::min(self, rhs)
            }

            fn max(self, rhs: Self) -> Self {
                core::cmp::max(self, rhs)
            }

            fn abs_diff(self, rhs: Self) -> Self {
                self.abs_diff(rhs)
            }

            fn abs(self) -> Self {
                self
            }

            fn sign(self) -> Self {
                if self == 0 { 0 } else { 1 }
            }

            fn sqrt(self) -> Self {
                (self as f64).sqrt() as $ty
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }
        }
    };
    {@fp $ty:ty} => {
        impl NumericBase for $ty {
            const EPSILON  : Self = <$ty>::EPSILON;
            const MIN      : Self = <$ty>::MIN;
            const MAX      : Self = <$ty>::MAX;
            const HALF_MIN : Self = <$ty>::MIN / 2.0;

            fn min(self, rhs: Self) -> Self {
                self.min(rhs)
            }

            fn max(self, rhs: Self) -> Self {
                self.max(rhs)
            }

            fn abs_diff(self, rhs: Self) -> Self {
                (self - rhs).abs()
            }

            fn abs(self) -> Self {
                self.abs()
            }

            fn sign(self) -> Self {
                if self == 0 as $ty { 0 as $ty } else { self.signum() }
            }

            fn sqrt(self) -> Self {
                self.sqrt()
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }
        }
    };
}

impl_numeric! { @signed i8 }
impl_numeric! { @signed i16 }
impl_numeric! { @signed i32 }
impl_numeric! { @signed i64 }
impl_numeric! { @unsigned u8 }
impl_numeric! { @unsigned u16 }
impl_numeric! { @unsigned u32 }
impl_numeric! { @unsigned u64 }
impl_numeric! { @fp f32 }
impl_numeric! { @fp f64 }

/// Defines a type that can check if it's approximately equal to another value.
///
/// For the floating-point types this is a relative comparison scaled by the
/// magnitude of the operands (falling back to an absolute comparison near
/// zero); for the integer types the default epsilon is zero, so the check
/// degenerates to exact equality. There is no impl between a signed and an
/// unsigned type, so mixed-signedness comparison does not compile.
pub trait ApproxEq<E = Self> : Copy {
    const EPSILON : E;

    /// Check if `self` is approximately equal to another value, given an `epsilon`
    fn is_close_to(self, rhs: Self, epsilon: E) -> bool;

    /// Check if `self` is approximately equal to another, using the machine epsilon
    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, Self::EPSILON)
    }
}

macro_rules! impl_approx_eq {
    {@int $($ty:ty => $uty:ty),*} => {
        $(
            impl ApproxEq for $ty {
                const EPSILON : Self = 0;

                fn is_close_to(self, rhs: Self, epsilon: Self) -> bool {
                    // compare in the unsigned domain, the signed difference can wrap
                    self.abs_diff(rhs) <= epsilon as $uty
                }
            }
        )*
    };
    {@fp $($ty:ty),*} => {
        $(
            impl ApproxEq for $ty {
                const EPSILON : Self = <$ty>::EPSILON;

                fn is_close_to(self, rhs: Self, epsilon: Self) -> bool {
                    let scale = <$ty>::max(self.abs(), rhs.abs()).max(1 as $ty);
                    (self - rhs).abs() <= epsilon * scale
                }
            }
        )*
    };
}
impl_approx_eq! {@int i8 => u8, i16 => u16, i32 => u32, i64 => u64, u8 => u8, u16 => u16, u32 => u32, u64 => u64}
impl_approx_eq! {@fp f32, f64}

/// Defines a type that can check if it's approximately equal to its zero identity
pub trait ApproxZero<E = Self> : Copy {
    const ZERO_EPSILON : E;

    /// Check if `self` is approximately equal to 0, given an `epsilon`
    fn is_close_to_zero(self, epsilon: E) -> bool;

    /// Check if `self` is approximately equal to 0, using the machine epsilon
    fn is_zero(self) -> bool {
        self.is_close_to_zero(Self::ZERO_EPSILON)
    }
}

macro_rules! impl_approx_zero {
    {@int $($ty:ty => $uty:ty),*} => {
        $(
            impl ApproxZero for $ty {
                const ZERO_EPSILON : Self = <$ty as NumericBase>::EPSILON;

                fn is_close_to_zero(self, epsilon: Self) -> bool {
                    self.abs_diff(0) <= epsilon as $uty
                }
            }
        )*
    };
    {@fp $($ty:ty),*} => {
        $(
            impl ApproxZero for $ty {
                const ZERO_EPSILON : Self = <$ty as NumericBase>::EPSILON;

                fn is_close_to_zero(self, epsilon: Self) -> bool {
                    self.abs() <= epsilon
                }
            }
        )*
    };
}
impl_approx_zero! {@int i8 => u8, i16 => u16, i32 => u32, i64 => u64, u8 => u8, u16 => u16, u32 => u32, u64 => u64}
impl_approx_zero! {@fp f32, f64}

/// Defines a type that is numeric
pub trait Numeric : NumericBase + ApproxEq + ApproxZero {
}

impl Numeric for i8 {}
impl Numeric for i16 {}
impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for u8 {}
impl Numeric for u16 {}
impl Numeric for u32 {}
impl Numeric for u64 {}
impl Numeric for f32 {}
impl Numeric for f64 {}

/// Arithmetic type representing an integral number
pub trait Integral : Numeric +
                     Not<Output = Self> + BitAnd<Output = Self> + BitXor<Output = Self> + BitOr<Output = Self> + Shl<Output = Self> + Shr<Output = Self> +
                     BitAndAssign + BitXorAssign + BitOrAssign + ShlAssign + ShrAssign
{}

impl Integral for i8  {}
impl Integral for i16 {}
impl Integral for i32 {}
impl Integral for i64 {}
impl Integral for u8  {}
impl Integral for u16 {}
impl Integral for u32 {}
impl Integral for u64 {}

/// Arithmetic type representing a signed number
pub trait Signed : Numeric + Neg<Output = Self>
{}

impl Signed for i8 {}
impl Signed for i16 {}
impl Signed for i32 {}
impl Signed for i64 {}
impl Signed for f32 {}
impl Signed for f64 {}

/// Arithmetic type representing a real number
pub trait Real : Signed {
    /// Get a ceil of the value
    fn ceil(self) -> Self;
    /// Get a floor of the value
    fn floor(self) -> Self;
    /// Round the value to the nearest integer
    fn round(self) -> Self;
    /// Get the integral part of the value
    fn trunc(self) -> Self;
    /// Get the fractional part of the value
    fn fract(self) -> Self;

    /// Create a numeric from an f32
    fn from_f32(val: f32) -> Self;
    /// Create a numeric from an f64
    fn from_f64(val: f64) -> Self;
}

macro_rules! impl_real {
    {$ty:ty} => {
        impl Real for $ty {
            fn ceil(self) -> Self {
                self.ceil()
            }

            fn floor(self) -> Self {
                self.floor()
            }

            fn round(self) -> Self {
                self.round()
            }

            fn trunc(self) -> Self {
                self.trunc()
            }

            fn fract(self) -> Self {
                self.fract()
            }

            fn from_f32(val: f32) -> Self {
                val as $ty
            }

            fn from_f64(val: f64) -> Self {
                val as $ty
            }
        }
    };
}
impl_real! {f32}
impl_real! {f64}

/// Defines a cast between numeric types, with the same semantics as `as`
pub trait NumericCast<U> {
    fn cast(self) -> U;
}

macro_rules! impl_numeric_cast {
    {$from:ty => $($to:ty),*} => {
        $(
            impl NumericCast<$to> for $from {
                #[inline(always)]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )*
    };
}
impl_numeric_cast! {i8  => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}
impl_numeric_cast! {i16 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}
impl_numeric_cast! {i32 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}
impl_numeric_cast! {i64 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}
impl_numeric_cast! {u8  => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}
impl_numeric_cast! {u16 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}
impl_numeric_cast! {u32 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}
impl_numeric_cast! {u64 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}
impl_numeric_cast! {f32 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}
impl_numeric_cast! {f64 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn almost_equal_floats() {
        assert!((0.1f32 + 0.2f32).is_approx_eq(0.3f32));
        assert!((0.1f64 + 0.2f64).is_approx_eq(0.3f64));
        assert!(!1.0f32.is_approx_eq(1.001f32));

        // relative comparison scales with magnitude
        assert!(1.0e8f32.is_approx_eq(1.0e8f32 + 4.0));
        assert!(!1.0f32.is_approx_eq(1.0 + 4.0));
    }

    #[test]
    fn almost_equal_is_reflexive_and_symmetric() {
        let vals = [0.0f64, 1.0, -1.0, 0.3, 1.0e100];
        for &a in &vals {
            assert!(a.is_approx_eq(a));
            for &b in &vals {
                assert_eq!(a.is_approx_eq(b), b.is_approx_eq(a));
            }
        }
    }

    #[test]
    fn almost_equal_ints_is_exact() {
        assert!(3i32.is_approx_eq(3));
        assert!(!3i32.is_approx_eq(4));
        assert!(250u8.is_approx_eq(250));
    }

    #[test]
    fn almost_equal_ints_full_range() {
        // differences larger than the signed max must not wrap into the epsilon
        assert!(!0i32.is_approx_eq(i32::MIN));
        assert!(!i8::MIN.is_approx_eq(i8::MAX));
        assert!(!0i32.is_close_to(i32::MIN, 5));
        assert!((-3i32).is_close_to(2, 5));
        assert!(!i64::MIN.is_zero());
        assert_eq!(NumericBase::abs_diff(i32::MIN, i32::MAX), i32::MAX);
    }

    #[test]
    fn approx_zero() {
        assert!(0.0f32.is_zero());
        assert!((0.1f64 + 0.2 - 0.3).is_close_to_zero(f64::EPSILON));
        assert!(!1.0f32.is_zero());
        assert!(0u32.is_zero());
        assert!(!1u32.is_zero());
    }

    #[test]
    fn sign_and_abs() {
        assert_eq!((-3i32).sign(), -1);
        assert_eq!(0i32.sign(), 0);
        assert_eq!(7u8.sign(), 1);
        assert_eq!((-2.5f32).abs(), 2.5);
        assert_eq!(NumericBase::abs_diff(-3i32, 4), 7);
    }

    #[test]
    fn casts() {
        let x: u8 = 300i32.cast();
        assert_eq!(x, 44); // `as` semantics, by contract
        let y: f64 = 3u16.cast();
        assert_eq!(y, 3.0);
    }
}
