//! Free-standing scalar utilities.

use crate::numeric::*;

/// Check if 2 values are exactly equal, avoiding the float comparison lint at call sites
#[inline(always)]
#[must_use]
pub fn exactly_equal<T: PartialEq>(a: T, b: T) -> bool {
    a == b
}

/// Check if a value is exactly its zero identity
#[inline(always)]
#[must_use]
pub fn exactly_zero<T: PartialEq + Zero>(a: T) -> bool {
    a == T::ZERO
}

/// Clamp a value to the inclusive range `[lo, hi]`
#[inline]
#[must_use]
pub fn limit<T: Numeric>(val: T, lo: T, hi: T) -> T {
    debug_assert!(lo <= hi);
    val.clamp(lo, hi)
}

/// Check if a value is a power of 2.
///
/// 0 is not a power of 2.
#[inline]
#[must_use]
pub fn is_pow2<T: Integral>(val: T) -> bool {
    val != T::ZERO && (val & (val - T::ONE)) == T::ZERO
}

/// Round a value up to the next power of 2.
///
/// A power of 2 maps to itself, and 0 maps to 1.
#[must_use]
pub fn round_pow2<T: Integral>(val: T) -> T {
    if val == T::ZERO {
        return T::ONE;
    }

    // smear the top set bit downwards until a fixpoint
    let mut v = val - T::ONE;
    loop {
        let next = v | (v >> T::ONE);
        if next == v {
            break;
        }
        v = next;
    }
    v + T::ONE
}

/// Round `val` up to the next multiple of `align`
#[inline]
#[must_use]
pub fn round_up<T: Integral>(val: T, align: T) -> T {
    debug_assert!(align != T::ZERO);
    let rem = val % align;
    if rem == T::ZERO {
        val
    } else {
        val + align - rem
    }
}

/// Integer division rounding towards positive infinity
#[inline]
#[must_use]
pub fn divup<T: Integral>(num: T, denom: T) -> T {
    debug_assert!(denom != T::ZERO);
    (num + denom - T::ONE) / denom
}

/// Hermite interpolation between 0 and 1 as `val` moves across `[lo, hi]`
#[must_use]
pub fn smoothstep<T: Real>(lo: T, hi: T, val: T) -> T {
    debug_assert!(lo < hi);
    let two = T::ONE + T::ONE;
    let three = two + T::ONE;
    let t = ((val - lo) / (hi - lo)).clamp(T::ZERO, T::ONE);
    t * t * (three - two * t)
}

/// Convert a value from one representation's full range to another's.
///
/// Unsigned integers span their entire domain, floats span `[0, 1]`. The
/// endpoints map exactly: the source minimum becomes the destination minimum
/// and the source maximum the destination maximum. Float inputs outside
/// `[0, 1]` are clamped before conversion.
pub trait Renormalise<U> {
    fn renormalise(self) -> U;
}

// Widening an unsigned value replicates its bit pattern across the wider
// word, so u8::MAX becomes u16::MAX rather than 0xFF00. The multiplier is
// built by smearing a 1 across the destination at source-width strides
// (0x0101.. for u8 -> u32 and so on).
macro_rules! unorm_widen_multiplier {
    {$src:ty, $dst:ty} => {{
        let mut mask: $dst = 1;
        let mut i = <$src>::BITS;
        while i < <$dst>::BITS {
            mask |= mask << i;
            i *= 2;
        }
        mask
    }};
}

macro_rules! impl_renormalise {
    // identity conversions
    {@same $($ty:ty),*} => {
        $(
            impl Renormalise<$ty> for $ty {
                #[inline(always)]
                fn renormalise(self) -> $ty {
                    self
                }
            }
        )*
    };
    // unsigned -> wider unsigned: bit replication
    {@u_widen $src:ty => $($dst:ty),*} => {
        $(
            impl Renormalise<$dst> for $src {
                #[inline]
                fn renormalise(self) -> $dst {
                    const MULT: $dst = unorm_widen_multiplier!($src, $dst);
                    self as $dst * MULT
                }
            }
        )*
    };
    // unsigned -> narrower unsigned: keep the top bits
    {@u_narrow $src:ty => $($dst:ty),*} => {
        $(
            impl Renormalise<$dst> for $src {
                #[inline]
                fn renormalise(self) -> $dst {
                    (self >> (<$src>::BITS - <$dst>::BITS)) as $dst
                }
            }
        )*
    };
    // unsigned <-> float
    {@u_float $src:ty => $($dst:ty),*} => {
        $(
            impl Renormalise<$dst> for $src {
                #[inline]
                fn renormalise(self) -> $dst {
                    self as $dst / <$src>::MAX as $dst
                }
            }

            impl Renormalise<$src> for $dst {
                #[inline]
                fn renormalise(self) -> $src {
                    let clamped = self.clamp(0 as $dst, 1 as $dst);
                    (clamped * <$src>::MAX as $dst).round() as $src
                }
            }
        )*
    };
    // float <-> float
    {@float $src:ty => $dst:ty} => {
        impl Renormalise<$dst> for $src {
            #[inline(always)]
            fn renormalise(self) -> $dst {
                self as $dst
            }
        }
    };
    // signed source: offset into the unsigned counterpart, then recurse
    {@signed $src:ty as $usrc:ty => $($dst:ty),*} => {
        $(
            impl Renormalise<$dst> for $src {
                #[inline]
                fn renormalise(self) -> $dst {
                    let unsig = (self as $usrc).wrapping_sub(<$src>::MIN as $usrc);
                    Renormalise::<$dst>::renormalise(unsig)
                }
            }
        )*
    };
    // signed destination: convert in unsigned space, then offset back
    {@to_signed $dst:ty as $udst:ty => $($src:ty),*} => {
        $(
            impl Renormalise<$dst> for $src {
                #[inline]
                fn renormalise(self) -> $dst {
                    let unsig: $udst = Renormalise::<$udst>::renormalise(self);
                    unsig.wrapping_add(<$dst>::MIN as $udst) as $dst
                }
            }
        )*
    };
}

impl_renormalise! {@same i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}

impl_renormalise! {@u_widen u8  => u16, u32, u64}
impl_renormalise! {@u_widen u16 => u32, u64}
impl_renormalise! {@u_widen u32 => u64}

impl_renormalise! {@u_narrow u16 => u8}
impl_renormalise! {@u_narrow u32 => u8, u16}
impl_renormalise! {@u_narrow u64 => u8, u16, u32}

impl_renormalise! {@u_float u8  => f32, f64}
impl_renormalise! {@u_float u16 => f32, f64}
impl_renormalise! {@u_float u32 => f32, f64}
impl_renormalise! {@u_float u64 => f32, f64}

impl_renormalise! {@float f32 => f64}
impl_renormalise! {@float f64 => f32}

impl_renormalise! {@signed i8  as u8  => u8, u16, u32, u64, f32, f64}
impl_renormalise! {@signed i16 as u16 => u8, u16, u32, u64, f32, f64}
impl_renormalise! {@signed i32 as u32 => u8, u16, u32, u64, f32, f64}
impl_renormalise! {@signed i64 as u64 => u8, u16, u32, u64, f32, f64}

impl_renormalise! {@to_signed i8  as u8  => u8, u16, u32, u64, f32, f64, i16, i32, i64}
impl_renormalise! {@to_signed i16 as u16 => u8, u16, u32, u64, f32, f64, i8, i32, i64}
impl_renormalise! {@to_signed i32 as u32 => u8, u16, u32, u64, f32, f64, i8, i16, i64}
impl_renormalise! {@to_signed i64 as u64 => u8, u16, u32, u64, f32, f64, i8, i16, i32}
