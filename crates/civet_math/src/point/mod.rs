//! Absolute position kinds.
//!
//! Points do not add; the difference of 2 points is a displacement vector.

mod point2;
mod point3;

pub use point2::*;
pub use point3::*;
