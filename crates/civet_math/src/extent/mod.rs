//! Non-negative per-axis size kinds.

mod extent2;
mod extent3;

pub use extent2::*;
pub use extent3::*;
