//! Small, fast random number generators.

mod mwc64x;
pub use mwc64x::*;
