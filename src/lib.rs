//! A loose toolbox of small, independent support utilities sharing a build
//! and a namespace: coordinate/geometry math, byte hashing, and random
//! number generation.
//!
//! Each concern lives in its own sub-crate; this crate only re-exports them
//! under friendlier names.

pub use civet_hash as hash;
pub use civet_math as math;
pub use civet_rand as rand;
