//! A small coordinate and geometry library built around a closed algebra of
//! entity kinds: vectors (displacements), points (absolute positions),
//! extents (non-negative sizes) and colours (channel tuples).
//!
//! Which operations exist between which kinds is fixed at compile time:
//! points and vectors add to points, points subtract to vectors, extents
//! absorb vectors, and points never add. Anything outside that table simply
//! has no operator impl and does not compile. The scalar side of the house
//! lives in [`numeric`]: approximate equality with per-type epsilons,
//! renormalisation between integer/float representations, and the usual
//! integer sizing helpers.

mod numeric;
pub use numeric::*;

mod maths;
pub use maths::*;

mod common;
pub use common::*;

mod utils;

mod vec;
pub use vec::*;

mod point;
pub use point::*;

mod extent;
pub use extent::*;

mod colour;
pub use colour::*;

mod region;
pub use region::*;

mod mat;
pub use mat::*;

mod serde_impls;
