//! Small non-cryptographic hashing primitives: FNV-1a, MurmurHash2, and the
//! BSD rotating checksum. Each is a pure `bytes -> digest` function.

mod bsdsum;
pub use bsdsum::*;

mod fnv1a;
pub use fnv1a::*;

mod murmur2;
pub use murmur2::*;
