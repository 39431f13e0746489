//! Fast and general hashing using FNV-1a.

const OFFSET_BASIS_32: u32 = 0x811c_9dc5;
const PRIME_32: u32 = 16_777_619;

const OFFSET_BASIS_64: u64 = 0xcbf2_9ce4_8422_2325;
const PRIME_64: u64 = 0x0000_0100_0000_01b3;

/// Calculate the 32 bit FNV-1a digest of `data`
#[must_use]
pub fn fnv1a32(data: &[u8]) -> u32 {
    let mut digest = OFFSET_BASIS_32;
    for &byte in data {
        digest ^= byte as u32;
        digest = digest.wrapping_mul(PRIME_32);
    }
    digest
}

/// Calculate the 64 bit FNV-1a digest of `data`
#[must_use]
pub fn fnv1a64(data: &[u8]) -> u64 {
    let mut digest = OFFSET_BASIS_64;
    for &byte in data {
        digest ^= byte as u64;
        digest = digest.wrapping_mul(PRIME_64);
    }
    digest
}
