//! Austin Appleby's MurmurHash2 and MurmurHash64A. The exhaustive list of
//! variants is deliberately not provided; align your data instead.

const M32: u32 = 0x5bd1_e995;
const R32: u32 = 24;

const M64: u64 = 0xc6a4_a793_5bd1_e995;
const R64: u64 = 47;

/// One 32 bit mixing round
#[must_use]
pub fn mix_32(h: u32, k: u32) -> u32 {
    let mut k = k.wrapping_mul(M32);
    k ^= k >> R32;
    k = k.wrapping_mul(M32);
    h.wrapping_mul(M32) ^ k
}

/// One 64 bit mixing round
#[must_use]
pub fn mix_64(h: u64, k: u64) -> u64 {
    let mut k = k.wrapping_mul(M64);
    k ^= k >> R64;
    k = k.wrapping_mul(M64);
    h.wrapping_mul(M64) ^ k
}

/// Calculate the 32 bit MurmurHash2 digest of `data`
#[must_use]
pub fn murmur2_32(data: &[u8], seed: u32) -> u32 {
    let mut h = seed ^ data.len() as u32;

    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        let k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        h = mix_32(h, k);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        for (i, &byte) in tail.iter().enumerate() {
            h ^= (byte as u32) << (i * 8);
        }
        h = h.wrapping_mul(M32);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M32);
    h ^ (h >> 15)
}

/// Calculate the 64 bit MurmurHash64A digest of `data`
#[must_use]
pub fn murmur2_64(data: &[u8], seed: u64) -> u64 {
    let mut h = seed ^ (data.len() as u64).wrapping_mul(M64);

    let mut chunks = data.chunks_exact(8);
    for chunk in &mut chunks {
        let k = u64::from_le_bytes([
            chunk[0], chunk[1], chunk[2], chunk[3],
            chunk[4], chunk[5], chunk[6], chunk[7],
        ]);
        let mut k = k.wrapping_mul(M64);
        k ^= k >> R64;
        k = k.wrapping_mul(M64);
        h ^= k;
        h = h.wrapping_mul(M64);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        for (i, &byte) in tail.iter().enumerate() {
            h ^= (byte as u64) << (i * 8);
        }
        h = h.wrapping_mul(M64);
    }

    h ^= h >> R64;
    h = h.wrapping_mul(M64);
    h ^ (h >> R64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        assert_eq!(murmur2_32(b"hello, world", 0), murmur2_32(b"hello, world", 0));
        assert_eq!(murmur2_64(b"hello, world", 0), murmur2_64(b"hello, world", 0));
    }

    #[test]
    fn seed_sensitive() {
        assert_ne!(murmur2_32(b"hello", 0), murmur2_32(b"hello", 1));
        assert_ne!(murmur2_64(b"hello", 0), murmur2_64(b"hello", 1));
    }

    #[test]
    fn input_sensitive() {
        assert_ne!(murmur2_32(b"hello", 0), murmur2_32(b"hellp", 0));
        assert_ne!(murmur2_64(b"", 0), murmur2_64(&[0], 0));
    }

    #[test]
    fn tail_bytes_count() {
        // inputs differing only past the last aligned chunk
        assert_ne!(murmur2_32(b"aaaa:", 0), murmur2_32(b"aaaa;", 0));
        assert_ne!(murmur2_64(b"aaaaaaaa:", 0), murmur2_64(b"aaaaaaaa;", 0));
    }

    #[test]
    fn empty_is_finalized_seed() {
        // no blocks and no tail, just the finalization of the seeded state
        let seed = 0xdead_beefu32;
        let mut h = seed ^ 0;
        h ^= h >> 13;
        h = h.wrapping_mul(0x5bd1_e995);
        h ^= h >> 15;
        assert_eq!(murmur2_32(b"", seed), h);
    }
}
