use rand_core::{impls, RngCore, SeedableRng};

const MULTIPLIER: u64 = 0xfffe_b81b;

/// Multiply-with-carry style generator suitable for rapid seeking and GPU
/// generation.
///
/// As with all such generators the seed value matters: neither half of the
/// 64 bit state may be zero, or the generator degenerates.
#[derive(Clone, Debug)]
pub struct Mwc64x {
    state: u64,
}

impl Mwc64x {
    /// Create a generator from a seed; both 32 bit halves have to be nonzero
    #[must_use]
    pub fn new(seed: u64) -> Self {
        debug_assert!(seed as u32 != 0);
        debug_assert!((seed >> 32) as u32 != 0);
        Self { state: seed }
    }
}

impl RngCore for Mwc64x {
    fn next_u32(&mut self) -> u32 {
        let lo = self.state as u32;
        let hi = (self.state >> 32) as u32;
        self.state = MULTIPLIER.wrapping_mul(lo as u64).wrapping_add(hi as u64);
        lo ^ hi
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mwc64x {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = u64::from_le_bytes(seed);
        // keep both halves of the state nonzero
        if state as u32 == 0 {
            state |= 1;
        }
        if (state >> 32) as u32 == 0 {
            state |= 1 << 32;
        }
        Self { state }
    }
}
