/// Deterministic FNV-1a hasher used to derive per-run RNG seeds.
#[derive(Debug, Clone)]
pub struct SeedHasher {
    state: u64,
}

impl SeedHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    pub fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }

    pub fn update(&mut self, bytes: &[u8]) -> &mut Self {
        for byte in bytes {
            self.state ^= u64::from(*byte);
            self.state = self.state.wrapping_mul(Self::FNV_PRIME);
        }
        self
    }

    pub fn finish(&self) -> u64 {
        self.state
    }
}

impl Default for SeedHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed for one sweep point, independent of which other points run.
pub fn derive_point_seed(base: u64, bits: u32) -> u64 {
    SeedHasher::new()
        .update(b"trunccol.sweep")
        .update(&base.to_le_bytes())
        .update(&bits.to_le_bytes())
        .finish()
}
