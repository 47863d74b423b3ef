//! Per-block accumulator hash.

/// Seed every block starts from.
pub const SUM_HASH_SEED: u32 = 0x2802_1967;
/// FNV-style multiplier.
pub const SUM_HASH_PRIME: u32 = 0x0100_0193;

/// Multiplicative hash over the bytes of the current block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumHash {
    value: u32,
    touched: bool,
}

impl SumHash {
    pub fn new() -> Self {
        Self {
            value: SUM_HASH_SEED,
            touched: false,
        }
    }

    #[inline]
    pub fn update(&mut self, byte: u8) {
        self.value = self.value.wrapping_mul(SUM_HASH_PRIME) ^ byte as u32;
        self.touched = true;
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// True while no byte has been fed since the last reset.
    pub fn is_fresh(&self) -> bool {
        !self.touched
    }

    /// Starts a new block.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for SumHash {
    fn default() -> Self {
        Self::new()
    }
}
