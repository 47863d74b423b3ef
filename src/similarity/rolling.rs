//! Rolling hash used to detect block boundaries.

/// Number of trailing bytes the rolling window remembers.
pub const ROLLING_WINDOW: usize = 7;

/// Shift applied to `h3` for every byte.
const H3_SHIFT: u32 = 5;

/// Windowed hash over the last [`ROLLING_WINDOW`] bytes.
///
/// `h1` is the plain sum of the window, `h2` a position-weighted sum and
/// `h3` a shift/xor register whose older bytes fall off the top. All
/// arithmetic wraps modulo 2^32.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollingHash {
    window: [u8; ROLLING_WINDOW],
    n: u64,
    h1: u32,
    h2: u32,
    h3: u32,
}

impl RollingHash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one byte, evicting the oldest byte of the window.
    #[inline]
    pub fn update(&mut self, byte: u8) {
        let c = byte as u32;
        let slot = (self.n % ROLLING_WINDOW as u64) as usize;

        self.h2 = self
            .h2
            .wrapping_sub(self.h1)
            .wrapping_add((ROLLING_WINDOW as u32).wrapping_mul(c));
        self.h1 = self
            .h1
            .wrapping_add(c)
            .wrapping_sub(self.window[slot] as u32);
        self.window[slot] = byte;
        self.n += 1;
        self.h3 = (self.h3 << H3_SHIFT) ^ c;
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.h1.wrapping_add(self.h2).wrapping_add(self.h3)
    }

    /// Number of bytes consumed so far.
    pub fn count(&self) -> u64 {
        self.n
    }
}
