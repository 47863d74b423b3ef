//! Single-pass digest construction.
//!
//! A [`SignatureBuilder`] drives one [`RollingHash`] over the byte stream and
//! fans each byte out to one or more digest lanes. Every lane owns its own
//! block size, length cap and [`SumHash`] accumulator, so lanes never
//! influence each other; only the rolling hash (which is never reset) is
//! shared.

use crate::error::{CtphError, Result};
use crate::similarity::rolling::RollingHash;
use crate::similarity::sum_hash::SumHash;

/// Symbols used for digest characters, indexed by `hash % 64`.
pub const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

#[inline]
fn symbol(hash: u32) -> char {
    BASE64_ALPHABET[(hash % 64) as usize] as char
}

#[derive(Debug, Clone)]
struct DigestLane {
    block_size: u32,
    digest_len: usize,
    acc: SumHash,
    digest: String,
}

impl DigestLane {
    fn new(block_size: u32, digest_len: usize) -> Self {
        Self {
            block_size,
            digest_len,
            acc: SumHash::new(),
            digest: String::with_capacity(digest_len),
        }
    }

    #[inline]
    fn step(&mut self, byte: u8, roll: u32) {
        self.acc.update(byte);
        // The cap only throttles interior symbols; the closing one is always
        // allowed, so the digest may reach but never exceed `digest_len`.
        if roll % self.block_size == self.block_size - 1
            && self.digest.len() < self.digest_len - 1
        {
            self.digest.push(symbol(self.acc.value()));
            self.acc.reset();
        }
    }

    fn finish(mut self, roll: u32, legacy: bool) -> String {
        if roll != 0 || legacy || !self.acc.is_fresh() {
            self.digest.push(symbol(self.acc.value()));
        }
        self.digest
    }
}

/// Streaming digest builder.
///
/// ```ignore
/// let mut b = SignatureBuilder::new(false);
/// let normal = b.add_lane(24, 64)?;
/// let shorter = b.add_lane(48, 32)?;
/// b.update(data);
/// let digests = b.finish();
/// ```
#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    roller: RollingHash,
    lanes: Vec<DigestLane>,
    legacy: bool,
}

impl SignatureBuilder {
    /// Creates a builder with no lanes. `legacy` keeps the trailing symbol
    /// even when the final block is empty.
    pub fn new(legacy: bool) -> Self {
        Self {
            roller: RollingHash::new(),
            lanes: Vec::new(),
            legacy,
        }
    }

    /// Adds a resolution and returns its index in [`finish`](Self::finish).
    ///
    /// Lanes must be added before the first byte is fed.
    pub fn add_lane(&mut self, block_size: u32, digest_len: usize) -> Result<usize> {
        if block_size == 0 {
            return Err(CtphError::InvalidBlockSize { block_size: 0 });
        }
        if digest_len == 0 {
            return Err(CtphError::InvalidInput(
                "digest length must be positive".to_string(),
            ));
        }
        if self.roller.count() != 0 {
            return Err(CtphError::InvalidInput(
                "cannot add a lane after bytes were consumed".to_string(),
            ));
        }
        Ok(self.add_lane_unchecked(block_size, digest_len))
    }

    /// [`add_lane`](Self::add_lane) for sizes already known to be valid.
    pub(crate) fn add_lane_unchecked(&mut self, block_size: u32, digest_len: usize) -> usize {
        debug_assert!(block_size > 0 && digest_len > 0);
        self.lanes.push(DigestLane::new(block_size, digest_len));
        self.lanes.len() - 1
    }

    /// Feeds the next chunk of the stream, in order.
    pub fn update(&mut self, data: &[u8]) {
        for &b in data {
            self.roller.update(b);
            let roll = self.roller.value();
            for lane in &mut self.lanes {
                lane.step(b, roll);
            }
        }
    }

    /// Applies the final-flush rule to every lane and returns the digests in
    /// lane order.
    pub fn finish(self) -> Vec<String> {
        let roll = self.roller.value();
        let legacy = self.legacy;
        self.lanes
            .into_iter()
            .map(|lane| lane.finish(roll, legacy))
            .collect()
    }
}

/// Builds one digest over `data` at `block_size`, capped at `digest_len`
/// symbols.
pub fn build_digest(data: &[u8], block_size: u32, digest_len: usize, legacy: bool) -> Result<String> {
    let mut builder = SignatureBuilder::new(legacy);
    builder.add_lane(block_size, digest_len)?;
    builder.update(data);
    Ok(builder.finish().pop().unwrap_or_default())
}
