//! Adaptive block-size search.
//!
//! Starts from a size derived from the input length (or a caller override)
//! and halves it while the normal digest stays under [`HALF_DIGEST_LENGTH`]
//! symbols. The floor [`MIN_BLOCK_SIZE`] is always accepted, so the search
//! takes at most `log2(initial / 3) + 1` attempts.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::HashingConfig;
use crate::error::{CtphError, Result};
use crate::similarity::builder::SignatureBuilder;
use crate::similarity::signature::Signature;

/// Smallest block size ever produced.
pub const MIN_BLOCK_SIZE: u32 = 3;
/// Largest block size whose doubled resolution still fits in a `u32`.
pub const MAX_BLOCK_SIZE: u32 = MIN_BLOCK_SIZE << 29;
/// Length cap of the normal digest.
pub const DIGEST_LENGTH: usize = 64;
/// Length cap of the shorter digest, and the halving threshold.
pub const HALF_DIGEST_LENGTH: usize = DIGEST_LENGTH / 2;

/// Heuristic starting block size for an input of `total_len` bytes.
pub fn initial_block_size(total_len: u64) -> u32 {
    let mut bs = MIN_BLOCK_SIZE;
    while (bs as u64) * (DIGEST_LENGTH as u64) < total_len && bs < MAX_BLOCK_SIZE {
        bs *= 2;
    }
    bs
}

/// Checks that `block_size` is `3 * 2^k` and within range.
pub fn validate_block_size(block_size: u64) -> Result<u32> {
    let valid = block_size >= MIN_BLOCK_SIZE as u64
        && block_size <= MAX_BLOCK_SIZE as u64
        && block_size % MIN_BLOCK_SIZE as u64 == 0
        && (block_size / MIN_BLOCK_SIZE as u64).is_power_of_two();
    if valid {
        Ok(block_size as u32)
    } else {
        Err(CtphError::InvalidBlockSize { block_size })
    }
}

/// Outcome of a block-size search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub signature: Signature,
    /// Number of block sizes tried, including the accepted one.
    pub attempts: u32,
}

/// Runs the halving search over an in-memory stream.
#[derive(Debug, Clone, Default)]
pub struct BlockSizeSelector {
    config: HashingConfig,
}

impl BlockSizeSelector {
    pub fn new(config: HashingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HashingConfig {
        &self.config
    }

    /// Hashes `data`, starting from the configured override or the
    /// length heuristic.
    pub fn compute(&self, data: &[u8]) -> Result<Selection> {
        let start = match self.config.block_size {
            Some(bs) => validate_block_size(bs as u64)?,
            None => initial_block_size(data.len() as u64),
        };
        Ok(self.compute_from(data, start))
    }

    /// Runs the search from a block size that is already `3 * 2^k`.
    pub(crate) fn compute_from(&self, data: &[u8], start: u32) -> Selection {
        let legacy = self.config.legacy;
        let mut block_size = start;
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let (normal, shorter) = digest_pair(data, block_size, legacy);
            debug!(
                block_size,
                normal_len = normal.len(),
                shorter_len = shorter.len(),
                attempt = attempts,
                "ctph attempt"
            );
            if normal.len() < HALF_DIGEST_LENGTH && block_size > MIN_BLOCK_SIZE {
                block_size /= 2;
                continue;
            }
            trace!(block_size, attempts, "ctph block size accepted");
            return Selection {
                signature: Signature::new(block_size, normal, shorter),
                attempts,
            };
        }
    }
}

/// Both resolutions in one scan; each lane keeps its own accumulator.
fn digest_pair(data: &[u8], block_size: u32, legacy: bool) -> (String, String) {
    let mut builder = SignatureBuilder::new(legacy);
    builder.add_lane_unchecked(block_size, DIGEST_LENGTH);
    builder.add_lane_unchecked(block_size * 2, HALF_DIGEST_LENGTH);
    builder.update(data);
    let mut digests = builder.finish().into_iter();
    (
        digests.next().unwrap_or_default(),
        digests.next().unwrap_or_default(),
    )
}
