//! The canonical fuzzy hash triple.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::similarity::costs::Costs;

/// Block size, high-resolution digest and low-resolution digest.
///
/// The shorter digest is computed over the same bytes at twice the block
/// size. Renders as `"<block_size>:<normal>:<shorter>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    block_size: u32,
    normal: String,
    shorter: String,
}

impl Signature {
    pub(crate) fn new(block_size: u32, normal: String, shorter: String) -> Self {
        Self {
            block_size,
            normal,
            shorter,
        }
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Digest at `block_size`, at most 64 symbols.
    pub fn normal(&self) -> &str {
        &self.normal
    }

    /// Digest at `2 * block_size`, at most 32 symbols.
    pub fn shorter(&self) -> &str {
        &self.shorter
    }

    /// Edit distance between the digests of two signatures that share a
    /// resolution.
    ///
    /// Equal block sizes compare both resolutions and keep the closer one.
    /// When one block size is double the other, the coarser signature's
    /// normal digest is compared with the finer one's shorter digest.
    /// Signatures with no common resolution yield `None`.
    pub fn distance_to(&self, other: &Signature, costs: &Costs) -> Option<u32> {
        let (a, b) = (self.block_size as u64, other.block_size as u64);
        if a == b {
            let n = costs.distance(&self.normal, &other.normal);
            let s = costs.distance(&self.shorter, &other.shorter);
            Some(n.min(s))
        } else if a * 2 == b {
            Some(costs.distance(&self.shorter, &other.normal))
        } else if b * 2 == a {
            Some(costs.distance(&self.normal, &other.shorter))
        } else {
            None
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.block_size, self.normal, self.shorter)
    }
}
