//! Fuzzy hashing and similarity analysis (CTPH implementation).
//!
//! Context-Triggered Piecewise Hashing splits the input wherever a rolling
//! hash over the last seven bytes hits a trigger value, and emits one base64
//! symbol per piece. Because boundaries depend on local content, a small
//! insertion only disturbs the symbols around it, and two near-identical
//! inputs end up with digests a short edit distance apart.
//!
//! - [`rolling`]: boundary detection
//! - [`sum_hash`]: per-piece accumulator
//! - [`builder`]: single-pass digest construction
//! - [`selector`]: adaptive block-size search
//! - [`costs`]: weighted edit distance
//! - [`rank`]: candidate ranking
//!
//! # Example
//!
//! ```ignore
//! use ctph::similarity::{fuzzy_hash, distance};
//!
//! let a = fuzzy_hash(&data_a);
//! let b = fuzzy_hash(&data_b);
//! println!("{a}");
//! let d = a.distance_to(&b, &Default::default());
//! ```

pub mod builder;
pub mod costs;
pub mod rank;
pub mod rolling;
pub mod selector;
pub mod signature;
pub mod sum_hash;

use std::path::Path;

use tracing::debug;

use crate::config::{CtphConfig, HashingConfig};
use crate::error::Result;
use crate::io::ByteSource;

pub use self::builder::{build_digest, SignatureBuilder, BASE64_ALPHABET};
pub use self::costs::{distance, matrix, CostMatrix, Costs};
pub use self::rank::{best_match, pairwise_distances, top_k};
pub use self::rolling::RollingHash;
pub use self::selector::{
    initial_block_size, validate_block_size, BlockSizeSelector, Selection, MIN_BLOCK_SIZE,
};
pub use self::signature::Signature;
pub use self::sum_hash::SumHash;

/// Signature of `data` with the length heuristic and default settings.
pub fn fuzzy_hash(data: &[u8]) -> Signature {
    let start = initial_block_size(data.len() as u64);
    BlockSizeSelector::default()
        .compute_from(data, start)
        .signature
}

/// Signature of `data` under `config`.
pub fn fuzzy_hash_with(data: &[u8], config: &HashingConfig) -> Result<Signature> {
    Ok(BlockSizeSelector::new(config.clone()).compute(data)?.signature)
}

/// Memory-maps `path` and hashes it under `config`.
pub fn fuzzy_hash_path<P: AsRef<Path>>(path: P, config: &CtphConfig) -> Result<Signature> {
    let path = path.as_ref();
    let span = tracing::info_span!("fuzzy_hash_path", path = %path.display());
    let _guard = span.enter();

    let source = ByteSource::open(path, &config.io)?;
    let sig = fuzzy_hash_with(source.as_slice(), &config.hashing)?;
    debug!(size_bytes = source.len(), signature = %sig, "hashed file");
    Ok(sig)
}
