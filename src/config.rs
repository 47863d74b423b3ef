//! Configuration for hashing, scoring and ranking.
//!
//! Provides centralized configuration with sensible defaults, loadable
//! from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CtphError, Result};
use crate::io::IOLimits;
use crate::similarity::costs::Costs;
use crate::similarity::selector::validate_block_size;

/// Master configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtphConfig {
    /// Signature generation.
    pub hashing: HashingConfig,
    /// Edit-distance cost profile.
    pub costs: Costs,
    /// Candidate ranking limits.
    pub ranking: RankingConfig,
    /// File access limits.
    pub io: IOLimits,
}

impl CtphConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(crate::io::error::IoError::from)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects a block size override that is not `3 * 2^k` and an empty
    /// top-k.
    pub fn validate(&self) -> Result<()> {
        if let Some(bs) = self.hashing.block_size {
            validate_block_size(bs as u64)?;
        }
        if self.ranking.k == 0 {
            return Err(CtphError::InvalidConfig(
                "ranking.k must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Signature generation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    /// Starting block size; `None` derives it from the input length.
    pub block_size: Option<u32>,
    /// Keep the closing symbol even when the last block is empty.
    pub legacy: bool,
}

/// Ranking configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Candidates farther than this are dropped.
    pub max_distance: Option<u32>,
    /// Number of matches returned by top-k queries.
    pub k: usize,
    /// Candidates examined per query.
    pub max_candidates: usize,
    /// Pairs computed by pairwise queries.
    pub max_pairs: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_distance: None,
            k: 5,
            max_candidates: 10_000,
            max_pairs: 250_000,
        }
    }
}
