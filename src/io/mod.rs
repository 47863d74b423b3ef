//! Rewindable byte sources for hashing.
//!
//! A `ByteSource` has a known length and hands out the whole stream as a
//! slice, so every hashing pass can restart from byte 0. Files are
//! memory-mapped read-only and capped by `IOLimits`.

pub mod error;

use crate::io::error::{IoError, Result};
use bytes::Bytes;
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// Defines the resource limits for file access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IOLimits {
    /// The absolute maximum file size that can be opened.
    pub max_file_size: u64,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self {
            max_file_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

enum Backing {
    // memmap cannot map empty files.
    Empty,
    Mapped(Mmap),
    Owned(Bytes),
}

/// Read-only byte stream of known length.
pub struct ByteSource {
    backing: Backing,
}

impl ByteSource {
    /// Opens and memory-maps a file.
    ///
    /// Fails if the file size exceeds `limits.max_file_size`.
    pub fn open<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();

        debug!(
            path = %path.display(),
            size = file_size,
            limits.max_file_size = limits.max_file_size,
            "Opening file for hashing"
        );

        if file_size > limits.max_file_size {
            warn!(
                path = %path.display(),
                size = file_size,
                limit = limits.max_file_size,
                "File is too large"
            );
            return Err(IoError::FileTooLarge {
                limit: limits.max_file_size,
                found: file_size,
            });
        }

        let backing = if file_size == 0 {
            Backing::Empty
        } else {
            // Safety: read-only map of a regular file; the map is never handed
            // out mutably.
            Backing::Mapped(unsafe { Mmap::map(&file)? })
        };
        Ok(Self { backing })
    }

    /// Wraps bytes already in memory.
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        let data = data.into();
        let backing = if data.is_empty() {
            Backing::Empty
        } else {
            Backing::Owned(data)
        };
        Self { backing }
    }

    /// The whole stream, from the start.
    pub fn as_slice(&self) -> &[u8] {
        match &self.backing {
            Backing::Empty => &[],
            Backing::Mapped(m) => &m[..],
            Backing::Owned(b) => b.as_ref(),
        }
    }

    pub fn len(&self) -> u64 {
        self.as_slice().len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl AsRef<[u8]> for ByteSource {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl std::fmt::Debug for ByteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.backing {
            Backing::Empty => "empty",
            Backing::Mapped(_) => "mapped",
            Backing::Owned(_) => "owned",
        };
        f.debug_struct("ByteSource")
            .field("backing", &kind)
            .field("len", &self.len())
            .finish()
    }
}
