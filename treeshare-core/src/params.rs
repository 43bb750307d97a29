//! Scheme parameters
//!
//! A scheme `(n, t, c)` splits a secret of `c * n^(t-1)` bytes into `n`
//! shares of `c * (n-1)^(t-1)` bytes each. Any `t` distinct shares rebuild the
//! secret.

use crate::error::{Result, ShareError};
use crate::{
    DEFAULT_CHUNK_SIZE, DEFAULT_HOLDERS, DEFAULT_THRESHOLD, MAX_SECRET_SIZE, MIN_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Validated `(holders, threshold, chunk size)` triple
///
/// Construction goes through [`SchemeParameters::new`], so every value of this
/// type satisfies `2 <= threshold <= holder_count`, `chunk_size >= 1`, and has
/// a secret size of at most [`MAX_SECRET_SIZE`]. Deserialized values are
/// validated too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSchemeParameters")]
pub struct SchemeParameters {
    holder_count: u16,
    threshold: u16,
    chunk_size: u32,
}

#[derive(Deserialize)]
struct RawSchemeParameters {
    holder_count: u16,
    threshold: u16,
    chunk_size: u32,
}

impl TryFrom<RawSchemeParameters> for SchemeParameters {
    type Error = ShareError;

    fn try_from(raw: RawSchemeParameters) -> Result<Self> {
        Self::new(raw.holder_count, raw.threshold, raw.chunk_size)
    }
}

impl Default for SchemeParameters {
    fn default() -> Self {
        Self {
            holder_count: DEFAULT_HOLDERS,
            threshold: DEFAULT_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SchemeParameters {
    /// Create and validate a new scheme
    pub fn new(holder_count: u16, threshold: u16, chunk_size: u32) -> Result<Self> {
        if threshold < MIN_THRESHOLD {
            return Err(ShareError::InvalidParameters(format!(
                "threshold must be >= {}, got {}",
                MIN_THRESHOLD, threshold
            )));
        }
        if threshold > holder_count {
            return Err(ShareError::InvalidParameters(format!(
                "threshold {} exceeds holder count {}",
                threshold, holder_count
            )));
        }
        if chunk_size == 0 {
            return Err(ShareError::InvalidParameters(
                "chunk_size must be > 0".to_string(),
            ));
        }

        let params = Self {
            holder_count,
            threshold,
            chunk_size,
        };

        // Only the full size needs checking: (n-1)^d < n^d.
        match checked_size(holder_count, params.depth(), chunk_size) {
            Some(size) if size <= MAX_SECRET_SIZE => {}
            _ => {
                return Err(ShareError::InvalidParameters(format!(
                    "secret size {} * {}^{} exceeds {} bytes",
                    chunk_size,
                    holder_count,
                    params.depth(),
                    MAX_SECRET_SIZE
                )));
            }
        }

        Ok(params)
    }

    /// Number of holders (n)
    pub fn holder_count(&self) -> u16 {
        self.holder_count
    }

    /// Minimum number of distinct shares needed to reconstruct (t)
    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Bytes stored per leaf (c)
    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    /// Number of mixed-radix digits addressing a leaf (t - 1)
    pub fn depth(&self) -> usize {
        usize::from(self.threshold) - 1
    }

    /// Number of leaves in a full secret: n^depth
    pub fn leaf_count(&self) -> usize {
        pow(usize::from(self.holder_count), self.depth())
    }

    /// Number of leaves in a share: (n-1)^depth
    pub fn compressed_leaf_count(&self) -> usize {
        pow(usize::from(self.holder_count) - 1, self.depth())
    }

    /// Size in bytes of a full secret: c * n^depth
    pub fn full_size(&self) -> usize {
        self.leaf_count() * self.chunk_size as usize
    }

    /// Size in bytes of a single share: c * (n-1)^depth
    pub fn compressed_size(&self) -> usize {
        self.compressed_leaf_count() * self.chunk_size as usize
    }

    /// Bytes of the secret each individual share does not carry
    pub fn missing_per_share(&self) -> usize {
        self.full_size() - self.compressed_size()
    }

    /// Share size as a fraction of the secret size
    pub fn compression_ratio(&self) -> f64 {
        self.compressed_size() as f64 / self.full_size() as f64
    }

    /// Largest valid holder index (n - 1)
    pub fn max_holder(&self) -> u16 {
        self.holder_count - 1
    }

    /// Check that `holder` names one of the `n` holders
    pub fn check_holder(&self, holder: u16) -> Result<()> {
        if holder >= self.holder_count {
            warn!(holder, holders = self.holder_count, "holder index out of range");
            return Err(ShareError::HolderIndexOutOfRange {
                index: holder,
                max: self.max_holder(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for SchemeParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-of-{} (chunk {})",
            self.threshold, self.holder_count, self.chunk_size
        )
    }
}

fn pow(base: usize, exp: usize) -> usize {
    (0..exp).fold(1, |acc, _| acc * base)
}

fn checked_size(holders: u16, depth: usize, chunk_size: u32) -> Option<usize> {
    let mut size = usize::try_from(chunk_size).ok()?;
    for _ in 0..depth {
        size = size.checked_mul(usize::from(holders))?;
    }
    Some(size)
}

/// Read the default scheme from environment, falling back to compile-time defaults.
///
/// Reads `TREESHARE_HOLDERS`, `TREESHARE_THRESHOLD` and `TREESHARE_CHUNK_SIZE`.
/// Unparseable values fall back individually; the combined triple is still
/// validated.
pub fn scheme_params_from_env() -> Result<SchemeParameters> {
    let holders = std::env::var("TREESHARE_HOLDERS")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_HOLDERS);
    let threshold = std::env::var("TREESHARE_THRESHOLD")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_THRESHOLD);
    let chunk_size = std::env::var("TREESHARE_CHUNK_SIZE")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(DEFAULT_CHUNK_SIZE);
    SchemeParameters::new(holders, threshold, chunk_size)
}
