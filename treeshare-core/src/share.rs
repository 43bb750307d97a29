//! Secret and share buffers
//!
//! [`FullSecret`] holds `full_size` bytes and belongs to no holder. [`Share`]
//! holds one holder's `compressed_size` bytes. Both validate their length on
//! construction and are immutable afterwards.

use crate::error::{Result, ShareError};
use crate::fingerprint::Fingerprint;
use crate::params::SchemeParameters;
use bytes::Bytes;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// A complete secret buffer: an original secret or a reconstruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFullSecret")]
pub struct FullSecret {
    params: SchemeParameters,
    data: Bytes,
}

#[derive(Deserialize)]
struct RawFullSecret {
    params: SchemeParameters,
    data: Bytes,
}

impl TryFrom<RawFullSecret> for FullSecret {
    type Error = ShareError;

    fn try_from(raw: RawFullSecret) -> Result<Self> {
        Self::new(raw.params, raw.data)
    }
}

impl FullSecret {
    /// Wrap `data` as a secret for `params`
    pub fn new(params: SchemeParameters, data: impl Into<Bytes>) -> Result<Self> {
        let data: Bytes = data.into();
        if data.len() != params.full_size() {
            return Err(ShareError::SizeMismatch {
                expected: params.full_size(),
                actual: data.len(),
            });
        }
        Ok(Self { params, data })
    }

    /// Fill a new secret from `rng`
    pub fn random<R: RngCore + ?Sized>(params: SchemeParameters, rng: &mut R) -> Self {
        let mut data = vec![0u8; params.full_size()];
        rng.fill_bytes(&mut data);
        Self {
            params,
            data: Bytes::from(data),
        }
    }

    /// Buffer produced by the engine itself, already the right length
    pub(crate) fn from_parts(params: SchemeParameters, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), params.full_size());
        Self {
            params,
            data: Bytes::from(data),
        }
    }

    /// Scheme this secret was sized for
    pub fn params(&self) -> &SchemeParameters {
        &self.params
    }

    /// Secret bytes
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Get secret size
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Blake3 fingerprint of the secret bytes
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::compute(&self.data)
    }

    /// Consume and return the raw bytes
    pub fn into_bytes(self) -> Bytes {
        self.data
    }
}

/// One holder's compressed view of a secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawShare")]
pub struct Share {
    params: SchemeParameters,
    holder: u16,
    data: Bytes,
}

#[derive(Deserialize)]
struct RawShare {
    params: SchemeParameters,
    holder: u16,
    data: Bytes,
}

impl TryFrom<RawShare> for Share {
    type Error = ShareError;

    fn try_from(raw: RawShare) -> Result<Self> {
        Self::new(raw.params, raw.holder, raw.data)
    }
}

impl Share {
    /// Wrap `data` as holder `holder`'s share
    pub fn new(params: SchemeParameters, holder: u16, data: impl Into<Bytes>) -> Result<Self> {
        params.check_holder(holder)?;
        let data: Bytes = data.into();
        if data.len() != params.compressed_size() {
            return Err(ShareError::SizeMismatch {
                expected: params.compressed_size(),
                actual: data.len(),
            });
        }
        Ok(Self {
            params,
            holder,
            data,
        })
    }

    pub(crate) fn from_parts(params: SchemeParameters, holder: u16, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), params.compressed_size());
        Self {
            params,
            holder,
            data: Bytes::from(data),
        }
    }

    /// Scheme this share belongs to
    pub fn params(&self) -> &SchemeParameters {
        &self.params
    }

    /// Holder index (0 to n-1)
    pub fn holder(&self) -> u16 {
        self.holder
    }

    /// Share bytes
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Get share size
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Two shares can be combined only if they come from the same scheme
    pub fn is_compatible(&self, other: &Share) -> bool {
        self.params == other.params
    }

    /// Encode for transport or storage
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a share produced by [`Share::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
