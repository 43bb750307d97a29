//! Secret fingerprints
//!
//! Blake3 digest of a full secret. Lets a holder check that a reconstructed
//! secret is the one that was split, without keeping the secret around.

use crate::error::{Result, ShareError};
use std::fmt;

/// Blake3 hash of a full secret
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(blake3::Hash);

impl Fingerprint {
    /// Compute the fingerprint of raw secret bytes
    pub fn compute(data: &[u8]) -> Self {
        Self(blake3::hash(data))
    }

    /// Get the raw hash bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        self.0.to_hex().to_string()
    }

    /// Parse from hex string
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hash = blake3::Hash::from_hex(hex)
            .map_err(|e| ShareError::Serialization(format!("invalid fingerprint: {}", e)))?;
        Ok(Self(hash))
    }

    /// Check that `data` hashes to this fingerprint
    pub fn verify(&self, data: &[u8]) -> bool {
        Self::compute(data) == *self
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_hex_roundtrip() {
        let fp = Fingerprint::compute(b"treeshare secret");
        let parsed = Fingerprint::from_hex(&fp.to_hex()).unwrap();
        assert_eq!(fp, parsed);
        assert!(fp.verify(b"treeshare secret"));
        assert!(!fp.verify(b"treeshare secreT"));
    }

    #[test]
    fn test_display_is_full_hex() {
        let fp = Fingerprint::compute(b"");
        assert_eq!(
            fp.to_string(),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
        assert_eq!(fp.as_bytes()[0], 0xaf);
        assert_eq!(format!("{:?}", fp), "Fingerprint(af1349b9f5f9a1a6)");
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(
            Fingerprint::from_hex("not-hex"),
            Err(ShareError::Serialization(_))
        ));
    }
}
