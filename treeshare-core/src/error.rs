//! Error types for treeshare
//!
//! Every public operation reports failures through [`ShareError`]. None of
//! them are transient, so nothing in the crate retries.

use thiserror::Error;

/// Result type alias for treeshare operations
pub type Result<T> = std::result::Result<T, ShareError>;

/// Unified error type for treeshare
#[derive(Error, Debug)]
pub enum ShareError {
    // ===== Scheme Errors =====
    #[error("Invalid scheme parameters: {0}")]
    InvalidParameters(String),

    #[error("Holder index out of range: {index} (max: {max})")]
    HolderIndexOutOfRange { index: u16, max: u16 },

    // ===== Buffer Errors =====
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    // ===== Reconstruction Errors =====
    #[error("Incompatible shares: {0}")]
    IncompatibleShares(String),

    #[error("Insufficient shares: have {available} distinct holders, need {required}")]
    InsufficientShares { available: usize, required: usize },

    #[error("Duplicate share for holder {index}")]
    DuplicateHolder { index: u16 },

    // ===== Serialization Errors =====
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<bincode::Error> for ShareError {
    fn from(err: bincode::Error) -> Self {
        ShareError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShareError::InsufficientShares {
            available: 2,
            required: 3,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient shares: have 2 distinct holders, need 3"
        );

        let err = ShareError::HolderIndexOutOfRange { index: 7, max: 4 };
        assert_eq!(err.to_string(), "Holder index out of range: 7 (max: 4)");
    }

    #[test]
    fn test_error_from_bincode() {
        let bad: std::result::Result<u64, bincode::Error> = bincode::deserialize(&[1u8, 2]);
        let err: ShareError = bad.unwrap_err().into();
        assert!(matches!(err, ShareError::Serialization(_)));
    }
}
