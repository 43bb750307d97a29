//! Treeshare Core Library
//!
//! Combinatorial threshold secret splitting. A secret is viewed as a tree of
//! `n^(t-1)` leaves; each of the `n` holders keeps every leaf whose path does
//! not name them. Any `t` holders together see every leaf, while each share
//! is smaller than the secret by a factor of `((n-1)/n)^(t-1)`.
//!
//! This crate provides:
//! - Scheme parameters and buffer size rules
//! - The mixed-radix coordinate mapping between secret and share positions
//! - Split, expand, reconstruct and share re-derivation
//! - Share serialization and secret fingerprints
//! - Common types and error handling
//!
//! No field arithmetic is involved and shares carry no integrity tag.

pub mod codec;
pub mod derive;
pub mod error;
pub mod fingerprint;
pub mod mapper;
pub mod params;
pub mod radix;
pub mod reconstruct;
pub mod share;

pub use codec::{expand, split, split_all, split_all_parallel};
pub use derive::derive_share;
pub use error::{Result, ShareError};
pub use fingerprint::Fingerprint;
pub use mapper::CoordinateMapper;
pub use params::{scheme_params_from_env, SchemeParameters};
pub use reconstruct::{check_coverage, reconstruct};
pub use share::{FullSecret, Share};

/// Default scheme: 3-of-5 with single-byte leaves
///
/// Override at runtime via TREESHARE_HOLDERS / TREESHARE_THRESHOLD /
/// TREESHARE_CHUNK_SIZE env vars.
pub const DEFAULT_HOLDERS: u16 = 5;
pub const DEFAULT_THRESHOLD: u16 = 3;
pub const DEFAULT_CHUNK_SIZE: u32 = 1;

/// Smallest meaningful threshold
pub const MIN_THRESHOLD: u16 = 2;

/// Largest secret a scheme may describe (1 GiB)
pub const MAX_SECRET_SIZE: usize = 1 << 30;
