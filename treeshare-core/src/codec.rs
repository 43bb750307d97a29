//! Share codec
//!
//! `split` compresses a full secret into one holder's share; `expand` lays a
//! share back out at full size with zeros where the holder has no data.

use crate::error::Result;
use crate::mapper::CoordinateMapper;
use crate::share::{FullSecret, Share};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Produce holder `holder`'s share of `secret`
pub fn split(secret: &FullSecret, holder: u16) -> Result<Share> {
    let params = *secret.params();
    params.check_holder(holder)?;

    let mut mapper = CoordinateMapper::new(&params, holder);
    let mut out = vec![0u8; params.compressed_size()];

    // Every compressed position is hit exactly once.
    for (pos, &byte) in secret.data().iter().enumerate() {
        if let Some(target) = mapper.full_to_compressed(pos) {
            out[target] = byte;
        }
    }

    trace!(holder, scheme = %params, size = out.len(), "split share");
    Ok(Share::from_parts(params, holder, out))
}

/// Produce every holder's share, in holder order
pub fn split_all(secret: &FullSecret) -> Result<Vec<Share>> {
    let params = secret.params();
    debug!(scheme = %params, "splitting secret into {} shares", params.holder_count());
    (0..params.holder_count())
        .map(|holder| split(secret, holder))
        .collect()
}

/// Same output as [`split_all`], one rayon task per holder
///
/// More efficient for large secrets or many holders.
pub fn split_all_parallel(secret: &FullSecret) -> Result<Vec<Share>> {
    let params = secret.params();
    debug!(scheme = %params, "splitting secret into {} shares (parallel)", params.holder_count());
    (0..params.holder_count())
        .into_par_iter()
        .map(|holder| split(secret, holder))
        .collect()
}

/// Expand a share to full size
///
/// Positions the holder does not carry are left zero, so the result is a
/// partial view and not the secret. Do not pass it to
/// [`derive_share`](crate::derive::derive_share).
pub fn expand(share: &Share) -> FullSecret {
    let params = *share.params();
    let mut mapper = CoordinateMapper::new(&params, share.holder());
    let mut out = vec![0u8; params.full_size()];

    for (pos, &byte) in share.data().iter().enumerate() {
        out[mapper.compressed_to_full(pos)] = byte;
    }

    trace!(holder = share.holder(), scheme = %params, "expanded share");
    FullSecret::from_parts(params, out)
}
