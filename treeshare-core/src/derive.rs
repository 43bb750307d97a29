//! Share re-derivation
//!
//! Issues a share for any holder straight from a reconstructed secret,
//! including holders whose original share was lost or never handed out.

use crate::codec::split;
use crate::error::Result;
use crate::share::{FullSecret, Share};
use tracing::debug;

/// Derive holder `holder`'s share from a genuine full secret
///
/// The holder's mapping already drops every position it does not carry, so
/// the secret is read in place and no zero-padded intermediate is built. The
/// result is byte-identical to splitting the original secret for `holder`.
///
/// `secret` must be an original or reconstructed secret. A zero-padded
/// [`expand`](crate::codec::expand) output only yields a correct share for the
/// holder it was expanded from.
pub fn derive_share(secret: &FullSecret, holder: u16) -> Result<Share> {
    debug!(holder, scheme = %secret.params(), "deriving share from full secret");
    split(secret, holder)
}
