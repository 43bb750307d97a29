//! Threshold reconstruction
//!
//! For every full position, the first supplied share whose holder carries it
//! provides the byte. With `t` distinct holders some share always does.

use crate::error::{Result, ShareError};
use crate::mapper::CoordinateMapper;
use crate::params::SchemeParameters;
use crate::share::{FullSecret, Share};
use crate::MIN_THRESHOLD;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Rebuild the full secret from at least `threshold` distinct shares
///
/// Shares are scanned in the order given. All checks run before any byte is
/// resolved, and nothing partial is ever returned.
pub fn reconstruct(shares: &[Share]) -> Result<FullSecret> {
    let params = validate(shares)?;

    let mut mappers: Vec<CoordinateMapper> = shares
        .iter()
        .map(|share| CoordinateMapper::new(&params, share.holder()))
        .collect();

    let mut out = vec![0u8; params.full_size()];
    for (pos, byte) in out.iter_mut().enumerate() {
        *byte = resolve(shares, &mut mappers, pos).ok_or_else(|| {
            warn!(pos, scheme = %params, "no supplied share carries position");
            ShareError::InsufficientShares {
                available: shares.len(),
                required: usize::from(params.threshold()),
            }
        })?;
    }

    debug!(scheme = %params, shares = shares.len(), "reconstructed secret");
    Ok(FullSecret::from_parts(params, out))
}

/// Check that `holders` jointly carry every position of a `params` secret
///
/// Independent of any share data. Useful to decide whether a set of holders
/// is worth contacting.
pub fn check_coverage(params: &SchemeParameters, holders: &[u16]) -> Result<()> {
    for &holder in holders {
        params.check_holder(holder)?;
    }

    let mut mappers: Vec<CoordinateMapper> = holders
        .iter()
        .map(|&holder| CoordinateMapper::new(params, holder))
        .collect();

    // Offsets inside a chunk share their leaf, so probing one byte per leaf is enough.
    let step = params.chunk_size() as usize;
    for pos in (0..params.full_size()).step_by(step) {
        if !mappers.iter_mut().any(|m| m.is_present(pos)) {
            let distinct: HashSet<u16> = holders.iter().copied().collect();
            debug!(pos, "holder set leaves a position uncovered");
            return Err(ShareError::InsufficientShares {
                available: distinct.len(),
                required: usize::from(params.threshold()),
            });
        }
    }
    Ok(())
}

fn resolve(shares: &[Share], mappers: &mut [CoordinateMapper], pos: usize) -> Option<u8> {
    shares
        .iter()
        .zip(mappers.iter_mut())
        .find_map(|(share, mapper)| mapper.full_to_compressed(pos).map(|at| share.data()[at]))
}

fn validate(shares: &[Share]) -> Result<SchemeParameters> {
    let first = shares.first().ok_or(ShareError::InsufficientShares {
        available: 0,
        required: usize::from(MIN_THRESHOLD),
    })?;
    let params = *first.params();

    if let Some(other) = shares.iter().find(|s| !s.is_compatible(first)) {
        warn!(expected = %params, found = %other.params(), "incompatible share");
        return Err(ShareError::IncompatibleShares(format!(
            "holder {} uses {}, holder {} uses {}",
            first.holder(),
            params,
            other.holder(),
            other.params()
        )));
    }

    let required = usize::from(params.threshold());
    let mut seen = HashSet::with_capacity(shares.len());
    let mut duplicate = None;
    for share in shares {
        if !seen.insert(share.holder()) && duplicate.is_none() {
            duplicate = Some(share.holder());
        }
    }

    if seen.len() < required {
        warn!(available = seen.len(), required, "not enough distinct shares");
        return Err(ShareError::InsufficientShares {
            available: seen.len(),
            required,
        });
    }
    if let Some(index) = duplicate {
        warn!(holder = index, "duplicate share supplied");
        return Err(ShareError::DuplicateHolder { index });
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::split_all;

    fn secret(params: SchemeParameters) -> FullSecret {
        let data: Vec<u8> = (0..params.full_size()).map(|i| (i * 7 % 256) as u8).collect();
        FullSecret::new(params, data).unwrap()
    }

    #[test]
    fn test_reconstruct_from_threshold() {
        let params = SchemeParameters::new(5, 3, 2).unwrap();
        let original = secret(params);
        let shares = split_all(&original).unwrap();

        let subset = vec![shares[4].clone(), shares[1].clone(), shares[2].clone()];
        let rebuilt = reconstruct(&subset).unwrap();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_reconstruct_with_all_shares() {
        let params = SchemeParameters::new(4, 2, 3).unwrap();
        let original = secret(params);
        let shares = split_all(&original).unwrap();
        assert_eq!(reconstruct(&shares).unwrap(), original);
    }

    #[test]
    fn test_too_few_shares() {
        let params = SchemeParameters::default();
        let shares = split_all(&secret(params)).unwrap();

        let result = reconstruct(&shares[..2]);
        assert!(matches!(
            result,
            Err(ShareError::InsufficientShares {
                available: 2,
                required: 3
            })
        ));
        assert!(matches!(
            reconstruct(&[]),
            Err(ShareError::InsufficientShares { available: 0, .. })
        ));
    }

    #[test]
    fn test_duplicates_do_not_count() {
        let params = SchemeParameters::default();
        let shares = split_all(&secret(params)).unwrap();

        let subset = vec![shares[1].clone(), shares[1].clone(), shares[3].clone()];
        assert!(matches!(
            reconstruct(&subset),
            Err(ShareError::InsufficientShares {
                available: 2,
                required: 3
            })
        ));

        let subset = vec![
            shares[0].clone(),
            shares[1].clone(),
            shares[3].clone(),
            shares[1].clone(),
        ];
        assert!(matches!(
            reconstruct(&subset),
            Err(ShareError::DuplicateHolder { index: 1 })
        ));
    }

    #[test]
    fn test_incompatible_shares() {
        let a = split_all(&secret(SchemeParameters::new(5, 3, 1).unwrap())).unwrap();
        let b = split_all(&secret(SchemeParameters::new(5, 3, 2).unwrap())).unwrap();

        let mixed = vec![a[0].clone(), a[1].clone(), b[2].clone()];
        assert!(matches!(
            reconstruct(&mixed),
            Err(ShareError::IncompatibleShares(_))
        ));
    }

    #[test]
    fn test_check_coverage() {
        let params = SchemeParameters::new(6, 3, 4).unwrap();
        assert!(check_coverage(&params, &[0, 2, 5]).is_ok());
        assert!(matches!(
            check_coverage(&params, &[0, 2]),
            Err(ShareError::InsufficientShares {
                available: 2,
                required: 3
            })
        ));
        assert!(matches!(
            check_coverage(&params, &[0, 0, 2]),
            Err(ShareError::InsufficientShares { available: 2, .. })
        ));
        assert!(matches!(
            check_coverage(&params, &[0, 9, 2]),
            Err(ShareError::HolderIndexOutOfRange { index: 9, .. })
        ));
    }
}
