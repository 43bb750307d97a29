//! Property tests over small schemes
//!
//! Run with: cargo test --package treeshare-core --test properties

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use treeshare_core::{
    check_coverage, derive_share, expand, reconstruct, split, split_all, CoordinateMapper,
    FullSecret, SchemeParameters, Share, ShareError,
};

/// Every k-element subset of 0..n, in lexicographic order
fn subsets(n: u16, k: usize) -> Vec<Vec<u16>> {
    fn walk(start: u16, n: u16, k: usize, current: &mut Vec<u16>, out: &mut Vec<Vec<u16>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for h in start..n {
            current.push(h);
            walk(h + 1, n, k, current, out);
            current.pop();
        }
    }
    let mut out = Vec::new();
    walk(0, n, k, &mut Vec::new(), &mut out);
    out
}

fn pick(shares: &[Share], holders: &[u16]) -> Vec<Share> {
    holders
        .iter()
        .map(|&h| shares[usize::from(h)].clone())
        .collect()
}

/// (n, t, c) with small enough buffers to enumerate every subset
fn scheme() -> impl Strategy<Value = SchemeParameters> {
    (2u16..=6)
        .prop_flat_map(|n| (Just(n), 2u16..=n, 1u32..=3))
        .prop_filter("keep buffers small", |&(n, t, _)| !(n == 6 && t > 4))
        .prop_map(|(n, t, c)| SchemeParameters::new(n, t, c).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_size_contract(params in scheme(), seed in any::<u64>()) {
        let secret = FullSecret::random(params, &mut StdRng::seed_from_u64(seed));
        let n = usize::from(params.holder_count());
        let depth = params.depth() as u32;
        let c = params.chunk_size() as usize;

        for share in split_all(&secret).unwrap() {
            prop_assert_eq!(share.size(), c * (n - 1).pow(depth));
            prop_assert_eq!(expand(&share).size(), c * n.pow(depth));
        }
    }

    #[test]
    fn prop_expand_matches_present_positions(params in scheme(), seed in any::<u64>()) {
        let secret = FullSecret::random(params, &mut StdRng::seed_from_u64(seed));

        for holder in 0..params.holder_count() {
            let expanded = expand(&split(&secret, holder).unwrap());
            let mut mapper = CoordinateMapper::new(&params, holder);
            for pos in 0..params.full_size() {
                let expected = if mapper.is_present(pos) { secret.data()[pos] } else { 0 };
                prop_assert_eq!(expanded.data()[pos], expected);
            }
        }
    }

    #[test]
    fn prop_every_threshold_subset_reconstructs(params in scheme(), seed in any::<u64>()) {
        let secret = FullSecret::random(params, &mut StdRng::seed_from_u64(seed));
        let shares = split_all(&secret).unwrap();

        for holders in subsets(params.holder_count(), usize::from(params.threshold())) {
            let rebuilt = reconstruct(&pick(&shares, &holders)).unwrap();
            prop_assert_eq!(&rebuilt, &secret, "holders {:?}", holders);
        }
    }

    #[test]
    fn prop_share_order_is_irrelevant(params in scheme(), seed in any::<u64>()) {
        let secret = FullSecret::random(params, &mut StdRng::seed_from_u64(seed));
        let mut shares = split_all(&secret).unwrap();
        shares.reverse();
        prop_assert_eq!(reconstruct(&shares).unwrap(), secret);
    }

    #[test]
    fn prop_sub_threshold_subsets_leave_gaps(params in scheme(), seed in any::<u64>()) {
        let secret = FullSecret::random(params, &mut StdRng::seed_from_u64(seed));
        let shares = split_all(&secret).unwrap();
        let below = usize::from(params.threshold()) - 1;

        for holders in subsets(params.holder_count(), below) {
            let coverage = check_coverage(&params, &holders);
            let is_insufficient = matches!(coverage, Err(ShareError::InsufficientShares { .. }));
            prop_assert!(is_insufficient);

            let result = reconstruct(&pick(&shares, &holders));
            let is_insufficient = matches!(result, Err(ShareError::InsufficientShares { .. }));
            prop_assert!(is_insufficient);
        }
    }

    #[test]
    fn prop_rederive_equals_original_split(params in scheme(), seed in any::<u64>()) {
        let secret = FullSecret::random(params, &mut StdRng::seed_from_u64(seed));
        let shares = split_all(&secret).unwrap();

        // Rebuild from the last t holders, then re-issue every share.
        let t = usize::from(params.threshold());
        let rebuilt = reconstruct(&shares[shares.len() - t..]).unwrap();
        for (holder, original) in shares.iter().enumerate() {
            prop_assert_eq!(&derive_share(&rebuilt, holder as u16).unwrap(), original);
        }
    }

    #[test]
    fn prop_share_bytes_roundtrip(params in scheme(), seed in any::<u64>()) {
        let secret = FullSecret::random(params, &mut StdRng::seed_from_u64(seed));
        let share = split(&secret, params.max_holder()).unwrap();
        prop_assert_eq!(Share::from_bytes(&share.to_bytes().unwrap()).unwrap(), share);
    }
}

#[test]
fn test_subsets_helper() {
    assert_eq!(subsets(4, 2).len(), 6);
    assert_eq!(subsets(5, 3).len(), 10);
    assert_eq!(subsets(3, 0), vec![Vec::<u16>::new()]);
}
