//! Property-based tests for the address space.
//!
//! Uses proptest to check the metric laws and generation guarantees for
//! arbitrary addresses.

use std::cmp::Ordering;

use kad_address::adapters::RngByteSource;
use kad_address::{
    common_bits_addr_f, key_range, proximity, random_address_at_with, Address, ADDRESS_BITS,
};
use proptest::prelude::*;

fn any_address() -> impl Strategy<Value = Address> {
    any::<[u8; 32]>().prop_map(Address::new)
}

/// Leading `bits` of `a` and `b` are equal.
fn same_prefix(a: &Address, b: &Address, bits: usize) -> bool {
    proximity(a, b) >= bits
}

// =============================================================================
// Metric laws
// =============================================================================

proptest! {
    #[test]
    fn prop_proximity_symmetric(a in any_address(), b in any_address()) {
        prop_assert_eq!(proximity(&a, &b), proximity(&b, &a));
    }

    #[test]
    fn prop_proximity_self_is_full_width(a in any_address()) {
        prop_assert_eq!(proximity(&a, &a), ADDRESS_BITS);
    }

    #[test]
    fn prop_proximity_in_range(a in any_address(), b in any_address()) {
        let p = proximity(&a, &b);
        prop_assert!(p <= ADDRESS_BITS);
        prop_assert_eq!(p == ADDRESS_BITS, a == b);
    }

    #[test]
    fn prop_proximity_matches_bit_scan(a in any_address(), b in any_address()) {
        let first_diff = (0..ADDRESS_BITS)
            .find(|&i| a.bit(i) != b.bit(i))
            .unwrap_or(ADDRESS_BITS);
        prop_assert_eq!(proximity(&a, &b), first_diff);
    }

    #[test]
    fn prop_prox_cmp_total_and_antisymmetric(
        t in any_address(),
        a in any_address(),
        b in any_address(),
    ) {
        let ab = t.prox_cmp(&a, &b);
        let ba = t.prox_cmp(&b, &a);
        prop_assert_eq!(ab, ba.reverse());
        prop_assert_eq!(ab == Ordering::Equal, a == b);
        prop_assert_eq!(t.prox_cmp(&a, &a), Ordering::Equal);
    }

    #[test]
    fn prop_prox_cmp_consistent_with_proximity(
        t in any_address(),
        a in any_address(),
        b in any_address(),
    ) {
        // A strictly higher proximity order always means strictly closer.
        if proximity(&t, &a) > proximity(&t, &b) {
            prop_assert_eq!(t.prox_cmp(&a, &b), Ordering::Less);
        }
    }
}

// =============================================================================
// Generation
// =============================================================================

proptest! {
    #[test]
    fn prop_random_address_at_exact(
        r in any_address(),
        prox in 0usize..ADDRESS_BITS,
        seed in any::<u64>(),
    ) {
        let mut source = RngByteSource::seeded(seed);
        let addr = random_address_at_with(&r, Some(prox), &mut source);
        prop_assert_eq!(proximity(&r, &addr), prox);
    }

    #[test]
    fn prop_common_bits_keeps_capped_prefix(
        r in any_address(),
        o in any_address(),
        limit in 0usize..=ADDRESS_BITS,
        seed in any::<u64>(),
    ) {
        let mut source = RngByteSource::seeded(seed);
        let addr = common_bits_addr_f(&r, &o, &mut source, limit);
        let depth = proximity(&r, &o).min(limit);
        prop_assert!(same_prefix(&r, &addr, depth));
    }
}

// =============================================================================
// Key ranges
// =============================================================================

proptest! {
    #[test]
    fn prop_key_range_contains_prefix(
        one in any_address(),
        other in any_address(),
        limit in 0usize..=ADDRESS_BITS,
    ) {
        let range = key_range(&one, &other, limit);
        let depth = proximity(&one, &other).min(limit);

        prop_assert_eq!(range.prox, depth);
        prop_assert!(same_prefix(&one, &range.start, depth));
        prop_assert!(same_prefix(&one, &range.stop, depth));
        prop_assert!(range.start.as_bytes() <= range.stop.as_bytes());
        prop_assert!(range.contains(&one));
    }

    #[test]
    fn prop_key_range_membership_is_prefix_match(
        one in any_address(),
        other in any_address(),
        candidate in any_address(),
        limit in 0usize..=ADDRESS_BITS,
    ) {
        let range = key_range(&one, &other, limit);
        prop_assert_eq!(range.contains(&candidate), same_prefix(&one, &candidate, range.prox));
    }
}

// =============================================================================
// Encoding
// =============================================================================

proptest! {
    #[test]
    fn prop_hex_round_trip(a in any_address()) {
        let text = a.to_string();
        prop_assert_eq!(text.len(), 64);
        prop_assert_eq!(text.parse::<Address>(), Ok(a));
    }

    #[test]
    fn prop_bin_matches_bits(a in any_address()) {
        let bin = a.to_bin();
        for (i, c) in bin.chars().enumerate() {
            prop_assert_eq!(c == '1', a.bit(i));
        }
    }
}
