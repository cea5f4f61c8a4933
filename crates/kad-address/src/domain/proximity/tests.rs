//! Tests for proximity and distance comparison

use super::*;

fn addr_with(index: usize, value: u8) -> Address {
    let mut bytes = [0u8; ADDRESS_LENGTH];
    bytes[index] = value;
    Address::new(bytes)
}

// =============================================================================
// Proximity order
// =============================================================================

#[test]
fn test_proximity_is_symmetric() {
    let a = addr_with(0, 0b1010_0000);
    let b = addr_with(0, 0b0101_0000);

    assert_eq!(proximity(&a, &b), proximity(&b, &a));
}

#[test]
fn test_proximity_to_self_is_full_width() {
    let a = addr_with(5, 0b1010_1010);

    assert_eq!(proximity(&a, &a), ADDRESS_BITS);
    assert_eq!(a.proximity(&a), 256);
}

#[test]
fn test_proximity_last_bit_differs() {
    let a = Address::ZERO;
    let b = addr_with(31, 0x01);

    assert_eq!(proximity(&a, &b), 255, "identical through bit 254");
}

#[test]
fn test_proximity_first_bit_differs() {
    let a = addr_with(0, 0x80);
    let b = Address::ZERO;

    assert_eq!(proximity(&a, &b), 0);
}

#[test]
fn test_proximity_identifies_bit_position() {
    let local = Address::ZERO;

    assert_eq!(proximity(&local, &addr_with(0, 0b0100_0000)), 1);
    assert_eq!(proximity(&local, &addr_with(1, 0b1000_0000)), 8);
    assert_eq!(proximity(&local, &addr_with(1, 0b0000_0001)), 15);
    assert_eq!(proximity(&local, &addr_with(16, 0b0001_0000)), 131);
}

#[test]
fn test_proximity_ignores_bits_after_first_difference() {
    let a = addr_with(2, 0b0010_0000);
    let mut b = addr_with(2, 0b0000_0000);
    b.0[3] = 0xff;
    b.0[31] = 0xff;

    assert_eq!(proximity(&a, &b), 18);
}

#[test]
fn test_distance_is_xor() {
    let a = Address::new([0b1100_1100; ADDRESS_LENGTH]);
    let b = Address::new([0b1010_1010; ADDRESS_LENGTH]);

    assert_eq!(distance(&a, &b), Address::new([0b0110_0110; ADDRESS_LENGTH]));
    assert_eq!(distance(&a, &a), Address::ZERO);
}

// =============================================================================
// Distance comparison
// =============================================================================

#[test]
fn test_prox_cmp_same_candidate_is_equal() {
    let target = addr_with(3, 0x42);
    let a = addr_with(7, 0x99);

    assert_eq!(target.prox_cmp(&a, &a), Ordering::Equal);
    assert_eq!(target.prox_cmp_int(&a, &a), 0);
}

#[test]
fn test_prox_cmp_picks_closer_candidate() {
    let target = Address::ZERO;
    let near = addr_with(31, 0x01);
    let far = addr_with(0, 0x01);

    assert_eq!(target.prox_cmp(&near, &far), Ordering::Less);
    assert_eq!(target.prox_cmp(&far, &near), Ordering::Greater);
    assert_eq!(target.prox_cmp_int(&near, &far), -1);
    assert_eq!(target.prox_cmp_int(&far, &near), 1);
}

#[test]
fn test_prox_cmp_breaks_ties_in_proximity_order() {
    let target = Address::ZERO;
    // Both share exactly 8 leading bits with the target.
    let a = addr_with(1, 0b1000_0001);
    let b = addr_with(1, 0b1000_0010);

    assert_eq!(proximity(&target, &a), proximity(&target, &b));
    assert_eq!(target.prox_cmp(&a, &b), Ordering::Less);
}

#[test]
fn test_prox_cmp_is_relative_to_target() {
    let target = Address::new([0xff; ADDRESS_LENGTH]);
    let a = addr_with(0, 0xf0);
    let b = addr_with(0, 0x0f);

    assert_eq!(target.prox_cmp(&a, &b), Ordering::Less);
    assert_eq!(Address::ZERO.prox_cmp(&a, &b), Ordering::Greater);
}

// =============================================================================
// Nearest-neighbour helpers
// =============================================================================

#[test]
fn test_sort_by_proximity_orders_closest_first() {
    let target = Address::ZERO;
    let far = addr_with(0, 0b1000_0000);
    let mid = addr_with(1, 0b1000_0000);
    let close = addr_with(31, 0b0000_0001);

    let mut addrs = vec![far, close, mid];
    sort_by_proximity(&target, &mut addrs);

    assert_eq!(addrs, vec![close, mid, far]);
}

#[test]
fn test_closest_limits_to_k() {
    let target = addr_with(0, 0x10);
    let addrs: Vec<Address> = (0u8..10).map(|i| addr_with(0, i << 4)).collect();

    let nearest = closest(&target, &addrs, 3);

    assert_eq!(nearest.len(), 3);
    assert_eq!(nearest[0], target);
    assert_eq!(nearest[1], addr_with(0, 0x00));
    assert_eq!(nearest[2], addr_with(0, 0x30));
}

#[test]
fn test_closest_with_k_larger_than_input() {
    let addrs = vec![addr_with(0, 1), addr_with(0, 2)];

    assert_eq!(closest(&Address::ZERO, &addrs, 10).len(), 2);
    assert!(closest(&Address::ZERO, &[], 3).is_empty());
}
