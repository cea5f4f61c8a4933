//! Proximity - pure functions over the XOR metric
//!
//! All functions in this module are pure (no I/O, no state mutation)
//! and deterministic (same inputs → same outputs).
//!
//! Two notions of closeness are provided:
//! - [`proximity`]: the proximity order, i.e. the number of leading bits two
//!   addresses share. Coarse, used for bucket placement.
//! - [`Address::prox_cmp`]: full XOR-distance comparison against a target.
//!   Fine-grained, used for nearest-neighbour selection.

use std::cmp::Ordering;

use crate::domain::{Address, ADDRESS_BITS, ADDRESS_LENGTH};

/// Proximity order of two addresses.
///
/// The index (MSB first, byte 0 first) of the first set bit of `a XOR b`,
/// i.e. the number of leading bits `a` and `b` have in common.
///
/// # Properties
/// - Symmetric: `proximity(a, b) == proximity(b, a)`
/// - Self: `proximity(a, a) == ADDRESS_BITS`
/// - Range: `0` (differ in the very first bit) to `ADDRESS_BITS`
pub fn proximity(a: &Address, b: &Address) -> usize {
    for (i, (x, y)) in a.0.iter().zip(b.0.iter()).enumerate() {
        let oxo = x ^ y;
        if oxo != 0 {
            return i * 8 + oxo.leading_zeros() as usize;
        }
    }
    ADDRESS_BITS
}

/// Full XOR distance `a XOR b`, as an address-shaped value.
///
/// Comparing two distances byte-wise (big-endian) is exactly what
/// [`Address::prox_cmp`] does.
pub fn distance(a: &Address, b: &Address) -> Address {
    let mut out = [0u8; ADDRESS_LENGTH];
    for (o, (x, y)) in out.iter_mut().zip(a.0.iter().zip(b.0.iter())) {
        *o = x ^ y;
    }
    Address(out)
}

impl Address {
    /// Compare the distances `a -> self` and `b -> self`.
    ///
    /// Returns `Less` if `a` is closer, `Greater` if `b` is closer and `Equal`
    /// if both are at the same distance (which for XOR only happens when
    /// `a == b`).
    ///
    /// Scans bytes in order and decides on the first byte where the XOR
    /// distances differ, so two addresses with equal [`proximity`] to the
    /// target are still ranked.
    pub fn prox_cmp(&self, a: &Address, b: &Address) -> Ordering {
        for i in 0..ADDRESS_LENGTH {
            let da = a.0[i] ^ self.0[i];
            let db = b.0[i] ^ self.0[i];
            if da != db {
                return da.cmp(&db);
            }
        }
        Ordering::Equal
    }

    /// [`Address::prox_cmp`] as `-1` (a closer), `0` (equal), `1` (b closer).
    pub fn prox_cmp_int(&self, a: &Address, b: &Address) -> i32 {
        self.prox_cmp(a, b) as i32
    }

    /// Proximity order of `other` relative to this address.
    pub fn proximity(&self, other: &Address) -> usize {
        proximity(self, other)
    }
}

/// Sort addresses in place, closest to `target` first.
pub fn sort_by_proximity(target: &Address, addrs: &mut [Address]) {
    addrs.sort_by(|a, b| target.prox_cmp(a, b));
}

/// The `k` addresses closest to `target`, closest first.
pub fn closest(target: &Address, addrs: &[Address], k: usize) -> Vec<Address> {
    let mut sorted = addrs.to_vec();
    sort_by_proximity(target, &mut sorted);
    sorted.truncate(k);
    sorted
}

#[cfg(test)]
mod tests;
