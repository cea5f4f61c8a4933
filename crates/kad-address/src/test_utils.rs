//! Test utilities for code built on the address space.
//!
//! Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust
//! use kad_address::test_utils::{address_with_prefix, FixedByteSource};
//! use kad_address::{proximity, random_address_at_with, Address};
//!
//! let reference = address_with_prefix(&[0xab, 0xcd]);
//! let mut source = FixedByteSource::repeat(0x00);
//! let peer = random_address_at_with(&reference, Some(16), &mut source);
//! assert_eq!(proximity(&reference, &peer), 16);
//! ```

use crate::domain::{Address, ADDRESS_LENGTH};

pub use crate::adapters::FixedByteSource;

/// Address whose leading bytes are `prefix`, zero-padded.
///
/// A prefix longer than [`ADDRESS_LENGTH`] is truncated.
pub fn address_with_prefix(prefix: &[u8]) -> Address {
    let mut bytes = [0u8; ADDRESS_LENGTH];
    let len = prefix.len().min(ADDRESS_LENGTH);
    bytes[..len].copy_from_slice(&prefix[..len]);
    Address::new(bytes)
}

/// `base` with bit `index` (0 = MSB of byte 0) flipped.
///
/// Out-of-range indices leave `base` unchanged.
pub fn flip_bit(base: &Address, index: usize) -> Address {
    let mut out = *base;
    if let Some(byte) = out.0.get_mut(index / 8) {
        *byte ^= 0x80 >> (index % 8);
    }
    out
}
