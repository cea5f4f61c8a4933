//! Address generation at a target proximity, and key ranges
//!
//! Every randomized function comes in two forms: a `*_with` form taking an
//! injected [`ByteSource`], and a convenience form drawing from the calling
//! thread's RNG. The convenience forms are safe to call from any number of
//! threads at once since each thread owns its generator.

use serde::{Deserialize, Serialize};

use crate::adapters::RngByteSource;
use crate::domain::{proximity, Address, ADDRESS_BITS, ADDRESS_LENGTH};
use crate::ports::ByteSource;

/// Byte source that always yields the same byte.
///
/// Used by [`common_bits_addr_byte`] and [`key_range`] to fill with `0x00`/`0xff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantFill(pub u8);

impl ByteSource for ConstantFill {
    fn next_byte(&mut self) -> u8 {
        self.0
    }

    fn fill(&mut self, buf: &mut [u8]) {
        buf.fill(self.0);
    }
}

/// Random address with proximity order exactly `prox` to `reference`.
///
/// - `None`: no constraint, every byte is drawn from `source`.
/// - `Some(prox)` with `prox < ADDRESS_BITS`: bits `[0, prox)` copy
///   `reference`, bit `prox` is flipped relative to `reference`, every later
///   bit comes from `source`.
/// - `Some(prox)` with `prox >= ADDRESS_BITS`: `reference` itself, the only
///   address at full proximity.
pub fn random_address_at_with<S>(
    reference: &Address,
    prox: Option<usize>,
    source: &mut S,
) -> Address
where
    S: ByteSource + ?Sized,
{
    let Some(prox) = prox else {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        source.fill(&mut bytes);
        return Address(bytes);
    };
    if prox >= ADDRESS_BITS {
        return *reference;
    }

    let pos = prox / 8;
    let trans = prox % 8;
    // Top `trans + 1` bits are forced, the rest of the byte is random.
    let forced: u8 = 0xff << (7 - trans);
    let flip: u8 = 0x80 >> trans;

    let mut out = reference.0;
    out[pos] = ((out[pos] & forced) ^ flip) | (source.next_byte() & !forced);
    source.fill(&mut out[pos + 1..]);
    Address(out)
}

/// [`random_address_at_with`] using the thread RNG.
pub fn random_address_at(reference: &Address, prox: Option<usize>) -> Address {
    random_address_at_with(reference, prox, &mut RngByteSource::thread())
}

/// Fully random address drawn from `source`.
pub fn random_address_with<S: ByteSource + ?Sized>(source: &mut S) -> Address {
    random_address_at_with(&Address::ZERO, None, source)
}

/// Fully random address using the thread RNG.
pub fn random_address() -> Address {
    random_address_with(&mut RngByteSource::thread())
}

/// Address sharing a capped common prefix with `reference`, filled from `source`.
///
/// Let `actual = proximity(reference, other)`:
/// - `prox_limit <= actual`: keep the top `prox_limit` bits of `reference`,
///   fill every later bit from `source`.
/// - `prox_limit > actual`: keep the top `actual` bits of `reference`, flip
///   bit `actual` (the first bit where `reference` and `other` differ), fill
///   every later bit from `source`.
///
/// The boundary byte consumes one byte from `source` and each following
/// byte consumes one more. With an effective proximity of `ADDRESS_BITS`
/// nothing is left to fill and `reference` is returned.
pub fn common_bits_addr_f<S>(
    reference: &Address,
    other: &Address,
    source: &mut S,
    prox_limit: usize,
) -> Address
where
    S: ByteSource + ?Sized,
{
    let actual = proximity(reference, other);
    let capped = prox_limit <= actual;
    let prox = if capped { prox_limit } else { actual };
    if prox >= ADDRESS_BITS {
        return *reference;
    }

    let pos = prox / 8;
    let trans = prox % 8;
    let fill_mask: u8 = if capped { 0xff >> trans } else { 0x7f >> trans };

    let mut out = reference.0;
    let mut boundary = out[pos] & !fill_mask;
    if !capped {
        boundary ^= 0x80 >> trans;
    }
    boundary |= fill_mask & source.next_byte();
    out[pos] = boundary;
    source.fill(&mut out[pos + 1..]);
    Address(out)
}

/// [`common_bits_addr_f`] with random fill from the thread RNG.
pub fn common_bits_addr(reference: &Address, other: &Address, prox_limit: usize) -> Address {
    common_bits_addr_f(reference, other, &mut RngByteSource::thread(), prox_limit)
}

/// [`common_bits_addr_f`] with every filled byte set to `byte`.
pub fn common_bits_addr_byte(
    reference: &Address,
    other: &Address,
    byte: u8,
    prox_limit: usize,
) -> Address {
    common_bits_addr_f(reference, other, &mut ConstantFill(byte), prox_limit)
}

/// Inclusive range `[start, stop]` of addresses sharing a prefix with a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyRange {
    /// Lowest address in the range (prefix followed by zero bits).
    pub start: Address,
    /// Highest address in the range (prefix followed by one bits).
    pub stop: Address,
    /// Length of the shared prefix in bits.
    pub prox: usize,
}

impl KeyRange {
    /// Whether `addr` lies in `[start, stop]` under big-endian byte order.
    pub fn contains(&self, addr: &Address) -> bool {
        self.start.0 <= addr.0 && addr.0 <= self.stop.0
    }
}

impl From<KeyRange> for (Address, Address) {
    fn from(range: KeyRange) -> Self {
        (range.start, range.stop)
    }
}

/// Key range of all addresses sharing the leading
/// `min(proximity(one, other), prox_limit)` bits with `one`.
pub fn key_range(one: &Address, other: &Address, prox_limit: usize) -> KeyRange {
    let prox = proximity(one, other).min(prox_limit).min(ADDRESS_BITS);
    KeyRange {
        start: common_bits_addr_byte(one, other, 0x00, prox),
        stop: common_bits_addr_byte(one, other, 0xff, prox),
        prox,
    }
}
