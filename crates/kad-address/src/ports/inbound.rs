//! # Driving Ports (Inbound API)
//!
//! The address space operations a routing table or lookup algorithm uses,
//! bound to the local node's address.

use crate::domain::{Address, KeyRange};

/// Address space API anchored at a local address.
///
/// # Example
///
/// ```rust
/// use kad_address::ports::AddressSpaceApi;
/// use kad_address::{Address, AddressSpace, AddressSpaceConfig};
///
/// fn place<T: AddressSpaceApi>(api: &T, peer: Address) -> usize {
///     api.bin_of(&peer)
/// }
///
/// let space = AddressSpace::new(Address::ZERO, AddressSpaceConfig::default()).unwrap();
/// let mut peer = Address::ZERO;
/// peer.0[0] = 0b0010_0000;
/// assert_eq!(place(&space, peer), 2);
/// ```
pub trait AddressSpaceApi {
    /// The local address every operation is relative to.
    fn local_address(&self) -> Address;

    /// Proximity order of `other` relative to the local address.
    fn proximity_to(&self, other: &Address) -> usize;

    /// Routing bin for `other`: its proximity order, with every order at or
    /// beyond the configured neighbourhood depth collapsed into one bin.
    fn bin_of(&self, other: &Address) -> usize;

    /// Key range of addresses sharing the local prefix with `other`, limited
    /// to the configured neighbourhood depth.
    fn key_range_to(&self, other: &Address) -> KeyRange;

    /// Random address that falls into routing bin `bin`, used when refreshing
    /// that bin.
    fn refresh_target(&mut self, bin: usize) -> Address;

    /// Whether `peers` hold fewer neighbourhood-bin members than the
    /// configured bin size. The local address itself is not counted.
    fn neighbourhood_underfilled(&self, peers: &[Address]) -> bool;
}
