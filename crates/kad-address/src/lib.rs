//! # Kademlia Address Space
//!
//! Address-space primitives for a Kademlia-style DHT: a fixed-width 256-bit
//! address, the XOR proximity metric, and the operations built on it.
//!
//! - `proximity(a, b)`: number of leading bits `a` and `b` share (bucket placement)
//! - `Address::prox_cmp`: full XOR-distance ranking against a target (neighbour selection)
//! - `random_address_at`: random address at an exact proximity order
//! - `key_range`: inclusive range of addresses sharing a prefix with a reference
//!
//! ## Architecture
//!
//! - **Domain Layer:** pure functions, no I/O, no shared state
//! - **Ports Layer:** `ByteSource` (injected fill bytes), `ConfigProvider`,
//!   `AddressSpaceApi`
//! - **Service Layer:** `AddressSpace`, the API anchored at a local address
//! - **Adapters Layer:** `rand`-backed and scripted byte sources, config providers
//!
//! ## Feature Flags
//!
//! - `config` - TOML configuration loading (`TomlConfigProvider`)
//! - `test-utils` - deterministic byte sources for downstream tests
//!
//! ## Example
//!
//! ```rust
//! use kad_address::{key_range, proximity, random_address_at, Address, ADDRESS_BITS};
//!
//! let local: Address = "8000000000000000000000000000000000000000000000000000000000000000"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(proximity(&local, &Address::ZERO), 0);
//! assert_eq!(proximity(&local, &local), ADDRESS_BITS);
//!
//! let peer = random_address_at(&local, Some(12));
//! assert_eq!(proximity(&local, &peer), 12);
//!
//! let range = key_range(&local, &peer, 8);
//! assert!(range.contains(&local));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

/// Test utilities (scripted byte sources)
/// Requires feature: `test-utils`
#[cfg(feature = "test-utils")]
pub mod test_utils;

// Domain
pub use domain::{
    closest, common_bits_addr, common_bits_addr_byte, common_bits_addr_f, distance, key_range,
    proximity, random_address, random_address_at, random_address_at_with, random_address_with,
    sort_by_proximity, Address, AddressSpaceConfig, ConstantFill, KeyRange, ADDRESS_BITS,
    ADDRESS_LENGTH,
};

// Errors
pub use error::{AddressError, ConfigError};

// Port traits
pub use ports::{AddressSpaceApi, ByteSource, ConfigProvider};

// Service
pub use service::AddressSpace;

// Adapters
pub use adapters::{RngByteSource, StaticConfigProvider};

#[cfg(feature = "config")]
pub use adapters::TomlConfigProvider;
