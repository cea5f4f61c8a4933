//! # Address Space Service
//!
//! High-level service implementing the `AddressSpaceApi` port.
//!
//! Binds the pure domain functions to a local address, a validated
//! `AddressSpaceConfig` and an injected `ByteSource`, so routing code can ask
//! "which bin does this peer go in" or "give me a refresh target for bin 5"
//! without threading the local address and limits through every call.

use std::cmp::Ordering;

use rand::rngs::ThreadRng;
use tracing::{debug, trace, warn};

use crate::adapters::RngByteSource;
use crate::domain::{
    closest, common_bits_addr_f, key_range, proximity, random_address_at_with,
    random_address_with, Address, AddressSpaceConfig, KeyRange, ADDRESS_BITS,
};
use crate::error::ConfigError;
use crate::ports::{AddressSpaceApi, ByteSource, ConfigProvider};

/// Address space anchored at the local node.
///
/// # Example
///
/// ```rust
/// use kad_address::{Address, AddressSpace, AddressSpaceApi, AddressSpaceConfig};
///
/// let local = Address::new([0x11; 32]);
/// let mut space = AddressSpace::new(local, AddressSpaceConfig::default()).unwrap();
///
/// let target = space.refresh_target(3);
/// assert_eq!(space.bin_of(&target), 3);
/// ```
#[derive(Debug)]
pub struct AddressSpace<S = RngByteSource<ThreadRng>> {
    local: Address,
    config: AddressSpaceConfig,
    source: S,
}

impl AddressSpace {
    /// Create an address space drawing random bytes from the thread RNG.
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` if the config fails validation.
    pub fn new(local: Address, config: AddressSpaceConfig) -> Result<Self, ConfigError> {
        Self::with_source(local, config, RngByteSource::thread())
    }

    /// Create an address space from a configuration provider.
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` if the provided config fails validation.
    pub fn from_provider(
        local: Address,
        provider: &dyn ConfigProvider,
    ) -> Result<Self, ConfigError> {
        Self::new(local, provider.get_address_config())
    }
}

impl<S: ByteSource> AddressSpace<S> {
    /// Create an address space with an explicit byte source.
    pub fn with_source(
        local: Address,
        config: AddressSpaceConfig,
        source: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(local = %local, max_prox = config.max_prox, "address space created");
        Ok(Self {
            local,
            config,
            source,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &AddressSpaceConfig {
        &self.config
    }

    /// Compare the distances of `a` and `b` to the local address.
    pub fn prox_cmp(&self, a: &Address, b: &Address) -> Ordering {
        self.local.prox_cmp(a, b)
    }

    /// The `k` candidates closest to the local address.
    pub fn closest(&self, candidates: &[Address], k: usize) -> Vec<Address> {
        closest(&self.local, candidates, k)
    }

    /// Key range towards `other` with an explicit proximity limit.
    pub fn key_range_with_limit(&self, other: &Address, prox_limit: usize) -> KeyRange {
        let range = key_range(&self.local, other, prox_limit);
        debug!(
            other = %other,
            prox = range.prox,
            start = %range.start,
            stop = %range.stop,
            "key range computed"
        );
        range
    }

    /// Random address at exactly proximity `prox` to the local address.
    ///
    /// Orders at or beyond `ADDRESS_BITS` only admit the local address itself.
    pub fn random_address_at(&mut self, prox: usize) -> Address {
        if prox >= ADDRESS_BITS {
            warn!(prox, max = ADDRESS_BITS, "proximity clamped to address width");
        }
        random_address_at_with(&self.local, Some(prox), &mut self.source)
    }

    /// Unconstrained random address.
    pub fn random_address(&mut self) -> Address {
        random_address_with(&mut self.source)
    }
}

impl<S: ByteSource> AddressSpaceApi for AddressSpace<S> {
    fn local_address(&self) -> Address {
        self.local
    }

    fn proximity_to(&self, other: &Address) -> usize {
        proximity(&self.local, other)
    }

    fn bin_of(&self, other: &Address) -> usize {
        self.config.bin_for(self.proximity_to(other))
    }

    fn key_range_to(&self, other: &Address) -> KeyRange {
        self.key_range_with_limit(other, self.config.max_prox)
    }

    fn refresh_target(&mut self, bin: usize) -> Address {
        let max_prox = self.config.max_prox;
        if bin < max_prox {
            let target = random_address_at_with(&self.local, Some(bin), &mut self.source);
            trace!(bin, target = %target, "refresh target");
            return target;
        }

        if bin > max_prox {
            warn!(bin, max_prox, "bin beyond neighbourhood depth, targeting neighbourhood");
        }
        // Anything sharing at least `max_prox` bits lands in the neighbourhood bin.
        let target = common_bits_addr_f(&self.local, &self.local, &mut self.source, max_prox);
        trace!(bin = max_prox, target = %target, "neighbourhood refresh target");
        target
    }

    fn neighbourhood_underfilled(&self, peers: &[Address]) -> bool {
        let max_prox = self.config.max_prox;
        let count = peers
            .iter()
            .filter(|peer| **peer != self.local && self.bin_of(peer) == max_prox)
            .count();
        let underfilled = self.config.is_neighbourhood_underfilled(count);
        if underfilled {
            debug!(
                count,
                prox_bin_size = self.config.prox_bin_size,
                "neighbourhood bin underfilled"
            );
        }
        underfilled
    }
}
