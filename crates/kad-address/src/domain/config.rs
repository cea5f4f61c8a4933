//! Address space configuration

use serde::{Deserialize, Serialize};

use crate::domain::ADDRESS_BITS;
use crate::error::ConfigError;

/// Configuration constants for the address space.
///
/// # Fields
///
/// - `max_prox`: proximity order at which the neighbourhood begins. All peers
///   at or beyond this order share one bin, and it is the default `prox_limit`
///   used for key ranges.
/// - `prox_bin_size`: minimum number of peers expected in the neighbourhood
///   bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressSpaceConfig {
    /// Neighbourhood proximity order (default: 8)
    pub max_prox: usize,
    /// Peers expected in the neighbourhood bin (default: 2)
    pub prox_bin_size: usize,
}

impl Default for AddressSpaceConfig {
    fn default() -> Self {
        Self {
            max_prox: 8,
            prox_bin_size: 2,
        }
    }
}

impl AddressSpaceConfig {
    /// Create a config suitable for testing (shallow neighbourhood)
    pub fn for_testing() -> Self {
        Self {
            max_prox: 4,
            prox_bin_size: 1,
        }
    }

    /// Builder-style method to set `max_prox`
    pub fn with_max_prox(mut self, max_prox: usize) -> Self {
        self.max_prox = max_prox;
        self
    }

    /// Check value bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_prox > ADDRESS_BITS {
            return Err(ConfigError::Invalid(format!(
                "max_prox {} exceeds address width {}",
                self.max_prox, ADDRESS_BITS
            )));
        }
        if self.prox_bin_size == 0 {
            return Err(ConfigError::Invalid(
                "prox_bin_size cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Bin index for a proximity order: orders at or beyond `max_prox`
    /// collapse into the neighbourhood bin.
    pub fn bin_for(&self, prox: usize) -> usize {
        prox.min(self.max_prox)
    }

    /// Whether `count` peers are too few for the neighbourhood bin.
    pub fn is_neighbourhood_underfilled(&self, count: usize) -> bool {
        count < self.prox_bin_size
    }
}
