//! # Adapters
//!
//! Concrete implementations of the driven ports.
//!
//! | Port | Test Adapter | Production Adapter |
//! |------|--------------|-------------------|
//! | `ByteSource` | `FixedByteSource` | `RngByteSource` |
//! | `ConfigProvider` | `StaticConfigProvider` | `TomlConfigProvider` (feature `config`) |

/// Configuration providers
pub mod config;
/// Byte source adapters
pub mod random;

pub use config::StaticConfigProvider;
pub use random::{FixedByteSource, RngByteSource};

#[cfg(feature = "config")]
pub use config::TomlConfigProvider;
