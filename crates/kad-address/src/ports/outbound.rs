//! # Driven Ports (Outbound SPI)
//!
//! These are the interfaces the address space **requires** from its host.

use crate::domain::AddressSpaceConfig;

/// Source of fill bytes for address generation.
///
/// Every randomized operation takes its bytes from an injected `ByteSource`
/// instead of a hidden global generator, so tests can supply a deterministic
/// sequence and `key_range` can reuse the same transform with constant fill.
///
/// # Thread Safety
///
/// Methods take `&mut self`: a source is owned by one caller at a time.
/// Concurrent callers each use their own source (e.g. one per thread via
/// `RngByteSource::thread()`), so there is no shared generator to race on.
///
/// # Example Implementation
///
/// ```rust
/// use kad_address::ByteSource;
///
/// struct Counter(u8);
///
/// impl ByteSource for Counter {
///     fn next_byte(&mut self) -> u8 {
///         self.0 = self.0.wrapping_add(1);
///         self.0
///     }
/// }
///
/// let mut counter = Counter(0);
/// let mut buf = [0u8; 3];
/// counter.fill(&mut buf);
/// assert_eq!(buf, [1, 2, 3]);
/// ```
pub trait ByteSource {
    /// Produce the next fill byte.
    fn next_byte(&mut self) -> u8;

    /// Fill `buf` with consecutive bytes from this source.
    fn fill(&mut self, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b = self.next_byte();
        }
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> u8 {
        (**self).next_byte()
    }

    fn fill(&mut self, buf: &mut [u8]) {
        (**self).fill(buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn next_byte(&mut self) -> u8 {
        (**self).next_byte()
    }

    fn fill(&mut self, buf: &mut [u8]) {
        (**self).fill(buf)
    }
}

/// Abstract interface for configuration loading.
///
/// Allows different configuration sources (file, static, etc.)
pub trait ConfigProvider: Send + Sync {
    /// Get the address space configuration.
    fn get_address_config(&self) -> AddressSpaceConfig;
}
