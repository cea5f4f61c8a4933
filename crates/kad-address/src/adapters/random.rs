//! Byte Source Adapters

use crate::ports::ByteSource;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};

/// Fill bytes from any `rand` generator.
///
/// Bytes are uniform over the full `0..=255` range.
///
/// # Example
///
/// ```rust
/// use kad_address::adapters::RngByteSource;
/// use kad_address::ByteSource;
///
/// let mut a = RngByteSource::seeded(7);
/// let mut b = RngByteSource::seeded(7);
/// assert_eq!(a.next_byte(), b.next_byte()); // Same seed, same stream
/// ```
#[derive(Debug, Clone)]
pub struct RngByteSource<R> {
    rng: R,
}

impl<R: RngCore> RngByteSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Return the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngByteSource<ThreadRng> {
    /// Source backed by the calling thread's generator.
    ///
    /// Each thread has its own generator, so sources created on different
    /// threads never share state.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngByteSource<StdRng> {
    /// Deterministic source for repeatable simulations and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// `StdRng` seeded from OS entropy. `Send`, unlike [`RngByteSource::thread`].
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: RngCore> ByteSource for RngByteSource<R> {
    fn next_byte(&mut self) -> u8 {
        self.rng.gen()
    }

    fn fill(&mut self, buf: &mut [u8]) {
        self.rng.fill_bytes(buf);
    }
}

/// Scripted byte source for deterministic testing.
///
/// Yields the configured bytes in order and starts over once exhausted.
/// An empty script yields `0x00` forever.
///
/// # Example
///
/// ```rust
/// use kad_address::adapters::FixedByteSource;
/// use kad_address::ByteSource;
///
/// let mut source = FixedByteSource::new(vec![0xaa, 0x55]);
/// assert_eq!(source.next_byte(), 0xaa);
/// assert_eq!(source.next_byte(), 0x55);
/// assert_eq!(source.next_byte(), 0xaa);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedByteSource {
    bytes: Vec<u8>,
    cursor: usize,
}

impl FixedByteSource {
    /// Create a source cycling through `bytes`.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, cursor: 0 }
    }

    /// Source repeating a single byte.
    pub fn repeat(byte: u8) -> Self {
        Self::new(vec![byte])
    }

    /// Number of bytes handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl ByteSource for FixedByteSource {
    fn next_byte(&mut self) -> u8 {
        if self.bytes.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let b = self.bytes[self.cursor % self.bytes.len()];
        self.cursor += 1;
        b
    }
}
