//! Pass-through engine over an external secure byte source.

use crate::os::sys_random;
use crate::uniform::ByteProducer;

/// A source of cryptographically secure bytes.
///
/// The source is assumed infallible from the caller's viewpoint: a backing
/// primitive that cannot deliver bytes is a broken platform, and the
/// implementation should treat that as fatal rather than report it.
pub trait EntropySource {
    /// Fills `dest` in place with cryptographically secure bytes.
    fn fill(&mut self, dest: &mut [u8]);
}

/// The operating system's entropy pool as an [`EntropySource`].
///
/// Backed by `getrandom` on Linux, `arc4random_buf` on macOS and
/// `BCryptGenRandom` on Windows.
///
/// # Panics
///
/// Panics if the underlying OS call fails, which indicates a critical
/// platform problem and is considered unrecoverable.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) {
        sys_random(dest);
    }
}

/// Byte producer that forwards every request to an [`EntropySource`].
///
/// This is the secure, non-deterministic counterpart of
/// [`HashRng`](crate::rng::HashRng): it holds no state of its own beyond
/// the wrapped source, and simply hands each buffer to it.
pub struct EntropyRng<S: EntropySource> {
    source: S,
}

impl<S: EntropySource> EntropyRng<S> {
    /// Wraps a secure byte source.
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl EntropyRng<OsEntropy> {
    /// Creates an engine backed directly by the operating system.
    pub fn from_os() -> Self {
        Self::new(OsEntropy)
    }
}

impl Default for EntropyRng<OsEntropy> {
    fn default() -> Self {
        Self::from_os()
    }
}

impl<S: EntropySource> ByteProducer for EntropyRng<S> {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.source.fill(dest);
    }
}
