//! The byte-production capability that every engine implements.

/// A source of uniformly distributed random bytes.
///
/// This is the single seam between the conversion layer and the concrete
/// engines: anything that can fill a buffer with unbiased bytes gains the
/// whole [`Uniform`](crate::uniform::Uniform) surface through the blanket
/// implementation.
///
/// # Contract
///
/// - Every byte written must be uniformly distributed, assuming the backing
///   primitive honours its own contract.
/// - The call is synchronous and always fills the entire buffer.
/// - Implementations are free to be deterministic (keystream engines) or
///   not (entropy adapters).
///
/// # Concurrency
///
/// Implementations are not required to be thread-safe. The documented usage
/// pattern is one engine instance per thread of execution; see
/// [`rng::local`](crate::rng::local) for the per-thread convenience wrapper.
pub trait ByteProducer {
    /// Fills `dest` with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}
