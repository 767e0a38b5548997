//! Counter-mode keystream generation over a one-way hash function.
//!
//! This engine turns any fixed-output hash into an unbounded deterministic
//! byte stream, following the Counter (CTR) construction of a block cipher:
//! the seed is hashed once to form the key, and each subsequent block is the
//! hash of the key XORed with an incrementing counter of the same length.
//!
//! Two deliberate properties of the construction:
//!
//! - **Block zero is the key itself**, not `hash(key)`. The very first
//!   bytes produced are the bytes of `hash(seed)`.
//! - The counter strictly increases with every regenerated block, so no two
//!   blocks within one counter period share a pre-image. Distinctness of
//!   the keystream blocks then rests entirely on the wrapped hash avoiding
//!   collisions, which this module treats as an external guarantee.

use crate::error::{Error, Result};
use crate::uniform::ByteProducer;

/// A one-way hash function with a fixed output length.
///
/// The engine assumes the usual contract of a cryptographic hash:
/// deterministic, fixed-length output, infeasible to invert, avalanche
/// behaviour on input changes. None of that is re-derived here; a weak
/// hash yields a correspondingly weak keystream.
pub trait HashFn {
    /// Hashes `data` and returns the digest.
    fn digest(&self, data: &[u8]) -> Vec<u8>;
}

/// Any `Fn(&[u8]) -> Vec<u8>` closure is usable as a hash primitive.
impl<F> HashFn for F
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        self(data)
    }
}

/// Deterministic random byte generator built from a hash function.
///
/// Given the same hash and the same seed, two instances produce
/// byte-for-byte identical output regardless of how the reads are chunked,
/// which makes the engine suitable for reproducible test fixtures.
///
/// Instances are not meant to be shared across threads: the cursor and
/// counter are plain unsynchronized state. Construct one engine per
/// independent stream.
pub struct HashRng<H: HashFn> {
    hash: H,

    /// `hash(seed)`; immutable for the engine's lifetime.
    key: Vec<u8>,

    /// Little-endian block counter, same length as `key`.
    ///
    /// Wraps around after 2^(8 * len) blocks, silently returning the stream
    /// to its initial state. At realistic digest sizes (16 bytes and up)
    /// the wrap is unreachable, so it is left unguarded.
    counter: Vec<u8>,

    /// Most recently generated keystream block.
    block: Vec<u8>,

    /// Read cursor into `block`; equal to `block.len()` when exhausted.
    offset: usize,
}

impl<H: HashFn> HashRng<H> {
    /// Creates an engine with an empty seed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDigest`] if the hash produces no output.
    pub fn new(hash: H) -> Result<Self> {
        Self::from_seed(hash, &[])
    }

    /// Creates an engine from seed bytes.
    ///
    /// The seed is consumed once, to derive the key; it is never used
    /// again afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDigest`] if the hash produces no output.
    pub fn from_seed(hash: H, seed: &[u8]) -> Result<Self> {
        let key = hash.digest(seed);

        if key.is_empty() {
            return Err(Error::EmptyDigest);
        }

        Ok(Self {
            counter: vec![0u8; key.len()],
            block: key.clone(),
            key,
            hash,
            offset: 0,
        })
    }

    /// Advances the counter and hashes the next pre-image into `block`.
    fn next_block(&mut self) {
        let mut carry = true;
        for (i, c) in self.counter.iter_mut().enumerate() {
            if carry {
                *c = c.wrapping_add(1);
                carry = *c == 0;
            }

            self.block[i] = self.key[i] ^ *c;
        }

        self.block = self.hash.digest(&self.block);
        self.offset = 0;
    }
}

impl<H: HashFn> ByteProducer for HashRng<H> {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut written = 0;

        while written < dest.len() {
            if self.offset >= self.block.len() {
                self.next_block();
            }

            let take = (dest.len() - written).min(self.block.len() - self.offset);
            dest[written..written + take]
                .copy_from_slice(&self.block[self.offset..self.offset + take]);

            self.offset += take;
            written += take;
        }
    }
}
