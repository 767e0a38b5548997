//! Deterministic, pluggable random number generation.
//!
//! This crate derives every random value it hands out — ranged integers,
//! unit-interval doubles, byte buffers — from a single capability: a source
//! of uniformly random *bytes*. The hard part it solves is doing that
//! conversion without leaking bias anywhere, and it does so with exact
//! guarantees rather than approximations.
//!
//! # Module overview
//!
//! - `uniform`
//!   The algorithmic core. Defines the [`ByteProducer`] capability and
//!   converts it into the consumer-facing drawing surface: unbiased ranged
//!   integers via rejection-before-modulo sampling, uniform doubles in
//!   `[0, 1)` via exponent-field bit surgery, and normally distributed
//!   doubles via the Box–Muller transform.
//!
//! - `rng`
//!   The concrete engines. [`HashRng`] builds an unbounded deterministic
//!   keystream from any one-way hash function using a counter-mode
//!   construction; [`EntropyRng`] forwards to a secure byte source, with
//!   [`OsEntropy`] wiring it to the operating system. A per-thread
//!   convenience instance lives in [`rng::local`].
//!
//! - `error`
//!   The crate's small error surface: inverted ranges and degenerate hash
//!   collaborators. Everything else is treated as a broken contract and
//!   left to propagate.
//!
//! # Plugging in a primitive
//!
//! The hash primitive is anything implementing [`HashFn`] — including a
//! plain closure:
//!
//! ```no_run
//! use randomness::{HashRng, Uniform};
//!
//! # fn some_hash(_: &[u8]) -> Vec<u8> { vec![0u8; 32] }
//! let hash = |data: &[u8]| some_hash(data);
//! let mut rng = HashRng::from_seed(hash, b"fixture seed").unwrap();
//!
//! let die = rng.next_between(1, 7).unwrap();
//! let unit = rng.next_f64();
//! ```
//!
//! # Design goals
//!
//! - Mathematically exact bias removal in every conversion
//! - One trait seam between conversion and byte production
//! - Deterministic engines usable as reproducible test fixtures
//! - Minimal and explicit API surface
//!
//! # What this crate is not
//!
//! It is not a statistical-testing suite, not a reviewed key-derivation
//! function, and it claims no indistinguishability from a true random
//! oracle. The conversions are unbiased *given* an unbiased byte stream;
//! the strength of that stream is the plugged-in primitive's business.

mod os;

pub mod error;
pub mod rng;
pub mod uniform;

pub use error::{Error, Result};
pub use rng::{EntropyRng, EntropySource, HashFn, HashRng, OsEntropy};
pub use uniform::{ByteProducer, Normal, Uniform};
