//! Concrete random byte engines.
//!
//! Every engine here implements the [`ByteProducer`](crate::uniform::ByteProducer)
//! capability and nothing else; the drawing surface comes from the
//! conversion layer in [`uniform`](crate::uniform).
//!
//! Two engines are provided:
//!
//! - [`HashRng`]: a deterministic counter-mode keystream over a pluggable
//!   one-way hash function. Same hash, same seed, same stream.
//! - [`EntropyRng`]: a pass-through over a secure byte source, with
//!   [`OsEntropy`] wiring it to the operating system.
//!
//! Engines are single-threaded by design; the [`local`] module provides a
//! per-thread instance for callers that do not want to thread one through
//! explicitly.

pub mod local;

mod entropy;
mod keystream;

pub use entropy::{EntropyRng, EntropySource, OsEntropy};
pub use keystream::{HashFn, HashRng};
