//! Unbiased conversion from raw random bytes to consumer-facing values.
//!
//! This module is the algorithmic core of the crate. It defines the
//! [`ByteProducer`] capability — the single operation every engine
//! implements — and derives the full drawing surface from it:
//!
//! - ranged integers, via rejection-before-modulo sampling
//! - doubles in `[0, 1)`, via exponent-field bit surgery
//! - normally distributed doubles, via the Box–Muller transform
//!
//! Design goals:
//! - Exact bias removal, not approximation
//! - Minimal byte consumption (word width matched to the range size)
//! - One trait seam, so engines stay trivial
pub(crate) mod double;

mod convert;
mod normal;
mod producer;

pub use convert::Uniform;
pub use normal::Normal;
pub use producer::ByteProducer;
