//! Error types shared across the crate.
//!
//! The error surface is intentionally small. The only recoverable failures
//! are caller mistakes (an inverted range) and a degenerate hash collaborator
//! detected at construction time. Failures inside the collaborators
//! themselves (a broken OS entropy source, a panicking hash) are contract
//! violations and are not caught or wrapped here.

use std::fmt;

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that may occur when drawing random values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A ranged draw was requested with an upper bound below the lower bound.
    InvalidRange {
        /// Lower bound (inclusive) that was requested.
        min: i32,

        /// Upper bound (exclusive) that was requested.
        max: i32,
    },

    /// The wrapped hash primitive produced a zero-length digest.
    ///
    /// A keystream engine cannot operate without a block to read from, so
    /// this is rejected once, at construction, rather than looping forever
    /// on the first draw.
    EmptyDigest,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRange { min, max } => {
                write!(f, "invalid range: upper bound {max} is below lower bound {min}")
            },
            Error::EmptyDigest => write!(f, "hash primitive produced an empty digest"),
        }
    }
}

impl std::error::Error for Error {}
