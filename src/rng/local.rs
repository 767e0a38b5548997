//! Per-thread convenience instance.
//!
//! Engines in this crate are single-threaded by design, so the convenience
//! surface hands every thread its own OS-backed instance instead of sharing
//! one behind a lock. The instance lives for the thread's lifetime and is
//! never visible to other threads; do not smuggle references across.

use std::cell::RefCell;

use crate::error::Result;
use crate::rng::entropy::{EntropyRng, OsEntropy};
use crate::uniform::{ByteProducer, Uniform};

thread_local! {
    static LOCAL: RefCell<EntropyRng<OsEntropy>> = RefCell::new(EntropyRng::from_os());
}

/// Draws a non-negative integer in `[0, i32::MAX)` from this thread's
/// instance.
pub fn next_int() -> i32 {
    LOCAL.with(|rng| rng.borrow_mut().next_int())
}

/// Draws an integer in `[0, max)` from this thread's instance.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`](crate::Error::InvalidRange) if `max` is
/// negative.
pub fn next_below(max: i32) -> Result<i32> {
    LOCAL.with(|rng| rng.borrow_mut().next_below(max))
}

/// Draws an integer in `[min, max)` from this thread's instance.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`](crate::Error::InvalidRange) if
/// `max < min`.
pub fn next_between(min: i32, max: i32) -> Result<i32> {
    LOCAL.with(|rng| rng.borrow_mut().next_between(min, max))
}

/// Draws a double in `[0, 1)` from this thread's instance.
pub fn next_f64() -> f64 {
    LOCAL.with(|rng| rng.borrow_mut().next_f64())
}

/// Fills `dest` with random bytes from this thread's instance.
pub fn fill_bytes(dest: &mut [u8]) {
    LOCAL.with(|rng| rng.borrow_mut().fill_bytes(dest));
}
