//! Unbiased conversion from raw bytes to integers and floating-point values.
//!
//! This module turns the [`ByteProducer`] capability into the consumer-facing
//! drawing operations. The integer path uses rejection-before-modulo: draws
//! above a per-range threshold are discarded so that the accepted values
//! divide evenly into the target range, which removes modulo bias exactly
//! rather than approximately.
//!
//! The word width used for a draw is the smallest unsigned type that can
//! hold the range size (1, 2 or 4 bytes), so small ranges consume as few
//! bytes as possible from the producer.

use crate::error::{Error, Result};
use crate::uniform::double::random_unit_f64;
use crate::uniform::producer::ByteProducer;

/// Consumer-facing drawing operations, available on every [`ByteProducer`].
///
/// All methods are provided; implementors only supply
/// [`fill_bytes`](ByteProducer::fill_bytes).
///
/// # Bias guarantees
///
/// Given an unbiased byte stream, every residue of a ranged draw is exactly
/// equally likely, and [`next_f64`](Uniform::next_f64) carries the full 52
/// random mantissa bits a double can hold.
pub trait Uniform: ByteProducer {
    /// Draws a non-negative integer in `[0, i32::MAX)`.
    fn next_int(&mut self) -> i32 {
        draw_range(self, 0, i32::MAX)
    }

    /// Draws an integer in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `max` is negative.
    fn next_below(&mut self, max: i32) -> Result<i32> {
        self.next_between(0, max)
    }

    /// Draws an integer in `[min, max)`.
    ///
    /// `max == min` is a degenerate single-value range: `min` is returned
    /// and no bytes are consumed.
    ///
    /// The rejection loop has no iteration cap. Its acceptance probability
    /// is always above one half, so the expected number of draws is below
    /// two; a cap would reintroduce the bias the rejection removes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `max < min`.
    fn next_between(&mut self, min: i32, max: i32) -> Result<i32> {
        if max < min {
            return Err(Error::InvalidRange { min, max });
        }

        Ok(draw_range(self, min, max))
    }

    /// Draws a uniformly distributed double in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        random_unit_f64(self)
    }
}

impl<P: ByteProducer + ?Sized> Uniform for P {}

/// Draws an integer in `[min, max)`, assuming `max >= min`.
///
/// The range size always fits in a `u32` because the bounds are `i32`, and
/// the final addition is performed with wrapping arithmetic so that
/// full-domain ranges such as `[i32::MIN, i32::MAX)` come out exact.
fn draw_range<P: ByteProducer + ?Sized>(producer: &mut P, min: i32, max: i32) -> i32 {
    debug_assert!(max >= min);

    if max == min {
        return min;
    }

    let diff = max.wrapping_sub(min) as u32;

    // Each branch computes the rejection threshold in the next-wider type:
    // WORD_MAX + 1 overflows the word itself.
    let residue = if diff <= u8::MAX as u32 {
        let diff = diff as u8;
        let chop = (u8::MAX as u16 - (u8::MAX as u16 + 1) % diff as u16) as u8;

        let mut rand = next_u8(producer);
        while rand > chop {
            rand = next_u8(producer);
        }

        (rand % diff) as u32
    } else if diff <= u16::MAX as u32 {
        let diff = diff as u16;
        let chop = (u16::MAX as u32 - (u16::MAX as u32 + 1) % diff as u32) as u16;

        let mut rand = next_u16(producer);
        while rand > chop {
            rand = next_u16(producer);
        }

        (rand % diff) as u32
    } else {
        let chop = (u32::MAX as u64 - (u32::MAX as u64 + 1) % diff as u64) as u32;

        let mut rand = next_u32(producer);
        while rand > chop {
            rand = next_u32(producer);
        }

        rand % diff
    };

    min.wrapping_add(residue as i32)
}

fn next_u8<P: ByteProducer + ?Sized>(producer: &mut P) -> u8 {
    let mut data = [0u8; 1];
    producer.fill_bytes(&mut data);
    data[0]
}

fn next_u16<P: ByteProducer + ?Sized>(producer: &mut P) -> u16 {
    let mut data = [0u8; 2];
    producer.fill_bytes(&mut data);
    u16::from_ne_bytes(data)
}

fn next_u32<P: ByteProducer + ?Sized>(producer: &mut P) -> u32 {
    let mut data = [0u8; 4];
    producer.fill_bytes(&mut data);
    u32::from_ne_bytes(data)
}
