//! Bit-level construction of uniform doubles.
//!
//! A double in `[1, 2)` has a fixed sign bit, a fixed exponent field and 52
//! free mantissa bits. Overwriting the exponent-carrying bytes of 8 random
//! bytes therefore yields a uniform value in `[1, 2)`, and subtracting 1.0
//! gives `[0, 1)` with full mantissa entropy. This beats dividing a random
//! integer by a constant, which wastes precision near zero.
//!
//! The two exponent-carrying byte positions depend on the host byte order.
//! They are located once per process by probing the serialized form of the
//! value `1.0`, whose representation contains exactly one `0x3F` byte and
//! one `0xF0` byte.

use std::sync::OnceLock;

use crate::uniform::producer::ByteProducer;

/// Positions of the `0x3F` and `0xF0` bytes in the host encoding of `1.0`.
fn exponent_bytes() -> (usize, usize) {
    static POSITIONS: OnceLock<(usize, usize)> = OnceLock::new();

    *POSITIONS.get_or_init(|| {
        let probe = 1.0f64.to_ne_bytes();

        let mut high = 0;
        let mut low = 0;

        for (i, &b) in probe.iter().enumerate() {
            match b {
                0x3F => high = i,
                0xF0 => low = i,
                _ => {},
            }
        }

        (high, low)
    })
}

/// Draws a uniformly distributed double in `[0, 1)` from `producer`.
pub(crate) fn random_unit_f64<P: ByteProducer + ?Sized>(producer: &mut P) -> f64 {
    let mut data = [0u8; size_of::<f64>()];
    producer.fill_bytes(&mut data);

    let (high, low) = exponent_bytes();

    // Force sign 0 and exponent bias+0, keeping the 52 mantissa bits random.
    // The result is uniform in [1, 2).
    data[high] = 0x3F;
    data[low] = (data[low] & 0x0F) | 0xF0;

    f64::from_ne_bytes(data) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u8);

    impl ByteProducer for Fixed {
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0);
        }
    }

    #[test]
    fn probe_finds_both_exponent_bytes() {
        let (high, low) = exponent_bytes();
        let probe = 1.0f64.to_ne_bytes();

        assert_eq!(probe[high], 0x3F);
        assert_eq!(probe[low], 0xF0);
        assert_ne!(high, low);
    }

    #[test]
    fn all_zero_mantissa_is_zero() {
        assert_eq!(random_unit_f64(&mut Fixed(0x00)), 0.0);
    }

    #[test]
    fn all_one_mantissa_is_just_below_one() {
        let value = random_unit_f64(&mut Fixed(0xFF));

        assert!(value < 1.0);
        assert!(value > 0.9999);
    }
}
