use randomness::rng::{EntropyRng, EntropySource};
use randomness::uniform::{ByteProducer, Uniform};

// Deterministic stand-in for a secure source: an incrementing byte ramp.
struct Ramp {
    next: u8,
}

impl EntropySource for Ramp {
    fn fill(&mut self, dest: &mut [u8]) {
        for b in dest.iter_mut() {
            *b = self.next;
            self.next = self.next.wrapping_add(1);
        }
    }
}

#[test]
fn adapter_forwards_bytes_unchanged() {
    let mut rng = EntropyRng::new(Ramp { next: 0 });

    let mut out = [0u8; 8];
    rng.fill_bytes(&mut out);

    assert_eq!(out, [0, 1, 2, 3, 4, 5, 6, 7]);

    rng.fill_bytes(&mut out[..4]);
    assert_eq!(out[..4], [8, 9, 10, 11]);
}

#[test]
fn os_backed_engine_produces_live_bytes() {
    let mut rng = EntropyRng::from_os();

    let mut first = [0u8; 32];
    let mut second = [0u8; 32];

    rng.fill_bytes(&mut first);
    rng.fill_bytes(&mut second);

    assert_ne!(first, [0u8; 32]);
    assert_ne!(first, second);
}

#[test]
fn drawing_surface_works_over_the_adapter() {
    let mut rng = EntropyRng::from_os();

    for _ in 0..1_000 {
        let value = rng.next_between(-50, 50).unwrap();
        assert!((-50..50).contains(&value));

        let unit = rng.next_f64();
        assert!((0.0..1.0).contains(&unit));
    }
}
