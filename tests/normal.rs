use randomness::rng::HashRng;
use randomness::uniform::{ByteProducer, Normal};

use sha2::{Digest, Sha256};

fn fixture(seed: &[u8]) -> impl ByteProducer {
    HashRng::from_seed(|data: &[u8]| Sha256::digest(data).to_vec(), seed).unwrap()
}

#[test]
fn standard_normal_is_centered() {
    let samples = 100_000;
    let mut rng = fixture(b"standard normal");

    let mut sum = 0.0;
    let mut within_one_sigma = 0u32;

    for _ in 0..samples {
        let value = rng.next_f64_standard_normal();
        sum += value;

        if value.abs() <= 1.0 {
            within_one_sigma += 1;
        }
    }

    let mean = sum / samples as f64;
    let fraction = within_one_sigma as f64 / samples as f64;

    assert!(mean.abs() < 0.02, "sample mean {mean} too far from 0");
    assert!(
        (fraction - 0.6827).abs() < 0.01,
        "{fraction} of samples within one sigma, expected ~0.68"
    );
}

#[test]
fn normal_honours_mean_and_variance() {
    let samples = 100_000;
    let mut rng = fixture(b"scaled normal");

    let mut sum = 0.0;
    for _ in 0..samples {
        sum += rng.next_f64_normal(10.0, 2.0);
    }

    let mean = sum / samples as f64;

    assert!((mean - 10.0).abs() < 0.05, "sample mean {mean} too far from 10");
}
