use randomness::rng::HashRng;
use randomness::uniform::Uniform;

use criterion::{Criterion, criterion_group, criterion_main};
use sha2::{Digest, Sha256};
use std::hint::black_box;

pub fn bench_uniform(c: &mut Criterion) {
    let mut rng =
        HashRng::from_seed(|data: &[u8]| Sha256::digest(data).to_vec(), b"bench").unwrap();

    c.bench_function("next_between small range", |b| {
        b.iter(|| rng.next_between(black_box(0), black_box(100)).unwrap())
    });

    c.bench_function("next_between wide range", |b| {
        b.iter(|| rng.next_between(black_box(i32::MIN), black_box(i32::MAX)).unwrap())
    });

    c.bench_function("next_f64", |b| b.iter(|| rng.next_f64()));
}

criterion_group!(benches, bench_uniform);
criterion_main!(benches);
