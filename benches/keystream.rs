use randomness::rng::HashRng;
use randomness::uniform::ByteProducer;

use criterion::{Criterion, criterion_group, criterion_main};
use sha2::{Digest, Sha256};
use std::hint::black_box;

pub fn bench_keystream(c: &mut Criterion) {
    let mut rng =
        HashRng::from_seed(|data: &[u8]| Sha256::digest(data).to_vec(), b"bench").unwrap();

    c.bench_function("keystream 1 KiB", |b| {
        let mut out = [0u8; 1024];
        b.iter(|| {
            rng.fill_bytes(black_box(&mut out));
        })
    });
}

criterion_group!(benches, bench_keystream);
criterion_main!(benches);
