//! Key generation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use reality_keygen::crypto::{encode_key, PrivateKey, PublicKey, X25519};
use reality_keygen::KeyPairGenerator;

fn bench_generate(c: &mut Criterion) {
    let mut generator = KeyPairGenerator::new();

    c.bench_function("generate_key_pair", |b| {
        b.iter(|| black_box(generator.generate().unwrap()))
    });
}

fn bench_derive_public(c: &mut Criterion) {
    let private = PrivateKey::from_random([0x42u8; 32]);

    c.bench_function("x25519_basepoint_mul", |b| {
        b.iter(|| black_box(PublicKey::derive(&private, &X25519).unwrap()))
    });
}

fn bench_encode(c: &mut Criterion) {
    let key = [0x42u8; 32];

    c.bench_function("encode_key", |b| {
        b.iter(|| black_box(encode_key(black_box(&key))))
    });
}

criterion_group!(benches, bench_generate, bench_derive_public, bench_encode);

criterion_main!(benches);
