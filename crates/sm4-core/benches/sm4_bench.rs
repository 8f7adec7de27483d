use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use sm4_core::Sm4Cipher;

fn bench_key_schedule(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);

    let mut group = c.benchmark_group("key_schedule");
    group.bench_function("sm4_new", |b| {
        b.iter(|| Sm4Cipher::new(&key));
    });
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    let cipher = Sm4Cipher::from(key);

    let mut group = c.benchmark_group("block");
    group.bench_function("sm4_encrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        let mut out = [0u8; 16];
        b.iter(|| cipher.encrypt(&mut out, &block));
    });
    group.bench_function("sm4_decrypt_in_place", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| cipher.decrypt_in_place(&mut block));
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_block);
criterion_main!(benches);
