use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_cbc::{decrypt_with_config, encrypt_with_iv, CbcConfig};
use aes_core::{expand_key, Aes128, Aes128Key};

fn bench_block(c: &mut Criterion) {
    let key = Aes128Key::from([0u8; 16]);
    let cipher = Aes128::new(&key);
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);

    let mut group = c.benchmark_group("block");
    group.bench_function("expand_key", |b| {
        b.iter(|| expand_key(&key));
    });
    group.bench_function("encrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| cipher.encrypt_block(&mut block));
    });
    group.bench_function("decrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| cipher.decrypt_block(&mut block));
    });
    group.finish();
}

fn bench_cbc(c: &mut Criterion) {
    let key = Aes128Key::from([1u8; 16]);
    let cipher = Aes128::new(&key);
    let config = CbcConfig::default();
    let mut rng = ChaCha20Rng::from_seed([4u8; 32]);

    let mut group = c.benchmark_group("cbc");
    group.sample_size(20);
    for size in [1024usize, 64 * 1024] {
        let mut message = vec![0u8; size];
        rng.fill_bytes(&mut message);
        let iv = [7u8; 16];
        let sealed = encrypt_with_iv(&cipher, &iv, &message).expect("encrypt");

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encrypt", size), &message, |b, m| {
            b.iter(|| encrypt_with_iv(&cipher, &iv, m));
        });
        group.bench_with_input(BenchmarkId::new("decrypt", size), &sealed, |b, s| {
            b.iter(|| decrypt_with_config(&key, s, &config));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_block, bench_cbc);
criterion_main!(benches);
