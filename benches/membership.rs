use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use tribloom::{fnv_hash, murmur_hash3, BloomFilter};

fn random_keys(count: usize, len: usize) -> Vec<String> {
    let mut rng = thread_rng();
    (0..count)
        .map(|_| {
            (&mut rng)
                .sample_iter(Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

pub fn hash_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");
    group.bench_function("fnv-short", |b| b.iter(|| fnv_hash(black_box("cats"))));
    group.bench_function("murmur3-short", |b| {
        b.iter(|| murmur_hash3(black_box("cats")))
    });

    let long = "x".repeat(256);
    group.bench_function("fnv-256", |b| b.iter(|| fnv_hash(black_box(&long))));
    group.bench_function("murmur3-256", |b| {
        b.iter(|| murmur_hash3(black_box(&long)))
    });
    group.finish();
}

pub fn membership(c: &mut Criterion) {
    let inserted = random_keys(100_000, 16);
    let absent = random_keys(10_000, 17);

    let mut bloom = BloomFilter::new(1 << 20).unwrap();
    for key in &inserted {
        bloom.add(key);
    }

    let mut group = c.benchmark_group("membership");
    group.bench_function("add", |b| {
        let mut i = 0;
        b.iter(|| {
            bloom.add(black_box(&inserted[i % inserted.len()]));
            i += 1;
        })
    });
    group.bench_function("contains-inserted", |b| {
        let mut i = 0;
        b.iter(|| {
            i += 1;
            bloom.contains(black_box(&inserted[i % inserted.len()]))
        })
    });
    group.bench_function("contains-absent", |b| {
        let mut i = 0;
        b.iter(|| {
            i += 1;
            bloom.contains(black_box(&absent[i % absent.len()]))
        })
    });
    group.finish();
}

criterion_group!(benches, hash_functions, membership);
criterion_main!(benches);
