use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lrumap::{LruConfig, LruMap, UpdatePolicy};

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_hit_1k", |b| {
        let mut cache = LruMap::new(1000).unwrap();
        for i in 0..1000u64 {
            cache.set(i, vec![b'x'; 64]);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 1000)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_set_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_new_key_full", |b| {
        let mut cache = LruMap::new(1000).unwrap();
        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.insert(counter, counter));
            counter += 1;
        });
    });

    group.bench_function("set_update_promote", |b| {
        let config = LruConfig::new(1000).update_policy(UpdatePolicy::Promote);
        let mut cache = LruMap::with_config(config).unwrap();
        for i in 0..1000u64 {
            cache.set(i, i);
        }

        let mut counter = 0u64;
        b.iter(|| {
            cache.set(black_box(counter % 1000), counter);
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write", |b| {
        let mut cache = LruMap::new(100).unwrap();
        for i in 0..100u64 {
            cache.set(i, i);
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter.is_multiple_of(2) {
                black_box(cache.get(&(counter % 200)));
            } else {
                cache.set(counter % 200, counter);
            }
            counter += 1;
        });
    });

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1000));

    group.bench_function("entries_1k", |b| {
        let mut cache = LruMap::new(1000).unwrap();
        for i in 0..1000u64 {
            cache.set(i, i);
        }

        b.iter(|| black_box(cache.entries().map(|(_, v)| *v).sum::<u64>()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_get_hit,
    bench_set_with_eviction,
    bench_mixed_50_50,
    bench_traversal
);
criterion_main!(benches);
