use boundcache::{BoundCache, LruCache};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_hit_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_resident", |b| {
        let mut cache = LruCache::new(1000);
        for i in 0u64..1000 {
            cache.put(i, i);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 1000)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("put_always_evicting", |b| {
        // Small cache, strictly increasing keys: every put evicts.
        let mut cache = LruCache::new(10);
        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.put(counter, counter));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_get_50_put_tracked", |b| {
        let mut cache = BoundCache::new(1000);
        for i in 0u64..1000 {
            cache.put(i, i);
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&(counter % 2000)));
            } else {
                black_box(cache.put(counter % 2000, counter));
            }
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_hit_path, bench_churn, bench_mixed);
criterion_main!(benches);
