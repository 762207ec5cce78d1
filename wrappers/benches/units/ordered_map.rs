use criterion::{criterion_group, Criterion};
use rand::Rng;
use sortx::OrderedMap;
use std::sync::atomic::{AtomicUsize, Ordering};

fn read_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("** sortx::OrderedMap **");
    group
        .measurement_time(std::time::Duration::from_secs(3))
        .sample_size(10);

    let i = AtomicUsize::new(0);
    let mut db = OrderedMap::new();

    group.bench_function(" write (ascending) ", |b| {
        b.iter(|| {
            let n = i.fetch_add(1, Ordering::SeqCst);
            db.put(n, vec![n; 16]);
        })
    });

    group.bench_function(" read ", |b| {
        b.iter(|| {
            let n = i.fetch_sub(1, Ordering::SeqCst);
            db.get(&n);
        })
    });

    group.bench_function(" encode ", |b| {
        b.iter(|| {
            db.encode().unwrap();
        })
    });

    group.finish();
}

fn random_read_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("** sortx::OrderedMap **");
    group
        .measurement_time(std::time::Duration::from_secs(3))
        .sample_size(10);

    let mut rng = rand::thread_rng();
    let mut db = OrderedMap::new();
    let mut keys = vec![];

    group.bench_function(" random write ", |b| {
        b.iter(|| {
            let key = rng.gen::<u64>();
            db.put(key, vec![key; 16]);
            keys.push(key);
        })
    });

    group.bench_function(" random read ", |b| {
        b.iter(|| {
            let index: usize = rng.gen_range(0..keys.len());
            keys.get(index).map(|key| db.get(key));
        })
    });

    group.bench_function(" random delete ", |b| {
        b.iter(|| {
            if let Some(key) = keys.pop() {
                db.delete(&key);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, read_write, random_read_write);
