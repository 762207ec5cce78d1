use criterion::{criterion_group, Criterion};
use rand::Rng;
use sortx::OrderedSet;

fn random_read_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("** sortx::OrderedSet **");
    group
        .measurement_time(std::time::Duration::from_secs(3))
        .sample_size(10);

    let mut rng = rand::thread_rng();
    let mut db = OrderedSet::new();
    let mut values = vec![];

    group.bench_function(" random put ", |b| {
        b.iter(|| {
            let v = rng.gen::<u64>();
            db.put(v);
            values.push(v);
        })
    });

    group.bench_function(" random contains ", |b| {
        b.iter(|| {
            let index: usize = rng.gen_range(0..values.len());
            values.get(index).map(|v| db.contains(v));
        })
    });

    group.bench_function(" decode 10k (with duplicates) ", |b| {
        let text = serde_json::to_string(
            &(0..10_000u64).map(|i| i % 5000).rev().collect::<Vec<_>>(),
        )
        .unwrap();
        b.iter(|| {
            OrderedSet::<u64>::decode(&text).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, random_read_write);
