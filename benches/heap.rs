use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use min_pq::BinaryMinHeap;
use rand::Rng;

fn random_keys(len: usize) -> Vec<u64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_insert_extract(c: &mut Criterion) {
    let keys = random_keys(1024);
    c.bench_function("insert_extract_1024", |b| {
        b.iter(|| {
            let mut heap = BinaryMinHeap::new();
            for &k in &keys {
                heap.insert(k);
            }
            while heap.extract_min().is_ok() {}
        })
    });
}

fn bench_from_items(c: &mut Criterion) {
    let keys = random_keys(1024);
    c.bench_function("from_items_1024", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys: Vec<u64>| BinaryMinHeap::from_items(keys),
            BatchSize::SmallInput,
        )
    });
}

fn bench_iter(c: &mut Criterion) {
    let heap = BinaryMinHeap::from_items(random_keys(1024));
    c.bench_function("iter_1024", |b| b.iter(|| heap.iter().count()));
}

criterion_group!(benches, bench_insert_extract, bench_from_items, bench_iter);
criterion_main!(benches);
