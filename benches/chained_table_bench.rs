use chained_table::ChainedTable;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

const BUCKETS: usize = 4096;

fn lcg(mut s: u64) -> impl Iterator<Item = u32> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some((s >> 32) as u32)
    })
}

fn filled(seed: u64, n: usize) -> (ChainedTable<u64>, Vec<u32>) {
    let mut t = ChainedTable::new(BUCKETS).unwrap();
    let keys: Vec<u32> = lcg(seed).take(n).collect();
    for (i, &k) in keys.iter().enumerate() {
        let _ = t.insert(k, i as u64).unwrap();
    }
    (t, keys)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("chained_table_insert_10k", |b| {
        b.iter_batched(
            || ChainedTable::<u64>::new(BUCKETS).unwrap(),
            |mut t| {
                for (i, k) in lcg(1).take(10_000).enumerate() {
                    let _ = t.insert(k, i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("chained_table_get_hit", |b| {
        let (t, keys) = filled(7, 20_000);
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = *it.next().unwrap();
            black_box(t.get(k));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("chained_table_get_miss", |b| {
        let (t, _keys) = filled(11, 10_000);
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // keys unlikely to be in the table
            let k = miss.next().unwrap();
            black_box(t.get(k));
        })
    });
}

fn bench_remove_reinsert(c: &mut Criterion) {
    c.bench_function("chained_table_remove_reinsert", |b| {
        let (mut t, keys) = filled(13, 10_000);
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = *it.next().unwrap();
            let v = t.remove(k).unwrap();
            let _ = t.insert(k, black_box(v)).unwrap();
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_get_hit, bench_get_miss, bench_remove_reinsert
}
criterion_main!(benches);
