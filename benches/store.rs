use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use contact_book::prelude::ContactStore;

// Names are zero padded so the store's order matches the index order.
fn make_store_with_n(n: usize) -> ContactStore {
    let mut store = ContactStore::new();
    for i in 0..n {
        store.insert(
            format!("User{i:06}"),
            "08885499529".to_string(),
            format!("user{i}@yahoo.com"),
        );
    }
    store
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("insert into 5k contacts", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |mut store| {
                store.insert(
                    "User002500a".to_string(),
                    "08885499529".to_string(),
                    "zoe@gmail.com".to_string(),
                );
                black_box(store.count());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_find(c: &mut Criterion) {
    let store = make_store_with_n(5_000);

    c.bench_function("find hit in 5k contacts", |b| {
        b.iter(|| black_box(store.find(black_box("User004999")).is_ok()));
    });

    // Early exit: the scan stops at the first name past the target.
    c.bench_function("find early miss in 5k contacts", |b| {
        b.iter(|| black_box(store.find(black_box("User000000a")).is_err()));
    });
}

fn bench_delete(c: &mut Criterion) {
    c.bench_function("delete from 5k contacts", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |mut store| {
                let _ = black_box(store.delete("User002500"));
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_insert, bench_find, bench_delete);
criterion_main!(benches);
