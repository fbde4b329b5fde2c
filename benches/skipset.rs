use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skipset::SkipList;

fn iter_all_bench(c: &mut Criterion) {
    let mut sk = SkipList::<u32>::with_seed(0xdead);
    let upper = 500;
    for i in 0..upper {
        sk.insert(i);
    }
    c.bench_function("iter_all(500)", |b| {
        b.iter(|| {
            for i in sk.iter_all() {
                black_box(i);
            }
        })
    });
}

fn iter_range_bench(c: &mut Criterion) {
    let mut sk = SkipList::<u32>::with_seed(0xdead);
    let upper = 50000;
    for i in 0..upper {
        sk.insert(i);
    }
    c.bench_function("range(50000)", |b| {
        b.iter(|| {
            for i in sk.range(Some(&(upper / 2)), Some(&(upper / 2 + upper / 5))) {
                black_box(i);
            }
        })
    });
}

fn bench_insert_linear_500(c: &mut Criterion) {
    c.bench_function("insert_500", |b| {
        b.iter(|| {
            let mut sk = SkipList::<u32>::with_seed(0xdead);
            let upper = 500;
            for i in 0..upper {
                black_box(sk.insert(i));
            }
        })
    });
}

fn bench_search_500(c: &mut Criterion) {
    let mut sk = SkipList::<u32>::with_seed(0xdead);
    let upper = 500;
    for i in 0..upper {
        black_box(sk.insert(i));
    }
    c.bench_function("search_500", |b| {
        b.iter(|| {
            black_box(sk.search(&499));
        })
    });
}

fn bench_search_50000(c: &mut Criterion) {
    let mut sk = SkipList::<u32>::with_seed(0xdead);
    let upper = 50000;
    for i in 0..upper {
        black_box(sk.insert(i));
    }
    c.bench_function("search_50000", |b| {
        b.iter(|| {
            black_box(sk.search(&33333));
        })
    });
}

fn bench_boundary_50000(c: &mut Criterion) {
    let mut sk = SkipList::<u32>::with_seed(0xdead);
    let upper = 50000;
    for i in 0..upper {
        sk.insert(i * 2);
    }
    c.bench_function("first_ge_50000", |b| {
        b.iter(|| {
            black_box(sk.first_ge(&33333));
        })
    });
}

fn bench_insert_remove_churn(c: &mut Criterion) {
    c.bench_function("insert_remove_500", |b| {
        b.iter(|| {
            let mut sk = SkipList::<u32>::with_seed(0xdead);
            for i in 0..500u32 {
                black_box(sk.insert(i));
            }
            for i in 0..500u32 {
                black_box(sk.remove(&i));
            }
        })
    });
}

criterion_group!(
    benches,
    iter_all_bench,
    iter_range_bench,
    bench_insert_linear_500,
    bench_search_500,
    bench_search_50000,
    bench_boundary_50000,
    bench_insert_remove_churn,
);
criterion_main!(benches);
