use criterion::{Criterion, criterion_group, criterion_main};
use patlayout::layout::token::tokenize;
use std::hint::black_box;

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    group.bench_function("default_pattern", |b| {
        b.iter(|| tokenize(black_box("%r %p %c - %m%n")));
    });

    group.bench_function("literal_only", |b| {
        b.iter(|| tokenize(black_box("a plain run of text with no directives at all")));
    });

    group.bench_function("dense_directives", |b| {
        b.iter(|| tokenize(black_box("%d{ISO8601} %-5p %10.8c{2} %m%n")));
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
