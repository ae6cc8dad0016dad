use chrono::{Local, TimeZone};
use criterion::{Criterion, criterion_group, criterion_main};
use patlayout::layout::message::format_data;
use patlayout::{LogEvent, PatternLayout, Value};
use std::hint::black_box;

fn sample_event() -> LogEvent {
    LogEvent::new("net.server.http", "info")
        .at(Local.with_ymd_and_hms(2024, 5, 17, 14, 30, 5).unwrap())
        .data("request %s finished in %d ms")
        .data("/index.html")
        .data(12)
}

fn bench_layout_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("PatternLayout::format");

    let default = PatternLayout::default();
    let event = sample_event();
    group.bench_function("default_pattern", |b| {
        b.iter(|| default.format(black_box(&event)));
    });

    let padded = PatternLayout::new("%d{ABSOLUTE} %-5p %12.12c{2} - %m%n");
    group.bench_function("padded_pattern", |b| {
        b.iter(|| padded.format(black_box(&event)));
    });

    group.finish();
}

fn bench_message_format(c: &mut Criterion) {
    let data: Vec<Value> = vec![
        "request %s finished in %d ms".into(),
        "/index.html".into(),
        12.into(),
    ];

    c.bench_function("message::format_data", |b| {
        b.iter(|| format_data(black_box(&data)));
    });
}

criterion_group!(benches, bench_layout_format, bench_message_format);
criterion_main!(benches);
