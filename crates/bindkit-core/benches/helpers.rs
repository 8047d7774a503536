//! Benchmarks for the helpers binding layers call on every re-render

use bindkit_core::{
    average, format_date, format_file_size, hex_to_rgb, is_valid_email, is_valid_url, truncate,
    unique,
};
use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    for bytes in [0u64, 1500, 1_048_576, 1_099_511_627_776] {
        group.bench_with_input(BenchmarkId::new("file_size", bytes), &bytes, |b, &bytes| {
            b.iter(|| format_file_size(black_box(bytes)));
        });
    }

    if let Some(date) = NaiveDate::from_ymd_opt(2024, 3, 7) {
        group.bench_function("format_date", |b| {
            b.iter(|| format_date(black_box(&date), black_box("DD/MM/YYYY")));
        });
    }

    let long_text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(20);
    group.bench_function("truncate", |b| {
        b.iter(|| truncate(black_box(&long_text), black_box(80)));
    });

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    group.bench_function("email", |b| {
        b.iter(|| is_valid_email(black_box("first.last@example.co.uk")));
    });
    group.bench_function("url", |b| {
        b.iter(|| is_valid_url(black_box("https://example.com/a/b?c=d#e")));
    });
    group.bench_function("hex_to_rgb", |b| {
        b.iter(|| hex_to_rgb(black_box("#1a2b3c")));
    });

    group.finish();
}

fn bench_collections(c: &mut Criterion) {
    let mut group = c.benchmark_group("collections");

    for size in [16usize, 1024] {
        let ints: Vec<u32> = (0..size).map(|i| (i % 37) as u32).collect();
        let floats: Vec<f64> = (0..size).map(|i| i as f64 * 0.5).collect();

        group.bench_with_input(BenchmarkId::new("unique", size), &ints, |b, ints| {
            b.iter(|| unique(black_box(ints)));
        });
        group.bench_with_input(BenchmarkId::new("average", size), &floats, |b, floats| {
            b.iter(|| average(black_box(floats)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_formatting, bench_validation, bench_collections);
criterion_main!(benches);
