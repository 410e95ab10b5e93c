//! Benchmarks for uncloak cleaning performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use uncloak::{CleaningOptions, TextCase};

/// Builds text with catalog characters sprinkled through it.
fn create_test_text(paragraph_count: usize) -> String {
    let mut text = String::new();
    for i in 0..paragraph_count {
        text.push_str(&format!(
            "Paragraph {}\u{2014}it\u{2019}s \u{201C}quoted\u{201D}\u{00A0}text\u{200B} with  spaces\u{2026}\n\n\n",
            i
        ));
        text.push_str("Plain ASCII content without anything to replace, repeated for volume.\n");
    }
    text
}

/// Benchmark the default pipeline at various sizes.
fn bench_clean_default(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean_default");

    for para_count in [10, 100, 1000].iter() {
        let text = create_test_text(*para_count);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("paragraphs", para_count),
            &text,
            |b, text| {
                b.iter(|| uncloak::clean_default(black_box(text)));
            },
        );
    }

    group.finish();
}

/// Benchmark with every auxiliary transform enabled.
fn bench_clean_all_options(c: &mut Criterion) {
    let text = create_test_text(500);
    let options = CleaningOptions::default()
        .with_case(TextCase::SentenceCase)
        .normalize_line_breaks()
        .remove_numbers()
        .remove_punctuation();

    c.bench_function("clean_all_options", |b| {
        b.iter(|| uncloak::clean(black_box(&text), &options));
    });
}

/// Benchmark detection only.
fn bench_scan(c: &mut Criterion) {
    let text = create_test_text(500);

    c.bench_function("scan", |b| {
        b.iter(|| uncloak::scan(black_box(&text)));
    });
}

/// Benchmark parallel batch cleaning.
fn bench_batch(c: &mut Criterion) {
    let inputs: Vec<String> = (0..256).map(|_| create_test_text(10)).collect();
    let options = CleaningOptions::default();

    c.bench_function("clean_batch_256", |b| {
        b.iter(|| uncloak::clean_batch(black_box(&inputs), &options));
    });
}

criterion_group!(
    benches,
    bench_clean_default,
    bench_clean_all_options,
    bench_scan,
    bench_batch,
);
criterion_main!(benches);
