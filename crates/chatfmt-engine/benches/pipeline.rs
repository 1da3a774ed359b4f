use chatfmt_engine::{format_for_linkedin, format_for_whatsapp, split_by_max_len};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.sample_size(20);

    let content = common::generate_assistant_reply(50);
    group.bench_function("whatsapp", |b| {
        b.iter(|| std::hint::black_box(format_for_whatsapp(std::hint::black_box(&content))));
    });
    group.bench_function("linkedin", |b| {
        b.iter(|| std::hint::black_box(format_for_linkedin(std::hint::black_box(&content))));
    });

    group.finish();
}

fn bench_splitting(c: &mut Criterion) {
    let mut group = c.benchmark_group("splitting");

    let content = common::generate_long_paragraphs(200, 40);
    group.bench_function("paragraphs_2200", |b| {
        b.iter(|| std::hint::black_box(split_by_max_len(std::hint::black_box(&content), 2200)));
    });

    let wall = "x".repeat(100_000);
    group.bench_function("hard_slice_200", |b| {
        b.iter(|| std::hint::black_box(split_by_max_len(std::hint::black_box(&wall), 200)));
    });

    group.finish();
}

criterion_group!(benches, bench_formatting, bench_splitting);
criterion_main!(benches);
