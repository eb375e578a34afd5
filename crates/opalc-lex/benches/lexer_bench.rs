//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package opalc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use opalc_lex::{lex_compat, Lexer};

fn token_count(source: &str) -> usize {
    lex_compat(source).len()
}

fn bench_mixed_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "result = compute(a, b) && limit != -12.75 ;\n\
                  message = \"status: \\\"ok\\\"\"\n\
                  flag = 'y' == mode || retry-count != 0";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mixed_source", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.bench_function("strict_mode", |b| {
        b.iter(|| {
            Lexer::new(black_box(source))
                .lex()
                .map(|tokens| tokens.len())
        })
    });

    group.finish();
}

fn bench_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_idents", |b| {
        b.iter(|| token_count(black_box("a b c d e f g h")))
    });

    let long = "very-long-identifier_with_every-allowed-character9 ".repeat(50);
    group.bench_function("long_idents", |b| b.iter(|| token_count(black_box(&long))));

    group.finish();
}

fn bench_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integers", |b| {
        b.iter(|| token_count(black_box("1 22 333 4444 -5 -66 0 7")))
    });

    group.bench_function("decimals", |b| {
        b.iter(|| token_count(black_box("1.5 -2.25 0.125 333.0 4.75")))
    });

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| token_count(black_box("\"hello\"")))
    });

    let long = format!("\"{}\"", "some escaped \\t content ".repeat(40));
    group.bench_function("long_string", |b| b.iter(|| token_count(black_box(&long))));

    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_operators");

    group.bench_function("doubled_ops", |b| {
        b.iter(|| token_count(black_box("!= == && || ! = & |")))
    });

    group.bench_function("punctuation", |b| {
        b.iter(|| token_count(black_box("( ) ; . , + * < >")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_mixed_source,
    bench_identifiers,
    bench_numbers,
    bench_strings,
    bench_operators
);
criterion_main!(benches);
