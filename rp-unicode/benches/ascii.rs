use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rp_unicode::ascii::{ascii_prefix_len, find_ascii_ignore_case};

pub fn criterion_benchmark(c: &mut Criterion) {
    assert_eq!(ascii_prefix_len("12345678901234567890ｗ".as_bytes()), 20);
    c.bench_function("ascii_prefix_len", |b| {
        b.iter(|| ascii_prefix_len(black_box("12345678901234567890ｗ".as_bytes())))
    });

    assert_eq!(find_ascii_ignore_case(b"<channel><title>", b't'), Some(10));
    c.bench_function("find_ascii_ignore_case", |b| {
        b.iter(|| find_ascii_ignore_case(black_box(b"<channel><title>"), b't'))
    });

    let long = "<channel>".repeat(20) + "<Title>";
    assert_eq!(find_ascii_ignore_case(long.as_bytes(), b't'), Some(181));
    c.bench_function("find_ascii_ignore_case_200", |b| {
        b.iter(|| find_ascii_ignore_case(black_box(long.as_bytes()), b't'))
    });

    let cjk = "葬送のフリーレン".repeat(10) + "title";
    c.bench_function("find_ascii_ignore_case_non_ascii", |b| {
        b.iter(|| find_ascii_ignore_case(black_box(cjk.as_bytes()), b't'))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
