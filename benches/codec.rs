//! Throughput of every tier on ASCII, mixed and CJK-heavy text.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use unicodec::{capabilities, utf8, utf8_to_utf16le, utf16le_to_utf8};

fn corpora() -> Vec<(&'static str, String)> {
    vec![
        ("ascii", "The quick brown fox jumps over the lazy dog. ".repeat(1500)),
        ("latin", "Größenwahn, façade, niño, smørrebrød. ".repeat(1500)),
        ("cjk", "日本語のテキストと中文文本，한국어 텍스트。".repeat(1500)),
        ("emoji", "ok 😀🎉🚀 fine 🌍 ".repeat(1500)),
    ]
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8_validate");
    for (name, text) in corpora() {
        group.throughput(Throughput::Bytes(text.len() as u64));
        for backend in capabilities().backends() {
            group.bench_with_input(BenchmarkId::new(backend.name(), name), &text, |b, text| {
                b.iter(|| utf8::validate_with(backend, black_box(text.as_bytes())))
            });
        }
    }
    group.finish();
}

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8_countof");
    for (name, text) in corpora() {
        group.throughput(Throughput::Bytes(text.len() as u64));
        for backend in capabilities().backends() {
            group.bench_with_input(BenchmarkId::new(backend.name(), name), &text, |b, text| {
                b.iter(|| utf8::countof_with(backend, black_box(text.as_bytes())))
            });
        }
    }
    group.finish();
}

fn bench_utf8_to_utf16(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8_to_utf16le");
    for (name, text) in corpora() {
        let mut out = vec![0u16; utf8_to_utf16le::required_count(text.as_bytes())];
        group.throughput(Throughput::Bytes(text.len() as u64));
        for backend in capabilities().backends() {
            group.bench_function(BenchmarkId::new(backend.name(), name), |b| {
                b.iter(|| utf8_to_utf16le::convert_with(backend, black_box(text.as_bytes()), &mut out))
            });
        }
    }
    group.finish();
}

fn bench_utf16_to_utf8(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf16le_to_utf8");
    for (name, text) in corpora() {
        let words: Vec<u16> = text.encode_utf16().map(u16::to_le).collect();
        let mut out = vec![0u8; utf16le_to_utf8::required_count(&words)];
        group.throughput(Throughput::Bytes(2 * words.len() as u64));
        for backend in capabilities().backends() {
            group.bench_function(BenchmarkId::new(backend.name(), name), |b| {
                b.iter(|| utf16le_to_utf8::convert_with(backend, black_box(&words), &mut out))
            });
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_validate,
    bench_count,
    bench_utf8_to_utf16,
    bench_utf16_to_utf8
);
criterion_main!(benches);
