//! Metadata and edit benchmarks
//!
//! Parsing cost of the metadata queries and of rewriting text tags, over
//! the built-in profiles (small matrix/TRC up to large CMYK LUTs).

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use cyan_icc::icc::{IccProfile, TagSignature, rewrite_text_tags};
use cyan_icc::{ColorSpaceKind, DefaultProfileSet, ProfileMetadata};

fn builtin_profiles() -> Vec<(String, Vec<u8>)> {
    let set = DefaultProfileSet::builtin();
    [ColorSpaceKind::Rgb, ColorSpaceKind::Cmyk, ColorSpaceKind::Gray]
        .into_iter()
        .filter_map(|kind| set.profiles(kind).first())
        .map(|p| (p.name.clone(), p.blob.to_vec()))
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("Profile Parsing");

    for (name, data) in &builtin_profiles() {
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_with_input(BenchmarkId::new("container", name), data, |b, data| {
            b.iter(|| IccProfile::parse(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("description", name), data, |b, data| {
            b.iter(|| IccProfile::parse(black_box(data)).map(|p| p.description()))
        });

        group.bench_with_input(BenchmarkId::new("metadata", name), data, |b, data| {
            b.iter(|| ProfileMetadata::from_bytes(black_box(data)))
        });
    }

    group.finish();
}

fn bench_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("Text Tag Rewrite");

    for (name, data) in &builtin_profiles() {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rewrite", name), data, |b, data| {
            b.iter(|| {
                rewrite_text_tags(
                    black_box(data),
                    &[
                        (TagSignature::DESC, "Benchmark"),
                        (TagSignature::COPYRIGHT, "Public Domain"),
                    ],
                )
            })
        });
    }

    group.finish();
}

fn bench_builtin_synthesis(c: &mut Criterion) {
    c.bench_function("builtin_first_access", |b| {
        b.iter(|| black_box(DefaultProfileSet::builtin()).profiles(ColorSpaceKind::Rgb).len())
    });
}

criterion_group!(benches, bench_parse, bench_edit, bench_builtin_synthesis);

criterion_main!(benches);
