//! Benchmarks for gzinflate decompression performance.
//!
//! Tests various data patterns and sizes to measure decompression throughput.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flate2::write::GzEncoder;
use flate2::Compression;
use gzinflate::{decompress_all, GunzipConfig};
use std::io::{Cursor, Write};

/// Generate random (incompressible) data
fn generate_random_data(size: usize) -> Vec<u8> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut data = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();

    for i in 0..size {
        i.hash(&mut hasher);
        data.push((hasher.finish() & 0xFF) as u8);
    }
    data
}

/// Generate repetitive (highly compressible) data
fn generate_repetitive_data(size: usize) -> Vec<u8> {
    let pattern = b"ABCDABCDABCDABCD";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        let remaining = size - data.len();
        let chunk_size = remaining.min(pattern.len());
        data.extend_from_slice(&pattern[..chunk_size]);
    }
    data
}

/// Generate DNA-like data (4 character alphabet, some patterns)
fn generate_dna_data(size: usize) -> Vec<u8> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let bases = [b'A', b'C', b'G', b'T'];
    let mut data = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();

    let mut i = 0;
    while data.len() < size {
        if i % 1000 == 0 && data.len() + 50 <= size {
            let repeat = b"ATATATATAT";
            for _ in 0..5 {
                data.extend_from_slice(repeat);
            }
        } else {
            i.hash(&mut hasher);
            let idx = (hasher.finish() % 4) as usize;
            data.push(bases[idx]);
        }
        i += 1;
    }
    data.truncate(size);
    data
}

/// Compress data to gzip format
fn compress_to_gzip(data: &[u8], level: Compression) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), level);
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn bench_decompress_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress_sizes");

    for size in [1024, 64 * 1024, 256 * 1024, 1024 * 1024].iter() {
        let data = generate_dna_data(*size);
        let gzip_data = compress_to_gzip(&data, Compression::default());

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("dna_data", size), &gzip_data, |b, gzip_data| {
            b.iter(|| {
                let mut output = Vec::new();
                decompress_all(Cursor::new(gzip_data), &mut output, &GunzipConfig::default()).unwrap();
                output
            });
        });
    }

    group.finish();
}

fn bench_data_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_patterns");
    let size = 256 * 1024; // 256KB

    let random_data = generate_random_data(size);
    let random_gzip = compress_to_gzip(&random_data, Compression::default());

    let repetitive_data = generate_repetitive_data(size);
    let repetitive_gzip = compress_to_gzip(&repetitive_data, Compression::default());

    let dna_data = generate_dna_data(size);
    let dna_gzip = compress_to_gzip(&dna_data, Compression::default());

    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("random", |b| {
        b.iter(|| {
            let mut output = Vec::new();
            decompress_all(Cursor::new(&random_gzip), &mut output, &GunzipConfig::default()).unwrap();
            output
        });
    });

    group.bench_function("repetitive", |b| {
        b.iter(|| {
            let mut output = Vec::new();
            decompress_all(Cursor::new(&repetitive_gzip), &mut output, &GunzipConfig::default())
                .unwrap();
            output
        });
    });

    group.bench_function("dna", |b| {
        b.iter(|| {
            let mut output = Vec::new();
            decompress_all(Cursor::new(&dna_gzip), &mut output, &GunzipConfig::default()).unwrap();
            output
        });
    });

    group.finish();
}

fn bench_compression_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_levels");
    let size = 256 * 1024;
    let data = generate_dna_data(size);

    group.throughput(Throughput::Bytes(size as u64));

    for level in [1, 6, 9].iter() {
        let gzip_data = compress_to_gzip(&data, Compression::new(*level));

        group.bench_with_input(BenchmarkId::new("level", level), &gzip_data, |b, gzip_data| {
            b.iter(|| {
                let mut output = Vec::new();
                decompress_all(Cursor::new(gzip_data), &mut output, &GunzipConfig::default()).unwrap();
                output
            });
        });
    }

    group.finish();
}

fn bench_multi_member(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_member");

    for members in [1, 10, 100].iter() {
        let mut compressed = Vec::new();
        for _ in 0..*members {
            compressed.extend(compress_to_gzip(b"repeated member payload ".repeat(256).as_slice(), Compression::default()));
        }

        group.bench_with_input(BenchmarkId::new("members", members), &compressed, |b, compressed| {
            b.iter(|| {
                let mut output = Vec::new();
                decompress_all(Cursor::new(compressed), &mut output, &GunzipConfig::default()).unwrap();
                output
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decompress_sizes,
    bench_data_patterns,
    bench_compression_levels,
    bench_multi_member,
);
criterion_main!(benches);
