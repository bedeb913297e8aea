use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use rawmovie_rs::movie::{load_mono, MovieReader, ReaderConfig};
use std::path::{Path, PathBuf};

fn write_mock_movie(dir: &Path, n_frames: usize, width: usize, height: usize, pixel_format: &str) -> PathBuf {
    let sample_bytes = if pixel_format == "Mono8" { 1 } else { 2 };
    let mut frames = String::new();
    for i in 0..n_frames {
        frames.push_str(&format!("<frame frame=\"{}\" timestamp=\"{}\" />\n", i, i * 4000));
    }
    let document = format!(
        "<movie_metadata><header><width>{}</width><height>{}</height>\
         <pixel_format>{}</pixel_format><endianness>little</endianness></header>\
         <frames>{}</frames></movie_metadata>",
        width, height, pixel_format, frames
    );

    let rawm = dir.join(format!("{}_{}x{}.rawm", pixel_format, width, height));
    std::fs::write(&rawm, document).unwrap();

    let payload: Vec<u8> = (0..n_frames * width * height * sample_bytes)
        .map(|i| (i % 256) as u8)
        .collect();
    std::fs::write(rawm.with_extension("raw"), payload).unwrap();
    rawm
}

fn benchmark_load_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_by_size");
    let dir = tempfile::tempdir().unwrap();

    let sizes = vec![
        (64, 64, "64x64"),
        (256, 256, "256x256"),
        (1024, 1024, "1024x1024"),
    ];

    for (width, height, label) in sizes {
        let rawm = write_mock_movie(dir.path(), 10, width, height, "Mono16");

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &rawm,
            |b, path| {
                b.iter(|| load_mono(black_box(path)).unwrap());
            },
        );
    }

    group.finish();
}

fn benchmark_pixel_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel_formats");
    let dir = tempfile::tempdir().unwrap();

    for format in ["Mono8", "Mono12"] {
        let rawm = write_mock_movie(dir.path(), 10, 512, 512, format);
        group.bench_with_input(BenchmarkId::from_parameter(format), &rawm, |b, path| {
            b.iter(|| load_mono(black_box(path)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_size_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("size_validation");
    let dir = tempfile::tempdir().unwrap();
    let rawm = write_mock_movie(dir.path(), 10, 512, 512, "Mono16");

    for (validate, label) in [(true, "eager"), (false, "lazy")] {
        let reader = MovieReader::new(
            ReaderConfig::builder()
                .validate_payload_size(validate)
                .build(),
        );
        group.bench_function(label, |b| {
            b.iter(|| reader.load_mono(black_box(&rawm)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_load_by_size,
    benchmark_pixel_formats,
    benchmark_size_validation
);
criterion_main!(benches);
