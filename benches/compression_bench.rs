use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use folder_squeeze::processing::reencode_image;
use folder_squeeze::report::{CompressionReport, ReportTotals};
use folder_squeeze::{batch_compress_images, write_report, BatchRequest, Quality};
use chrono::Local;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::path::PathBuf;
use tempfile::TempDir;

fn test_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }))
}

fn sample_report(count: usize) -> CompressionReport {
    let mut report =
        CompressionReport::new(PathBuf::from("/in"), PathBuf::from("/out"), Local::now());
    for i in 0..count {
        let original = 1_000_000 + (i as u64 * 7_919) % 3_000_000;
        report.push(format!("image_{}.jpg", i), original, original / 3);
    }
    report
}

fn bench_quality_parsing(c: &mut Criterion) {
    c.bench_function("quality_parsing", |b| {
        b.iter(|| Quality::parse(black_box(Some(" 65 "))))
    });
}

fn bench_jpeg_reencode(c: &mut Criterion) {
    let mut group = c.benchmark_group("jpeg_reencode");
    let output_dir = TempDir::new().unwrap();
    let output = output_dir.path().join("out.jpg");

    for (width, height) in [(800, 600), (1920, 1080)] {
        let img = test_image(width, height);
        for quality in [10u8, 50, 90] {
            let quality = Quality::new(quality).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{}x{}", width, height), quality.value()),
                &img,
                |b, img| b.iter(|| reencode_image(black_box(img), &output, ImageFormat::Jpeg, quality)),
            );
        }
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let report = sample_report(1_000);

    c.bench_function("report_totals", |b| {
        b.iter(|| ReportTotals::from_records(black_box(report.records())))
    });
    c.bench_function("report_render", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(64 * 1024);
            write_report(black_box(&report), &mut buffer).unwrap();
            buffer
        })
    });
}

fn bench_batch_processing(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    std::fs::create_dir(&source).unwrap();
    for i in 0..10 {
        test_image(320, 240)
            .save(source.join(format!("test_{}.jpg", i)))
            .unwrap();
    }

    c.bench_function("batch_processing", |b| {
        b.iter(|| {
            // Each run gets its own destination folder
            let request = BatchRequest::new(Some(source.clone()), Some("60".to_string()));
            let outcome = batch_compress_images(&request);
            for dir in std::fs::read_dir(temp_dir.path()).unwrap().flatten() {
                if dir.file_name().to_string_lossy().ends_with("_Compressed") {
                    let _ = std::fs::remove_dir_all(dir.path());
                }
            }
            outcome
        })
    });
}

criterion_group!(
    benches,
    bench_quality_parsing,
    bench_jpeg_reencode,
    bench_report,
    bench_batch_processing
);
criterion_main!(benches);
