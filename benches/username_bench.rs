use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vnuser_core::{compute_usernames, remove_tone_marks, splice_columns, ProcessingConfig, ProcessingOptions};
use vnuser_sheet::CellValue;

const FAMILY: [&str; 6] = ["Nguyễn", "Trần", "Lê", "Phạm", "Hoàng", "Đặng"];
const MIDDLE: [&str; 4] = ["Văn", "Thị", "Thanh", "Phương"];
const GIVEN: [&str; 6] = ["An", "Thảo", "Tùng", "Lan", "Đức", "Hưởng"];

fn names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            format!(
                "{} {} {}",
                FAMILY[i % FAMILY.len()],
                MIDDLE[(i / 7) % MIDDLE.len()],
                GIVEN[(i / 3) % GIVEN.len()]
            )
        })
        .collect()
}

fn bench_tone_marks(c: &mut Criterion) {
    c.bench_function("remove_tone_marks", |b| {
        b.iter(|| remove_tone_marks(black_box("Tôn Nữ Thị Hồng Hạnh")))
    });
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_usernames");
    let options = ProcessingOptions::with_emails("acme.com");

    for size in [100, 1_000, 10_000] {
        let input = names(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| compute_usernames(black_box(input.as_slice()), &options))
        });
    }

    group.finish();
}

fn bench_splice(c: &mut Criterion) {
    let input = names(1_000);
    let results = compute_usernames(input.as_slice(), &ProcessingOptions::with_emails("acme.com"));
    let grid: Vec<Vec<CellValue>> = std::iter::once(vec![
        CellValue::from("STT"),
        CellValue::from("Họ và tên"),
        CellValue::from("Phòng"),
    ])
    .chain(input.iter().enumerate().map(|(i, name)| {
        vec![
            CellValue::Int(i as i64),
            CellValue::from(name.as_str()),
            CellValue::from("IT"),
        ]
    }))
    .collect();
    let config = ProcessingConfig::new("Sheet1", 1).with_domain("acme.com");

    c.bench_function("splice_columns/1000", |b| {
        b.iter(|| splice_columns(black_box(&grid), &config, &results))
    });
}

criterion_group!(benches, bench_tone_marks, bench_compute, bench_splice);
criterion_main!(benches);
