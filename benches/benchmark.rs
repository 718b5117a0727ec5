use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qualdecode::{convert, statistics, validate, Encoding};

pub fn long_read(c: &mut Criterion) {
    // a 15kb read cycling through every Phred+33 score
    let quality: String = (33u8..=126).map(char::from).cycle().take(15_000).collect();

    c.bench_function("convert long read", |b| {
        b.iter(|| convert(black_box(&quality), Encoding::Phred33))
    });

    c.bench_function("statistics long read", |b| {
        b.iter(|| statistics(black_box(&quality), Encoding::Phred33))
    });

    c.bench_function("validate long read", |b| {
        b.iter(|| validate(black_box(&quality), Encoding::Phred33))
    });
}

criterion_group!(benches, long_read);
criterion_main!(benches);
