use criterion::{criterion_group, criterion_main, Criterion};

use rsoundex::*;

fn bench_encoder(c: &mut Criterion, encoder_name: &str, encoder: Box<dyn Encoder>, text: &str) {
    c.bench_function(encoder_name, |b| b.iter(|| encoder.encode(text)));
}

pub fn bench_soundex_short(c: &mut Criterion) {
    bench_encoder(c, "Soundex (short)", Box::new(Soundex::default()), "Lee");
}

pub fn bench_soundex_long(c: &mut Criterion) {
    // Stops after three digits, length should not matter
    bench_encoder(
        c,
        "Soundex (long)",
        Box::new(Soundex::default()),
        "Wolfeschlegelsteinhausenbergerdorff",
    );
}

pub fn bench_soundex_code(c: &mut Criterion) {
    c.bench_function("soundex_code", |b| b.iter(|| soundex_code("Ashcraft")));
}

criterion_group!(
    name = soundex;
    config = Criterion::default().sample_size(300);
    targets = bench_soundex_short, bench_soundex_long, bench_soundex_code
);

criterion_main!(soundex);
