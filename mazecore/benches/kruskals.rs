use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazecore::{
    algorithms::{CarveStrategy, Generator},
    view::NullView,
};

const DIMENSION: i32 = 50;

pub fn kruskals_reshuffle(c: &mut Criterion) {
    c.bench_function("kruskals_reshuffle", |b| {
        b.iter(|| {
            Generator::new(black_box(DIMENSION), CarveStrategy::Reshuffle, Some(0))
                .generate(NullView)
                .unwrap()
        })
    });
}

pub fn kruskals_single_pass(c: &mut Criterion) {
    c.bench_function("kruskals_single_pass", |b| {
        b.iter(|| {
            Generator::new(black_box(DIMENSION), CarveStrategy::SinglePass, Some(0))
                .generate(NullView)
                .unwrap()
        })
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = kruskals_reshuffle, kruskals_single_pass}
criterion_main!(benches);
