use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lazy_dialer::keypad::Keypad;
use lazy_dialer::solver::{self, DistanceCache};
use lazy_dialer::Dial;

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_short(c: &mut Criterion) {
    bench_number(c, "110");
}

#[allow(unused)]
fn bench_long(c: &mut Criterion) {
    bench_number(c, "74147*0#96369");
}

#[allow(unused)]
fn bench_very_long(c: &mut Criterion) {
    // many equally good solutions, pruning has the least to work with
    bench_number(c, "5555055550555505555");
}

#[allow(unused)]
fn bench_shared_cache(c: &mut Criterion) {
    let keypad = Keypad::standard();
    let mut distances = DistanceCache::new();
    c.bench_function("shared cache 74147*0#96369", |b| {
        b.iter(|| {
            solver::solve_with_cache(
                &keypad,
                black_box("74147*0#96369"),
                &mut distances,
                false,
            )
        })
    });
}

fn bench_number(c: &mut Criterion, number: &str) {
    let keypad = Keypad::standard();

    c.bench_function(number, |b| {
        b.iter(|| black_box(keypad.dial(black_box(number), black_box(false))))
    });
}

criterion_group!(
    benches,
    bench_short,
    bench_long,
    bench_very_long,
    bench_shared_cache,
);
criterion_main!(benches);
