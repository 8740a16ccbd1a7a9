use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use digitring::{random::RandomDigits, DigitRing, Radix};
use rand::{distributions::Uniform, prelude::Distribution, thread_rng};

fn insert_remove(ring: &mut DigitRing, indices: &[usize]) {
    for &i in indices {
        ring.insert(black_box(i), 7).unwrap();
        ring.remove(black_box(i)).unwrap();
    }
}

fn shift_round(ring: &mut DigitRing) {
    for _ in 0..ring.len() {
        black_box(&mut *ring).shift_left();
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let rng = &mut thread_rng();

    let hex = RandomDigits::new(Radix::Hexadecimal, 1000).canonical().sample(rng);
    let other = RandomDigits::new(Radix::Binary, 4000).sample(rng);
    let dec = RandomDigits::new(Radix::Decimal, 1000).canonical().sample(rng);

    let uniform: Uniform<usize> = Uniform::new(0, hex.len());
    let indices: Vec<usize> = (0..100).map(|_| uniform.sample(rng)).collect();

    let mut ring = hex.clone();
    c.bench_function("insert_remove", |b| {
        b.iter(|| insert_remove(&mut ring, &indices))
    });

    let mut ring = hex.clone();
    c.bench_function("shift_round", |b| b.iter(|| shift_round(&mut ring)));

    c.bench_function("to_natural_hex", |b| b.iter(|| black_box(&hex).to_natural()));
    c.bench_function("to_natural_dec", |b| b.iter(|| black_box(&dec).to_natural()));

    c.bench_function("change_base", |b| b.iter(|| black_box(&hex).change_base()));

    c.bench_function("combine", |b| {
        b.iter(|| black_box(&hex).combine(black_box(&other)).unwrap())
    });

    let text = dec.to_decimal_string();
    c.bench_function("from_decimal", |b| {
        b.iter(|| DigitRing::from_decimal(black_box(&text)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
