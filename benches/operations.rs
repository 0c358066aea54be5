use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use diet::interval::ii;
use diet::Diet;

/// linear multiplier for work done by benchmarks
const REPEAT: i64 = 1000;

/// utility for constructing a balanced diet of `n` disjoint intervals
fn build_diet(n: i64) -> Diet<i64> {
	let mut diet = Diet::from_iter((0..n).map(|i| ii(i * 4, i * 4 + 1)));
	diet.balance();
	diet
}

fn bench_intersection(c: &mut Criterion) {
	let diet = build_diet(REPEAT);
	c.bench_function("intersection", |b| {
		b.iter(|| diet.intersection(black_box(ii(REPEAT, REPEAT * 3))))
	});
}

fn bench_contains(c: &mut Criterion) {
	let diet = build_diet(REPEAT);
	c.bench_function("contains", |b| {
		b.iter(|| diet.contains(black_box(ii(REPEAT * 2, REPEAT * 2 + 1))))
	});
}

fn bench_intersection_all(c: &mut Criterion) {
	let a = build_diet(REPEAT);
	let b_diet = Diet::from_iter((0..REPEAT).map(|i| ii(i * 6, i * 6 + 2)));
	c.bench_function("intersection_all", |b| {
		b.iter(|| a.intersection_all(black_box(&b_diet)))
	});
}

fn bench_total(c: &mut Criterion) {
	let diet = build_diet(REPEAT);
	c.bench_function("total", |b| b.iter(|| black_box(&diet).total()));
}

fn bench_balance(c: &mut Criterion) {
	let diet = Diet::from_iter((0..REPEAT).map(|i| ii(i * 4, i * 4 + 1)));
	c.bench_function("balance vine", |b| {
		b.iter_batched(
			|| diet.clone(),
			|mut diet| {
				diet.balance();
				diet
			},
			criterion::BatchSize::SmallInput,
		)
	});
}

criterion_group!(
	operations,
	bench_intersection,
	bench_contains,
	bench_intersection_all,
	bench_total,
	bench_balance
);
criterion_main!(operations);
