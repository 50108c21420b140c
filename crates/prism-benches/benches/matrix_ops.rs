// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::cast_precision_loss)]
//! Benchmark: 4x4 matrix multiply, inverse and batched point transforms.
//!
//! `f32` runs on whichever 4-lane backend the build selected; `f64` always
//! runs on the portable lanes, so the pair doubles as a backend comparison.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prism_math::{Matrix4x4, Quaternion, Scalar, Vector3};

fn world<T: Scalar>() -> Matrix4x4<T> {
    let f = T::from_f32;
    Matrix4x4::from_world(
        Vector3::new(f(1.5), f(2.0), f(0.5)),
        &Quaternion::from_yaw_pitch_roll(f(0.3), f(-0.7), f(1.1)),
        Vector3::new(f(10.0), f(-4.0), f(2.5)),
    )
}

fn points<T: Scalar>(n: usize) -> Vec<Vector3<T>> {
    (0..n)
        .map(|i| {
            let x = T::from_f64(i as f64);
            Vector3::new(x, x * T::HALF, -x)
        })
        .collect()
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_multiply");
    let (a32, b32) = (world::<f32>(), world::<f32>().transposed());
    let (a64, b64) = (world::<f64>(), world::<f64>().transposed());
    group.bench_function("f32", |b| b.iter(|| black_box(a32) * black_box(b32)));
    group.bench_function("f64", |b| b.iter(|| black_box(a64) * black_box(b64)));
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_inverse");
    let m32 = world::<f32>();
    let m64 = world::<f64>();
    group.bench_function("f32", |b| b.iter(|| black_box(m32).inversed()));
    group.bench_function("f64", |b| b.iter(|| black_box(m64).inversed()));
    group.bench_function("f32_decompose", |b| b.iter(|| black_box(m32).decompose()));
    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_transform");
    let m = world::<f32>();
    for &n in &[64usize, 1_024, 16_384] {
        let input = points::<f32>(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("coord", n), &input, |b, input| {
            b.iter(|| {
                for p in input {
                    black_box(m.transform_coord(*p));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("normal", n), &input, |b, input| {
            b.iter(|| {
                for p in input {
                    black_box(m.transform_normal(*p));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multiply, bench_inverse, bench_transform);
criterion_main!(benches);
