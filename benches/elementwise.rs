use std::hint::black_box;

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;

use pointnd::Point3D;
use pointnd::PointND;

fn bench_elementwise(c: &mut Criterion) {
    let a = Point3D::new(1.5, -2.5, 3.5);
    let b = Point3D::new(-4.5, 5.5, -6.5);
    c.bench_function("add_3d", |bencher| {
        bencher.iter(|| black_box(a) + black_box(b))
    });

    let p = PointND([1.0_f64, -2.0, 3.0, -4.0, 5.0, -6.0, 7.0, -8.0]);
    c.bench_function("dominant_axis_8d", |bencher| {
        bencher.iter(|| black_box(p).dominant_axis())
    });

    let points: Vec<Point3D> = (0..1024)
        .map(|i| Point3D::new(i as f64, -(i as f64), 0.5 * i as f64))
        .collect();
    c.bench_function("sum_1024_points", |bencher| {
        bencher.iter(|| black_box(&points).iter().sum::<Point3D>())
    });
}

criterion_group!(benches, bench_elementwise);
criterion_main!(benches);
