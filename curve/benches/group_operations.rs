use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{random_scalar, CurveParams};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_point_double(c: &mut Criterion) {
    let params = CurveParams::secp256r1();
    let g = params.generator();

    c.bench_function("point_double", |bencher| {
        bencher.iter(|| black_box(black_box(g).double(&params)))
    });
}

fn bench_point_add(c: &mut Criterion) {
    let params = CurveParams::secp256r1();
    let g = params.generator();
    let h = g.double(&params);

    c.bench_function("point_add", |bencher| {
        bencher.iter(|| black_box(black_box(g).add(black_box(&h), &params)))
    });
}

fn bench_scalar_mul(c: &mut Criterion) {
    let params = CurveParams::secp256r1();
    let g = params.generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng, params.n());

    c.bench_function("scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(g).mul(black_box(&scalar), &params)))
    });
}

criterion_group!(benches, bench_point_double, bench_point_add, bench_scalar_mul);
criterion_main!(benches);
