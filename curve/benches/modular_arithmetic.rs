use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{mod_inverse, normalize, CurveParams};
use num_bigint::BigInt;

fn bench_normalize(c: &mut Criterion) {
    let params = CurveParams::secp256r1();
    let x = BigInt::from(-1) - BigInt::from(params.a().clone()) * BigInt::from(params.b().clone());

    c.bench_function("normalize", |bencher| {
        bencher.iter(|| black_box(normalize(black_box(&x), params.p())))
    });
}

fn bench_mod_inverse(c: &mut Criterion) {
    let params = CurveParams::secp256r1();
    let x = params.b().clone();

    c.bench_function("mod_inverse", |bencher| {
        bencher.iter(|| black_box(mod_inverse(black_box(&x), params.p())))
    });
}

criterion_group!(benches, bench_normalize, bench_mod_inverse);
criterion_main!(benches);
