use criterion::{Criterion, black_box, criterion_group, criterion_main};
use curve::CurveParams;
use ecdsa::SigningKey;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_sign(c: &mut Criterion) {
    let params = CurveParams::secp256r1();
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng, &params);
    let msg = b"benchmark message";

    c.bench_function("ecdsa_sign", |bencher| {
        bencher.iter(|| {
            let sig = sk.sign(&mut rng, black_box(msg), &params);
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let params = CurveParams::secp256r1();
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng, &params);
    let vk = sk.verifying_key(&params);
    let msg = b"benchmark message";
    let sig = sk.sign(&mut rng, msg, &params);

    c.bench_function("ecdsa_verify", |bencher| {
        bencher.iter(|| {
            let ok = vk
                .verify(black_box(msg), black_box(&sig), &params)
                .expect("verify");
            black_box(ok);
        })
    });
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);
