use curve::CurveParams;
use ecdsa::{Signature, SigningKey, VerifyingKey};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let params = CurveParams::secp256r1();
    let mut rng = StdRng::seed_from_u64(42);

    let sk = SigningKey::random(&mut rng, &params);
    let vk = sk.verifying_key(&params);

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    let msg = b"hello ecdsa";
    let sig = sk.sign(&mut rng, msg, &params);
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    let ok = vk2.verify(msg, &sig2, &params).expect("verify");
    assert!(ok);
    println!("signature r = {:x}", sig2.r);
    println!("signature s = {:x}", sig2.s);
    println!("signature valid: {ok}");

    let _ = sk2;
}
