//! Short-Weierstrass elliptic curve arithmetic over a prime field.
//!
//! This crate provides the modular arithmetic, affine curve points, and
//! scalar sampling that the `ecdsa` crate composes into the signature
//! scheme. Domain parameters are an explicit [`CurveParams`] value passed
//! to every operation, so several parameter sets can coexist in one
//! process; the SECP256R1 (P-256) configuration is built in and untrusted
//! parameter sets go through validated construction.
//!
//! Arithmetic here is not constant-time: modular exponentiation and the
//! double-and-add loop both take input-dependent paths. That is a known
//! gap for callers protecting long-lived key material against timing side
//! channels.

mod affine;
mod modular;
mod params;
mod random;

pub use affine::Point;
pub use modular::{is_probable_prime, mod_inverse, normalize};
pub use params::{CurveParams, ParamError};
pub use random::random_scalar;
