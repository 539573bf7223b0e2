//! ECDSA signatures over a short-Weierstrass prime-field curve.
//!
//! This library implements the ECDSA primitive using:
//! - The `curve` crate for prime-field point arithmetic, with SECP256R1
//!   (P-256) as the built-in parameter set
//! - SHA-256 for digesting messages into scalar-sized integers
//! - A caller-supplied random number generator for keys and nonces
//!
//! # Overview
//!
//! A signing key is a scalar `d` in `[1, n-1]`; its verifying key is the
//! curve point `d·G`. Signing draws a fresh random nonce per call and
//! produces a `(r, s)` scalar pair; verification recomputes the nonce
//! point from the public data and compares x-coordinates. Domain
//! parameters are passed explicitly to every operation, so the same keys
//! API serves any validated parameter set.
//!
//! # Example
//!
//! ```
//! use curve::CurveParams;
//! use ecdsa::SigningKey;
//!
//! let params = CurveParams::secp256r1();
//!
//! // Generate a random signing key and derive its verifying key.
//! let mut rng = rand::rng();
//! let signing_key = SigningKey::random(&mut rng, &params);
//! let verifying_key = signing_key.verifying_key(&params);
//!
//! // Sign a message (digested internally with SHA-256).
//! let message = b"pay 10 to carol";
//! let signature = signing_key.sign(&mut rng, message, &params);
//!
//! // Verify the signature.
//! let is_valid = verifying_key
//!     .verify(message, &signature, &params)
//!     .expect("verification failed");
//! assert!(is_valid);
//! ```
//!
//! # Security Considerations
//!
//! - Always use a cryptographically secure random number generator; the
//!   nonce must be fresh and uniform on every signing call. Reusing a
//!   nonce across two messages reveals the signing key.
//! - Protect the signing key from unauthorized access.
//! - The underlying arithmetic is not constant-time; keys handled by this
//!   crate are observable through timing side channels in principle.

mod constants;
mod errors;
mod keys;
mod signatures;


pub use constants::{DIGEST_SIZE, SCALAR_SIZE};
pub use errors::EcdsaError;
pub use keys::{SigningKey, VerifyingKey};
pub use signatures::{Signature, digest_message};
