//! Constants for the base SECP256R1 configuration.

/// Byte width of a SHA-256 digest.
///
/// The digest is interpreted as a big-endian integer when signing and
/// verifying, so its width matches the 256-bit subgroup order of the base
/// configuration; a narrower hash would shrink the effective exponent
/// entropy.
pub const DIGEST_SIZE: usize = 32;

/// Byte width of a canonical SECP256R1 scalar.
pub const SCALAR_SIZE: usize = 32;
