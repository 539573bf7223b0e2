//! Error types for the ECDSA signature scheme.

/// Errors that can occur when constructing keys or verifying signatures.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EcdsaError {
    /// A point at infinity, or a point not on the curve, was supplied
    /// where a valid public-key point was expected.
    ///
    /// This error occurs when:
    /// - A verifying key is built from coordinates that fail the curve
    ///   membership check
    /// - A deserialized verifying key turns out to be the point at infinity
    ///
    /// A signature that merely does not match is never reported through
    /// this error; verification returns `Ok(false)` for that.
    InvalidPoint,
    /// A signing scalar outside `[1, n-1]` was supplied.
    ///
    /// Zero is excluded because its public key would be the point at
    /// infinity; values at or above the subgroup order alias a smaller
    /// scalar and are rejected rather than silently reduced.
    InvalidScalar,
}
