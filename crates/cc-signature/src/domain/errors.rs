//! # Signature Errors

use thiserror::Error;

/// Errors raised while decoding a signature or recovering its signer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// Input is not exactly 65 bytes.
    #[error("Invalid signature length: expected 65 bytes, got {actual}")]
    InvalidSignatureLength { actual: usize },

    /// The signature is well-sized but no identity can be recovered from it.
    #[error("Signer recovery failed: {0}")]
    RecoveryFailure(RecoveryFault),
}

/// Why recovery produced no identity.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RecoveryFault {
    /// v must be 0, 1, 27 or 28.
    #[error("invalid recovery id {0}")]
    InvalidRecoveryId(u8),

    /// r or s is zero or not below the curve order.
    #[error("scalar out of range")]
    ScalarOutOfRange,

    /// No curve point yields a public key for this (hash, r, s, v).
    #[error("no public key recoverable")]
    NoPointRecovered,
}

impl From<RecoveryFault> for SignatureError {
    fn from(fault: RecoveryFault) -> Self {
        SignatureError::RecoveryFailure(fault)
    }
}
