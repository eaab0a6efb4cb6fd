//! # Signature Codec
//!
//! Splits a raw signature into the `(v, r, s)` triple used for recovery.

use super::entities::SIGNATURE_LENGTH;
use super::errors::SignatureError;

/// Components of a recoverable ECDSA signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignatureParts {
    /// Recovery id as submitted (0, 1, 27 or 28 for a usable signature).
    pub v: u8,
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
}

impl SignatureParts {
    /// Reassemble the 65-byte `r || s || v` layout.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}

/// Split a 65-byte signature into `(v, r, s)`.
///
/// r = bytes `[0, 32)`, s = bytes `[32, 64)`, v = byte `64`.
pub fn split(signature: &[u8]) -> Result<SignatureParts, SignatureError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(SignatureError::InvalidSignatureLength {
            actual: signature.len(),
        });
    }

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&signature[..32]);
    s.copy_from_slice(&signature[32..64]);

    Ok(SignatureParts {
        v: signature[64],
        r,
        s,
    })
}
