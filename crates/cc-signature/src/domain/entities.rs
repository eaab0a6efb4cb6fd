//! # Domain Entities
//!
//! Value types shared by the codec and recovery modules.

use super::errors::SignatureError;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

/// 32-byte message digest.
pub type Hash = [u8; 32];

/// Ethereum-style identity derived from a public key (last 20 bytes of keccak256(pubkey)).
pub type Address = [u8; 20];

/// Length of a raw `r || s || v` signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// Raw recoverable signature exactly as submitted by an issuer.
///
/// Only constructed through [`RawSignature::try_from`], so the length is
/// always 65.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawSignature {
    #[serde_as(as = "Bytes")]
    bytes: [u8; SIGNATURE_LENGTH],
}

impl RawSignature {
    /// The underlying 65 bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.bytes
    }
}

impl TryFrom<&[u8]> for RawSignature {
    type Error = SignatureError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; SIGNATURE_LENGTH] =
            value
                .try_into()
                .map_err(|_| SignatureError::InvalidSignatureLength {
                    actual: value.len(),
                })?;
        Ok(Self { bytes })
    }
}

impl From<[u8; SIGNATURE_LENGTH]> for RawSignature {
    fn from(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self { bytes }
    }
}

impl AsRef<[u8]> for RawSignature {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
