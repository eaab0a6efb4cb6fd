//! # Signer Recovery (secp256k1)
//!
//! Recovers the identity that produced a signature over a 32-byte message
//! hash, the way `ecrecover` does: no stored public key is needed.
//!
//! ## Notes
//!
//! - **Scalar Range Validation**: r and s must be in [1, n-1]
//! - **High S**: accepted. The signature is normalised to low S and the
//!   recovery id's y-parity flipped before recovery, so both forms of a
//!   signature yield the same signer.
//! - **Constant-Time Operations**: range checks use the `subtle` crate

use super::codec::{split, SignatureParts};
use super::entities::{Address, Hash, RawSignature};
use super::errors::{RecoveryFault, SignatureError};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use rayon::prelude::*;
use sha3::{Digest, Keccak256};
use subtle::{Choice, ConstantTimeEq};
use tracing::trace;

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Stateless signer recovery.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignerRecovery;

impl SignerRecovery {
    pub fn new() -> Self {
        Self
    }

    /// Recover the identity that signed `message_hash`.
    pub fn recover(
        &self,
        message_hash: &Hash,
        signature: &[u8],
    ) -> Result<Address, SignatureError> {
        recover(message_hash, signature)
    }

    /// Recover many signers in parallel. Results keep the input order.
    pub fn recover_batch(
        &self,
        items: &[(Hash, RawSignature)],
    ) -> Vec<Result<Address, SignatureError>> {
        items
            .par_iter()
            .map(|(hash, sig)| recover(hash, sig.as_ref()))
            .collect()
    }
}

/// Recover the signer's address from a raw 65-byte signature.
pub fn recover(message_hash: &Hash, signature: &[u8]) -> Result<Address, SignatureError> {
    let parts = split(signature)?;
    let address = recover_parts(message_hash, &parts)?;
    trace!(v = parts.v, "Signer recovered");
    Ok(address)
}

fn recover_parts(message_hash: &Hash, parts: &SignatureParts) -> Result<Address, RecoveryFault> {
    use zeroize::Zeroize;

    let recovery_id = parse_recovery_id(parts.v)?;

    if !is_valid_scalar(&parts.r) || !is_valid_scalar(&parts.s) {
        return Err(RecoveryFault::ScalarOutOfRange);
    }

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&parts.r);
    sig_bytes[32..].copy_from_slice(&parts.s);
    let parsed = Signature::from_slice(&sig_bytes);
    sig_bytes.zeroize();
    let sig = parsed.map_err(|_| RecoveryFault::ScalarOutOfRange)?;

    // k256 only recovers low-S signatures; (r, n - s) belongs to -R.
    let (sig, recovery_id) = match sig.normalize_s() {
        Some(low) => (
            low,
            RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
        ),
        None => (sig, recovery_id),
    };

    let key = VerifyingKey::recover_from_prehash(message_hash, &sig, recovery_id)
        .map_err(|_| RecoveryFault::NoPointRecovered)?;

    Ok(address_from_pubkey(&key))
}

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Derive the 20-byte identity from a public key.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);
    let pubkey_slice = pubkey_bytes.as_bytes();

    // Skip the 0x04 uncompressed prefix
    let hash = keccak256(&pubkey_slice[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Valid v values: 0, 1, 27, 28
fn parse_recovery_id(v: u8) -> Result<RecoveryId, RecoveryFault> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(RecoveryFault::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| RecoveryFault::InvalidRecoveryId(v))
}

/// Check that a scalar is in [1, n-1] without data-dependent branches.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for &byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }

    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for i in 0..32 {
        let s_byte = scalar[i];
        let n_byte = SECP256K1_ORDER[i];

        let not_decided = !(less | greater);
        let byte_less = Choice::from((s_byte < n_byte) as u8);
        let byte_greater = Choice::from((s_byte > n_byte) as u8);

        less |= not_decided & byte_less;
        greater |= not_decided & byte_greater;
    }

    (!is_zero & less).into()
}
