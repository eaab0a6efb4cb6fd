//! # Certificate Digest
//!
//! Canonical message an issuer signs for a custody claim:
//! `keccak256(issuer || prover || status literal)`.

use super::codec::Status;
use cc_signature::{keccak256, Address, Hash};

pub fn certificate_digest(issuer: &Address, prover: &Address, status: Status) -> Hash {
    let literal = status.as_str().as_bytes();
    let mut message = Vec::with_capacity(40 + literal.len());
    message.extend_from_slice(issuer);
    message.extend_from_slice(prover);
    message.extend_from_slice(literal);
    keccak256(&message)
}
