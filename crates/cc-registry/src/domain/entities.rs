//! # Domain Entities
//!
//! Registry records. Certificates hold [`EntitySnapshot`]s: plain copies
//! taken at issuance that later changes to the live [`Entity`] never reach.

use super::codec::{Role, Status};
use super::errors::RegistryError;
use cc_signature::{Address, Hash, RawSignature};
use serde::{Deserialize, Serialize};

/// Sequential slot an entity is stored under.
pub type EntitySlot = u64;

/// Sequential vaccine batch id.
pub type BatchId = u64;

/// Sequential certificate id.
pub type CertificateId = u64;

/// Default capacity of every certificate reference list.
pub const MAX_CERTIFICATIONS: usize = 2;

/// Bounded list of certificate ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRefs {
    ids: Vec<CertificateId>,
    capacity: usize,
}

impl CertificateRefs {
    /// Empty list that will hold at most `capacity` ids.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `id` if there is room. Returns whether it was recorded.
    pub fn try_push(&mut self, id: CertificateId) -> bool {
        if self.is_full() {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn as_slice(&self) -> &[CertificateId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// A registered participant (live record).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub slot: EntitySlot,
    pub identity: Address,
    /// Immutable after registration.
    pub role: Role,
    pub certificate_refs: CertificateRefs,
}

impl Entity {
    /// Copy the entity's current state.
    pub fn snapshot(&self) -> EntitySnapshot {
        EntitySnapshot {
            slot: self.slot,
            identity: self.identity,
            role: self.role,
            certificate_refs: self.certificate_refs.as_slice().to_vec(),
        }
    }

    /// Fail with `RoleMismatch` unless the entity holds `expected`.
    pub fn require_role(&self, expected: Role) -> Result<(), RegistryError> {
        if self.role != expected {
            return Err(RegistryError::RoleMismatch {
                slot: self.slot,
                expected,
                actual: self.role,
            });
        }
        Ok(())
    }
}

/// Copy of an [`Entity`] captured when a certificate was issued.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub slot: EntitySlot,
    pub identity: Address,
    pub role: Role,
    pub certificate_refs: Vec<CertificateId>,
}

/// A registered vaccine batch. Brand and manufacturer never change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineBatch {
    pub id: BatchId,
    pub brand: String,
    pub manufacturer: Address,
    pub certificate_refs: CertificateRefs,
}

/// An issued certificate. Immutable once stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: CertificateId,
    pub issuer: EntitySnapshot,
    pub prover: EntitySnapshot,
    pub signature: RawSignature,
    pub status: Status,
}

/// Entity registration handed to the store, which assigns the slot.
#[derive(Clone, Debug)]
pub struct NewEntity {
    pub identity: Address,
    pub role: Role,
    pub refs_capacity: usize,
}

/// Batch registration handed to the store, which assigns the id.
#[derive(Clone, Debug)]
pub struct NewBatch {
    pub brand: String,
    pub manufacturer: Address,
    pub refs_capacity: usize,
}

/// Validated issuance handed to the store, which assigns the id and
/// captures the snapshots under its write lock.
#[derive(Clone, Debug)]
pub struct CertificateDraft {
    pub issuer_slot: EntitySlot,
    pub prover_slot: EntitySlot,
    pub status: Status,
    pub signature: RawSignature,
}

/// Result of storing a certificate.
#[derive(Clone, Debug)]
pub struct StoredCertificate {
    pub certificate: Certificate,
    /// Whether the id fit into the live issuer's reference list.
    pub issuer_ref_recorded: bool,
    /// Whether the id fit into the live prover's reference list.
    pub prover_ref_recorded: bool,
}

/// Caller's issuance request.
#[derive(Clone, Debug)]
pub struct IssueCertificateRequest {
    pub issuer_slot: EntitySlot,
    pub issuer_identity: Address,
    pub prover_slot: EntitySlot,
    pub prover_identity: Address,
    pub status: String,
    pub signature: Vec<u8>,
}

/// One item of a bulk verification.
#[derive(Clone, Debug)]
pub struct VerificationRequest {
    pub message_hash: Hash,
    pub certificate_id: CertificateId,
    pub claimed_issuer: Address,
}

/// Outcome of a bulk verification.
#[derive(Clone, Debug)]
pub struct BatchVerificationReport {
    /// Per-request outcome, in request order.
    pub results: Vec<Result<bool, RegistryError>>,
    /// Requests whose signature matched the stored issuer.
    pub valid_count: usize,
    /// Requests that returned `false` or failed.
    pub invalid_count: usize,
    pub all_valid: bool,
}

impl BatchVerificationReport {
    pub fn from_results(results: Vec<Result<bool, RegistryError>>) -> Self {
        let valid_count = results.iter().filter(|r| matches!(r, Ok(true))).count();
        let invalid_count = results.len() - valid_count;

        Self {
            results,
            valid_count,
            invalid_count,
            all_valid: invalid_count == 0,
        }
    }
}
