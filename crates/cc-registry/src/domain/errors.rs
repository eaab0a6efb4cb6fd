//! # Registry Errors
//!
//! Every failure is a local validation failure: nothing is retried, and the
//! operation that raised it has no effect on stored state.

use super::codec::Role;
use cc_signature::{Address, SignatureError};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown role: {0:?}")]
    UnknownRole(String),

    #[error("Unknown status: {0:?}")]
    UnknownStatus(String),

    /// The entity at `slot` does not hold the role its position requires.
    #[error("Role mismatch at slot {slot}: expected {expected}, found {actual}")]
    RoleMismatch {
        slot: u64,
        expected: Role,
        actual: Role,
    },

    /// Caller-supplied identity differs from the identity stored at `slot`.
    #[error("Identity mismatch at slot {slot}: stored {stored:?}, supplied {supplied:?}")]
    EntityIdentityMismatch {
        slot: u64,
        stored: Address,
        supplied: Address,
    },

    /// `verify_certificate` was asked about an issuer the certificate does not name.
    #[error("Certificate {certificate_id} was not issued by {claimed:?}")]
    IssuerIdentityMismatch {
        certificate_id: u64,
        stored: Address,
        claimed: Address,
    },

    #[error("Entity not found at slot {0}")]
    EntityNotFound(u64),

    #[error("Vaccine batch not found: {0}")]
    BatchNotFound(u64),

    #[error("Certificate not found: {0}")]
    CertificateNotFound(u64),

    /// Signature length or recovery failure.
    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error("Invalid registry configuration: {0}")]
    InvalidConfig(String),

    #[error("Storage failure: {0}")]
    StorageFailure(String),
}
