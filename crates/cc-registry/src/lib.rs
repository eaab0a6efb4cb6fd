//! # Cold-Chain Certificate Registry
//!
//! Append-only registry of cold-chain participants, vaccine batches and
//! custody certificates. Each certificate carries a 65-byte recoverable
//! signature; verification recovers the signer and compares it with the
//! identity the registry recorded for the issuer.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Records, literal codecs, configuration
//! - **Ports Layer** (`ports/`): `CertificateRegistryApi` and `RegistryStore`
//! - **Adapters** (`adapters/`): In-memory store
//! - **Service Layer** (`service.rs`): Issuance and verification flow
//!
//! ## Identifiers
//!
//! Entity slots, batch ids and certificate ids are three independent
//! sequences starting at 0. An id is assigned in the same locked step that
//! stores the record, so concurrent callers never observe a gap or a
//! duplicate.
//!
//! ## Snapshots
//!
//! A certificate embeds copies of its issuer and prover as they were at
//! issuance. Later reference appends on the live entities never reach
//! stored certificates.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryRegistryStore;
pub use domain::codec::{decode_role, decode_status, Role, Status};
pub use domain::config::RegistryConfig;
pub use domain::digest::certificate_digest;
pub use domain::entities::{
    BatchId, BatchVerificationReport, Certificate, CertificateDraft, CertificateId,
    CertificateRefs, Entity, EntitySlot, EntitySnapshot, IssueCertificateRequest, NewBatch,
    NewEntity, StoredCertificate, VaccineBatch, VerificationRequest, MAX_CERTIFICATIONS,
};
pub use domain::errors::RegistryError;
pub use ports::inbound::CertificateRegistryApi;
pub use ports::outbound::RegistryStore;
pub use service::CertificateRegistryService;
