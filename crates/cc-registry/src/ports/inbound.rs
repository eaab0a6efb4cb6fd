//! # Inbound Ports (Driving Ports / API)

use crate::domain::entities::{
    BatchId, BatchVerificationReport, Certificate, CertificateId, Entity, EntitySlot,
    IssueCertificateRequest, VaccineBatch, VerificationRequest,
};
use crate::domain::errors::RegistryError;
use async_trait::async_trait;
use cc_signature::{Address, Hash};

/// Public API of the certificate registry.
///
/// Operations that emit a notification are async; reads are synchronous.
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait CertificateRegistryApi: Send + Sync {
    /// Register a participant under the next free slot.
    ///
    /// # Errors
    /// * `UnknownRole` - `role` is not one of the role literals
    async fn register_entity(
        &self,
        identity: Address,
        role: &str,
    ) -> Result<EntitySlot, RegistryError>;

    /// Register a vaccine batch and return its id.
    async fn register_vaccine_batch(
        &self,
        brand: &str,
        manufacturer: Address,
    ) -> Result<BatchId, RegistryError>;

    /// Issue a certificate for a custody transition.
    ///
    /// # Errors
    /// * `EntityNotFound` - a slot is empty
    /// * `RoleMismatch` - the issuer slot is not an ISSUER, or the prover slot not a PROVER
    /// * `EntityIdentityMismatch` - identity binding is enforced and an identity differs
    /// * `UnknownStatus` - `status` is not one of the status literals
    /// * `Signature(InvalidSignatureLength)` - signature is not 65 bytes
    async fn issue_certificate(
        &self,
        request: IssueCertificateRequest,
    ) -> Result<CertificateId, RegistryError>;

    /// Check that the certificate's signature over `message_hash` was made by
    /// its recorded issuer.
    ///
    /// # Errors
    /// * `CertificateNotFound` - no certificate with this id
    /// * `IssuerIdentityMismatch` - `claimed_issuer` is not the recorded issuer
    /// * `Signature(RecoveryFailure)` - no identity recoverable from the signature
    fn verify_certificate(
        &self,
        message_hash: &Hash,
        certificate_id: CertificateId,
        claimed_issuer: &Address,
    ) -> Result<bool, RegistryError>;

    /// Verify many certificates, recovering signers in parallel.
    fn verify_certificates(&self, requests: &[VerificationRequest]) -> BatchVerificationReport;

    fn entity(&self, slot: EntitySlot) -> Result<Entity, RegistryError>;

    fn batch(&self, id: BatchId) -> Result<VaccineBatch, RegistryError>;

    fn certificate(&self, id: CertificateId) -> Result<Certificate, RegistryError>;

    fn entity_count(&self) -> Result<u64, RegistryError>;

    fn batch_count(&self) -> Result<u64, RegistryError>;

    fn certificate_count(&self) -> Result<u64, RegistryError>;
}
