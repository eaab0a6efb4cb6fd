//! # Certificate Registry Service
//!
//! Application service implementing [`CertificateRegistryApi`].
//!
//! ## Issuance Flow
//!
//! ```text
//! request ──→ issuer slot: exists? ISSUER? identity bound?
//!         ──→ prover slot: exists? PROVER? identity bound?
//!         ──→ status literal decodes?
//!         ──→ signature is 65 bytes?
//!         ──→ store.append_certificate (id + snapshots, one locked step)
//!         ──→ publish CertificateIssued
//! ```
//!
//! Every check runs before the single store write, so a rejected request
//! leaves no trace.

use crate::adapters::InMemoryRegistryStore;
use crate::domain::codec::{decode_role, decode_status, Role};
use crate::domain::config::RegistryConfig;
use crate::domain::entities::{
    BatchId, BatchVerificationReport, Certificate, CertificateDraft, CertificateId, Entity,
    EntitySlot, IssueCertificateRequest, NewBatch, NewEntity, VaccineBatch, VerificationRequest,
};
use crate::domain::errors::RegistryError;
use crate::ports::inbound::CertificateRegistryApi;
use crate::ports::outbound::RegistryStore;
use async_trait::async_trait;
use cc_event_bus::{EventPublisher, InMemoryEventBus, RegistryEvent};
use cc_signature::{Address, Hash, RawSignature, SignerRecovery};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Certificate registry over a store and an event publisher.
pub struct CertificateRegistryService<S, P>
where
    S: RegistryStore,
    P: EventPublisher,
{
    store: Arc<S>,
    publisher: Arc<P>,
    config: RegistryConfig,
    recovery: SignerRecovery,
}

impl<S, P> CertificateRegistryService<S, P>
where
    S: RegistryStore,
    P: EventPublisher,
{
    /// Create a registry service.
    ///
    /// # Errors
    /// * `InvalidConfig` - the configuration fails validation
    pub fn new(
        store: Arc<S>,
        publisher: Arc<P>,
        config: RegistryConfig,
    ) -> Result<Self, RegistryError> {
        config.validate()?;
        Ok(Self {
            store,
            publisher,
            config,
            recovery: SignerRecovery::new(),
        })
    }

    /// Load the entity at `slot` and check it may stand in for `role`.
    fn resolve_party(
        &self,
        slot: EntitySlot,
        supplied: &Address,
        role: Role,
    ) -> Result<Entity, RegistryError> {
        let entity = self.entity(slot)?;
        entity.require_role(role)?;

        if self.config.enforce_identity_binding && entity.identity != *supplied {
            return Err(RegistryError::EntityIdentityMismatch {
                slot,
                stored: entity.identity,
                supplied: *supplied,
            });
        }
        Ok(entity)
    }

    fn validate_issuance(
        &self,
        request: &IssueCertificateRequest,
    ) -> Result<CertificateDraft, RegistryError> {
        self.resolve_party(request.issuer_slot, &request.issuer_identity, Role::Issuer)?;
        self.resolve_party(request.prover_slot, &request.prover_identity, Role::Prover)?;
        let status = decode_status(&request.status)?;
        let signature = RawSignature::try_from(request.signature.as_slice())?;

        Ok(CertificateDraft {
            issuer_slot: request.issuer_slot,
            prover_slot: request.prover_slot,
            status,
            signature,
        })
    }

    /// Load a certificate and check the claimed issuer. No recovery yet.
    fn load_for_verification(
        &self,
        certificate_id: CertificateId,
        claimed_issuer: &Address,
    ) -> Result<Certificate, RegistryError> {
        let certificate = self.certificate(certificate_id)?;
        if certificate.issuer.identity != *claimed_issuer {
            return Err(RegistryError::IssuerIdentityMismatch {
                certificate_id,
                stored: certificate.issuer.identity,
                claimed: *claimed_issuer,
            });
        }
        Ok(certificate)
    }
}

impl CertificateRegistryService<InMemoryRegistryStore, InMemoryEventBus> {
    /// Wire a registry over an in-memory store and a bus sized from
    /// `config.event_channel_capacity`.
    pub fn in_memory(
        config: RegistryConfig,
    ) -> Result<(Self, Arc<InMemoryEventBus>), RegistryError> {
        let bus = Arc::new(InMemoryEventBus::with_capacity(config.event_channel_capacity));
        let store = Arc::new(InMemoryRegistryStore::new());
        let service = Self::new(store, Arc::clone(&bus), config)?;
        Ok((service, bus))
    }
}

#[async_trait]
impl<S, P> CertificateRegistryApi for CertificateRegistryService<S, P>
where
    S: RegistryStore,
    P: EventPublisher,
{
    async fn register_entity(
        &self,
        identity: Address,
        role: &str,
    ) -> Result<EntitySlot, RegistryError> {
        let role = decode_role(role).inspect_err(|e| {
            warn!(identity = %hex::encode(identity), error = %e, "Entity registration rejected");
        })?;

        let entity = self.store.append_entity(NewEntity {
            identity,
            role,
            refs_capacity: self.config.max_certifications,
        })?;

        info!(
            slot = entity.slot,
            identity = %hex::encode(identity),
            role = %role,
            "Entity registered"
        );

        self.publisher
            .publish(RegistryEvent::EntityRegistered {
                slot: entity.slot,
                identity,
                role: role.as_str().to_string(),
            })
            .await;

        Ok(entity.slot)
    }

    async fn register_vaccine_batch(
        &self,
        brand: &str,
        manufacturer: Address,
    ) -> Result<BatchId, RegistryError> {
        let batch = self.store.append_batch(NewBatch {
            brand: brand.to_string(),
            manufacturer,
            refs_capacity: self.config.max_certifications,
        })?;

        info!(
            batch_id = batch.id,
            brand = %batch.brand,
            manufacturer = %hex::encode(manufacturer),
            "Vaccine batch registered"
        );

        self.publisher
            .publish(RegistryEvent::BatchRegistered {
                batch_id: batch.id,
                manufacturer,
            })
            .await;

        Ok(batch.id)
    }

    async fn issue_certificate(
        &self,
        request: IssueCertificateRequest,
    ) -> Result<CertificateId, RegistryError> {
        let draft = self.validate_issuance(&request).inspect_err(|e| {
            warn!(
                issuer_slot = request.issuer_slot,
                prover_slot = request.prover_slot,
                error = %e,
                "Certificate issuance rejected"
            );
        })?;

        let stored = self.store.append_certificate(draft)?;
        let certificate_id = stored.certificate.id;

        if !stored.issuer_ref_recorded {
            warn!(
                certificate_id,
                slot = request.issuer_slot,
                "Issuer reference list full, certificate not recorded on entity"
            );
        }
        if !stored.prover_ref_recorded {
            warn!(
                certificate_id,
                slot = request.prover_slot,
                "Prover reference list full, certificate not recorded on entity"
            );
        }

        info!(
            certificate_id,
            issuer = %hex::encode(request.issuer_identity),
            prover = %hex::encode(request.prover_identity),
            status = %stored.certificate.status,
            "Certificate issued"
        );

        self.publisher
            .publish(RegistryEvent::CertificateIssued {
                issuer: request.issuer_identity,
                prover: request.prover_identity,
                certificate_id,
            })
            .await;

        Ok(certificate_id)
    }

    fn verify_certificate(
        &self,
        message_hash: &Hash,
        certificate_id: CertificateId,
        claimed_issuer: &Address,
    ) -> Result<bool, RegistryError> {
        let certificate = self.load_for_verification(certificate_id, claimed_issuer)?;

        let recovered = self
            .recovery
            .recover(message_hash, certificate.signature.as_ref())?;
        let valid = recovered == certificate.issuer.identity;

        debug!(
            certificate_id,
            recovered = %hex::encode(recovered),
            valid,
            "Certificate verified"
        );

        Ok(valid)
    }

    fn verify_certificates(&self, requests: &[VerificationRequest]) -> BatchVerificationReport {
        let mut results: Vec<Result<bool, RegistryError>> = Vec::with_capacity(requests.len());
        let mut pending = Vec::new();
        let mut pending_index = Vec::new();
        let mut expected = Vec::new();

        for (i, req) in requests.iter().enumerate() {
            match self.load_for_verification(req.certificate_id, &req.claimed_issuer) {
                Ok(certificate) => {
                    pending.push((req.message_hash, certificate.signature));
                    pending_index.push(i);
                    expected.push(certificate.issuer.identity);
                    results.push(Ok(false));
                }
                Err(e) => results.push(Err(e)),
            }
        }

        let recovered = self.recovery.recover_batch(&pending);
        for ((index, outcome), issuer) in pending_index.into_iter().zip(recovered).zip(expected) {
            results[index] = outcome
                .map(|address| address == issuer)
                .map_err(RegistryError::from);
        }

        let report = BatchVerificationReport::from_results(results);
        debug!(
            total = requests.len(),
            valid = report.valid_count,
            invalid = report.invalid_count,
            "Bulk certificate verification complete"
        );
        report
    }

    fn entity(&self, slot: EntitySlot) -> Result<Entity, RegistryError> {
        self.store
            .entity(slot)?
            .ok_or(RegistryError::EntityNotFound(slot))
    }

    fn batch(&self, id: BatchId) -> Result<VaccineBatch, RegistryError> {
        self.store.batch(id)?.ok_or(RegistryError::BatchNotFound(id))
    }

    fn certificate(&self, id: CertificateId) -> Result<Certificate, RegistryError> {
        self.store
            .certificate(id)?
            .ok_or(RegistryError::CertificateNotFound(id))
    }

    fn entity_count(&self) -> Result<u64, RegistryError> {
        self.store.entity_count()
    }

    fn batch_count(&self) -> Result<u64, RegistryError> {
        self.store.batch_count()
    }

    fn certificate_count(&self) -> Result<u64, RegistryError> {
        self.store.certificate_count()
    }
}
