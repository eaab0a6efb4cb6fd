//! # Outbound Ports (Driven Ports / SPI)
//!
//! Append-only keyed storage for entities, batches and certificates.
//! Notifications go through `cc_event_bus::EventPublisher`.

use crate::domain::entities::{
    BatchId, Certificate, CertificateDraft, CertificateId, Entity, EntitySlot, NewBatch,
    NewEntity, StoredCertificate, VaccineBatch,
};
use crate::domain::errors::RegistryError;

/// Registry storage.
///
/// The store owns the three id counters. Each `append_*` assigns the id and
/// inserts the record as one step, so concurrent callers never share an id
/// and readers never see a half-written record. There are no update or
/// delete operations.
pub trait RegistryStore: Send + Sync {
    fn append_entity(&self, entity: NewEntity) -> Result<Entity, RegistryError>;

    fn append_batch(&self, batch: NewBatch) -> Result<VaccineBatch, RegistryError>;

    /// Store a certificate.
    ///
    /// Snapshots of both entities are taken before the new id is appended to
    /// their live reference lists.
    ///
    /// # Errors
    /// * `EntityNotFound` - either slot is empty; nothing is written
    fn append_certificate(
        &self,
        draft: CertificateDraft,
    ) -> Result<StoredCertificate, RegistryError>;

    fn entity(&self, slot: EntitySlot) -> Result<Option<Entity>, RegistryError>;

    fn batch(&self, id: BatchId) -> Result<Option<VaccineBatch>, RegistryError>;

    fn certificate(&self, id: CertificateId) -> Result<Option<Certificate>, RegistryError>;

    fn entity_count(&self) -> Result<u64, RegistryError>;

    fn batch_count(&self) -> Result<u64, RegistryError>;

    fn certificate_count(&self) -> Result<u64, RegistryError>;
}
