use crate::domain::entities::{
    BatchId, Certificate, CertificateDraft, CertificateId, CertificateRefs, Entity, EntitySlot,
    NewBatch, NewEntity, StoredCertificate, VaccineBatch,
};
use crate::domain::errors::RegistryError;
use crate::domain::sequence::IdSequence;
use crate::ports::outbound::RegistryStore;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct RegistryState {
    entities: BTreeMap<EntitySlot, Entity>,
    batches: BTreeMap<BatchId, VaccineBatch>,
    certificates: BTreeMap<CertificateId, Certificate>,
    entity_slots: IdSequence,
    batch_ids: IdSequence,
    certificate_ids: IdSequence,
}

/// In-memory registry store.
///
/// One `RwLock` guards every collection and counter, so id assignment and
/// insertion happen under a single write guard. Reads return clones.
#[derive(Debug, Default)]
pub struct InMemoryRegistryStore {
    state: RwLock<RegistryState>,
}

impl InMemoryRegistryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, RegistryState>, RegistryError> {
        self.state
            .read()
            .map_err(|_| RegistryError::StorageFailure("registry lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, RegistryState>, RegistryError> {
        self.state
            .write()
            .map_err(|_| RegistryError::StorageFailure("registry lock poisoned".to_string()))
    }
}

impl RegistryStore for InMemoryRegistryStore {
    fn append_entity(&self, entity: NewEntity) -> Result<Entity, RegistryError> {
        let mut state = self.write()?;
        let slot = state.entity_slots.advance();
        let record = Entity {
            slot,
            identity: entity.identity,
            role: entity.role,
            certificate_refs: CertificateRefs::with_capacity(entity.refs_capacity),
        };
        state.entities.insert(slot, record.clone());
        Ok(record)
    }

    fn append_batch(&self, batch: NewBatch) -> Result<VaccineBatch, RegistryError> {
        let mut state = self.write()?;
        let id = state.batch_ids.advance();
        let record = VaccineBatch {
            id,
            brand: batch.brand,
            manufacturer: batch.manufacturer,
            certificate_refs: CertificateRefs::with_capacity(batch.refs_capacity),
        };
        state.batches.insert(id, record.clone());
        Ok(record)
    }

    fn append_certificate(
        &self,
        draft: CertificateDraft,
    ) -> Result<StoredCertificate, RegistryError> {
        let mut state = self.write()?;

        let issuer = state
            .entities
            .get(&draft.issuer_slot)
            .ok_or(RegistryError::EntityNotFound(draft.issuer_slot))?
            .snapshot();
        let prover = state
            .entities
            .get(&draft.prover_slot)
            .ok_or(RegistryError::EntityNotFound(draft.prover_slot))?
            .snapshot();

        let id = state.certificate_ids.advance();
        let certificate = Certificate {
            id,
            issuer,
            prover,
            signature: draft.signature,
            status: draft.status,
        };
        state.certificates.insert(id, certificate.clone());

        let issuer_ref_recorded = state
            .entities
            .get_mut(&draft.issuer_slot)
            .is_some_and(|e| e.certificate_refs.try_push(id));
        let prover_ref_recorded = state
            .entities
            .get_mut(&draft.prover_slot)
            .is_some_and(|e| e.certificate_refs.try_push(id));

        Ok(StoredCertificate {
            certificate,
            issuer_ref_recorded,
            prover_ref_recorded,
        })
    }

    fn entity(&self, slot: EntitySlot) -> Result<Option<Entity>, RegistryError> {
        Ok(self.read()?.entities.get(&slot).cloned())
    }

    fn batch(&self, id: BatchId) -> Result<Option<VaccineBatch>, RegistryError> {
        Ok(self.read()?.batches.get(&id).cloned())
    }

    fn certificate(&self, id: CertificateId) -> Result<Option<Certificate>, RegistryError> {
        Ok(self.read()?.certificates.get(&id).cloned())
    }

    fn entity_count(&self) -> Result<u64, RegistryError> {
        Ok(self.read()?.entity_slots.current())
    }

    fn batch_count(&self) -> Result<u64, RegistryError> {
        Ok(self.read()?.batch_ids.current())
    }

    fn certificate_count(&self) -> Result<u64, RegistryError> {
        Ok(self.read()?.certificate_ids.current())
    }
}
