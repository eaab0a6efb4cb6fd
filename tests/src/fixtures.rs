//! Shared test fixtures.

use cc_event_bus::InMemoryEventBus;
use cc_registry::{
    certificate_digest, CertificateRegistryService, EntitySlot, InMemoryRegistryStore,
    IssueCertificateRequest, RegistryConfig, Status,
};
use cc_signature::{address_from_pubkey, Address, Hash};
use k256::ecdsa::SigningKey;
use std::sync::Arc;

pub type TestRegistry = CertificateRegistryService<InMemoryRegistryStore, InMemoryEventBus>;

/// A participant holding a secp256k1 key.
pub struct TestParty {
    pub key: SigningKey,
    pub address: Address,
}

impl TestParty {
    pub fn random() -> Self {
        let key = SigningKey::random(&mut rand::thread_rng());
        let address = address_from_pubkey(key.verifying_key());
        Self { key, address }
    }

    /// Sign a 32-byte digest as `r || s || v` with `v` in {27, 28}.
    pub fn sign(&self, hash: &Hash) -> Vec<u8> {
        let (sig, recid) = self
            .key
            .sign_prehash_recoverable(hash)
            .expect("prehash signing");
        let mut bytes = sig.to_bytes().to_vec();
        bytes.push(recid.to_byte() + 27);
        bytes
    }
}

pub fn registry() -> (TestRegistry, Arc<InMemoryEventBus>) {
    registry_with(RegistryConfig::default())
}

pub fn registry_with(config: RegistryConfig) -> (TestRegistry, Arc<InMemoryEventBus>) {
    CertificateRegistryService::in_memory(config).expect("valid config")
}

/// Build a request whose signature is the issuer's over the canonical digest.
pub fn signed_request(
    issuer_slot: EntitySlot,
    issuer: &TestParty,
    prover_slot: EntitySlot,
    prover: &TestParty,
    status: Status,
) -> IssueCertificateRequest {
    let digest = certificate_digest(&issuer.address, &prover.address, status);
    IssueCertificateRequest {
        issuer_slot,
        issuer_identity: issuer.address,
        prover_slot,
        prover_identity: prover.address,
        status: status.as_str().to_string(),
        signature: issuer.sign(&digest),
    }
}
