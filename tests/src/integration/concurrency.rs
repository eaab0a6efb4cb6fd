//! # Concurrent Issuance
//!
//! Many tasks issuing against one registry must receive unique, contiguous
//! ids and leave consistent reference lists behind.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use cc_registry::{certificate_digest, CertificateRegistryApi, RegistryConfig, Status};

    use crate::fixtures::{registry_with, signed_request, TestParty};

    const TASKS: usize = 64;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_issuance_ids_unique_and_contiguous() {
        let (registry, _bus) = registry_with(RegistryConfig::default());
        let registry = Arc::new(registry);
        let issuer = Arc::new(TestParty::random());
        let prover = Arc::new(TestParty::random());
        registry.register_entity(issuer.address, "ISSUER").await.unwrap();
        registry.register_entity(prover.address, "PROVER").await.unwrap();

        let mut handles = Vec::with_capacity(TASKS);
        for _ in 0..TASKS {
            let registry = Arc::clone(&registry);
            let issuer = Arc::clone(&issuer);
            let prover = Arc::clone(&prover);
            handles.push(tokio::spawn(async move {
                let request = signed_request(0, &issuer, 1, &prover, Status::Stored);
                registry.issue_certificate(request).await.unwrap()
            }));
        }

        let mut ids = BTreeSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()), "duplicate certificate id");
        }

        let expected: BTreeSet<u64> = (0..TASKS as u64).collect();
        assert_eq!(ids, expected);
        assert_eq!(registry.certificate_count(), Ok(TASKS as u64));

        // Only the first two ids fit the default reference capacity; both
        // are genuine ids and distinct.
        let refs = registry.entity(0).unwrap().certificate_refs;
        assert_eq!(refs.len(), 2);
        assert_ne!(refs.as_slice()[0], refs.as_slice()[1]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registration_and_issuance() {
        let (registry, _bus) = registry_with(RegistryConfig::default());
        let registry = Arc::new(registry);

        let mut handles = Vec::new();
        for _ in 0..16 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                let issuer = TestParty::random();
                let prover = TestParty::random();
                let issuer_slot = registry.register_entity(issuer.address, "ISSUER").await.unwrap();
                let prover_slot = registry.register_entity(prover.address, "PROVER").await.unwrap();

                let request =
                    signed_request(issuer_slot, &issuer, prover_slot, &prover, Status::Delivered);
                let id = registry.issue_certificate(request).await.unwrap();
                let hash = certificate_digest(&issuer.address, &prover.address, Status::Delivered);
                registry.verify_certificate(&hash, id, &issuer.address).unwrap()
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap());
        }
        assert_eq!(registry.entity_count(), Ok(32));
        assert_eq!(registry.certificate_count(), Ok(16));
    }
}
