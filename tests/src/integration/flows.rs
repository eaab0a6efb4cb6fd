//! # Registry Flows
//!
//! End-to-end issuance and verification through the public API, with
//! notifications observed on the event bus.

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tokio::time::timeout;
    use tokio_stream::StreamExt;

    use cc_event_bus::{EventFilter, EventPublisher, EventTopic, RegistryEvent};
    use cc_registry::{
        certificate_digest, CertificateRegistryApi, RegistryConfig, RegistryError, Role, Status,
        VerificationRequest,
    };
    use cc_telemetry::{init_logging, TelemetryConfig};

    use crate::fixtures::{registry, registry_with, signed_request, TestParty};

    #[tokio::test]
    async fn test_example_scenario() {
        let _ = init_logging(&TelemetryConfig::default().with_log_level("debug"));
        let (registry, _bus) = registry();

        let a = TestParty::random();
        let b = TestParty::random();
        let m = TestParty::random();

        assert_eq!(registry.register_entity(a.address, "ISSUER").await, Ok(0));
        assert_eq!(registry.register_entity(b.address, "PROVER").await, Ok(1));
        assert_eq!(registry.register_vaccine_batch("BrandX", m.address).await, Ok(0));

        let request = signed_request(0, &a, 1, &b, Status::Manufactured);
        let certificate_id = registry.issue_certificate(request).await.unwrap();
        assert_eq!(certificate_id, 0);

        let certificate = registry.certificate(0).unwrap();
        assert_eq!(certificate.status, Status::Manufactured);
        assert_eq!(certificate.issuer.role, Role::Issuer);
        assert_eq!(certificate.prover.role, Role::Prover);

        let hash = certificate_digest(&a.address, &b.address, Status::Manufactured);
        assert_eq!(registry.verify_certificate(&hash, 0, &a.address), Ok(true));

        // A signature over a different message does not verify.
        let other = certificate_digest(&a.address, &b.address, Status::Delivered);
        assert_eq!(registry.verify_certificate(&other, 0, &a.address), Ok(false));
    }

    #[tokio::test]
    async fn test_ids_follow_submission_order() {
        let (registry, _bus) = registry();
        let issuer = TestParty::random();
        let prover = TestParty::random();
        registry.register_entity(issuer.address, "ISSUER").await.unwrap();
        registry.register_entity(prover.address, "PROVER").await.unwrap();

        let mut ids = Vec::new();
        for status in [Status::Manufactured, Status::Stored, Status::Delivered] {
            let request = signed_request(0, &issuer, 1, &prover, status);
            ids.push(registry.issue_certificate(request).await.unwrap());
        }

        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(registry.certificate(1).unwrap().status, Status::Stored);
    }

    #[tokio::test]
    async fn test_role_mismatch_matrix() {
        let (registry, _bus) = registry();
        let parties: Vec<TestParty> = (0..3).map(|_| TestParty::random()).collect();
        for (party, role) in parties.iter().zip(Role::ALL) {
            registry.register_entity(party.address, role.as_str()).await.unwrap();
        }
        // Slots: 0 = ISSUER, 1 = PROVER, 2 = VERIFIER.

        for issuer_slot in 0..3u64 {
            for prover_slot in 0..3u64 {
                let issuer = &parties[issuer_slot as usize];
                let prover = &parties[prover_slot as usize];
                let request =
                    signed_request(issuer_slot, issuer, prover_slot, prover, Status::Stored);
                let result = registry.issue_certificate(request).await;

                match (issuer_slot, prover_slot) {
                    (0, 1) => assert!(result.is_ok()),
                    (0, _) => assert!(matches!(
                        result,
                        Err(RegistryError::RoleMismatch { expected: Role::Prover, .. })
                    )),
                    _ => assert!(matches!(
                        result,
                        Err(RegistryError::RoleMismatch { expected: Role::Issuer, .. })
                    )),
                }
            }
        }

        assert_eq!(registry.certificate_count(), Ok(1));
    }

    #[tokio::test]
    async fn test_snapshot_isolation() {
        let (registry, _bus) = registry();
        let issuer = TestParty::random();
        let prover = TestParty::random();
        registry.register_entity(issuer.address, "ISSUER").await.unwrap();
        registry.register_entity(prover.address, "PROVER").await.unwrap();

        for _ in 0..2 {
            let request = signed_request(0, &issuer, 1, &prover, Status::Stored);
            registry.issue_certificate(request).await.unwrap();
        }

        let live = registry.entity(0).unwrap();
        assert_eq!(live.certificate_refs.as_slice(), &[0, 1]);

        let first = registry.certificate(0).unwrap();
        let second = registry.certificate(1).unwrap();
        assert!(first.issuer.certificate_refs.is_empty());
        assert_eq!(second.issuer.certificate_refs, vec![0]);
        assert_eq!(first.prover.identity, prover.address);
    }

    #[tokio::test]
    async fn test_claimed_issuer_must_match() {
        let (registry, _bus) = registry();
        let issuer = TestParty::random();
        let prover = TestParty::random();
        registry.register_entity(issuer.address, "ISSUER").await.unwrap();
        registry.register_entity(prover.address, "PROVER").await.unwrap();
        let request = signed_request(0, &issuer, 1, &prover, Status::Stored);
        let id = registry.issue_certificate(request).await.unwrap();

        let hash = certificate_digest(&issuer.address, &prover.address, Status::Stored);
        let stranger = TestParty::random();
        let result = registry.verify_certificate(&hash, id, &stranger.address);

        assert!(matches!(
            result,
            Err(RegistryError::IssuerIdentityMismatch { certificate_id: 0, .. })
        ));
    }

    #[tokio::test]
    async fn test_event_stream_sees_issuance() {
        let (registry, bus) = registry();
        let mut stream = bus.event_stream(EventFilter::topics(vec![EventTopic::Certificates]));

        let issuer = TestParty::random();
        let prover = TestParty::random();
        registry.register_entity(issuer.address, "ISSUER").await.unwrap();
        registry.register_entity(prover.address, "PROVER").await.unwrap();
        let request = signed_request(0, &issuer, 1, &prover, Status::DeliveringInternational);
        registry.issue_certificate(request).await.unwrap();

        let event = timeout(Duration::from_secs(1), stream.next())
            .await
            .expect("event within timeout")
            .expect("stream open");

        assert_eq!(
            event,
            RegistryEvent::CertificateIssued {
                issuer: issuer.address,
                prover: prover.address,
                certificate_id: 0,
            }
        );
        assert_eq!(bus.events_published(), 3);
    }

    #[tokio::test]
    async fn test_bulk_verification_mixed() {
        let (registry, _bus) = registry_with(RegistryConfig::default().with_max_certifications(8));
        let prover = TestParty::random();
        let issuers: Vec<TestParty> = (0..4).map(|_| TestParty::random()).collect();

        for issuer in &issuers {
            registry.register_entity(issuer.address, "ISSUER").await.unwrap();
        }
        let prover_slot = registry.register_entity(prover.address, "PROVER").await.unwrap();

        let mut requests = Vec::new();
        for (slot, issuer) in issuers.iter().enumerate() {
            let request = signed_request(slot as u64, issuer, prover_slot, &prover, Status::Stored);
            let id = registry.issue_certificate(request).await.unwrap();
            let mut hash = certificate_digest(&issuer.address, &prover.address, Status::Stored);
            if slot % 2 == 1 {
                hash[0] ^= 0xFF;
            }
            requests.push(VerificationRequest {
                message_hash: hash,
                certificate_id: id,
                claimed_issuer: issuer.address,
            });
        }

        let report = registry.verify_certificates(&requests);
        assert_eq!(report.results[0], Ok(true));
        assert_eq!(report.results[2], Ok(true));
        assert!(!matches!(report.results[1], Ok(true)));
        assert!(!matches!(report.results[3], Ok(true)));
        assert_eq!(report.valid_count, 2);
        assert!(!report.all_valid);
    }

    #[tokio::test]
    async fn test_identity_binding_can_be_relaxed() {
        let (strict, _) = registry();
        let (relaxed, _) = registry_with(RegistryConfig::default().with_identity_binding(false));

        let issuer = TestParty::random();
        let prover = TestParty::random();
        let impostor = TestParty::random();

        for registry in [&strict, &relaxed] {
            registry.register_entity(issuer.address, "ISSUER").await.unwrap();
            registry.register_entity(prover.address, "PROVER").await.unwrap();
        }

        let request = signed_request(0, &issuer, 1, &impostor, Status::Stored);
        assert!(matches!(
            strict.issue_certificate(request.clone()).await,
            Err(RegistryError::EntityIdentityMismatch { slot: 1, .. })
        ));
        assert_eq!(relaxed.issue_certificate(request).await, Ok(0));
    }
}
