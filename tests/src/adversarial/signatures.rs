//! Signature manipulation attacks.
//!
//! - Malleability: `(r, n - s, v ^ 1)` names the same signer and must not
//!   yield a different identity
//! - Bit flips in `r` or `s` must not verify as the issuer
//! - Out-of-range `v` and zero scalars fail recovery instead of panicking
//! - Wrong-length signatures never reach the store

#[cfg(test)]
mod tests {
    use cc_registry::{certificate_digest, CertificateRegistryApi, RegistryError, Status};
    use cc_signature::{recover, split, RecoveryFault, SignatureError, SignatureParts};
    use k256::elliptic_curve::PrimeField;
    use k256::Scalar;

    use crate::fixtures::{registry, signed_request, TestParty, TestRegistry};

    async fn seeded() -> (TestRegistry, TestParty, TestParty) {
        let (registry, _bus) = registry();
        let issuer = TestParty::random();
        let prover = TestParty::random();
        registry.register_entity(issuer.address, "ISSUER").await.unwrap();
        registry.register_entity(prover.address, "PROVER").await.unwrap();
        (registry, issuer, prover)
    }

    /// Replace `s` with `n - s` and flip the parity byte.
    fn malleate(signature: &[u8]) -> Vec<u8> {
        let parts = split(signature).unwrap();
        let s = Option::<Scalar>::from(Scalar::from_repr(parts.s.into())).unwrap();
        let mut high_s = [0u8; 32];
        high_s.copy_from_slice(&(-s).to_bytes());
        let v = if parts.v == 27 { 28 } else { 27 };
        SignatureParts { r: parts.r, s: high_s, v }.to_bytes().to_vec()
    }

    #[tokio::test]
    async fn test_malleated_signature_recovers_same_signer() {
        let (registry, issuer, prover) = seeded().await;
        let hash = certificate_digest(&issuer.address, &prover.address, Status::Stored);

        let mut request = signed_request(0, &issuer, 1, &prover, Status::Stored);
        let original = recover(&hash, &request.signature).unwrap();
        request.signature = malleate(&request.signature);

        assert_eq!(recover(&hash, &request.signature).unwrap(), original);

        let id = registry.issue_certificate(request).await.unwrap();
        assert_eq!(registry.verify_certificate(&hash, id, &issuer.address), Ok(true));
    }

    #[tokio::test]
    async fn test_bit_flips_never_verify_as_issuer() {
        let (registry, issuer, prover) = seeded().await;
        let hash = certificate_digest(&issuer.address, &prover.address, Status::Stored);
        let genuine = signed_request(0, &issuer, 1, &prover, Status::Stored);

        for position in [0usize, 17, 31, 32, 48, 63] {
            let mut request = genuine.clone();
            request.signature[position] ^= 0x01;
            let id = registry.issue_certificate(request).await.unwrap();

            let result = registry.verify_certificate(&hash, id, &issuer.address);
            assert!(
                !matches!(result, Ok(true)),
                "flip at byte {position} verified as issuer"
            );
        }
    }

    #[tokio::test]
    async fn test_out_of_range_recovery_id() {
        let (registry, issuer, prover) = seeded().await;
        let hash = certificate_digest(&issuer.address, &prover.address, Status::Stored);

        let mut request = signed_request(0, &issuer, 1, &prover, Status::Stored);
        request.signature[64] = 29;
        let id = registry.issue_certificate(request).await.unwrap();

        assert_eq!(
            registry.verify_certificate(&hash, id, &issuer.address),
            Err(RegistryError::Signature(SignatureError::RecoveryFailure(
                RecoveryFault::InvalidRecoveryId(29)
            )))
        );
    }

    #[tokio::test]
    async fn test_zero_scalars_fail_recovery() {
        let (registry, issuer, prover) = seeded().await;
        let hash = certificate_digest(&issuer.address, &prover.address, Status::Stored);

        let mut request = signed_request(0, &issuer, 1, &prover, Status::Stored);
        request.signature[32..64].fill(0);
        let id = registry.issue_certificate(request).await.unwrap();

        assert_eq!(
            registry.verify_certificate(&hash, id, &issuer.address),
            Err(RegistryError::Signature(SignatureError::RecoveryFailure(
                RecoveryFault::ScalarOutOfRange
            )))
        );
    }

    #[tokio::test]
    async fn test_wrong_length_never_stored() {
        let (registry, issuer, prover) = seeded().await;
        let genuine = signed_request(0, &issuer, 1, &prover, Status::Stored);

        for length in [0usize, 64, 66, 96, 130] {
            let mut request = genuine.clone();
            request.signature.resize(length, 0);
            let result = registry.issue_certificate(request).await;
            assert_eq!(
                result,
                Err(RegistryError::Signature(SignatureError::InvalidSignatureLength {
                    actual: length
                }))
            );
        }

        assert_eq!(registry.certificate_count(), Ok(0));
        assert!(registry.entity(0).unwrap().certificate_refs.is_empty());
    }

    #[tokio::test]
    async fn test_replayed_signature_for_other_prover() {
        let (registry, issuer, prover) = seeded().await;
        let other_prover = TestParty::random();
        registry.register_entity(other_prover.address, "PROVER").await.unwrap();

        // Signature bound to (issuer, prover) reused for (issuer, other_prover).
        let mut request = signed_request(0, &issuer, 2, &other_prover, Status::Stored);
        request.signature = signed_request(0, &issuer, 1, &prover, Status::Stored).signature;
        let id = registry.issue_certificate(request).await.unwrap();

        let hash = certificate_digest(&issuer.address, &other_prover.address, Status::Stored);
        assert_eq!(registry.verify_certificate(&hash, id, &issuer.address), Ok(false));
    }
}
