//! # Adversarial Signatures
//!
//! Forged, tampered and malleated signatures against issuance and
//! verification.

pub mod signatures;
