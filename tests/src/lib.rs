//! # Cold-Chain Registry Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Keys, signed requests, wired registries
//! ├── integration/      # Cross-crate flows and concurrency
//! └── adversarial/      # Forged, tampered and malleated signatures
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p cc-tests
//! cargo test -p cc-tests integration::
//! cargo bench -p cc-tests
//! ```

pub mod adversarial;
pub mod fixtures;
pub mod integration;
