//! # Cold-Chain Signature Subsystem
//!
//! Splits raw 65-byte signatures and recovers the signing identity over
//! secp256k1 for the certificate registry.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure cryptographic logic, no I/O
//!   - `codec`: `r || s || v` byte layout
//!   - `recovery`: public-key recovery and address derivation
//!
//! ## Byte Layout
//!
//! ```text
//! offset  0 ......... 32 ......... 64  65
//!         |     r      |     s      | v |
//! ```
//!
//! `v` is read from byte 64, immediately after `s`. Accepted values are
//! `0`, `1`, `27` and `28`.

pub mod domain;

pub use domain::codec::{split, SignatureParts};
pub use domain::entities::{Address, Hash, RawSignature, SIGNATURE_LENGTH};
pub use domain::errors::{RecoveryFault, SignatureError};
pub use domain::recovery::{address_from_pubkey, keccak256, recover, SignerRecovery};
