//! # Domain Layer
//!
//! Registry records, literal decoding and configuration. No I/O.

pub mod codec;
pub mod config;
pub mod digest;
pub mod entities;
pub mod errors;
pub mod sequence;
