//! # Integration Tests
//!
//! Registry, signature recovery, event bus and telemetry working together.

pub mod concurrency;
pub mod flows;
