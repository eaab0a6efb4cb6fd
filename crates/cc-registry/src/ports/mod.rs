//! # Ports Layer
//!
//! - **Inbound (Driving)**: API that external callers use
//! - **Outbound (Driven)**: Dependencies this registry needs

pub mod inbound;
pub mod outbound;
