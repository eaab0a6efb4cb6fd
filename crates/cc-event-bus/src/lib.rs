//! # Cold-Chain Event Bus
//!
//! Carries the notifications the certificate registry emits after each
//! successful state transition.
//!
//! ```text
//! ┌────────────────────┐   publish()   ┌──────────────┐  subscribe()  ┌────────────┐
//! │ CertificateRegistry│ ────────────→ │  Event Bus   │ ────────────→ │ Consumers  │
//! └────────────────────┘               └──────────────┘               └────────────┘
//! ```
//!
//! Publishing never fails: an event with no subscribers is dropped and
//! logged, so notification delivery cannot undo a committed write.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

pub use events::{EventFilter, EventTopic, RegistryEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before the oldest are dropped.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
