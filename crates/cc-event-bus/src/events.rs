//! # Registry Events
//!
//! Notifications emitted by the certificate registry.

use cc_signature::Address;
use serde::{Deserialize, Serialize};

/// All events that can be published to the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A participant was registered at `slot`.
    EntityRegistered {
        /// Registry-assigned sequential slot.
        slot: u64,
        /// The participant's identity.
        identity: Address,
        /// Role literal as submitted ("ISSUER", "PROVER", "VERIFIER").
        role: String,
    },

    /// A vaccine batch was registered.
    BatchRegistered {
        /// Sequential batch id.
        batch_id: u64,
        /// Manufacturer identity.
        manufacturer: Address,
    },

    /// A certificate was issued.
    CertificateIssued {
        /// Issuer identity supplied with the request.
        issuer: Address,
        /// Prover identity supplied with the request.
        prover: Address,
        /// Sequential certificate id.
        certificate_id: u64,
    },
}

impl RegistryEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::EntityRegistered { .. } => EventTopic::Entities,
            Self::BatchRegistered { .. } => EventTopic::Batches,
            Self::CertificateIssued { .. } => EventTopic::Certificates,
        }
    }

    /// Identity most relevant to the event, hex encoded, for log fields.
    #[must_use]
    pub fn subject(&self) -> String {
        match self {
            Self::EntityRegistered { identity, .. } => hex::encode(identity),
            Self::BatchRegistered { manufacturer, .. } => hex::encode(manufacturer),
            Self::CertificateIssued { issuer, .. } => hex::encode(issuer),
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Entity registrations.
    Entities,
    /// Vaccine batch registrations.
    Batches,
    /// Certificate issuance.
    Certificates,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &RegistryEvent) -> bool {
        self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic())
    }
}
