//! # Registry Configuration
//!
//! All values have defaults; `from_env` overrides them from environment
//! variables.

use super::entities::MAX_CERTIFICATIONS;
use super::errors::RegistryError;
use std::env;

/// Default notification channel capacity.
pub const DEFAULT_EVENT_CAPACITY: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Capacity of every entity/batch certificate reference list (default: 2).
    pub max_certifications: usize,

    /// Require issuance identities to match the identities stored at the
    /// referenced slots (default: true).
    pub enforce_identity_binding: bool,

    /// Capacity of the notification channel (default: 1000).
    pub event_channel_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_certifications: MAX_CERTIFICATIONS,
            enforce_identity_binding: true,
            event_channel_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CC_MAX_CERTIFICATIONS`: reference list capacity (default: 2)
    /// - `CC_ENFORCE_IDENTITY_BINDING`: `false`/`0` disables the check (default: true)
    /// - `CC_EVENT_CAPACITY`: notification channel capacity (default: 1000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to
    /// the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            max_certifications: lookup("CC_MAX_CERTIFICATIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_certifications),

            enforce_identity_binding: lookup("CC_ENFORCE_IDENTITY_BINDING")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.enforce_identity_binding),

            event_channel_capacity: lookup("CC_EVENT_CAPACITY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.event_channel_capacity),
        }
    }

    pub fn with_max_certifications(mut self, max: usize) -> Self {
        self.max_certifications = max;
        self
    }

    pub fn with_identity_binding(mut self, enforce: bool) -> Self {
        self.enforce_identity_binding = enforce;
        self
    }

    pub fn with_event_channel_capacity(mut self, capacity: usize) -> Self {
        self.event_channel_capacity = capacity;
        self
    }

    /// Reject configurations the registry cannot run with.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.max_certifications == 0 {
            return Err(RegistryError::InvalidConfig(
                "max_certifications must be at least 1".to_string(),
            ));
        }
        if self.event_channel_capacity == 0 {
            return Err(RegistryError::InvalidConfig(
                "event_channel_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
