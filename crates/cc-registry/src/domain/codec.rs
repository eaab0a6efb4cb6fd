//! # Role and Status Codec
//!
//! Maps the closed set of role/status literals to their enum values.
//! Matching is exact and case-sensitive; anything else is rejected.

use super::errors::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Participant role. Fixed when the entity is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Issuer,
    Prover,
    Verifier,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Issuer, Role::Prover, Role::Verifier];

    /// Canonical literal.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Issuer => "ISSUER",
            Role::Prover => "PROVER",
            Role::Verifier => "VERIFIER",
        }
    }
}

/// Custody stage a certificate attests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Manufactured,
    DeliveringInternational,
    Stored,
    DeliveringLocal,
    Delivered,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Manufactured,
        Status::DeliveringInternational,
        Status::Stored,
        Status::DeliveringLocal,
        Status::Delivered,
    ];

    /// Canonical literal.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Manufactured => "MANUFACTURED",
            Status::DeliveringInternational => "DELIVERING_INTERNATIONAL",
            Status::Stored => "STORED",
            Status::DeliveringLocal => "DELIVERING_LOCAL",
            Status::Delivered => "DELIVERED",
        }
    }
}

/// Decode a role literal.
pub fn decode_role(text: &str) -> Result<Role, RegistryError> {
    Role::ALL
        .into_iter()
        .find(|role| role.as_str() == text)
        .ok_or_else(|| RegistryError::UnknownRole(text.to_string()))
}

/// Decode a status literal.
pub fn decode_status(text: &str) -> Result<Status, RegistryError> {
    Status::ALL
        .into_iter()
        .find(|status| status.as_str() == text)
        .ok_or_else(|| RegistryError::UnknownStatus(text.to_string()))
}

impl FromStr for Role {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_role(s)
    }
}

impl FromStr for Status {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_status(s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
