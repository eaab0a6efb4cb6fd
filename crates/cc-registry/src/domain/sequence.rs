//! # Id Sequence
//!
//! Monotonic id counter. Starts at zero; only a `&mut` holder can advance it,
//! so the owning store's write lock is the single writer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Ids handed out so far (also the next id).
    pub const fn current(&self) -> u64 {
        self.next
    }

    /// Hand out the next id.
    pub fn advance(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}
