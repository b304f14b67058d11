//! # Error Types
//!
//! Defines error types used across the petition subsystems.
//!
//! The petition core never throws for routine cardinality conflicts
//! (duplicate signatures, repeated achievements) or missing optional data;
//! those degrade to no-ops or sentinel values. The variants here cover the
//! cases that genuinely cannot be absorbed.

use thiserror::Error;

/// Errors that can occur in the petition store and document engine.
#[derive(Debug, Clone, Error)]
pub enum PetitionError {
    /// No petition exists for the requested id. Only document generation
    /// surfaces this; every other operation treats it as a silent no-op.
    #[error("Petition not found: {petition_id}")]
    PetitionNotFound {
        /// The id that was looked up.
        petition_id: String,
    },

    /// The repository lock was poisoned by a panicking writer.
    #[error("Repository lock poisoned")]
    LockPoisoned,

    /// Canonical-form serialization failed during document hashing.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PetitionError {
    /// Create a not-found error for a petition id.
    pub fn not_found(petition_id: impl Into<String>) -> Self {
        Self::PetitionNotFound {
            petition_id: petition_id.into(),
        }
    }
}
