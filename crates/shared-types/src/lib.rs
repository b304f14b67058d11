//! # Shared Types Crate
//!
//! This crate contains all domain entities shared across the petition
//! subsystems: the petition aggregate, the external report snapshot, and
//! the shared error taxonomy.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Snapshot Semantics**: `Requester` and `ContentSnapshot` are captured
//!   at petition creation and never re-derived from live report data.
//! - **Ledger-Owned Counter**: `PetitionStats::total_signatures` is owned by
//!   the signature ledger; external stats pushes cannot touch it.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
