//! # cl-01-petition-store
//!
//! Petition Aggregate Store subsystem for Civic-Ledger.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: Exclusively owns all `Petition` instances;
//!   no other subsystem retains or mutates copies independently.
//! - **Signature Ledger**: Append-only per-petition signer list, unique by
//!   legal id, kept in insertion order.
//! - **Access Gate**: View/download decisions tied to the 1000-signature
//!   threshold.
//!
//! ## Error Policy
//!
//! Mutations against a missing petition and duplicate-cardinality conflicts
//! are silent no-ops; the store never throws for them. Only storage-layer
//! failures (poisoned lock) surface as errors.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
pub use service::PetitionService;
