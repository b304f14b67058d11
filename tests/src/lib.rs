//! # Civic-Ledger Test Suite
//!
//! Unified test crate for cross-component flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── ledger_properties.rs  # Ledger, stats and gate invariants
//!     ├── document_flow.rs      # Pagination, hashing, rendered output
//!     └── sync_flow.rs          # Bus-driven sync over the full stack
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p cl-tests
//!
//! # By area
//! cargo test -p cl-tests integration::ledger_properties::
//! cargo test -p cl-tests integration::document_flow::
//! cargo test -p cl-tests integration::sync_flow::
//! ```

#![allow(dead_code)]

pub mod integration;
