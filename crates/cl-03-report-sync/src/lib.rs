//! # Report Synchronization (CL-03)
//!
//! Mirrors the external civic-reporting platform into the petition store.
//! One [`ReportSyncService`] drives, per report:
//!
//! - a one-shot content sync that creates the petition if absent,
//! - an event-driven signature sync fed by the shared bus,
//! - a 5-second stats sync,
//! - a 10-second feed sync for updates and milestone achievements.
//!
//! External collaborators are reached through the outbound ports
//! ([`ReportSource`], [`SignerDirectory`]); in-memory adapters back the
//! test suites.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{InMemoryReportSource, InMemorySignerDirectory};
pub use domain::{SignerBook, SyncError};
pub use ports::{DirectoryError, ReportSource, SignerContact, SignerDirectory};
pub use service::{ReportSyncService, SyncConfig, SyncHandle};
