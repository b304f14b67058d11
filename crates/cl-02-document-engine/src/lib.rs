//! # cl-02-document-engine
//!
//! Document generation subsystem for Civic-Ledger.
//!
//! ## Role in System
//!
//! - Renders a petition aggregate into a fixed-layout, Portuguese-labelled
//!   plain-text document with numbered sections 1–7 and box-drawing
//!   separators. The text layout is the wire format of this subsystem.
//! - Paginates the signature ledger; every other section is emitted in
//!   full on every page.
//! - Stamps each document with a tamper-evidence hash over a canonical
//!   form of the ledger.
//!
//! This is the only place in the petition core where a missing petition is
//! a hard error: a document cannot be rendered from nothing.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::DocumentApi;
pub use service::DocumentService;
