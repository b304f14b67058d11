//! In-memory stand-ins for the external collaborators.
//!
//! `InMemoryReportSource` doubles as the write side of the fake platform:
//! tests push report snapshots and toggle signatures through it, and it
//! announces every change on the shared bus exactly like the real
//! external stores would.

use crate::ports::{DirectoryError, ReportSource, SignerContact, SignerDirectory};
use async_trait::async_trait;
use shared_bus::{EventPublisher, InMemoryEventBus, PlatformEvent};
use shared_types::entities::{ReportSnapshot, SignerEntry};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// In-memory report aggregate and signature-toggle store.
pub struct InMemoryReportSource {
    reports: RwLock<HashMap<String, ReportSnapshot>>,
    signers: RwLock<HashMap<String, Vec<SignerEntry>>>,
    bus: Arc<InMemoryEventBus>,
}

impl InMemoryReportSource {
    #[must_use]
    pub fn new(bus: Arc<InMemoryEventBus>) -> Self {
        Self {
            reports: RwLock::new(HashMap::new()),
            signers: RwLock::new(HashMap::new()),
            bus,
        }
    }

    /// Insert or replace a report snapshot and announce the refresh.
    pub async fn put_report(&self, report: ReportSnapshot) {
        let report_id = report.id.clone();
        if let Ok(mut reports) = self.reports.write() {
            reports.insert(report_id.clone(), report);
        }
        self.bus
            .publish(PlatformEvent::ReportRefreshed { report_id })
            .await;
    }

    /// Toggle one user's endorsement on or off and announce the change.
    pub async fn toggle_signature(&self, report_id: &str, signer: SignerEntry, active: bool) {
        if let Ok(mut signers) = self.signers.write() {
            let list = signers.entry(report_id.to_string()).or_default();
            list.retain(|s| s.user_id != signer.user_id);
            if active {
                list.push(signer.clone());
            }
        }

        debug!(report_id, user_id = signer.user_id.as_str(), active, "signature toggled");
        self.bus
            .publish(PlatformEvent::SignatureToggled {
                report_id: report_id.to_string(),
                signer,
                active,
            })
            .await;
    }
}

#[async_trait]
impl ReportSource for InMemoryReportSource {
    async fn fetch_report(&self, report_id: &str) -> Option<ReportSnapshot> {
        self.reports
            .read()
            .ok()
            .and_then(|reports| reports.get(report_id).cloned())
    }

    async fn current_signers(&self, report_id: &str) -> Vec<SignerEntry> {
        self.signers
            .read()
            .ok()
            .and_then(|signers| signers.get(report_id).cloned())
            .unwrap_or_default()
    }
}

/// In-memory signer directory.
#[derive(Default)]
pub struct InMemorySignerDirectory {
    contacts: RwLock<HashMap<String, SignerContact>>,
}

impl InMemorySignerDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register contact data for a user.
    pub fn insert(&self, user_id: impl Into<String>, legal_id: impl Into<String>, email: impl Into<String>) {
        if let Ok(mut contacts) = self.contacts.write() {
            contacts.insert(
                user_id.into(),
                SignerContact {
                    legal_id: legal_id.into(),
                    email: email.into(),
                },
            );
        }
    }
}

#[async_trait]
impl SignerDirectory for InMemorySignerDirectory {
    async fn resolve(&self, user_id: &str) -> Result<SignerContact, DirectoryError> {
        let contacts = self
            .contacts
            .read()
            .map_err(|_| DirectoryError::Unavailable("directory lock poisoned".to_string()))?;

        contacts
            .get(user_id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound {
                user_id: user_id.to_string(),
            })
    }
}
