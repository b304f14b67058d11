use async_trait::async_trait;
use shared_types::entities::{ReportSnapshot, SignerEntry};
use thiserror::Error;

/// Contact data resolved from the signer directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerContact {
    /// National legal id (CPF).
    pub legal_id: String,
    /// Contact e-mail.
    pub email: String,
}

/// Directory lookup failures.
///
/// Both variants degrade to sentinel contact data in the sync layer; they
/// exist so adapters can log the distinction.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory has no entry for this user.
    #[error("no directory entry for user {user_id}")]
    NotFound { user_id: String },

    /// The directory could not be reached.
    #[error("signer directory unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the external report aggregate and its
/// signature-toggle store.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetch the current snapshot of a report.
    async fn fetch_report(&self, report_id: &str) -> Option<ReportSnapshot>;

    /// Current list of users endorsing a report.
    ///
    /// The full list, not a delta: signature sync reconciles against it.
    async fn current_signers(&self, report_id: &str) -> Vec<SignerEntry>;
}

/// Best-effort lookup of a user's legal id and e-mail.
#[async_trait]
pub trait SignerDirectory: Send + Sync {
    /// Resolve contact data for a user.
    async fn resolve(&self, user_id: &str) -> Result<SignerContact, DirectoryError>;
}
