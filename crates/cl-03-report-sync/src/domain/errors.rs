use shared_types::PetitionError;
use thiserror::Error;

/// Failures of the sync layer itself.
///
/// Directory lookup failures never appear here: they degrade to sentinel
/// contact data inside the sync pass and are only logged.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The report source has no report with this id, so no petition can be
    /// created or synchronized for it.
    #[error("report {report_id} unavailable at the report source")]
    ReportUnavailable { report_id: String },

    /// A petition store operation failed.
    #[error(transparent)]
    Store(#[from] PetitionError),
}
