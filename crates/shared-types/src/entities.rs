//! # Core Domain Entities
//!
//! Defines the petition entities shared across all subsystems.
//!
//! ## Clusters
//!
//! - **Petition Aggregate**: `Petition`, `Signature`, `PetitionStats`,
//!   `Achievement`, `PetitionUpdate`, `PetitionPermissions`
//! - **Snapshots**: `Requester`, `ContentSnapshot`, `MediaAttachment`
//! - **External Report**: `ReportSnapshot`, `ReportAuthor`, `ReportLocation`,
//!   `SignerEntry`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a petition. Always equal to the id of the report it
/// was created for.
pub type PetitionId = String;

/// Identifier of a platform user, as issued by the identity provider.
pub type UserId = String;

/// Sentinel legal id used when the signer directory cannot resolve a CPF.
pub const LEGAL_ID_PENDING: &str = "CPF_PENDENTE";

/// Sentinel e-mail used when the signer directory cannot resolve a contact.
pub const EMAIL_PENDING: &str = "email@pendente.com";

/// Role sentinel stored in permission lists of anonymous petitions.
///
/// No real viewer id ever matches this entry; anonymous petitions are
/// reachable only through the `is_admin` path of the access gate.
pub const ADMIN_ROLE: &str = "role:admin";

// =============================================================================
// CLUSTER A: PETITION AGGREGATE
// =============================================================================

/// One unique signer's endorsement of a petition.
///
/// Uniqueness key across the ledger is `legal_id` (the national id, CPF).
/// Signatures are stored in insertion order and never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Unique id of this signature record (UUID v4, minted at creation).
    pub id: String,
    /// Id of the signing user.
    pub user_id: UserId,
    /// Display name of the signer at signing time.
    pub name: String,
    /// National legal id (CPF). Ledger uniqueness key.
    pub legal_id: String,
    /// Contact e-mail of the signer at signing time.
    pub email: String,
    /// When the signature was recorded.
    pub signed_at: DateTime<Utc>,
}

/// Aggregate engagement counters for a petition.
///
/// `total_signatures` is owned by the ledger: it is maintained by
/// `add_signature`/`remove_signature` and always equals the length of the
/// signature list. The remaining counters mirror the external report and
/// are informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PetitionStats {
    /// Number of signatures in the ledger. Authoritative for access gating.
    pub total_signatures: u64,
    /// The report's own "supports" counter (may include a seeded base).
    pub total_supports: u64,
    /// View count mirrored from the report.
    pub total_views: u64,
    /// Comment count mirrored from the report.
    pub total_comments: u64,
    /// Share count mirrored from the report.
    pub total_shares: u64,
}

/// Partial stats update pushed by the sync layer.
///
/// `total_signatures` is deliberately absent: the ledger owns that counter
/// and a stats push can never make it diverge from the signature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsPatch {
    /// New supports counter, if known.
    pub total_supports: Option<u64>,
    /// New view count, if known.
    pub total_views: Option<u64>,
    /// New comment count, if known.
    pub total_comments: Option<u64>,
    /// New share count, if known.
    pub total_shares: Option<u64>,
}

/// A milestone badge evaluated against the current signature count.
///
/// Owned and overwritten by `id` on every sync pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Stable tier id, e.g. `"milestone-1000"`.
    pub id: String,
    /// Badge display name.
    pub badge_name: String,
    /// Badge description.
    pub badge_description: String,
    /// Signature count required for this tier.
    pub target: u64,
    /// Whether the current count has reached `target`.
    pub achieved: bool,
    /// When the tier was last evaluated as achieved.
    pub achieved_at: Option<DateTime<Utc>>,
    /// Badge icon (emoji).
    pub icon: String,
    /// Badge color, dimmed when not achieved.
    pub color: String,
}

/// Author of a petition update entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAuthor {
    /// Id of the authoring user.
    pub id: UserId,
    /// Display name of the author.
    pub name: String,
    /// Platform role of the author (e.g. "moderador", "autor").
    pub role: String,
}

/// One entry of the petition's update feed, mirrored from the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetitionUpdate {
    /// Stable id of the update entry.
    pub id: String,
    /// Update headline.
    pub title: String,
    /// Update body text.
    pub content: String,
    /// Who posted the update.
    pub author: UpdateAuthor,
    /// When the update was posted.
    pub created_at: DateTime<Utc>,
}

/// Static allow-lists controlling document access.
///
/// Fixed at petition creation and never revisited. Administrators bypass
/// both lists via the `is_admin` flag of the access gate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PetitionPermissions {
    /// Viewer ids allowed to view the rendered document.
    pub can_view: Vec<UserId>,
    /// Viewer ids allowed to download the rendered document.
    pub can_download: Vec<UserId>,
}

/// Snapshot of the identity that filed the report, captured at petition
/// creation time and never re-derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    /// Id of the filing user.
    pub user_id: UserId,
    /// Display name at creation time.
    pub name: String,
    /// National legal id (CPF), or [`LEGAL_ID_PENDING`].
    pub legal_id: String,
    /// Contact e-mail, or [`EMAIL_PENDING`].
    pub email: String,
    /// Whether the requester filed anonymously.
    pub is_anonymous: bool,
}

/// Snapshot of the report content, captured at petition creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    /// Report title.
    pub title: String,
    /// Report body text.
    pub description: String,
    /// Report category (e.g. "infraestrutura", "corrupção").
    pub category: String,
    /// City where the reported issue is located.
    pub city: String,
    /// State/region where the reported issue is located.
    pub state: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// When the underlying report was filed.
    pub reported_at: DateTime<Utc>,
}

/// An opaque reference to an uploaded file in the external blob store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAttachment {
    /// Original file name.
    pub name: String,
    /// MIME type, e.g. "image/jpeg".
    pub mime_type: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Public URL of the stored blob.
    pub url: String,
    /// Storage path of the blob.
    pub path: String,
    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

/// The petition aggregate: the append-only signature ledger plus all
/// derived and mirrored state, keyed by report id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Petition {
    /// Petition id (equals the report id).
    pub id: PetitionId,
    /// When the petition was created.
    pub created_at: DateTime<Utc>,
    /// When the petition was last mutated.
    pub updated_at: DateTime<Utc>,
    /// Identity snapshot of whoever filed the report.
    pub requester: Requester,
    /// Content snapshot of the report.
    pub content: ContentSnapshot,
    /// Media attached to the report.
    pub media: Vec<MediaAttachment>,
    /// Evidence files attached to the report.
    pub evidence_files: Vec<MediaAttachment>,
    /// Engagement counters.
    pub stats: PetitionStats,
    /// Milestone achievement state, overwritten by id on sync.
    pub achievements: Vec<Achievement>,
    /// Update feed mirrored from the report, deduplicated by id.
    pub updates: Vec<PetitionUpdate>,
    /// The signature ledger, in insertion order, unique by legal id.
    pub signatures: Vec<Signature>,
    /// Static access allow-lists, fixed at creation.
    pub permissions: PetitionPermissions,
    /// Tamper-evidence checksum, refreshed on document generation.
    pub document_hash: Option<String>,
}

impl Petition {
    /// Whether a signature with this legal id already exists in the ledger.
    #[must_use]
    pub fn has_signature_for(&self, legal_id: &str) -> bool {
        self.signatures.iter().any(|s| s.legal_id == legal_id)
    }

    /// Whether this user appears among the signers.
    #[must_use]
    pub fn has_signed(&self, user_id: &str) -> bool {
        self.signatures.iter().any(|s| s.user_id == user_id)
    }

    /// Number of signatures in the ledger.
    #[must_use]
    pub fn signature_count(&self) -> u64 {
        self.signatures.len() as u64
    }
}

// =============================================================================
// CLUSTER B: EXTERNAL REPORT (consumed interface)
// =============================================================================

/// Location of the reported issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLocation {
    /// City name.
    pub city: String,
    /// State/region name.
    pub state: String,
}

/// Author of the underlying report, as exposed by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAuthor {
    /// Id of the authoring user.
    pub id: UserId,
    /// Display name of the author.
    pub name: String,
    /// Whether the report was filed anonymously.
    pub is_anonymous: bool,
}

/// Read-only snapshot of a report as served by the external report source.
///
/// The petition subsystem never mutates reports; it only mirrors fields of
/// this snapshot into the petition aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    /// Report id.
    pub id: String,
    /// Report title.
    pub title: String,
    /// Report body text.
    pub content: String,
    /// Report category.
    pub category: String,
    /// Where the reported issue is located.
    pub location: ReportLocation,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// When the report was filed.
    pub created_at: DateTime<Utc>,
    /// Who filed the report.
    pub author: ReportAuthor,
    /// Supports counter (may include a seeded base on top of signatures).
    pub supports: u64,
    /// View counter.
    pub views: u64,
    /// Comment counter.
    pub comments: u64,
    /// Share counter.
    pub shares: u64,
    /// Media attached to the report.
    pub media: Vec<MediaAttachment>,
    /// Evidence files attached to the report.
    pub evidence_files: Vec<MediaAttachment>,
    /// Update feed of the report.
    pub updates: Vec<PetitionUpdate>,
}

/// One entry of the external signature-toggle store: a user currently
/// endorsing a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerEntry {
    /// Id of the endorsing user.
    pub user_id: UserId,
    /// Display name of the endorsing user.
    pub user_name: String,
    /// When the endorsement was toggled on.
    pub signed_at: DateTime<Utc>,
}
