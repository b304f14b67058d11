use shared_types::{
    Achievement, Petition, PetitionError, PetitionUpdate, ReportSnapshot, Requester, Signature,
    StatsPatch,
};

/// Primary API for petition operations.
///
/// Errors represent storage-layer failures only. Missing petitions and
/// duplicate cardinality conflicts are silent no-ops everywhere in this
/// trait; gate queries answer `false` for unknown petitions.
pub trait PetitionApi: Send + Sync {
    // === Aggregate lifecycle ===

    /// Build and store the petition aggregate for a report.
    ///
    /// Keyed by `report.id`. Existence checking is the caller's job: the
    /// sync layer calls `get_petition` first and skips creation when one
    /// already exists.
    fn create_petition(
        &self,
        report: &ReportSnapshot,
        requester: Requester,
    ) -> Result<Petition, PetitionError>;

    /// Fetch a petition by id.
    fn get_petition(&self, petition_id: &str) -> Result<Option<Petition>, PetitionError>;

    // === Signature Ledger ===

    /// Append a signature to the ledger.
    ///
    /// No-op when the petition is missing or a signature with the same
    /// legal id already exists. On success `stats.total_signatures` is set
    /// to the new ledger length and `updated_at` is bumped.
    fn add_signature(&self, petition_id: &str, signature: Signature)
        -> Result<(), PetitionError>;

    /// Remove the signature with this legal id from the ledger.
    ///
    /// No-op when the petition is missing. Recomputes
    /// `stats.total_signatures` and bumps `updated_at`.
    fn remove_signature(&self, petition_id: &str, legal_id: &str) -> Result<(), PetitionError>;

    // === Stats & Achievements ===

    /// Shallow-merge external engagement counters into the stats.
    ///
    /// Cannot touch `total_signatures`; that counter is ledger-owned.
    fn update_stats(&self, petition_id: &str, patch: StatsPatch) -> Result<(), PetitionError>;

    /// Replace-by-id or append an achievement.
    fn add_achievement(
        &self,
        petition_id: &str,
        achievement: Achievement,
    ) -> Result<(), PetitionError>;

    /// Append an update entry, deduplicated by id.
    fn add_update(&self, petition_id: &str, update: PetitionUpdate) -> Result<(), PetitionError>;

    // === Access Gate ===

    /// Whether the viewer may see the rendered document.
    fn can_view_petition(
        &self,
        petition_id: &str,
        viewer_id: &str,
        is_admin: bool,
    ) -> Result<bool, PetitionError>;

    /// Whether the viewer may download the rendered document.
    fn can_download_petition(
        &self,
        petition_id: &str,
        viewer_id: &str,
        is_admin: bool,
    ) -> Result<bool, PetitionError>;

    /// Whether the petition has crossed the view-unlock threshold.
    fn has_reached_signature_threshold(&self, petition_id: &str) -> Result<bool, PetitionError>;
}
