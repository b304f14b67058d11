use shared_types::{PetitionError, PetitionId};

/// Inbound port for document generation.
pub trait DocumentApi: Send + Sync {
    /// Number of signature pages for a petition at the given page size.
    ///
    /// A missing petition and an empty ledger both report zero pages; the
    /// document itself still renders its fixed sections either way.
    fn total_pages(&self, petition_id: &str, per_page: usize) -> Result<usize, PetitionError>;

    /// Render one page of the petition document and refresh its stored
    /// tamper-evidence hash.
    ///
    /// Returns [`PetitionError::PetitionNotFound`] for an unknown id; this
    /// is the one operation in the subsystem where a missing petition is a
    /// hard error rather than a silent no-op.
    fn generate_document(
        &self,
        petition_id: &PetitionId,
        page: usize,
        per_page: usize,
    ) -> Result<String, PetitionError>;
}
