//! Document generation service.
//!
//! Reads petitions through the store's repository port, renders the fixed
//! Portuguese layout and refreshes the stored tamper-evidence hash as a
//! side effect of every generation.

use crate::domain::{document_hash, render_document, total_pages};
use crate::ports::DocumentApi;
use chrono::Utc;
use cl_01_petition_store::PetitionRepository;
use shared_types::{PetitionError, PetitionId};
use std::sync::Arc;
use tracing::{debug, info};

/// Renders petition documents from a shared repository.
pub struct DocumentService<R: PetitionRepository> {
    repo: Arc<R>,
}

impl<R: PetitionRepository> DocumentService<R> {
    /// Create a service over a repository shared with the petition store.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R: PetitionRepository> DocumentApi for DocumentService<R> {
    fn total_pages(&self, petition_id: &str, per_page: usize) -> Result<usize, PetitionError> {
        match self.repo.get(petition_id)? {
            Some(petition) => Ok(total_pages(petition.signatures.len(), per_page)),
            None => {
                debug!(petition_id, "page count requested for unknown petition");
                Ok(0)
            }
        }
    }

    fn generate_document(
        &self,
        petition_id: &PetitionId,
        page: usize,
        per_page: usize,
    ) -> Result<String, PetitionError> {
        let petition = self
            .repo
            .get(petition_id)?
            .ok_or_else(|| PetitionError::not_found(petition_id))?;

        let hash = document_hash(&petition)?;
        let rendered = render_document(&petition, page, per_page, &hash, Utc::now());

        // Persist the hash so later reads can verify the generated copy.
        // The repository's atomic `update` keeps a concurrent ledger append
        // from being clobbered by a stale copy of the aggregate.
        // `updated_at` is left alone: the hash is derived from the ledger,
        // not a mutation of it, and feeds back into its own input otherwise.
        self.repo.update(petition_id, |stored| {
            if stored.document_hash.as_deref() != Some(hash.as_str()) {
                stored.document_hash = Some(hash.clone());
            }
        })?;

        info!(
            petition_id = petition_id.as_str(),
            page,
            per_page,
            hash = hash.as_str(),
            "document generated"
        );
        Ok(rendered)
    }
}
