//! # Petition Store Service
//!
//! Application service layer that implements the `PetitionApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`PetitionApi`)
//! - Uses the outbound port (`PetitionRepository`) for storage
//! - Delegates gate decisions and permission construction to the domain layer
//!
//! All mutations run through the repository's `update`, which applies the
//! closure under a single lock acquisition. Sync tasks mutate the same
//! aggregate from separate tokio tasks, so a read-then-upsert sequence
//! would let one writer clobber another's change.

use crate::domain::access;
use crate::ports::{PetitionApi, PetitionRepository};
use chrono::Utc;
use shared_types::{
    Achievement, ContentSnapshot, Petition, PetitionError, PetitionStats, PetitionUpdate,
    ReportSnapshot, Requester, Signature, StatsPatch,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Petition Store Service.
///
/// Constructed over an injected repository so tests can run parallel
/// instances; there is no process-wide singleton.
pub struct PetitionService<R: PetitionRepository> {
    repo: Arc<R>,
}

impl<R: PetitionRepository> PetitionService<R> {
    /// Create a new petition service.
    ///
    /// # Arguments
    /// * `repo` - The petition repository to operate on
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Access the underlying repository.
    ///
    /// The document engine shares the same repository instance to read
    /// aggregates and stamp document hashes.
    pub fn repository(&self) -> Arc<R> {
        Arc::clone(&self.repo)
    }

    /// Apply a mutation to a stored petition, if it exists.
    ///
    /// Missing petitions are a silent no-op. The mutation runs inside the
    /// repository's atomic `update`; when it reports a change, `updated_at`
    /// is bumped under the same lock.
    fn mutate<F>(&self, petition_id: &str, op: &str, mutation: F) -> Result<(), PetitionError>
    where
        F: FnOnce(&mut Petition) -> bool,
    {
        let found = self.repo.update(petition_id, |petition| {
            if mutation(petition) {
                petition.updated_at = Utc::now();
            }
        })?;

        if !found {
            debug!(petition_id, op, "Petition missing, mutation skipped");
        }
        Ok(())
    }
}

impl<R: PetitionRepository> PetitionApi for PetitionService<R> {
    fn create_petition(
        &self,
        report: &ReportSnapshot,
        requester: Requester,
    ) -> Result<Petition, PetitionError> {
        let now = Utc::now();
        let permissions = access::initial_permissions(&requester);

        let petition = Petition {
            id: report.id.clone(),
            created_at: now,
            updated_at: now,
            requester,
            content: ContentSnapshot {
                title: report.title.clone(),
                description: report.content.clone(),
                category: report.category.clone(),
                city: report.location.city.clone(),
                state: report.location.state.clone(),
                tags: report.tags.clone(),
                reported_at: report.created_at,
            },
            media: report.media.clone(),
            evidence_files: report.evidence_files.clone(),
            stats: PetitionStats {
                total_supports: report.supports,
                total_views: report.views,
                total_comments: report.comments,
                total_shares: report.shares,
                ..Default::default()
            },
            achievements: Vec::new(),
            updates: Vec::new(),
            signatures: Vec::new(),
            permissions,
            document_hash: None,
        };

        self.repo.upsert(petition.clone())?;
        info!(petition_id = %petition.id, anonymous = petition.requester.is_anonymous,
            "Petition created");
        Ok(petition)
    }

    fn get_petition(&self, petition_id: &str) -> Result<Option<Petition>, PetitionError> {
        self.repo.get(petition_id)
    }

    fn add_signature(
        &self,
        petition_id: &str,
        signature: Signature,
    ) -> Result<(), PetitionError> {
        self.mutate(petition_id, "add_signature", |petition| {
            if petition.has_signature_for(&signature.legal_id) {
                debug!(petition_id = %petition.id, legal_id = %signature.legal_id,
                    "Duplicate legal id, signature ignored");
                return false;
            }
            petition.signatures.push(signature);
            petition.stats.total_signatures = petition.signature_count();
            true
        })
    }

    fn remove_signature(&self, petition_id: &str, legal_id: &str) -> Result<(), PetitionError> {
        self.mutate(petition_id, "remove_signature", |petition| {
            let before = petition.signatures.len();
            petition.signatures.retain(|s| s.legal_id != legal_id);
            petition.stats.total_signatures = petition.signature_count();
            petition.signatures.len() != before
        })
    }

    fn update_stats(&self, petition_id: &str, patch: StatsPatch) -> Result<(), PetitionError> {
        self.mutate(petition_id, "update_stats", |petition| {
            let stats = &mut petition.stats;
            if let Some(supports) = patch.total_supports {
                stats.total_supports = supports;
            }
            if let Some(views) = patch.total_views {
                stats.total_views = views;
            }
            if let Some(comments) = patch.total_comments {
                stats.total_comments = comments;
            }
            if let Some(shares) = patch.total_shares {
                stats.total_shares = shares;
            }
            true
        })
    }

    fn add_achievement(
        &self,
        petition_id: &str,
        achievement: Achievement,
    ) -> Result<(), PetitionError> {
        self.mutate(petition_id, "add_achievement", |petition| {
            match petition
                .achievements
                .iter_mut()
                .find(|a| a.id == achievement.id)
            {
                Some(existing) => *existing = achievement,
                None => petition.achievements.push(achievement),
            }
            true
        })
    }

    fn add_update(&self, petition_id: &str, update: PetitionUpdate) -> Result<(), PetitionError> {
        self.mutate(petition_id, "add_update", |petition| {
            if petition.updates.iter().any(|u| u.id == update.id) {
                debug!(petition_id = %petition.id, update_id = %update.id,
                    "Duplicate update id, entry ignored");
                return false;
            }
            petition.updates.push(update);
            true
        })
    }

    fn can_view_petition(
        &self,
        petition_id: &str,
        viewer_id: &str,
        is_admin: bool,
    ) -> Result<bool, PetitionError> {
        Ok(self
            .repo
            .get(petition_id)?
            .is_some_and(|p| access::can_view(&p, viewer_id, is_admin)))
    }

    fn can_download_petition(
        &self,
        petition_id: &str,
        viewer_id: &str,
        is_admin: bool,
    ) -> Result<bool, PetitionError> {
        Ok(self
            .repo
            .get(petition_id)?
            .is_some_and(|p| access::can_download(&p, viewer_id, is_admin)))
    }

    fn has_reached_signature_threshold(&self, petition_id: &str) -> Result<bool, PetitionError> {
        Ok(self
            .repo
            .get(petition_id)?
            .is_some_and(|p| access::reached_threshold(&p)))
    }
}
