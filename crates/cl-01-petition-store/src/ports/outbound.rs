use shared_types::{Petition, PetitionError, PetitionId};

/// Petition storage abstraction.
///
/// The service is written against this port so tests run on the in-memory
/// adapter while production can plug in a persistent store without touching
/// ledger semantics.
pub trait PetitionRepository: Send + Sync {
    /// Fetch a petition by id.
    fn get(&self, petition_id: &str) -> Result<Option<Petition>, PetitionError>;

    /// Insert or replace a petition, keyed by its id.
    fn upsert(&self, petition: Petition) -> Result<(), PetitionError>;

    /// Mutate a stored petition in place, atomically.
    ///
    /// The closure runs under a single write-lock acquisition, so
    /// concurrent writers never apply their change to a stale copy of
    /// the aggregate. Returns `false` when no petition has that id;
    /// the closure does not run in that case.
    fn update<F>(&self, petition_id: &str, mutation: F) -> Result<bool, PetitionError>
    where
        F: FnOnce(&mut Petition);

    /// Remove a petition, returning it if present.
    fn remove(&self, petition_id: &str) -> Result<Option<Petition>, PetitionError>;

    /// List all stored petition ids.
    fn ids(&self) -> Result<Vec<PetitionId>, PetitionError>;
}
