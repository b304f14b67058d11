use crate::ports::PetitionRepository;
use shared_types::{Petition, PetitionError, PetitionId};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory implementation of `PetitionRepository`.
///
/// The production-default store: the source system keeps the whole keyed
/// collection in process memory with no persistence. A poisoned lock is
/// the only failure mode.
pub struct InMemoryPetitionRepository {
    petitions: RwLock<HashMap<PetitionId, Petition>>,
}

impl InMemoryPetitionRepository {
    pub fn new() -> Self {
        Self {
            petitions: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored petitions.
    pub fn len(&self) -> usize {
        self.petitions.read().map(|p| p.len()).unwrap_or(0)
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryPetitionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PetitionRepository for InMemoryPetitionRepository {
    fn get(&self, petition_id: &str) -> Result<Option<Petition>, PetitionError> {
        let petitions = self
            .petitions
            .read()
            .map_err(|_| PetitionError::LockPoisoned)?;
        Ok(petitions.get(petition_id).cloned())
    }

    fn upsert(&self, petition: Petition) -> Result<(), PetitionError> {
        let mut petitions = self
            .petitions
            .write()
            .map_err(|_| PetitionError::LockPoisoned)?;
        petitions.insert(petition.id.clone(), petition);
        Ok(())
    }

    fn update<F>(&self, petition_id: &str, mutation: F) -> Result<bool, PetitionError>
    where
        F: FnOnce(&mut Petition),
    {
        let mut petitions = self
            .petitions
            .write()
            .map_err(|_| PetitionError::LockPoisoned)?;
        match petitions.get_mut(petition_id) {
            Some(petition) => {
                mutation(petition);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&self, petition_id: &str) -> Result<Option<Petition>, PetitionError> {
        let mut petitions = self
            .petitions
            .write()
            .map_err(|_| PetitionError::LockPoisoned)?;
        Ok(petitions.remove(petition_id))
    }

    fn ids(&self) -> Result<Vec<PetitionId>, PetitionError> {
        let petitions = self
            .petitions
            .read()
            .map_err(|_| PetitionError::LockPoisoned)?;
        Ok(petitions.keys().cloned().collect())
    }
}
