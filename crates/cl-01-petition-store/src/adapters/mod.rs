//! Adapters: repository implementations behind the outbound port.

pub mod memory_repo;

pub use memory_repo::InMemoryPetitionRepository;
