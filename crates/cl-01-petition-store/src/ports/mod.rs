//! Ports: the inbound API implemented by the service and the outbound
//! repository abstraction it depends on.

pub mod inbound;
pub mod outbound;

pub use inbound::PetitionApi;
pub use outbound::PetitionRepository;
