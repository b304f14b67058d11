pub mod memory;

pub use memory::{InMemoryReportSource, InMemorySignerDirectory};
