pub mod outbound;

pub use outbound::{DirectoryError, ReportSource, SignerContact, SignerDirectory};
