pub mod errors;
pub mod signer_book;

pub use errors::SyncError;
pub use signer_book::SignerBook;
