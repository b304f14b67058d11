//! Domain layer: pure document functions (hashing, pagination, layout).

pub mod hash;
pub mod layout;
pub mod pagination;

pub use hash::document_hash;
pub use layout::render_document;
pub use pagination::{page_slice, total_pages};
