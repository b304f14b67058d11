//! Domain layer: pure petition rules with no storage or async concerns.

pub mod access;
pub mod milestones;

pub use access::*;
pub use milestones::*;
