//! Codebook storage and initialization.

mod store;
mod vector;

pub use store::Codebook;
pub use vector::CodeVector;
