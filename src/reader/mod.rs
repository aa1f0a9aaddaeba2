//! Partitioning a source into chunks.
//!
//! - [`ConcurrentReader`] - Owns a source and its chunk layout
//! - [`partition`] - The pure range computation behind it

mod engine;
mod layout;

pub use engine::ConcurrentReader;
pub use layout::partition;
