//! Chunk types.
//!
//! - [`ByteRange`] - Descriptor of one chunk: index, offset, size
//! - [`SectionReader`] - Restricted view onto a source with its own cursor
//! - [`Chunk`] - A descriptor bound to a live source; readable and hashable

mod data;
mod range;
mod section;

pub use data::Chunk;
pub use range::ByteRange;
pub use section::SectionReader;
