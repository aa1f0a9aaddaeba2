//! splitread
//!
//! Fixed-size chunking of random-access byte sources for concurrent reading.
//!
//! `splitread` takes a source that supports positional reads (a file, a
//! buffer, a memory map, anything implementing [`ReadAt`]) plus its total
//! size, and splits the address space into contiguous, non-overlapping
//! chunks. Each chunk is an independent handle with its own cursor that can
//! be read, hashed, or materialized on any thread.
//!
//! Use it to:
//!
//! - checksum one large file on several cores
//! - upload or copy disjoint regions in parallel
//! - verify a download piece by piece
//!
//! The crate intentionally:
//! - does NOT spawn threads or tasks
//! - does NOT aggregate errors across chunks
//! - does NOT pick a hash algorithm
//! - does NOT lock anything
//!
//! It only does one thing: **size in → independent chunks out**
//!
//! # Threads
//!
//! ```no_run
//! use std::fs::File;
//! use splitread::{Blake3Hasher, ConcurrentReader, ReaderConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let file = File::open("data.bin")?;
//!     let size = file.metadata()?.len() as i64;
//!     let reader = ConcurrentReader::new(file, size, ReaderConfig::default())?;
//!
//!     std::thread::scope(|s| {
//!         for mut chunk in reader.chunks() {
//!             s.spawn(move || {
//!                 let hash = chunk.hash(&mut Blake3Hasher::new())?;
//!                 println!("chunk {} @ {}: {}", chunk.index(), chunk.offset(), hash);
//!                 Ok::<_, std::io::Error>(())
//!             });
//!         }
//!     });
//!     Ok(())
//! }
//! ```
//!
//! # Empty sources
//!
//! A source of size 0 produces no chunks at all.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod config;
mod error;
mod reader;
mod source;

mod buffer; // internal (thread-local reuse)
mod hash;

pub mod format;

//
// Public surface
//

pub use chunk::{ByteRange, Chunk, SectionReader};
pub use config::{DEFAULT_CHUNK_SIZE, ReaderConfig};
pub use error::ReaderError;
pub use hash::{ChunkHash, ChunkHasher};
pub use reader::{ConcurrentReader, partition};
pub use source::ReadAt;

#[cfg(feature = "hash-blake3")]
pub use hash::Blake3Hasher;

#[cfg(feature = "hash-digest")]
pub use hash::DigestHasher;
