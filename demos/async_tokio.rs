//! Chunk-per-task processing on a Tokio runtime.
//!
//! Chunk operations block, so each one runs under `spawn_blocking`. An `Arc`
//! source makes the chunks `'static`.
//!
//! Run with:
//!     cargo run --example async_tokio

use std::sync::Arc;

use splitread::{ConcurrentReader, DigestHasher, ReaderConfig};

type Sha256 = sha2::Sha256;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data: Arc<Vec<u8>> = Arc::new((0..150_000).map(|i| (i % 251) as u8).collect());
    let reader = ConcurrentReader::new(
        Arc::clone(&data),
        data.len() as i64,
        ReaderConfig::new(16 * 1024)?,
    )?;

    println!("Processing {} chunks concurrently...\n", reader.len());

    let tasks: Vec<_> = reader
        .chunks_owned()
        .into_iter()
        .map(|mut chunk| {
            tokio::task::spawn_blocking(move || {
                let digest = chunk.hash(&mut DigestHasher::<Sha256>::new())?;
                Ok::<_, std::io::Error>((chunk.index(), chunk.size(), digest))
            })
        })
        .collect();

    for task in tasks {
        let (index, size, digest) = task.await??;
        println!("Chunk {:>3}: {:>6} bytes, sha256={:x}", index, size, digest);
    }

    Ok(())
}
