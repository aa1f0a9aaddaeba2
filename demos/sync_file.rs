//! Concurrent file hashing example.
//!
//! Hashes every chunk of a file on its own scoped thread.
//!
//! Run with:
//!     cargo run --example sync_file -- /path/to/file [chunk-size]

use std::env;
use std::fs::File;

use splitread::format::{MI, byte_count_binary};
use splitread::{Blake3Hasher, ConcurrentReader, ReaderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "Cargo.toml".to_string());
    let chunk_size = match args.next() {
        Some(n) => n.parse()?,
        None => MI as usize,
    };

    let file = File::open(&path)?;
    let size = file.metadata()?.len() as i64;
    println!(
        "Hashing {} ({}) in {} chunks\n",
        path,
        byte_count_binary(size),
        byte_count_binary(chunk_size as i64)
    );

    let reader = ConcurrentReader::new(file, size, ReaderConfig::new(chunk_size)?)?;

    let results = std::thread::scope(|s| {
        let workers: Vec<_> = reader
            .chunks()
            .into_iter()
            .map(|mut chunk| {
                s.spawn(move || {
                    let hash = chunk.hash(&mut Blake3Hasher::new());
                    (chunk.descriptor(), hash)
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|w| w.join().expect("worker panicked"))
            .collect::<Vec<_>>()
    });

    let mut failed = 0;
    for (range, hash) in &results {
        match hash {
            Ok(hash) => println!(
                "Chunk {:>5}: offset={:>12}, len={:>10}, hash={}",
                range.index,
                range.offset,
                range.size,
                &hash.to_hex()[..16]
            ),
            Err(e) => {
                failed += 1;
                eprintln!("Chunk {:>5}: {}", range.index, e);
            }
        }
    }

    println!("\nTotal: {} chunks, {} failed", results.len(), failed);
    Ok(())
}
