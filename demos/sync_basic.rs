//! Basic in-memory example.
//!
//! Run with:
//!     cargo run --example sync_basic

use std::io::Read;

use splitread::{ConcurrentReader, ReaderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1 MB of sample data, plus a tail that doesn't fill a whole chunk
    let data: Vec<u8> = (0..1_000_123).map(|i| (i * 7 + 13) as u8).collect();

    let config = ReaderConfig::new(64 * 1024)?;
    let reader = ConcurrentReader::new(&data, data.len() as i64, config)?;

    println!(
        "{} bytes in {} chunks of {} bytes\n",
        reader.size(),
        reader.len(),
        reader.chunk_size()
    );

    for range in reader.ranges() {
        println!("{}", range);
    }

    // Read one chunk by hand, then materialize it
    let mut last = reader.chunk(reader.len() - 1).ok_or("no chunks")?;
    let mut head = [0u8; 8];
    last.read_exact(&mut head)?;
    println!("\nFirst bytes of {}: {:02x?}", last, head);
    println!("Materialized {} bytes", last.data()?.len());

    Ok(())
}
