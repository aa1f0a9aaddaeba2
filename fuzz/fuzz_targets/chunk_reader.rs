#![no_main]

use std::io::Read;

use libfuzzer_sys::fuzz_target;
use splitread::{Blake3Hasher, ConcurrentReader, ReaderConfig};

fuzz_target!(|input: (u16, Vec<u8>)| {
    let (chunk_size, data) = input;
    let config = match ReaderConfig::new(chunk_size as usize) {
        Ok(config) => config,
        Err(_) => {
            assert_eq!(chunk_size, 0);
            return;
        }
    };

    let reader = ConcurrentReader::new(&data, data.len() as i64, config).unwrap();
    let mut hasher = Blake3Hasher::new();
    let mut reassembled: Vec<u8> = Vec::with_capacity(data.len());

    for mut chunk in reader.chunks() {
        // Verify: streamed bytes match the materialized buffer
        let mut streamed = Vec::new();
        chunk.read_to_end(&mut streamed).unwrap();
        let materialized = chunk.data().unwrap();
        assert_eq!(&streamed[..], &materialized[..]);
        assert_eq!(materialized.len() as u64, chunk.size());

        // Verify: hashing is repeatable and matches one-shot hashing
        let h1 = chunk.hash(&mut hasher).unwrap();
        let h2 = chunk.hash(&mut hasher).unwrap();
        assert_eq!(h1, h2);
        assert_eq!(h1, Blake3Hasher::hash(&materialized));

        reassembled.extend_from_slice(&materialized);
    }

    // Verify: chunks reassemble the input exactly
    assert_eq!(reassembled, data);
});
