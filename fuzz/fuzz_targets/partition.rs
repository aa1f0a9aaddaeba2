#![no_main]

use libfuzzer_sys::fuzz_target;
use splitread::partition;

fuzz_target!(|input: (u64, u64)| {
    let (size, chunk_size) = input;
    // Keep the layout small enough to allocate
    let chunk_size = chunk_size.max(size / 100_000).max(1);

    let ranges = partition(size, chunk_size).unwrap();

    // Verify: count is ceil(size / chunk_size)
    assert_eq!(ranges.len() as u64, size.div_ceil(chunk_size));

    // Verify: contiguous, full-sized except the last, covering [0, size)
    let mut expected_offset = 0u64;
    for (i, range) in ranges.iter().enumerate() {
        assert_eq!(range.index, i);
        assert_eq!(range.offset, expected_offset);
        if i + 1 < ranges.len() {
            assert_eq!(range.size, chunk_size);
        } else {
            assert!(range.size >= 1 && range.size <= chunk_size);
        }
        expected_offset = range.end();
    }
    assert_eq!(expected_offset, size);

    // Verify: determinism
    assert_eq!(ranges, partition(size, chunk_size).unwrap());
});
