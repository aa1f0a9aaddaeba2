//! Human-readable byte counts.
//!
//! Presentation helpers for logs and progress output. They are pure, never
//! fail, and never panic, whatever the input.
//!
//! ```
//! use splitread::format::{byte_count_binary, byte_count_decimal, KI};
//!
//! assert_eq!(byte_count_decimal(2 * KI), "2.0 kB");
//! assert_eq!(byte_count_binary(2 * KI), "2.0 KiB");
//! ```

/// 2^10 bytes.
pub const KI: i64 = 1 << 10;
/// 2^20 bytes.
pub const MI: i64 = 1 << 20;
/// 2^30 bytes.
pub const GI: i64 = 1 << 30;
/// 2^40 bytes.
pub const TI: i64 = 1 << 40;
/// 2^50 bytes.
pub const PI: i64 = 1 << 50;
/// 2^60 bytes.
pub const EI: i64 = 1 << 60;

/// Formats `bytes` with SI prefixes (base 1000): `B`, `kB`, `MB`, ... `EB`.
pub fn byte_count_decimal(bytes: i64) -> String {
    byte_count(bytes, 1000, ["kB", "MB", "GB", "TB", "PB", "EB"])
}

/// Formats `bytes` with IEC prefixes (base 1024): `B`, `KiB`, `MiB`, ... `EiB`.
pub fn byte_count_binary(bytes: i64) -> String {
    byte_count(bytes, 1024, ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"])
}

// Below one unit (negative counts included) the plain byte count is printed.
// i64::MAX tops out at the sixth prefix for both bases.
fn byte_count(bytes: i64, unit: i64, suffixes: [&str; 6]) -> String {
    if bytes < unit {
        return format!("{} B", bytes);
    }

    let (mut div, mut exp) = (unit, 0);
    let mut n = bytes / unit;
    while n >= unit {
        div *= unit;
        exp += 1;
        n /= unit;
    }

    format!("{:.1} {}", bytes as f64 / div as f64, suffixes[exp])
}
