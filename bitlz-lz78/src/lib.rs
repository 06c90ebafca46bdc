//! # BitLZ-LZ78: Bit-level LZ78 Compression
//!
//! This crate implements an adaptive-dictionary compressor that works on the
//! individual bits of its input rather than on bytes.
//!
//! ## Format
//!
//! - **Phrases**: the input is split into the shortest bit strings not seen
//!   before. Each phrase is written as a pointer to its known prefix followed
//!   by one literal bit, MSB-first, with no padding between phrases.
//! - **Growing code width**: a pointer is written with just enough bits to
//!   address the dictionary at that point (0, 1, 2, 2, 3, 3, 3, 3, 4, ...).
//!   Encoder and decoder derive the same widths independently.
//! - **Truncated phrase**: if the input ends mid-match, only that match's
//!   pointer is written.
//! - **Trailer**: empty input produces no output. A body that ends on a byte
//!   boundary is followed by one byte `8`. Otherwise the last 1-7 bits are
//!   left-justified into a padded byte, followed by one byte holding their
//!   count.
//!
//! There is no header, length prefix or checksum.
//!
//! ## Example
//!
//! ```rust
//! use bitlz_lz78::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = compress(original);
//! let decompressed = decompress(&compressed).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Streaming
//!
//! ```rust
//! use bitlz_lz78::{compress_stream, decompress_stream};
//! use std::io::Cursor;
//!
//! let original = b"stream me".repeat(100);
//!
//! let mut compressed = Vec::new();
//! compress_stream(Cursor::new(&original), &mut compressed).unwrap();
//!
//! let mut decompressed = Vec::new();
//! decompress_stream(Cursor::new(&compressed), &mut decompressed).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod dictionary;
mod encoder;
mod schedule;
mod stream;

pub use bitlz_core::{BitLzError, Compressor, Decompressor, Result};
pub use decoder::Lz78Decoder;
pub use dictionary::{Ancestry, BackwardDictionary, BitMatch, ForwardDictionary, PhraseId, ROOT};
pub use encoder::Lz78Encoder;
pub use schedule::{WidthSchedule, width_for_count};
pub use stream::{StreamStats, compress_stream, decompress_stream};

/// Trailer byte marking a body that ends exactly on a byte boundary.
pub const FULL_BYTE_TRAILER: u8 = 8;

/// Compress a complete input.
///
/// # Example
///
/// ```rust
/// use bitlz_lz78::compress;
///
/// assert!(compress(b"").is_empty());
/// assert!(!compress(b"A").is_empty());
/// ```
pub fn compress(data: &[u8]) -> Vec<u8> {
    Lz78Encoder::new().encode(data)
}

/// Decompress a complete compressed stream.
///
/// The stream is trusted: corrupted input yields unspecified output, but
/// never reads outside the dictionary.
///
/// # Example
///
/// ```rust
/// use bitlz_lz78::{compress, decompress};
///
/// let compressed = compress(b"Hello, World!");
/// assert_eq!(decompress(&compressed).unwrap(), b"Hello, World!");
/// ```
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    Lz78Decoder::new().decode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_simple() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let compressed = compress(original);
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_empty_input() {
        assert!(compress(b"").is_empty());
        assert!(decompress(b"").unwrap().is_empty());
    }

    #[test]
    fn test_single_byte() {
        let compressed = compress(b"A");
        assert_eq!(compressed.last(), Some(&4));
        assert_eq!(decompress(&compressed).unwrap(), b"A");
    }

    #[test]
    fn test_repeating_pattern() {
        let original = vec![b'X'; 1000];
        let compressed = compress(&original);
        assert!(compressed.len() < original.len() / 2);
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255).collect();
        let compressed = compress(&original);
        assert_eq!(decompress(&compressed).unwrap(), original);
    }
}
