//! Error types for BitLZ operations.
//!
//! The compressed format carries no checksum, so the decoder does not try to
//! detect corruption. The only structural faults reported here are the ones
//! that would otherwise index past the end of a dictionary or misread the
//! stream trailer.

use std::io;
use thiserror::Error;

/// The main error type for BitLZ operations.
#[derive(Debug, Error)]
pub enum BitLzError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The final trailer byte is not a valid payload bit count (1-8).
    #[error("Invalid trailer byte: {value} (must be 1-8)")]
    InvalidTrailer {
        /// The trailer byte found at the end of the stream.
        value: u8,
    },

    /// A decoded pointer refers to a dictionary entry that does not exist.
    #[error("Invalid phrase pointer: {pointer} (dictionary holds {entries} entries)")]
    InvalidPointer {
        /// The decoded pointer value.
        pointer: u64,
        /// Number of entries in the dictionary, root included.
        entries: usize,
    },
}

/// Result type alias for BitLZ operations.
pub type Result<T> = std::result::Result<T, BitLzError>;

impl BitLzError {
    /// Create an invalid trailer error.
    pub fn invalid_trailer(value: u8) -> Self {
        Self::InvalidTrailer { value }
    }

    /// Create an invalid pointer error.
    pub fn invalid_pointer(pointer: u64, entries: usize) -> Self {
        Self::InvalidPointer { pointer, entries }
    }
}
