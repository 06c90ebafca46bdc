//! Core traits for streaming compression and decompression.
//!
//! Both sides of a codec consume input in arbitrary chunks and append any
//! bytes they can complete to a caller-owned output buffer. A stream is closed
//! with an explicit `finish` call, which flushes whatever the codec was still
//! holding back (partial bits, trailer bytes).

use crate::error::Result;

/// A streaming compressor (encoder).
pub trait Compressor {
    /// Consume `input`, appending every completed output byte to `output`.
    fn compress(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<()>;

    /// Flush the end of the stream to `output`.
    ///
    /// After this call the compressor is finished until [`Compressor::reset`].
    fn finish(&mut self, output: &mut Vec<u8>) -> Result<()>;

    /// Reset the compressor to its initial state.
    fn reset(&mut self);

    /// Check if the compressor has finished.
    fn is_finished(&self) -> bool;

    /// Compress all data at once (convenience method).
    fn compress_all(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len() / 2 + 2);
        self.compress(input, &mut output)?;
        self.finish(&mut output)?;
        Ok(output)
    }
}

/// A streaming decompressor (decoder).
pub trait Decompressor {
    /// Consume `input`, appending every completed output byte to `output`.
    ///
    /// A decompressor may hold back a few trailing input bytes until it
    /// knows whether they are the end of the stream.
    fn decompress(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<()>;

    /// Signal end of input and flush the remaining output.
    ///
    /// After this call the decompressor is finished until
    /// [`Decompressor::reset`].
    fn finish(&mut self, output: &mut Vec<u8>) -> Result<()>;

    /// Reset the decompressor to its initial state.
    fn reset(&mut self);

    /// Check if the decompressor has finished.
    fn is_finished(&self) -> bool;

    /// Decompress all data at once (convenience method).
    fn decompress_all(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len().saturating_mul(2));
        self.decompress(input, &mut output)?;
        self.finish(&mut output)?;
        Ok(output)
    }
}
