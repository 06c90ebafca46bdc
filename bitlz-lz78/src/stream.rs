//! Streaming compression over `std::io` readers and writers.
//!
//! Input is pulled in chunks and every chunk's output is written before the
//! next read, so memory use stays bounded by the dictionaries rather than by
//! the stream length.

use std::io::{ErrorKind, Read, Write};

use bitlz_core::error::Result;
use bitlz_core::traits::{Compressor, Decompressor};
use log::debug;

use crate::decoder::Lz78Decoder;
use crate::encoder::Lz78Encoder;

/// Size of each read from the input.
const CHUNK_SIZE: usize = 8192;

/// Byte counts for one streamed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Bytes read from the input.
    pub bytes_in: u64,
    /// Bytes written to the output.
    pub bytes_out: u64,
}

/// Drive `step` over every chunk of `reader`, then once more with `None` to
/// finish the stream, writing all produced bytes to `writer`.
fn pump<R, W, F>(mut reader: R, mut writer: W, mut step: F) -> Result<StreamStats>
where
    R: Read,
    W: Write,
    F: FnMut(Option<&[u8]>, &mut Vec<u8>) -> Result<()>,
{
    let mut stats = StreamStats::default();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut out = Vec::with_capacity(CHUNK_SIZE);

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        stats.bytes_in += n as u64;

        step(Some(&buf[..n]), &mut out)?;
        writer.write_all(&out)?;
        stats.bytes_out += out.len() as u64;
        out.clear();
    }

    step(None, &mut out)?;
    writer.write_all(&out)?;
    stats.bytes_out += out.len() as u64;
    writer.flush()?;

    Ok(stats)
}

/// Compress everything from `reader` into `writer`.
pub fn compress_stream<R: Read, W: Write>(reader: R, writer: W) -> Result<StreamStats> {
    let mut encoder = Lz78Encoder::new();
    let stats = pump(reader, writer, |chunk, out| match chunk {
        Some(input) => encoder.compress(input, out),
        None => encoder.finish(out),
    })?;

    debug!(
        "compressed {} bytes into {} bytes",
        stats.bytes_in, stats.bytes_out
    );
    Ok(stats)
}

/// Decompress everything from `reader` into `writer`.
pub fn decompress_stream<R: Read, W: Write>(reader: R, writer: W) -> Result<StreamStats> {
    let mut decoder = Lz78Decoder::new();
    let stats = pump(reader, writer, |chunk, out| match chunk {
        Some(input) => decoder.decompress(input, out),
        None => decoder.finish(out),
    })?;

    debug!(
        "decompressed {} bytes into {} bytes",
        stats.bytes_in, stats.bytes_out
    );
    Ok(stats)
}
