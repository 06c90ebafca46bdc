//! Shared plumbing for the BitLZ command-line filters.
//!
//! Both binaries read raw bytes from standard input and write to standard
//! output. Diagnostics go to standard error, controlled by `RUST_LOG`.

use std::io::{self, BufWriter};

use bitlz_lz78::{Result, StreamStats, compress_stream, decompress_stream};
use log::info;

/// Direction of a filter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Raw bytes in, compressed stream out.
    Compress,
    /// Compressed stream in, raw bytes out.
    Decompress,
}

/// Initialise `env_logger` on standard error, showing only errors unless
/// `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"))
        .target(env_logger::Target::Stderr)
        .init();
}

/// Run one filter pass from standard input to standard output.
pub fn run(mode: Mode) -> Result<StreamStats> {
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    let stats = match mode {
        Mode::Compress => compress_stream(stdin, stdout)?,
        Mode::Decompress => decompress_stream(stdin, stdout)?,
    };

    info!(
        "{:?}: {} bytes in, {} bytes out",
        mode, stats.bytes_in, stats.bytes_out
    );
    Ok(stats)
}

/// Report a failed run and exit with status 1.
pub fn exit_with_error(error: &dyn std::error::Error) -> ! {
    eprintln!("Error: {}", error);
    std::process::exit(1);
}
