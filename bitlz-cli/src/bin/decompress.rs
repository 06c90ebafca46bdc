//! bitlz-decompress - decompress standard input to standard output.

use bitlz_cli::{Mode, exit_with_error, init_logging, run};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bitlz-decompress")]
#[command(author, version, about = "Decompress a bit-level LZ78 stream from standard input")]
#[command(long_about = "
Reads a stream produced by bitlz-compress from standard input and writes the
original bytes to standard output. Set RUST_LOG=debug for a summary on
standard error.

Example:
  bitlz-decompress < input.blz > input.bin
")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    init_logging();

    if let Err(e) = run(Mode::Decompress) {
        exit_with_error(&e);
    }
}
