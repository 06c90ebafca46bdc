//! bitlz-compress - compress standard input to standard output.

use bitlz_cli::{Mode, exit_with_error, init_logging, run};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bitlz-compress")]
#[command(author, version, about = "Compress standard input with bit-level LZ78")]
#[command(long_about = "
Reads raw bytes from standard input and writes the compressed stream to
standard output. Set RUST_LOG=debug for a summary on standard error.

Example:
  bitlz-compress < input.bin > input.blz
")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    init_logging();

    if let Err(e) = run(Mode::Compress) {
        exit_with_error(&e);
    }
}
