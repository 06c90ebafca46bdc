//! # BitLZ Core
//!
//! Core components for the BitLZ bit-level LZ78 compressor.
//!
//! - [`bitqueue`]: small MSB-first FIFO used to frame variable-width codes
//! - [`bitstack`]: growable LIFO used to rebuild phrases in reverse
//! - [`traits`]: streaming compression/decompression traits
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```rust
//! use bitlz_core::{BitQueue, BitStack};
//!
//! let mut queue = BitQueue::new();
//! queue.enqueue(0b10, 2);
//! queue.enqueue(0b110011, 6);
//! assert_eq!(queue.dequeue(8), 0b1011_0011);
//!
//! let mut stack = BitStack::new();
//! for n in 0..8 {
//!     stack.push((0x5Au8 >> n) & 1);
//! }
//! assert_eq!(stack.pop(), 0x5A);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitqueue;
pub mod bitstack;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use bitqueue::BitQueue;
pub use bitstack::BitStack;
pub use error::{BitLzError, Result};
pub use traits::{Compressor, Decompressor};
