//! Small FIFO bit accumulator.
//!
//! `BitQueue` buffers a handful of bits between variable-width producers and
//! byte-oriented consumers. Bits keep their MSB-first order end to end: the
//! most significant of the `nbits` handed to [`BitQueue::enqueue`] is the next
//! bit to come out of [`BitQueue::dequeue`].
//!
//! # Example
//!
//! ```
//! use bitlz_core::bitqueue::BitQueue;
//!
//! let mut queue = BitQueue::new();
//! queue.enqueue(0b101, 3);
//! queue.enqueue(0b11001, 5);
//! assert_eq!(queue.num_bits(), 8);
//! assert_eq!(queue.dequeue(8), 0b1011_1001);
//! assert!(queue.is_empty());
//! ```

/// Mask selecting the low `nbits` of a word.
#[inline]
fn low_mask(nbits: u32) -> u64 {
    if nbits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << nbits) - 1
    }
}

/// A fixed-capacity FIFO of bits, MSB-first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitQueue {
    /// Buffered bits, oldest in the most significant occupied position.
    buffer: u64,
    /// Number of valid bits in `buffer`.
    len: u32,
}

impl BitQueue {
    /// Maximum number of bits the queue can hold at once.
    pub const CAPACITY: u32 = u64::BITS;

    /// Create an empty queue.
    pub fn new() -> Self {
        Self { buffer: 0, len: 0 }
    }

    /// Append the low `nbits` of `value` to the tail of the queue.
    ///
    /// Callers must never exceed [`BitQueue::CAPACITY`] buffered bits.
    #[inline]
    pub fn enqueue(&mut self, value: u64, nbits: u32) {
        if nbits == 0 {
            return;
        }
        debug_assert!(
            self.len + nbits <= Self::CAPACITY,
            "BitQueue overflow: {} + {} bits",
            self.len,
            nbits
        );

        self.buffer = self.buffer.checked_shl(nbits).unwrap_or(0) | (value & low_mask(nbits));
        self.len += nbits;
    }

    /// Number of bits currently buffered.
    #[inline]
    pub fn num_bits(&self) -> u32 {
        self.len
    }

    /// Whether no bits are buffered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove `nbits` from the head of the queue, MSB-first.
    ///
    /// If fewer than `nbits` are buffered, only the buffered bits are removed
    /// and returned, so the result is effectively left-padded with zeros.
    #[inline]
    pub fn dequeue(&mut self, nbits: u32) -> u64 {
        let count = nbits.min(self.len);
        if count == 0 {
            return 0;
        }

        let shift = self.len - count;
        let value = (self.buffer >> shift) & low_mask(count);

        self.len = shift;
        self.buffer &= low_mask(self.len);

        value
    }

    /// Discard all buffered bits.
    pub fn clear(&mut self) {
        self.buffer = 0;
        self.len = 0;
    }
}
