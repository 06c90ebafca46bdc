//! Growable LIFO bit accumulator with byte-at-a-time popping.
//!
//! The decoder rebuilds each phrase by walking dictionary links from leaf to
//! root, which yields the phrase's bits last-first. Pushing them onto a
//! `BitStack` and popping whole bytes restores the original order: the most
//! recently pushed bit becomes the most significant bit of the popped byte.
//!
//! Bits that do not yet form a byte can be parked with
//! [`BitStack::save_remainder`] while the next phrase is pushed, then spliced
//! back underneath the new bits with [`BitStack::restore_remainder`].
//!
//! # Example
//!
//! ```
//! use bitlz_core::bitstack::BitStack;
//!
//! let mut stack = BitStack::new();
//! // Push the bits of 0b1100_1010 last-first.
//! for bit in [0, 1, 0, 1, 0, 0, 1, 1] {
//!     stack.push(bit);
//! }
//! assert_eq!(stack.pop(), 0b1100_1010);
//! ```

/// A LIFO of bits stored in bytes, each byte filled from the LSB upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitStack {
    /// Completed bytes followed by exactly one partially filled byte.
    bytes: Vec<u8>,
    /// Number of bits used in the last (partial) byte, 0-7.
    partial_len: u8,
    /// Remainder bits parked by `save_remainder`.
    saved: u8,
    /// Number of parked remainder bits, 0-7.
    saved_len: u8,
}

impl Default for BitStack {
    fn default() -> Self {
        Self::new()
    }
}

impl BitStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            bytes: vec![0],
            partial_len: 0,
            saved: 0,
            saved_len: 0,
        }
    }

    /// Number of complete bytes available to [`BitStack::pop`].
    #[inline]
    fn full_bytes(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Push a single bit. Only the lowest bit of `bit` is used.
    #[inline]
    pub fn push(&mut self, bit: u8) {
        let partial_len = self.partial_len;
        if let Some(top) = self.bytes.last_mut() {
            *top |= (bit & 1) << partial_len;
        }

        self.partial_len += 1;
        if self.partial_len == 8 {
            self.partial_len = 0;
            self.bytes.push(0);
        }
    }

    /// Pop the 8 most recently pushed bits as a byte.
    ///
    /// The most recent bit lands in the most significant position.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 8 bits are buffered.
    pub fn pop(&mut self) -> u8 {
        assert!(self.full_bytes() > 0, "BitStack::pop with fewer than 8 bits");

        let rem = u32::from(self.partial_len);
        let top = u32::from(self.bytes.pop().unwrap_or(0));
        let below = self.bytes.last_mut().map_or(0, |b| {
            let value = u32::from(*b);
            *b &= ((1u32 << rem) - 1) as u8;
            value
        });

        ((top << (8 - rem)) | (below >> rem)) as u8
    }

    /// Total number of buffered bits.
    #[inline]
    pub fn num_bits(&self) -> usize {
        self.full_bytes() * 8 + usize::from(self.partial_len)
    }

    /// Whether no bits are buffered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_bits() == 0
    }

    /// Park the current remainder bits and clear them from the stack.
    ///
    /// Must only be called once every complete byte has been popped.
    pub fn save_remainder(&mut self) {
        debug_assert_eq!(
            self.full_bytes(),
            0,
            "save_remainder called with complete bytes buffered"
        );

        self.saved = self.bytes[0];
        self.saved_len = self.partial_len;

        self.bytes.truncate(1);
        self.bytes[0] = 0;
        self.partial_len = 0;
    }

    /// Re-push the parked remainder bits, oldest first, on top of whatever
    /// has been pushed since [`BitStack::save_remainder`].
    pub fn restore_remainder(&mut self) {
        let saved = self.saved;
        for n in 0..self.saved_len {
            self.push((saved >> n) & 1);
        }

        self.saved = 0;
        self.saved_len = 0;
    }

    /// Discard all buffered and parked bits.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_msb_first_reversed(stack: &mut BitStack, byte: u8) {
        for n in 0..8 {
            stack.push((byte >> n) & 1);
        }
    }

    #[test]
    fn test_push_pop_byte() {
        let mut stack = BitStack::new();
        push_msb_first_reversed(&mut stack, 0xA5);
        assert_eq!(stack.num_bits(), 8);
        assert_eq!(stack.pop(), 0xA5);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_spans_two_storage_bytes() {
        let mut stack = BitStack::new();
        // 3 older bits stay behind after the pop.
        stack.push(1);
        stack.push(0);
        stack.push(1);
        push_msb_first_reversed(&mut stack, 0x3C);

        assert_eq!(stack.num_bits(), 11);
        assert_eq!(stack.pop(), 0x3C);
        assert_eq!(stack.num_bits(), 3);

        // The oldest three bits are still in place.
        stack.save_remainder();
        assert!(stack.is_empty());
        stack.restore_remainder();
        assert_eq!(stack.num_bits(), 3);
        for _ in 0..5 {
            stack.push(0);
        }
        assert_eq!(stack.pop(), 0b0000_0101);
    }

    #[test]
    fn test_multiple_bytes_lifo() {
        let mut stack = BitStack::new();
        push_msb_first_reversed(&mut stack, 0x11);
        push_msb_first_reversed(&mut stack, 0x22);
        push_msb_first_reversed(&mut stack, 0x33);

        assert_eq!(stack.pop(), 0x33);
        assert_eq!(stack.pop(), 0x22);
        assert_eq!(stack.pop(), 0x11);
    }

    #[test]
    fn test_growth_keeps_content() {
        let mut stack = BitStack::new();
        for i in 0..1000u32 {
            push_msb_first_reversed(&mut stack, i as u8);
        }
        for i in (0..1000u32).rev() {
            assert_eq!(stack.pop(), i as u8);
        }
    }

    #[test]
    fn test_save_restore_splices_remainder_under_new_bits() {
        let mut stack = BitStack::new();
        // Previous phrase left bits "101" (in output order) behind.
        stack.push(1);
        stack.push(0);
        stack.push(1);
        stack.save_remainder();

        // New phrase "11110" pushed last-first.
        for bit in [0, 1, 1, 1, 1] {
            stack.push(bit);
        }
        stack.restore_remainder();

        assert_eq!(stack.num_bits(), 8);
        assert_eq!(stack.pop(), 0b1011_1110);
    }

    #[test]
    fn test_restore_without_saved_bits_is_noop() {
        let mut stack = BitStack::new();
        stack.save_remainder();
        stack.push(1);
        stack.restore_remainder();
        assert_eq!(stack.num_bits(), 1);
    }

    #[test]
    #[should_panic(expected = "fewer than 8 bits")]
    fn test_pop_requires_full_byte() {
        let mut stack = BitStack::new();
        stack.push(1);
        stack.pop();
    }
}
