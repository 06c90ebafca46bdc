//! Code-width growth schedule shared by the encoder and the decoder.
//!
//! The encoder derives the width of each pointer from the size of its
//! dictionary; the decoder has no dictionary of the same shape and instead
//! counts phrases. Both sides drive the same [`WidthSchedule`] recurrence,
//! the encoder with the entry count before each append and the decoder with
//! the 1-based phrase index. Those two inputs are equal at every phrase, which
//! keeps the widths in lockstep.
//!
//! The closed form of the recurrence is [`width_for_count`].

/// Pointer width, in bits, for a dictionary holding `count` entries
/// (root included) right after a phrase has been appended.
///
/// The newest entry has id `count - 1` and the phrase that created it points
/// at some id in `0..=count - 2`, so the width is the bit length of
/// `count - 2`.
///
/// | count | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 |
/// |-------|---|---|---|---|---|---|---|---|---|----|
/// | width | 0 | 0 | 1 | 2 | 2 | 3 | 3 | 3 | 3 | 4  |
#[inline]
pub const fn width_for_count(count: usize) -> u32 {
    if count <= 2 {
        0
    } else {
        usize::BITS - (count - 2).leading_zeros()
    }
}

/// Incremental form of [`width_for_count`].
///
/// Keeps a threshold that starts at 1; each time a position above the
/// threshold is seen, the width grows by one bit and the threshold doubles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthSchedule {
    width: u32,
    threshold: usize,
}

impl Default for WidthSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl WidthSchedule {
    /// Create a schedule at width 0.
    pub const fn new() -> Self {
        Self {
            width: 0,
            threshold: 1,
        }
    }

    /// Step the schedule for `position` and return the resulting width.
    ///
    /// Positions must be fed in increasing order starting at 1.
    #[inline]
    pub fn advance(&mut self, position: usize) -> u32 {
        if position > self.threshold {
            self.width += 1;
            self.threshold = self.threshold.saturating_mul(2);
        }
        self.width
    }

    /// Current width in bits.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }
}
