//! Bit-level LZ78 decoder (decompression).
//!
//! The decoder is a per-bit state machine. It never sees the encoder's
//! dictionary sizes directly; instead it counts phrases and steps the same
//! [`WidthSchedule`] the encoder uses, so both sides agree on every pointer
//! width.
//!
//! Framing is resolved by holding back the two most recent input bytes. Only
//! once input ends is it known that the older one is the final (possibly
//! padded) data byte and the newer one is the trailer.

use bitlz_core::bitqueue::BitQueue;
use bitlz_core::bitstack::BitStack;
use bitlz_core::error::{BitLzError, Result};
use bitlz_core::traits::Decompressor;
use log::{debug, trace};

use crate::FULL_BYTE_TRAILER;
use crate::dictionary::{BackwardDictionary, PhraseId};
use crate::schedule::WidthSchedule;

/// The two most recent input bytes, not yet known to be payload.
#[derive(Debug, Clone, Default)]
struct Lookahead {
    bytes: [u8; 2],
    len: usize,
}

impl Lookahead {
    /// Hold `byte`, returning the oldest held byte once it is known not to be
    /// part of the trailer.
    #[inline]
    fn push(&mut self, byte: u8) -> Option<u8> {
        if self.len < 2 {
            self.bytes[self.len] = byte;
            self.len += 1;
            return None;
        }

        let released = self.bytes[0];
        self.bytes = [self.bytes[1], byte];
        Some(released)
    }

    /// The final data byte and the trailer, if at least two bytes were seen.
    fn tail(&self) -> Option<(u8, u8)> {
        (self.len == 2).then_some((self.bytes[0], self.bytes[1]))
    }
}

/// Phrase currently being read from the code stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhraseState {
    /// Waiting for the first bit of the next phrase.
    Idle,
    /// Inside a phrase; `remaining` bits are still expected.
    Reading { remaining: u32 },
}

/// Bit-level LZ78 decoder session.
#[derive(Debug, Clone)]
pub struct Lz78Decoder {
    /// Phrase table rebuilt from the code stream.
    dict: BackwardDictionary,
    /// Code bits of the phrase being read.
    queue: BitQueue,
    /// Output bits not yet forming a byte.
    stack: BitStack,
    /// Code width schedule, stepped once per phrase.
    schedule: WidthSchedule,
    /// 1-based index of the current phrase.
    phrase_index: usize,
    /// Pointer width of the current phrase.
    code_width: u32,
    state: PhraseState,
    lookahead: Lookahead,
    finished: bool,
}

impl Default for Lz78Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Lz78Decoder {
    /// Create a decoder for a new stream.
    pub fn new() -> Self {
        Self {
            dict: BackwardDictionary::new(),
            queue: BitQueue::new(),
            stack: BitStack::new(),
            schedule: WidthSchedule::new(),
            phrase_index: 0,
            code_width: 0,
            state: PhraseState::Idle,
            lookahead: Lookahead::default(),
            finished: false,
        }
    }

    /// Feed one byte of compressed input.
    ///
    /// The byte is held back until two more bytes arrive, since the last
    /// two bytes of a stream are framing.
    #[inline]
    pub fn decode_byte(&mut self, byte: u8, output: &mut Vec<u8>) -> Result<()> {
        debug_assert!(!self.finished, "decode_byte after finish");

        if let Some(data) = self.lookahead.push(byte) {
            for shift in (0..8).rev() {
                self.decode_bit((data >> shift) & 1, false, output)?;
            }
        }
        Ok(())
    }

    /// Process one code bit. `last` marks the definitive final bit of the
    /// stream, which closes the current phrase even if it is short.
    fn decode_bit(&mut self, bit: u8, last: bool, output: &mut Vec<u8>) -> Result<()> {
        let remaining = match self.state {
            PhraseState::Idle => {
                self.phrase_index += 1;
                self.code_width = self.schedule.advance(self.phrase_index);
                self.code_width + 1
            }
            PhraseState::Reading { remaining } => remaining,
        };

        self.queue.enqueue(u64::from(bit), 1);
        let remaining = remaining - 1;

        if remaining != 0 && !last {
            self.state = PhraseState::Reading { remaining };
            return Ok(());
        }
        self.state = PhraseState::Idle;

        let pointer = self.queue.dequeue(self.code_width);
        let entries = self.dict.count();
        let prefix: PhraseId = usize::try_from(pointer)
            .ok()
            .filter(|&p| self.dict.contains(p))
            .ok_or_else(|| BitLzError::invalid_pointer(pointer, entries))?;

        // A phrase cut short by end of stream carries no literal bit.
        let leaf = if remaining == 0 {
            let literal = self.queue.dequeue(1) as u8;
            trace!(
                "phrase {}: pointer {prefix} ({} bits) + {literal}",
                self.phrase_index, self.code_width
            );
            self.dict.append(prefix, literal)
        } else {
            trace!("truncated phrase: pointer {prefix}");
            prefix
        };

        self.stack.save_remainder();
        for bit in self.dict.ancestry(leaf) {
            self.stack.push(bit);
        }
        self.stack.restore_remainder();

        while self.stack.num_bits() >= 8 {
            output.push(self.stack.pop());
        }
        Ok(())
    }

    /// Interpret the trailer and decode the final data byte.
    ///
    /// Streams shorter than two bytes decode to nothing.
    pub fn finish_stream(&mut self, output: &mut Vec<u8>) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        let Some((data, trailer)) = self.lookahead.tail() else {
            return Ok(());
        };
        if trailer == 0 || trailer > FULL_BYTE_TRAILER {
            return Err(BitLzError::invalid_trailer(trailer));
        }

        for i in 0..trailer {
            let bit = (data >> (7 - i)) & 1;
            self.decode_bit(bit, i + 1 == trailer, output)?;
        }

        if !self.stack.is_empty() || !self.queue.is_empty() {
            debug!(
                "decoder finished with {} stray output bits and {} code bits",
                self.stack.num_bits(),
                self.queue.num_bits()
            );
        }
        debug!(
            "decoder finished: {} phrases, {} entries, code width {}",
            self.phrase_index,
            self.dict.count(),
            self.code_width
        );
        Ok(())
    }

    /// Decode a complete compressed stream in one call.
    pub fn decode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len().saturating_mul(2));
        for &byte in input {
            self.decode_byte(byte, &mut output)?;
        }
        self.finish_stream(&mut output)?;
        Ok(output)
    }

    /// Number of phrases started so far, including a truncated final one.
    pub fn phrases(&self) -> usize {
        self.phrase_index
    }

    /// Pointer width of the most recent phrase.
    pub fn code_width(&self) -> u32 {
        self.code_width
    }
}

impl Decompressor for Lz78Decoder {
    fn decompress(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<()> {
        for &byte in input {
            self.decode_byte(byte, output)?;
        }
        Ok(())
    }

    fn finish(&mut self, output: &mut Vec<u8>) -> Result<()> {
        self.finish_stream(output)
    }

    fn reset(&mut self) {
        self.dict.reset();
        self.queue.clear();
        self.stack.clear();
        self.schedule = WidthSchedule::new();
        self.phrase_index = 0;
        self.code_width = 0;
        self.state = PhraseState::Idle;
        self.lookahead = Lookahead::default();
        self.finished = false;
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
