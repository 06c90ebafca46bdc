//! Bit-level LZ78 encoder (compression).

use bitlz_core::bitqueue::BitQueue;
use bitlz_core::error::Result;
use bitlz_core::traits::Compressor;
use log::{debug, trace};

use crate::FULL_BYTE_TRAILER;
use crate::dictionary::{BitMatch, ForwardDictionary, PhraseId, ROOT};
use crate::schedule::width_for_count;

/// Bit-level LZ78 encoder.
///
/// Input bytes are walked MSB-first through a [`ForwardDictionary`]. Every
/// time the current match cannot be extended, the encoder emits a phrase:
/// the pointer to the longest known prefix followed by the one new bit.
#[derive(Debug, Clone)]
pub struct Lz78Encoder {
    /// Trie of every phrase seen so far.
    dict: ForwardDictionary,
    /// Output bits not yet forming a byte.
    queue: BitQueue,
    /// Longest match so far in the phrase being built.
    current: PhraseId,
    /// Number of phrases emitted.
    phrases: u64,
    finished: bool,
}

impl Default for Lz78Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Lz78Encoder {
    /// Create an encoder for a new stream.
    pub fn new() -> Self {
        Self {
            dict: ForwardDictionary::new(),
            queue: BitQueue::new(),
            current: ROOT,
            phrases: 0,
            finished: false,
        }
    }

    /// Encode one input byte, appending every completed output byte.
    #[inline]
    pub fn encode_byte(&mut self, byte: u8, output: &mut Vec<u8>) {
        debug_assert!(!self.finished, "encode_byte after finish");

        for shift in (0..8).rev() {
            self.encode_bit((byte >> shift) & 1, output);
        }
    }

    #[inline]
    fn encode_bit(&mut self, bit: u8, output: &mut Vec<u8>) {
        match self.dict.match_bit(self.current, bit) {
            BitMatch::Extended(id) => self.current = id,
            BitMatch::Unseen { created } => {
                let width = self.dict.pointer_width();
                trace!(
                    "phrase {created}: pointer {} ({width} bits) + {bit}",
                    self.current
                );

                self.queue.enqueue(self.current as u64, width);
                self.queue.enqueue(u64::from(bit), 1);
                self.drain(output);

                self.phrases += 1;
                self.current = ROOT;
            }
        }
    }

    /// Move every complete byte from the queue to `output`.
    #[inline]
    fn drain(&mut self, output: &mut Vec<u8>) {
        while self.queue.num_bits() >= 8 {
            output.push(self.queue.dequeue(8) as u8);
        }
    }

    /// Flush the final phrase and the trailer.
    ///
    /// - An unterminated match is written as a bare pointer, using the width
    ///   the decoder will expect for the next phrase.
    /// - If the body ends on a byte boundary, a single trailer byte `8` follows.
    /// - Otherwise the last 1-7 bits are left-justified into a padded byte,
    ///   followed by a trailer byte holding their count.
    /// - Empty input produces no output at all.
    pub fn finish_stream(&mut self, output: &mut Vec<u8>) {
        if self.finished {
            return;
        }

        if self.current != ROOT {
            let width = width_for_count(self.dict.count() + 1);
            trace!("truncated phrase: pointer {} ({width} bits)", self.current);
            self.queue.enqueue(self.current as u64, width);
        }
        self.drain(output);

        let remainder = self.queue.num_bits();
        if remainder > 0 {
            let bits = self.queue.dequeue(remainder) as u8;
            output.push(bits << (8 - remainder));
            output.push(remainder as u8);
        } else if self.dict.count() > 1 {
            output.push(FULL_BYTE_TRAILER);
        }

        debug!(
            "encoder finished: {} phrases, {} entries, pointer width {}",
            self.phrases,
            self.dict.count(),
            self.dict.pointer_width()
        );

        self.current = ROOT;
        self.finished = true;
    }

    /// Encode a complete input in one call.
    pub fn encode(&mut self, input: &[u8]) -> Vec<u8> {
        let mut output = Vec::with_capacity(input.len() / 2 + 2);
        for &byte in input {
            self.encode_byte(byte, &mut output);
        }
        self.finish_stream(&mut output);
        output
    }

    /// Number of phrases emitted so far, the truncated final one excluded.
    pub fn phrases(&self) -> u64 {
        self.phrases
    }

    /// The encoder's dictionary.
    pub fn dictionary(&self) -> &ForwardDictionary {
        &self.dict
    }
}

impl Compressor for Lz78Encoder {
    fn compress(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<()> {
        for &byte in input {
            self.encode_byte(byte, output);
        }
        Ok(())
    }

    fn finish(&mut self, output: &mut Vec<u8>) -> Result<()> {
        self.finish_stream(output);
        Ok(())
    }

    fn reset(&mut self) {
        self.dict.reset();
        self.queue.clear();
        self.current = ROOT;
        self.phrases = 0;
        self.finished = false;
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Lz78Decoder;

    #[test]
    fn test_encode_empty() {
        let mut encoder = Lz78Encoder::new();
        assert!(encoder.encode(b"").is_empty());
        assert!(encoder.is_finished());
    }

    #[test]
    fn test_encode_single_byte_exact_stream() {
        // 0x41 = 0 1 0 0 0 0 0 1 splits into the phrases
        //   "0"   -> ptr 0 (0 bits) + 0
        //   "1"   -> ptr 0 (1 bit)  + 1
        //   "00"  -> ptr 1 (2 bits) + 0
        //   "000" -> ptr 3 (2 bits) + 0
        //   "1"   -> id 2, truncated: ptr 2 (3 bits)
        // Body: 0 01 010 110 010 = 00101011 0010, 12 bits.
        let mut encoder = Lz78Encoder::new();
        let compressed = encoder.encode(&[0x41]);

        assert_eq!(encoder.phrases(), 4);
        assert_eq!(compressed, vec![0b0010_1011, 0b0010_0000, 4]);
    }

    #[test]
    fn test_encode_aligned_body_gets_sentinel_trailer() {
        // 0x00 = "0" | "00" | "000" | truncated "00"
        // Body: 0 10 100 10 = 01010010, exactly one byte.
        let compressed = Lz78Encoder::new().encode(&[0x00]);
        assert_eq!(compressed, vec![0b0101_0010, FULL_BYTE_TRAILER]);
    }

    #[test]
    fn test_encode_repeating_shrinks() {
        let original = vec![b'X'; 4096];
        let compressed = Lz78Encoder::new().encode(&original);
        assert!(compressed.len() < original.len() / 4);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT".repeat(8);
        let first = Lz78Encoder::new().encode(&original);
        let second = Lz78Encoder::new().encode(&original);
        assert_eq!(first, second);
    }

    #[test]
    fn test_encode_reset_matches_fresh_encoder() {
        let mut encoder = Lz78Encoder::new();
        let first = encoder.compress_all(b"first stream").unwrap();
        encoder.reset();
        assert!(!encoder.is_finished());
        let second = encoder.compress_all(b"first stream").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_encode_chunked_matches_one_shot() {
        let original: Vec<u8> = (0..2000u32).map(|i| (i * 7 % 13) as u8).collect();
        let expected = Lz78Encoder::new().encode(&original);

        let mut encoder = Lz78Encoder::new();
        let mut output = Vec::new();
        for chunk in original.chunks(37) {
            encoder.compress(chunk, &mut output).unwrap();
        }
        encoder.finish(&mut output).unwrap();

        assert_eq!(output, expected);
    }

    #[test]
    fn test_encode_roundtrip() {
        let original = b"ABABABABABABABABAB";
        let compressed = Lz78Encoder::new().encode(original);
        let decompressed = Lz78Decoder::new().decode(&compressed).unwrap();
        assert_eq!(decompressed, original);
    }
}
