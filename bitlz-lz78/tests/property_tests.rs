use bitlz_lz78::{
    BitMatch, Compressor, ForwardDictionary, Lz78Decoder, Lz78Encoder, ROOT, WidthSchedule,
    compress, decompress, width_for_count,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_roundtrip(input in prop::collection::vec(any::<u8>(), 0..2048)) {
        let compressed = compress(&input);
        let decompressed = decompress(&compressed).unwrap();
        prop_assert_eq!(decompressed, input);
    }

    #[test]
    fn test_roundtrip_low_entropy(
        input in prop::collection::vec(prop::sample::select(vec![0x00u8, 0x01, 0x80, 0xFF]), 0..4096),
    ) {
        let compressed = compress(&input);
        let decompressed = decompress(&compressed).unwrap();
        prop_assert_eq!(decompressed, input);
    }

    #[test]
    fn test_deterministic(input in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(compress(&input), compress(&input));
    }

    #[test]
    fn test_trailer_framing(input in prop::collection::vec(any::<u8>(), 1..512)) {
        let compressed = compress(&input);
        let trailer = compressed[compressed.len() - 1];
        prop_assert!((1..=8).contains(&trailer));
        if trailer < 8 {
            prop_assert!(compressed.len() >= 2);
            let padded = compressed[compressed.len() - 2];
            prop_assert_eq!(padded & ((1u8 << (8 - trailer)) - 1), 0);
        }
    }

    #[test]
    fn test_chunking_is_transparent(
        input in prop::collection::vec(any::<u8>(), 0..1024),
        chunk in 1usize..64,
    ) {
        let mut encoder = Lz78Encoder::new();
        let mut compressed = Vec::new();
        for piece in input.chunks(chunk) {
            encoder.compress(piece, &mut compressed).unwrap();
        }
        encoder.finish(&mut compressed).unwrap();
        prop_assert_eq!(&compressed, &compress(&input));

        let mut decoder = Lz78Decoder::new();
        let mut output = Vec::new();
        for piece in compressed.chunks(chunk) {
            bitlz_lz78::Decompressor::decompress(&mut decoder, piece, &mut output).unwrap();
        }
        bitlz_lz78::Decompressor::finish(&mut decoder, &mut output).unwrap();
        prop_assert_eq!(output, input);
    }

    #[test]
    fn test_encoder_width_tracks_closed_form(bits in prop::collection::vec(0u8..=1, 0..4096)) {
        let mut dict = ForwardDictionary::new();
        let mut current = ROOT;
        let mut last_width = 0;
        for bit in bits {
            match dict.match_bit(current, bit) {
                BitMatch::Extended(id) => current = id,
                BitMatch::Unseen { .. } => {
                    let width = dict.pointer_width();
                    prop_assert_eq!(width, width_for_count(dict.count()));
                    prop_assert!(width >= last_width);
                    prop_assert!(current < (1usize << width).max(1));
                    last_width = width;
                    current = ROOT;
                }
            }
        }
    }

    #[test]
    fn test_garbage_never_panics(input in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = decompress(&input);
    }
}

#[test]
fn test_width_schedule_matches_closed_form() {
    let mut schedule = WidthSchedule::new();
    let mut last_width = 0;

    for phrase in 1..=(1usize << 20) {
        let width = schedule.advance(phrase);
        assert_eq!(width, width_for_count(phrase + 1), "phrase {phrase}");
        assert!(width >= last_width);
        last_width = width;
    }
    assert_eq!(last_width, 20);
}
