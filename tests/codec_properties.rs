//! Property-based tests for the word codec.
//!
//! Uses proptest to check the round-trip error bound and the parity
//! guarantees over arbitrary values, labels and bit positions.

use arinc429_codec::{
    ChannelDescriptor, Codec, DecodeError, Decoded, EncodeError, Label, Parameter, Sdi, Ssm, Word,
};
use proptest::prelude::*;

fn parameter() -> impl Strategy<Value = Parameter> {
    prop::sample::select(Parameter::ALL.to_vec())
}

fn ssm() -> impl Strategy<Value = Ssm> {
    prop::sample::select(vec![
        Ssm::FailureWarning,
        Ssm::NoComputedData,
        Ssm::FunctionalTest,
        Ssm::NormalOperation,
    ])
}

/// A parameter with a value inside its range
fn in_range() -> impl Strategy<Value = (ChannelDescriptor, f64)> {
    parameter().prop_flat_map(|p| {
        let channel = ChannelDescriptor::standard(p);
        (Just(channel), channel.min..=channel.max)
    })
}

// =============================================================================
// Round-trip Properties
// =============================================================================

proptest! {
    /// decode(encode(v)) recovers v within one resolution step
    #[test]
    fn prop_round_trip_within_resolution((channel, value) in in_range(), ssm in ssm()) {
        let codec = Codec::new();
        let word = codec.encode(channel.label, value, ssm).unwrap();

        match codec.decode(word).unwrap() {
            Decoded::Reading(reading) => {
                prop_assert_eq!(reading.label, channel.label);
                prop_assert_eq!(reading.ssm, ssm);
                prop_assert_eq!(reading.unit, channel.unit);
                prop_assert!((reading.physical_value - value).abs() <= channel.resolution);
            }
            Decoded::Raw(fields) => prop_assert!(false, "unexpected raw decode {:?}", fields),
        }
    }

    /// Every encoded word carries odd parity and its own label
    #[test]
    fn prop_encoded_word_is_well_formed((channel, value) in in_range(), ssm in ssm()) {
        let word = Codec::new().encode(channel.label, value, ssm).unwrap();
        prop_assert!(word.has_valid_parity());
        prop_assert_eq!(word.raw().count_ones() % 2, 1);
        prop_assert_eq!(word.label(), channel.label);
        prop_assert_eq!(word.sdi(), Sdi::Sdi0);
        prop_assert_eq!(word.ssm(), ssm);
    }

    /// Values above the range are rejected rather than clamped
    #[test]
    fn prop_above_range_rejected(p in parameter(), excess in 1e-6f64..1e6) {
        let channel = ChannelDescriptor::standard(p);
        let result = Codec::new().encode_normal(channel.label, channel.max + excess);
        let is_out_of_range = matches!(result, Err(EncodeError::OutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }
}

// =============================================================================
// Parity Properties
// =============================================================================

proptest! {
    /// Flipping any single bit of a valid word is always detected
    #[test]
    fn prop_single_flip_detected((channel, value) in in_range(), bit in 0u32..32) {
        let codec = Codec::new();
        let word = codec.encode_normal(channel.label, value).unwrap();
        let corrupted = Word::from_raw(word.raw() ^ (1 << bit));
        prop_assert_eq!(codec.decode(corrupted), Err(DecodeError::ParityError(corrupted)));
    }

    /// Any odd number of flips is detected; any even number is not
    #[test]
    fn prop_flip_count_parity(raw in any::<u32>(), mask in any::<u32>()) {
        let word = Word::new(
            Label::new((raw & 0xFF) as u8),
            Sdi::from_bits((raw >> 8) as u8),
            raw >> 10,
            Ssm::from_bits((raw >> 29) as u8),
        );
        let corrupted = Word::from_raw(word.raw() ^ mask);
        prop_assert_eq!(corrupted.has_valid_parity(), mask.count_ones() % 2 == 0);
    }

    /// Unknown labels with good parity decode as raw words, never errors
    #[test]
    fn prop_unknown_label_is_raw(label in 0x70u8..=0xFF, data in 0u32..(1 << 19), ssm in ssm()) {
        let codec = Codec::new();
        let word = Word::new(Label::new(label), Sdi::Sdi0, data, ssm);
        let decoded = codec.decode(word).unwrap();
        prop_assert_eq!(decoded, Decoded::Raw(word.fields()));
        prop_assert_eq!(word.fields().data, data);
    }

    /// Decoding has no hidden state: the same word always yields the same result
    #[test]
    fn prop_decode_is_idempotent(raw in any::<u32>()) {
        let codec = Codec::new();
        let word = Word::from_raw(raw);
        prop_assert_eq!(codec.decode(word), codec.decode(word));
    }
}
