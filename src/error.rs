//! Error types for ARINC 429 encoding and decoding

use crate::channel::{ChannelDescriptor, Parameter};
use crate::core::{Label, Word};
use thiserror::Error;

/// Result type for encode operations
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;

/// Result type for decode operations
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Errors raised while turning a physical value into a word
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// The label is not one of the known channels
    #[error("Unknown label: {0}")]
    UnknownLabel(Label),

    /// The value lies outside the channel's declared range (or is not finite)
    #[error("Value {value} out of range [{min}, {max}] for label {label}")]
    OutOfRange {
        label: Label,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The quantized value does not fit the 19-bit data field.
    ///
    /// Only reachable with inconsistent channel constants.
    #[error("Quantization overflow: value {value} for label {label} quantized to {raw}")]
    QuantizationOverflow { label: Label, value: f64, raw: i64 },
}

impl EncodeError {
    /// Create a new OutOfRange error for a channel
    pub fn out_of_range(channel: &ChannelDescriptor, value: f64) -> Self {
        EncodeError::OutOfRange {
            label: channel.label,
            value,
            min: channel.min,
            max: channel.max,
        }
    }

    /// Create a new QuantizationOverflow error for a channel
    pub fn quantization_overflow(channel: &ChannelDescriptor, value: f64, raw: i64) -> Self {
        EncodeError::QuantizationOverflow {
            label: channel.label,
            value,
            raw,
        }
    }
}

/// Errors raised while interpreting a received word
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The word failed the odd parity check
    #[error("Parity error: {0} has an even number of set bits")]
    ParityError(Word),

    /// A flight snapshot was decoded without a word for this parameter
    #[error("Missing parameter: no word carrying {0}")]
    MissingParameter(Parameter),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelTable;

    #[test]
    fn test_error_display() {
        let err = EncodeError::UnknownLabel(Label::new(0x70));
        assert!(err.to_string().contains("Unknown label"));

        let err = DecodeError::ParityError(Word::from_raw(0));
        assert!(err.to_string().contains("Parity error"));
    }

    #[test]
    fn test_out_of_range_carries_bounds() {
        let table = ChannelTable::standard();
        let channel = table.get(Label::new(0x6C)).unwrap();
        let err = EncodeError::out_of_range(channel, 60000.0);
        assert_eq!(
            err,
            EncodeError::OutOfRange {
                label: Label::new(0x6C),
                value: 60000.0,
                min: 0.0,
                max: 50000.0,
            }
        );
    }
}
