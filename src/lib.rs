//! # ARINC 429 Word Codec
//!
//! A Rust library for encoding flight parameters into ARINC 429 bus words and
//! decoding received words back into engineering units.
//!
//! ARINC 429 is a single-direction avionics data bus carrying 32-bit words,
//! one label per parameter. This library provides:
//!
//! - Word assembly and field extraction with odd parity
//! - BNR (binary fixed-point) quantization for six navigation channels
//! - Structured errors for unknown labels, out-of-range values and corruption
//! - Whole flight-snapshot encoding and decoding
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```
//! use arinc429_codec::{Codec, Decoded, Label, Ssm};
//!
//! let codec = Codec::new();
//! let word = codec.encode(Label::new(0x6C), 35000.0, Ssm::NormalOperation)?;
//!
//! match codec.decode(word)? {
//!     Decoded::Reading(reading) => {
//!         assert!((reading.physical_value - 35000.0).abs() <= reading.resolution);
//!     }
//!     Decoded::Raw(fields) => println!("unknown label {}", fields.label),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The codec is stateless: `encode` and `decode` only read the immutable
//! channel table, so one `Codec` can be shared across threads freely.

pub mod channel;
pub mod codec;
pub mod core;
pub mod error;
pub mod flight;

pub use channel::{BnrFormat, ChannelDescriptor, ChannelTable, Parameter, Unit};
pub use codec::{Codec, CodecBuilder, Decoded, DecodedReading};
pub use crate::core::{Label, Sdi, Ssm, Word, WordFields};
pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
pub use flight::FlightData;

/// ARINC 429 word format constants
pub mod bus {
    /// Word length in bits
    pub const WORD_LENGTH: usize = 32;

    /// Width of the BNR data field in bits
    pub const DATA_BITS: u32 = 19;

    /// Mask for a right-aligned data field
    pub const DATA_MASK: u32 = (1 << DATA_BITS) - 1;

    /// Largest two's-complement data field value
    pub const SIGNED_MAX: i64 = (1 << (DATA_BITS - 1)) - 1;

    /// Smallest two's-complement data field value
    pub const SIGNED_MIN: i64 = -(1 << (DATA_BITS - 1));

    /// Largest offset-binary data field value
    pub const UNSIGNED_MAX: i64 = (1 << DATA_BITS) - 1;

    /// Parity bit (bus bit 32)
    pub const PARITY_MASK: u32 = 1 << 31;
}
