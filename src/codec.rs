//! Encoding physical values into words and decoding them back

use crate::channel::{ChannelTable, Parameter, Unit};
use crate::core::{Label, Sdi, Ssm, Word, WordFields};
use crate::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};

/// A word decoded into engineering units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodedReading {
    /// Label the word was received on
    pub label: Label,
    /// Quantity carried
    pub parameter: Parameter,
    /// Source/Destination Identifier as received
    pub sdi: Sdi,
    /// Rescaled value
    pub physical_value: f64,
    /// Unit of `physical_value`
    pub unit: Unit,
    /// Status as received. Non-normal readings are still returned.
    pub ssm: Ssm,
    /// Quantization step of the channel, the bound on round-trip error
    pub resolution: f64,
}

/// Outcome of a successful decode
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decoded {
    /// Known label, interpreted in engineering units
    Reading(DecodedReading),
    /// Structurally valid word on a label with no channel descriptor
    Raw(WordFields),
}

impl Decoded {
    /// Get the label of the decoded word
    pub fn label(&self) -> Label {
        match self {
            Decoded::Reading(reading) => reading.label,
            Decoded::Raw(fields) => fields.label,
        }
    }

    /// Get the status of the decoded word
    pub fn ssm(&self) -> Ssm {
        match self {
            Decoded::Reading(reading) => reading.ssm,
            Decoded::Raw(fields) => fields.ssm,
        }
    }

    /// Get the reading, if the label was known
    pub fn reading(&self) -> Option<&DecodedReading> {
        match self {
            Decoded::Reading(reading) => Some(reading),
            Decoded::Raw(_) => None,
        }
    }

    /// Check if the word was decoded without interpretation
    pub fn is_raw(&self) -> bool {
        matches!(self, Decoded::Raw(_))
    }
}

/// ARINC 429 word codec
///
/// Holds only immutable configuration, so every call is independent and a
/// single codec may be shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Codec {
    table: ChannelTable,
    sdi: Sdi,
}

impl Codec {
    /// Create a codec with the standard channels and SDI 0
    pub fn new() -> Self {
        CodecBuilder::new().build()
    }

    /// Start configuring a codec
    pub fn builder() -> CodecBuilder {
        CodecBuilder::new()
    }

    /// Get the channel table
    pub fn table(&self) -> &ChannelTable {
        &self.table
    }

    /// Get the SDI written into encoded words
    pub fn sdi(&self) -> Sdi {
        self.sdi
    }

    /// Encode a physical value on `label`.
    ///
    /// Fails with `UnknownLabel` if the label has no channel, `OutOfRange`
    /// if the value is outside the channel range (it is never clamped) and
    /// `QuantizationOverflow` if the channel constants cannot represent it.
    pub fn encode(&self, label: Label, value: f64, ssm: Ssm) -> EncodeResult<Word> {
        let channel = self
            .table
            .get(label)
            .ok_or(EncodeError::UnknownLabel(label))?;
        let data = channel.quantize(value)?;
        Ok(Word::new(label, self.sdi, data, ssm))
    }

    /// Encode with Normal Operation status
    pub fn encode_normal(&self, label: Label, value: f64) -> EncodeResult<Word> {
        self.encode(label, value, Ssm::NormalOperation)
    }

    /// Encode a value for `parameter` on its assigned label
    pub fn encode_parameter(
        &self,
        parameter: Parameter,
        value: f64,
        ssm: Ssm,
    ) -> EncodeResult<Word> {
        self.encode(parameter.label(), value, ssm)
    }

    /// Decode a received word.
    ///
    /// Parity is checked first and unconditionally. Words on unknown labels
    /// decode as [`Decoded::Raw`]. A non-normal SSM never causes a failure;
    /// the status is reported on the reading for the caller to act on.
    pub fn decode(&self, word: Word) -> DecodeResult<Decoded> {
        if !word.has_valid_parity() {
            log::debug!("rejecting {}: parity check failed", word);
            return Err(DecodeError::ParityError(word));
        }

        let label = word.label();
        let Some(channel) = self.table.get(label) else {
            log::debug!("no channel for label {}, returning raw fields", label);
            return Ok(Decoded::Raw(word.fields()));
        };

        Ok(Decoded::Reading(DecodedReading {
            label,
            parameter: channel.parameter,
            sdi: word.sdi(),
            physical_value: channel.rescale(word.data_field()),
            unit: channel.unit,
            ssm: word.ssm(),
            resolution: channel.resolution,
        }))
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring a [`Codec`]
pub struct CodecBuilder {
    table: ChannelTable,
    sdi: Sdi,
}

impl CodecBuilder {
    /// Create a new codec builder
    pub fn new() -> Self {
        CodecBuilder {
            table: ChannelTable::standard(),
            sdi: Sdi::default(),
        }
    }

    /// Set the SDI written into encoded words
    pub fn with_sdi(mut self, sdi: Sdi) -> Self {
        self.sdi = sdi;
        self
    }

    /// Replace the channel table
    pub fn with_table(mut self, table: ChannelTable) -> Self {
        self.table = table;
        self
    }

    /// Build the codec
    pub fn build(self) -> Codec {
        Codec {
            table: self.table,
            sdi: self.sdi,
        }
    }
}

impl Default for CodecBuilder {
    fn default() -> Self {
        Self::new()
    }
}
