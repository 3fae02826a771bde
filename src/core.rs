//! Core types and structures for ARINC 429 words

use crate::bus;
use bitfield::bitfield;

bitfield! {
    /// Bit positions of the word fields, bit 0 being bus bit 1
    struct Layout(u32);
    u8, label, set_label: 7, 0;
    u8, sdi, set_sdi: 9, 8;
    u32, data, set_data: 28, 10;
    u8, ssm, set_ssm: 30, 29;
    parity, set_parity: 31;
}

/// An 8-bit ARINC 429 label
///
/// Labels are conventionally written in octal; this crate names them by
/// their hexadecimal byte value (0x6C is label 154).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label(u8);

impl Label {
    /// Create a label from its byte value
    pub const fn new(value: u8) -> Self {
        Label(value)
    }

    /// Get the raw label value
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Three-digit octal notation used on ICDs and label charts
    pub fn octal(&self) -> String {
        format!("{:03o}", self.0)
    }

    /// The label byte in the order it is clocked onto the bus.
    ///
    /// The label goes out most significant bit first while the rest of the
    /// word goes out least significant bit first, so receivers that shift
    /// the whole word in LSB-first see the label reversed.
    pub fn transmission_order(&self) -> u8 {
        self.0.reverse_bits()
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:02X} ({:03o})", self.0, self.0)
    }
}

/// Source/Destination Identifier (bits 9-10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sdi {
    /// 00, also used as "all call"
    #[default]
    Sdi0,
    /// 01
    Sdi1,
    /// 10
    Sdi2,
    /// 11
    Sdi3,
}

impl Sdi {
    /// Build from the two low bits of `bits`
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x3 {
            0 => Sdi::Sdi0,
            1 => Sdi::Sdi1,
            2 => Sdi::Sdi2,
            _ => Sdi::Sdi3,
        }
    }

    /// Convert SDI to its 2-bit representation
    pub fn as_bits(&self) -> u8 {
        match self {
            Sdi::Sdi0 => 0,
            Sdi::Sdi1 => 1,
            Sdi::Sdi2 => 2,
            Sdi::Sdi3 => 3,
        }
    }
}

/// Sign/Status Matrix for BNR words (bits 30-31)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ssm {
    /// 00: the source has detected a failure
    FailureWarning,
    /// 01: no valid data is available
    NoComputedData,
    /// 10: data produced by a test stimulus
    FunctionalTest,
    /// 11: valid data
    #[default]
    NormalOperation,
}

impl Ssm {
    /// Build from the two low bits of `bits`
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x3 {
            0b00 => Ssm::FailureWarning,
            0b01 => Ssm::NoComputedData,
            0b10 => Ssm::FunctionalTest,
            _ => Ssm::NormalOperation,
        }
    }

    /// Convert SSM to its 2-bit representation
    pub fn as_bits(&self) -> u8 {
        match self {
            Ssm::FailureWarning => 0b00,
            Ssm::NoComputedData => 0b01,
            Ssm::FunctionalTest => 0b10,
            Ssm::NormalOperation => 0b11,
        }
    }

    /// Whether the data can be used as-is
    pub fn is_normal(&self) -> bool {
        *self == Ssm::NormalOperation
    }
}

impl std::fmt::Display for Ssm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ssm::FailureWarning => write!(f, "Failure Warning"),
            Ssm::NoComputedData => write!(f, "No Computed Data"),
            Ssm::FunctionalTest => write!(f, "Functional Test"),
            Ssm::NormalOperation => write!(f, "Normal Operation"),
        }
    }
}

/// A 32-bit ARINC 429 word
///
/// Format (bus bit numbering, bit 1 = least significant):
/// - Bits 1-8: label
/// - Bits 9-10: SDI
/// - Bits 11-29: 19-bit data field
/// - Bits 30-31: SSM
/// - Bit 32: odd parity over bits 1-31
///
/// Any 32-bit value is a word. Parity is checked when the word is decoded,
/// not when it is constructed, since words arrive from the wire as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word(u32);

impl Word {
    /// Assemble a word from its fields and set the parity bit.
    ///
    /// `data` is truncated to the 19-bit field width.
    pub fn new(label: Label, sdi: Sdi, data: u32, ssm: Ssm) -> Self {
        let mut layout = Layout(0);
        layout.set_label(label.value());
        layout.set_sdi(sdi.as_bits());
        layout.set_data(data & bus::DATA_MASK);
        layout.set_ssm(ssm.as_bits());
        layout.set_parity(Self::calculate_parity(layout.0));

        let word = Word(layout.0);
        log::trace!("assembled {}", word);
        word
    }

    /// Wrap a raw 32-bit value received from a transport
    pub fn from_raw(raw: u32) -> Self {
        Word(raw)
    }

    /// Get the raw 32-bit value
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Extract the label (bits 1-8)
    pub fn label(&self) -> Label {
        Label(Layout(self.0).label())
    }

    /// Extract the SDI (bits 9-10)
    pub fn sdi(&self) -> Sdi {
        Sdi::from_bits(Layout(self.0).sdi())
    }

    /// Extract the 19-bit data field (bits 11-29), unsigned
    pub fn data_field(&self) -> u32 {
        Layout(self.0).data()
    }

    /// Extract the SSM (bits 30-31)
    pub fn ssm(&self) -> Ssm {
        Ssm::from_bits(Layout(self.0).ssm())
    }

    /// Extract the parity bit (bit 32)
    pub fn parity_bit(&self) -> bool {
        Layout(self.0).parity()
    }

    /// Check odd parity across all 32 bits.
    ///
    /// Any odd number of flipped bits is detected. An even number of flips
    /// leaves the total weight odd and cannot be detected by a single
    /// parity bit.
    pub fn has_valid_parity(&self) -> bool {
        self.0.count_ones() % 2 == 1
    }

    /// Parity bit value that makes the word's total weight odd.
    ///
    /// Only bits 1-31 of `bits` are considered.
    pub fn calculate_parity(bits: u32) -> bool {
        (bits & !bus::PARITY_MASK).count_ones() % 2 == 0
    }

    /// Raw view of every field, without interpretation
    pub fn fields(&self) -> WordFields {
        WordFields {
            label: self.label(),
            sdi: self.sdi(),
            data: self.data_field(),
            ssm: self.ssm(),
            parity: self.parity_bit(),
        }
    }

    /// Binary dump of the word, bit 32 first
    pub fn to_bit_string(&self) -> String {
        format!("{:032b}", self.0)
    }
}

impl From<Word> for u32 {
    fn from(word: Word) -> u32 {
        word.0
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word(label={}, raw=0x{:08X})", self.label(), self.0)
    }
}

/// The fields of a word as they appear on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordFields {
    /// Label (bits 1-8)
    pub label: Label,
    /// Source/Destination Identifier
    pub sdi: Sdi,
    /// Unsigned 19-bit data field
    pub data: u32,
    /// Sign/Status Matrix
    pub ssm: Ssm,
    /// Parity bit as received
    pub parity: bool,
}
