//! Channel descriptors: what each label carries and how it is scaled

use crate::bus;
use crate::core::Label;
use crate::error::{EncodeError, EncodeResult};
use std::collections::HashMap;

/// Data field resolutions, in engineering units per least significant bit.
///
/// Each is derived from the channel range and the field width so that both
/// range ends land exactly on a representable field value.
pub mod resolution {
    /// Two's-complement magnitude steps (2^18 - 1)
    const SIGNED_STEPS: f64 = 262_143.0;
    /// Offset-binary steps (2^19 - 1)
    const UNSIGNED_STEPS: f64 = 524_287.0;

    /// Latitude, degrees per bit (about 0.00034)
    pub const LATITUDE: f64 = 90.0 / SIGNED_STEPS;
    /// Longitude, degrees per bit (about 0.00069)
    pub const LONGITUDE: f64 = 180.0 / SIGNED_STEPS;
    /// Altitude, feet per bit (about 0.095)
    pub const ALTITUDE: f64 = 50_000.0 / UNSIGNED_STEPS;
    /// Airspeed, knots per bit (about 0.0019)
    pub const AIRSPEED: f64 = 1_000.0 / UNSIGNED_STEPS;
    /// Heading, degrees per bit (about 0.00069)
    pub const HEADING: f64 = 360.0 / UNSIGNED_STEPS;
    /// Vertical speed, feet per minute per bit (about 0.038)
    pub const VERTICAL_SPEED: f64 = 10_000.0 / SIGNED_STEPS;
}

/// Physical quantity carried by a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parameter {
    /// Present position latitude (label 0x6A)
    Latitude,
    /// Present position longitude (label 0x6B)
    Longitude,
    /// Altitude (label 0x6C)
    Altitude,
    /// Airspeed (label 0x6D)
    Airspeed,
    /// Heading (label 0x6E)
    Heading,
    /// Vertical speed (label 0x6F)
    VerticalSpeed,
}

impl Parameter {
    /// Every parameter, in label order
    pub const ALL: [Parameter; 6] = [
        Parameter::Latitude,
        Parameter::Longitude,
        Parameter::Altitude,
        Parameter::Airspeed,
        Parameter::Heading,
        Parameter::VerticalSpeed,
    ];

    /// Label assigned to this parameter
    pub fn label(&self) -> Label {
        match self {
            Parameter::Latitude => Label::new(0x6A),
            Parameter::Longitude => Label::new(0x6B),
            Parameter::Altitude => Label::new(0x6C),
            Parameter::Airspeed => Label::new(0x6D),
            Parameter::Heading => Label::new(0x6E),
            Parameter::VerticalSpeed => Label::new(0x6F),
        }
    }

    /// Snake-case name, as used by JSON transports
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Latitude => "latitude",
            Parameter::Longitude => "longitude",
            Parameter::Altitude => "altitude",
            Parameter::Airspeed => "airspeed",
            Parameter::Heading => "heading",
            Parameter::VerticalSpeed => "vertical_speed",
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Engineering unit of a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    Degrees,
    Feet,
    Knots,
    FeetPerMinute,
}

impl Unit {
    /// Short unit symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Degrees => "deg",
            Unit::Feet => "ft",
            Unit::Knots => "kt",
            Unit::FeetPerMinute => "ft/min",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How the 19-bit data field represents a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BnrFormat {
    /// Signed field, bit 29 is the sign. Zero maps to field value 0.
    TwosComplement,
    /// Unsigned field counting up from the channel minimum
    OffsetBinary,
}

impl BnrFormat {
    /// Whether the field can carry negative values directly
    pub fn is_signed(&self) -> bool {
        matches!(self, BnrFormat::TwosComplement)
    }

    /// Inclusive bounds of the quantized field value
    pub fn field_bounds(&self) -> (i64, i64) {
        match self {
            BnrFormat::TwosComplement => (bus::SIGNED_MIN, bus::SIGNED_MAX),
            BnrFormat::OffsetBinary => (0, bus::UNSIGNED_MAX),
        }
    }
}

/// Static description of one channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelDescriptor {
    /// Quantity carried
    pub parameter: Parameter,
    /// Label the channel is transmitted on
    pub label: Label,
    /// Engineering unit
    pub unit: Unit,
    /// Smallest accepted value (inclusive)
    pub min: f64,
    /// Largest accepted value (inclusive)
    pub max: f64,
    /// Engineering units per least significant bit
    pub resolution: f64,
    /// Data field representation
    pub format: BnrFormat,
}

impl ChannelDescriptor {
    /// Create a descriptor for `parameter` on its assigned label
    pub fn new(
        parameter: Parameter,
        unit: Unit,
        min: f64,
        max: f64,
        resolution: f64,
        format: BnrFormat,
    ) -> Self {
        ChannelDescriptor {
            parameter,
            label: parameter.label(),
            unit,
            min,
            max,
            resolution,
            format,
        }
    }

    /// The standard descriptor for a parameter
    pub fn standard(parameter: Parameter) -> Self {
        use BnrFormat::{OffsetBinary, TwosComplement};

        match parameter {
            Parameter::Latitude => Self::new(
                parameter,
                Unit::Degrees,
                -90.0,
                90.0,
                resolution::LATITUDE,
                TwosComplement,
            ),
            Parameter::Longitude => Self::new(
                parameter,
                Unit::Degrees,
                -180.0,
                180.0,
                resolution::LONGITUDE,
                TwosComplement,
            ),
            Parameter::Altitude => Self::new(
                parameter,
                Unit::Feet,
                0.0,
                50_000.0,
                resolution::ALTITUDE,
                OffsetBinary,
            ),
            Parameter::Airspeed => Self::new(
                parameter,
                Unit::Knots,
                0.0,
                1_000.0,
                resolution::AIRSPEED,
                OffsetBinary,
            ),
            Parameter::Heading => Self::new(
                parameter,
                Unit::Degrees,
                0.0,
                360.0,
                resolution::HEADING,
                OffsetBinary,
            ),
            Parameter::VerticalSpeed => Self::new(
                parameter,
                Unit::FeetPerMinute,
                -10_000.0,
                10_000.0,
                resolution::VERTICAL_SPEED,
                TwosComplement,
            ),
        }
    }

    /// Value represented by field value zero
    pub fn origin(&self) -> f64 {
        match self.format {
            BnrFormat::TwosComplement => 0.0,
            BnrFormat::OffsetBinary => self.min,
        }
    }

    /// Whether the channel accepts negative values
    pub fn is_signed(&self) -> bool {
        self.format.is_signed()
    }

    /// Check that `value` is finite and inside `[min, max]`
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Quantize a physical value into a right-aligned 19-bit field.
    ///
    /// Values outside the range are rejected, never clamped.
    pub fn quantize(&self, value: f64) -> EncodeResult<u32> {
        if !self.contains(value) {
            return Err(EncodeError::out_of_range(self, value));
        }

        let raw = ((value - self.origin()) / self.resolution).round() as i64;
        let (lo, hi) = self.format.field_bounds();
        if raw < lo || raw > hi {
            log::warn!(
                "label {} ({}): value {} quantized to {} outside field bounds [{}, {}]",
                self.label,
                self.parameter,
                value,
                raw,
                lo,
                hi
            );
            return Err(EncodeError::quantization_overflow(self, value, raw));
        }

        // Two's complement falls out of the truncating cast
        Ok((raw as u32) & bus::DATA_MASK)
    }

    /// Convert a right-aligned 19-bit field back to a physical value
    pub fn rescale(&self, field: u32) -> f64 {
        let field = field & bus::DATA_MASK;
        let raw = match self.format {
            BnrFormat::TwosComplement => {
                let shift = 32 - bus::DATA_BITS;
                (((field << shift) as i32) >> shift) as i64
            }
            BnrFormat::OffsetBinary => field as i64,
        };
        self.origin() + raw as f64 * self.resolution
    }
}

/// Immutable label to descriptor mapping
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTable {
    channels: HashMap<Label, ChannelDescriptor>,
}

impl ChannelTable {
    /// The six standard channels
    pub fn standard() -> Self {
        Self::from_channels(Parameter::ALL.into_iter().map(ChannelDescriptor::standard))
    }

    /// Build a table from descriptors; a later descriptor for the same
    /// label replaces an earlier one
    pub fn from_channels(channels: impl IntoIterator<Item = ChannelDescriptor>) -> Self {
        ChannelTable {
            channels: channels.into_iter().map(|c| (c.label, c)).collect(),
        }
    }

    /// Look up the descriptor for a label
    pub fn get(&self, label: Label) -> Option<&ChannelDescriptor> {
        self.channels.get(&label)
    }

    /// Look up the descriptor for a parameter
    pub fn by_parameter(&self, parameter: Parameter) -> Option<&ChannelDescriptor> {
        self.get(parameter.label())
    }

    /// Check if a label is known
    pub fn contains(&self, label: Label) -> bool {
        self.channels.contains_key(&label)
    }

    /// All descriptors, in label order
    pub fn channels(&self) -> Vec<&ChannelDescriptor> {
        let mut channels: Vec<_> = self.channels.values().collect();
        channels.sort_by_key(|c| c.label);
        channels
    }

    /// Number of channels
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Check if the table has no channels
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl Default for ChannelTable {
    fn default() -> Self {
        Self::standard()
    }
}
