//! Flight data snapshots: all six parameters as one unit

use crate::channel::Parameter;
use crate::codec::{Codec, Decoded};
use crate::core::{Ssm, Word};
use crate::error::{DecodeError, DecodeResult, EncodeResult};
use std::collections::HashSet;

/// One sample of every navigation parameter
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightData {
    /// Degrees, north positive
    pub latitude: f64,
    /// Degrees, east positive
    pub longitude: f64,
    /// Feet
    pub altitude: f64,
    /// Knots
    pub airspeed: f64,
    /// Degrees
    pub heading: f64,
    /// Feet per minute, climb positive
    pub vertical_speed: f64,
}

impl FlightData {
    /// Get the value of a parameter
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Latitude => self.latitude,
            Parameter::Longitude => self.longitude,
            Parameter::Altitude => self.altitude,
            Parameter::Airspeed => self.airspeed,
            Parameter::Heading => self.heading,
            Parameter::VerticalSpeed => self.vertical_speed,
        }
    }

    /// Set the value of a parameter
    pub fn set(&mut self, parameter: Parameter, value: f64) {
        let slot = match parameter {
            Parameter::Latitude => &mut self.latitude,
            Parameter::Longitude => &mut self.longitude,
            Parameter::Altitude => &mut self.altitude,
            Parameter::Airspeed => &mut self.airspeed,
            Parameter::Heading => &mut self.heading,
            Parameter::VerticalSpeed => &mut self.vertical_speed,
        };
        *slot = value;
    }
}

impl Codec {
    /// Encode a snapshot as six words in label order.
    ///
    /// Stops at the first parameter that fails to encode.
    pub fn encode_flight_data(&self, data: &FlightData, ssm: Ssm) -> EncodeResult<Vec<Word>> {
        Parameter::ALL
            .iter()
            .map(|&parameter| self.encode_parameter(parameter, data.get(parameter), ssm))
            .collect()
    }

    /// Rebuild a snapshot from a set of words.
    ///
    /// Any parity failure aborts. Words on unknown labels are skipped and a
    /// later word for a label overrides an earlier one. Status is not
    /// inspected; use [`Codec::decode`] per word when it matters.
    pub fn decode_flight_data(&self, words: &[Word]) -> DecodeResult<FlightData> {
        let mut data = FlightData::default();
        let mut seen = HashSet::new();

        for &word in words {
            match self.decode(word)? {
                Decoded::Reading(reading) => {
                    data.set(reading.parameter, reading.physical_value);
                    seen.insert(reading.parameter);
                }
                Decoded::Raw(fields) => {
                    log::debug!("skipping word on unknown label {}", fields.label);
                }
            }
        }

        if let Some(missing) = Parameter::ALL.into_iter().find(|p| !seen.contains(p)) {
            return Err(DecodeError::MissingParameter(missing));
        }

        Ok(data)
    }
}
