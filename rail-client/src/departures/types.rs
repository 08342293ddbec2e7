//! Departure DTOs and the reshaped departure record.

use serde::{Deserialize, Serialize};

use crate::provider::de::string_or_number;

/// Response from the departures endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeparturesResponse {
    pub real_time_departures: Vec<DepartureDto>,
}

/// A departure as the provider sends it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepartureDto {
    /// Destination station name.
    pub destination: String,

    /// Departure time, passed through as sent (normally "HH:MM").
    pub time: String,

    /// Platform; some feeds send a number, others a string.
    #[serde(deserialize_with = "string_or_number")]
    pub track: String,

    #[serde(deserialize_with = "string_or_number")]
    pub train_number: String,

    /// Service type, e.g. "רכבת מהירה".
    #[serde(rename = "Type")]
    pub train_type: String,
}

/// A departure from a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Departure {
    pub destination_name: String,
    pub departure_time: String,
    pub track: String,
    pub train_number: String,
    #[serde(rename = "type")]
    pub train_type: String,
}

impl From<DepartureDto> for Departure {
    fn from(dto: DepartureDto) -> Self {
        Self {
            destination_name: dto.destination,
            departure_time: dto.time,
            track: dto.track,
            train_number: dto.train_number,
            train_type: dto.train_type,
        }
    }
}
