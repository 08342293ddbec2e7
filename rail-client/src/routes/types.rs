//! Route DTOs, queries and the reshaped route record.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::{StationCode, format_clock_time, format_date};
use crate::provider::de::optional_string_or_number;

/// Response from the routes endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoutesResponse {
    pub routes: Vec<RouteDto>,
}

/// A route as the provider sends it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteDto {
    /// Departure timestamp from the origin.
    pub departure: String,

    /// Arrival timestamp at the destination.
    pub arrival: String,

    /// Journey duration, when the provider computes it.
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub duration: Option<String>,

    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub price: Option<String>,

    #[serde(default, rename = "Type")]
    pub train_type: Option<String>,
}

/// A route between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Full departure timestamp, used for time-window filtering.
    #[serde(skip)]
    pub departs_at: NaiveDateTime,

    /// Departure time as "HH:MM".
    pub departure_time: String,

    /// Arrival time as "HH:MM".
    pub arrival_time: String,

    /// Journey duration as "HH:MM".
    pub duration: String,

    pub price: Option<String>,

    pub train_type: Option<String>,
}

/// Parameters for a routes request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub origin: StationCode,
    pub destination: StationCode,
    pub date: NaiveDate,
    /// Earliest departure; `None` asks for the whole day.
    pub time: Option<NaiveTime>,
}

impl RouteQuery {
    /// Query for all routes on `date`.
    pub fn new(origin: StationCode, destination: StationCode, date: NaiveDate) -> Self {
        Self {
            origin,
            destination,
            date,
            time: None,
        }
    }

    /// Restrict to departures from `time` onwards.
    pub fn at(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Query-string parameters for the request.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("OriginStationCode", self.origin.to_string()),
            ("DestinationStationCode", self.destination.to_string()),
            ("Date", format_date(self.date)),
        ];
        if let Some(time) = self.time {
            params.push(("Time", format_clock_time(time)));
        }
        params
    }
}
