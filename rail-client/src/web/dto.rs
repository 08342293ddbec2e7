//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::departures::Departure;
use crate::routes::Route;

/// Request to resolve a station name.
#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    /// Station name, possibly misspelled
    pub name: String,
}

/// Result of resolving a station name.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    /// Name as supplied
    pub input: String,

    /// Directory name the input resolved to
    pub name: String,

    /// Station code
    pub code: String,

    /// Whether `name` differs from `input`
    pub corrected: bool,
}

/// All station names.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<String>,
}

/// Request for departures from a station.
#[derive(Debug, Deserialize)]
pub struct DeparturesRequest {
    /// Station name, possibly misspelled
    pub station: String,
}

/// Departures from a station.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    pub departures: Vec<Departure>,
}

/// Request for routes between two stations.
#[derive(Debug, Deserialize)]
pub struct RoutesRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Time in HH:MM format
    pub time: Option<String>,

    /// Date in DD/MM/YYYY format (defaults to today)
    pub date: Option<String>,
}

/// Routes between two stations.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<Route>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
