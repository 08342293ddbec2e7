//! Station directory HTTP client.

use serde::Deserialize;

use crate::config::RailConfig;
use crate::domain::{Station, StationCode};
use crate::provider::{JsonEndpoint, ProviderError, http_client};

use super::directory::StationProvider;

/// Wrapper for the stations response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationsResponse {
    pub stations: Vec<StationDto>,
}

/// Minimal DTO for station data - we only need the name and code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationDto {
    pub name: String,
    pub code: String,
}

/// Client for the station directory endpoint.
#[derive(Debug, Clone)]
pub struct StationClient {
    endpoint: JsonEndpoint,
}

impl StationClient {
    /// Create a new station client from the directory endpoint in `config`.
    pub fn new(config: &RailConfig) -> Result<Self, ProviderError> {
        let http = http_client(config.timeout_secs)?;
        Ok(Self {
            endpoint: JsonEndpoint::new(http, config.directory_endpoint.clone()),
        })
    }

    /// Fetch the raw station records.
    pub async fn fetch_all(&self) -> Result<Vec<StationDto>, ProviderError> {
        let response: StationsResponse = self.endpoint.get(&[]).await?;
        Ok(response.stations)
    }
}

impl StationProvider for StationClient {
    async fn fetch_stations(&self) -> Result<Vec<Station>, ProviderError> {
        let stations = self.fetch_all().await?;
        convert_stations(stations)
    }
}

/// Validate station DTOs into domain stations.
///
/// A record with an empty name or code fails the whole response rather
/// than being dropped.
fn convert_stations(stations: Vec<StationDto>) -> Result<Vec<Station>, ProviderError> {
    stations
        .into_iter()
        .map(|s| {
            if s.name.is_empty() {
                return Err(ProviderError::malformed(format!(
                    "station with code {:?} has an empty name",
                    s.code
                )));
            }
            let code = StationCode::parse(&s.code).map_err(|e| {
                ProviderError::malformed(format!("station {:?}: {}", s.name, e))
            })?;
            Ok(Station::new(s.name, code))
        })
        .collect()
}
