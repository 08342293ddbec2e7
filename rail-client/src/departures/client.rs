//! Departures HTTP client.

use crate::config::RailConfig;
use crate::domain::StationCode;
use crate::provider::{JsonEndpoint, ProviderError, http_client};

use super::types::{Departure, DeparturesResponse};

/// Trait for providing real-time departures.
pub trait DepartureProvider {
    /// Current departures from the station with the given code.
    fn fetch_departures(
        &self,
        station: &StationCode,
    ) -> impl Future<Output = Result<Vec<Departure>, ProviderError>> + Send;
}

/// Client for the real-time departures endpoint.
#[derive(Debug, Clone)]
pub struct DeparturesClient {
    endpoint: JsonEndpoint,
}

impl DeparturesClient {
    /// Create a new departures client from the departures endpoint in `config`.
    pub fn new(config: &RailConfig) -> Result<Self, ProviderError> {
        let http = http_client(config.timeout_secs)?;
        Ok(Self {
            endpoint: JsonEndpoint::new(http, config.departures_endpoint.clone()),
        })
    }
}

impl DepartureProvider for DeparturesClient {
    async fn fetch_departures(
        &self,
        station: &StationCode,
    ) -> Result<Vec<Departure>, ProviderError> {
        let response: DeparturesResponse = self
            .endpoint
            .get(&[("StationCode", station.to_string())])
            .await?;

        Ok(response
            .real_time_departures
            .into_iter()
            .map(Departure::from)
            .collect())
    }
}
