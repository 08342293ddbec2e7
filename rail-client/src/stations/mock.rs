//! In-memory station provider for tests.

use std::sync::Mutex;

use crate::domain::{Station, StationCode};
use crate::provider::ProviderError;

use super::directory::StationProvider;

/// Serves a fixed station list, or a fixed failure, and counts fetches.
pub(crate) struct MockStations {
    stations: Vec<Station>,
    fail_status: Option<u16>,
    fetches: Mutex<usize>,
}

impl MockStations {
    /// A provider serving the given `(name, code)` pairs.
    pub(crate) fn new(stations: &[(&str, &str)]) -> Self {
        let stations = stations
            .iter()
            .map(|(name, code)| Station::new(name.to_string(), StationCode::parse(code).unwrap()))
            .collect();
        Self {
            stations,
            fail_status: None,
            fetches: Mutex::new(0),
        }
    }

    /// A provider whose every fetch fails with the given HTTP status.
    pub(crate) fn failing(status: u16) -> Self {
        Self {
            stations: Vec::new(),
            fail_status: Some(status),
            fetches: Mutex::new(0),
        }
    }

    /// Number of fetches served so far.
    pub(crate) fn fetch_count(&self) -> usize {
        *self.fetches.lock().unwrap()
    }
}

impl StationProvider for MockStations {
    async fn fetch_stations(&self) -> Result<Vec<Station>, ProviderError> {
        *self.fetches.lock().unwrap() += 1;
        match self.fail_status {
            Some(status) => Err(ProviderError::Api {
                status,
                message: "station directory unavailable".to_string(),
            }),
            None => Ok(self.stations.clone()),
        }
    }
}
