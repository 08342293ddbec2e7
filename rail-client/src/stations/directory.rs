//! Station directory: name → code lookups against the live provider.

use crate::domain::{Station, StationCode};
use crate::provider::ProviderError;

/// Trait for providing the station list.
///
/// This abstraction allows the directory and resolver to be tested with
/// in-memory data.
pub trait StationProvider {
    /// Fetch every station the provider currently knows about.
    fn fetch_stations(&self) -> impl Future<Output = Result<Vec<Station>, ProviderError>> + Send;
}

/// Station name → code directory.
///
/// Holds no data of its own: every call re-queries the provider, so two
/// calls may observe different snapshots.
#[derive(Debug, Clone)]
pub struct StationDirectory<P> {
    provider: P,
}

impl<P: StationProvider> StationDirectory<P> {
    /// Create a directory backed by `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// All station names, in provider order.
    pub async fn list_names(&self) -> Result<Vec<String>, ProviderError> {
        let stations = self.provider.fetch_stations().await?;
        Ok(stations.into_iter().map(|s| s.name).collect())
    }

    /// The code for `name`, or `None` if no station has exactly that name.
    ///
    /// Matching is exact and case-sensitive; fuzzy matching belongs to the
    /// resolver.
    pub async fn code_for(&self, name: &str) -> Result<Option<StationCode>, ProviderError> {
        let stations = self.provider.fetch_stations().await?;
        Ok(stations
            .into_iter()
            .find(|s| s.name == name)
            .map(|s| s.code))
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
