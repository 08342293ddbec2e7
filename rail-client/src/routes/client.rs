//! Routes HTTP client.

use crate::config::RailConfig;
use crate::provider::{JsonEndpoint, ProviderError, http_client};

use super::convert::convert_route;
use super::types::{Route, RouteQuery, RoutesResponse};

/// Trait for providing routes between stations.
pub trait RouteProvider {
    /// Routes matching `query`, in provider order.
    fn fetch_routes(
        &self,
        query: &RouteQuery,
    ) -> impl Future<Output = Result<Vec<Route>, ProviderError>> + Send;
}

/// Client for the routes endpoint.
#[derive(Debug, Clone)]
pub struct RoutesClient {
    endpoint: JsonEndpoint,
}

impl RoutesClient {
    /// Create a new routes client from the routes endpoint in `config`.
    pub fn new(config: &RailConfig) -> Result<Self, ProviderError> {
        let http = http_client(config.timeout_secs)?;
        Ok(Self {
            endpoint: JsonEndpoint::new(http, config.routes_endpoint.clone()),
        })
    }
}

impl RouteProvider for RoutesClient {
    async fn fetch_routes(&self, query: &RouteQuery) -> Result<Vec<Route>, ProviderError> {
        let response: RoutesResponse = self.endpoint.get(&query.params()).await?;

        response.routes.into_iter().map(convert_route).collect()
    }
}
