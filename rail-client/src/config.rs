//! Provider endpoint configuration.

use reqwest::Url;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable naming the station directory endpoint.
pub const STATIONS_URL_VAR: &str = "RAIL_STATIONS_URL";
/// Environment variable naming the real-time departures endpoint.
pub const DEPARTURES_URL_VAR: &str = "RAIL_DEPARTURES_URL";
/// Environment variable naming the routes endpoint.
pub const ROUTES_URL_VAR: &str = "RAIL_ROUTES_URL";
/// Environment variable overriding the request timeout.
pub const TIMEOUT_VAR: &str = "RAIL_TIMEOUT_SECS";

/// Errors from building a [`RailConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("{0} is not set")]
    Missing(&'static str),

    /// A URL did not parse
    #[error("{name} is not a valid URL: {message}")]
    InvalidUrl { name: &'static str, message: String },

    /// The timeout is not a whole number of seconds
    #[error("RAIL_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

/// Endpoints for the three rail providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailConfig {
    /// Station directory (name → code list)
    pub directory_endpoint: Url,
    /// Real-time departures for one station
    pub departures_endpoint: Url,
    /// Routes between two stations
    pub routes_endpoint: Url,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RailConfig {
    /// Create a config with the default timeout.
    pub fn new(directory_endpoint: Url, departures_endpoint: Url, routes_endpoint: Url) -> Self {
        Self {
            directory_endpoint,
            departures_endpoint,
            routes_endpoint,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create a config from URL strings.
    pub fn parse(directory: &str, departures: &str, routes: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(
            parse_url(STATIONS_URL_VAR, directory)?,
            parse_url(DEPARTURES_URL_VAR, departures)?,
            parse_url(ROUTES_URL_VAR, routes)?,
        ))
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Read the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the config through `lookup`, which maps variable names to values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let config = Self::new(
            parse_url(STATIONS_URL_VAR, &required(STATIONS_URL_VAR)?)?,
            parse_url(DEPARTURES_URL_VAR, &required(DEPARTURES_URL_VAR)?)?,
            parse_url(ROUTES_URL_VAR, &required(ROUTES_URL_VAR)?)?,
        );

        match lookup(TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
                Ok(config.with_timeout(secs))
            }
            None => Ok(config),
        }
    }
}

fn parse_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        name,
        message: e.to_string(),
    })
}
