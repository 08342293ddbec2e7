//! The rail client facade.
//!
//! Combines station resolution with the departures and routes providers, so
//! callers can work in station names rather than codes. Times and dates the
//! caller leaves out are taken from the [`Clock`].

use chrono::NaiveDate;
use tracing::debug;

use crate::clock::Clock;
use crate::config::RailConfig;
use crate::departures::{Departure, DepartureProvider, DeparturesClient};
use crate::domain::{StationCode, TimeError, minutes_between, parse_clock_time, parse_date};
use crate::provider::ProviderError;
use crate::routes::{Route, RouteProvider, RouteQuery, RoutesClient};
use crate::stations::{
    ResolveError, StationClient, StationDirectory, StationProvider, StationResolver,
};

/// How far ahead `next_departures` looks, in minutes.
pub const NEXT_DEPARTURES_WINDOW_MINS: i64 = 60;

/// Errors from the rail client facade.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Station resolution failed
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A provider call failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A caller-supplied time or date did not parse
    #[error(transparent)]
    Time(#[from] TimeError),
}

/// Rail client over a station provider `S`, departures provider `D`,
/// routes provider `R` and clock `C`.
pub struct RailApi<S, D, R, C> {
    resolver: StationResolver<S>,
    departures: D,
    routes: R,
    clock: C,
}

/// The client wired to the live HTTP providers.
pub type HttpRailApi<C> = RailApi<StationClient, DeparturesClient, RoutesClient, C>;

impl<C: Clock> HttpRailApi<C> {
    /// Build a client talking to the endpoints in `config`.
    pub fn from_config(config: &RailConfig, clock: C) -> Result<Self, ProviderError> {
        let stations = StationClient::new(config)?;
        let departures = DeparturesClient::new(config)?;
        let routes = RoutesClient::new(config)?;

        Ok(RailApi::new(
            StationResolver::new(StationDirectory::new(stations)),
            departures,
            routes,
            clock,
        ))
    }
}

impl<S, D, R, C> RailApi<S, D, R, C>
where
    S: StationProvider,
    D: DepartureProvider,
    R: RouteProvider,
    C: Clock,
{
    pub fn new(resolver: StationResolver<S>, departures: D, routes: R, clock: C) -> Self {
        Self {
            resolver,
            departures,
            routes,
            clock,
        }
    }

    /// The station resolver.
    pub fn resolver(&self) -> &StationResolver<S> {
        &self.resolver
    }

    /// Names of all stations.
    pub async fn station_names(&self) -> Result<Vec<String>, ApiError> {
        Ok(self.resolver.directory().list_names().await?)
    }

    /// Correct a possibly misspelled station name.
    ///
    /// Returns the input unchanged when no unique correction exists.
    pub async fn correct_station_name(&self, raw: &str) -> Result<String, ApiError> {
        Ok(self.resolver.resolve(raw).await?)
    }

    /// The code for a possibly misspelled station name.
    pub async fn station_code(&self, raw: &str) -> Result<StationCode, ApiError> {
        Ok(self.resolver.resolve_code(raw).await?)
    }

    /// Real-time departures from a station, given by name.
    pub async fn departures(&self, station: &str) -> Result<Vec<Departure>, ApiError> {
        let code = self.resolver.resolve_code(station).await?;
        Ok(self.departures.fetch_departures(&code).await?)
    }

    /// Routes from `source` to `destination`.
    ///
    /// `time` ("HH:MM") restricts to later departures and is only sent when
    /// given. `date` ("DD/MM/YYYY") defaults to today.
    pub async fn routes(
        &self,
        source: &str,
        destination: &str,
        time: Option<&str>,
        date: Option<&str>,
    ) -> Result<Vec<Route>, ApiError> {
        let time = time.map(parse_clock_time).transpose()?;
        let date = match date {
            Some(date) => parse_date(date)?,
            None => self.clock.today(),
        };

        let mut query = self.route_query(source, destination, date).await?;
        if let Some(time) = time {
            query = query.at(time);
        }

        Ok(self.routes.fetch_routes(&query).await?)
    }

    /// Routes from `source` to `destination` departing within the next
    /// hour of `time` on `date`, both defaulting to now.
    ///
    /// The window only looks forward: a route that left even a minute
    /// before the reference time is excluded, as is one leaving more than
    /// [`NEXT_DEPARTURES_WINDOW_MINS`] minutes after it.
    pub async fn next_departures(
        &self,
        source: &str,
        destination: &str,
        time: Option<&str>,
        date: Option<&str>,
    ) -> Result<Vec<Route>, ApiError> {
        let now = self.clock.now();
        let time = match time {
            Some(time) => parse_clock_time(time)?,
            None => now.time(),
        };
        let date = match date {
            Some(date) => parse_date(date)?,
            None => now.date(),
        };
        let reference = date.and_time(time);

        let query = self.route_query(source, destination, date).await?;
        let routes = self.routes.fetch_routes(&query).await?;
        let total = routes.len();

        let upcoming: Vec<Route> = routes
            .into_iter()
            .filter(|route| {
                let mins = minutes_between(route.departs_at, reference);
                (0..=NEXT_DEPARTURES_WINDOW_MINS).contains(&mins)
            })
            .collect();

        debug!(
            %reference,
            total,
            upcoming = upcoming.len(),
            "filtered routes to next departures"
        );

        Ok(upcoming)
    }

    async fn route_query(
        &self,
        source: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<RouteQuery, ApiError> {
        let origin = self.resolver.resolve_code(source).await?;
        let destination = self.resolver.resolve_code(destination).await?;
        Ok(RouteQuery::new(origin, destination, date))
    }
}
