//! Conversion from route DTOs to routes.

use crate::domain::{format_clock_time, format_duration, parse_timestamp};
use crate::provider::ProviderError;

use super::types::{Route, RouteDto};

/// Convert a provider route into a [`Route`].
///
/// Timestamps that do not parse make the record malformed. A missing or
/// empty duration is computed from the two timestamps.
pub fn convert_route(dto: RouteDto) -> Result<Route, ProviderError> {
    let departs_at = parse_timestamp(&dto.departure).map_err(|e| {
        ProviderError::malformed(format!("route departure {:?}: {}", dto.departure, e))
    })?;
    let arrives_at = parse_timestamp(&dto.arrival).map_err(|e| {
        ProviderError::malformed(format!("route arrival {:?}: {}", dto.arrival, e))
    })?;

    let duration = dto
        .duration
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| format_duration(departs_at, arrives_at));

    Ok(Route {
        departs_at,
        departure_time: format_clock_time(departs_at.time()),
        arrival_time: format_clock_time(arrives_at.time()),
        duration,
        price: dto.price,
        train_type: dto.train_type,
    })
}
