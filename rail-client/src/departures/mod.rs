//! Real-time departures for a station.
//!
//! Fetches the live departure board for one station code and reshapes each
//! record into a flat [`Departure`].

mod client;
mod types;

pub use client::{DepartureProvider, DeparturesClient};
pub use types::{Departure, DepartureDto, DeparturesResponse};
