//! Station directory client and name resolution.
//!
//! Provides station name → code lookup against the live directory, plus
//! fuzzy correction of misspelled names. Nothing is cached: each lookup
//! fetches the directory again.

mod client;
mod directory;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod resolver;

pub use client::{StationClient, StationDto, StationsResponse};
pub use directory::{StationDirectory, StationProvider};
pub use error::ResolveError;
pub use resolver::{CORRECTION_THRESHOLD, Correction, StationResolver, correct_name};
