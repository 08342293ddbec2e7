//! Station resolution error types.

use crate::provider::ProviderError;

/// Errors from resolving a station name to a code.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The station directory could not be fetched
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// No code exists for the (possibly corrected) name; carries the raw input
    #[error("invalid station: {0:?}")]
    InvalidStation(String),
}
