//! Station name resolution with fuzzy correction.
//!
//! A raw name is used as-is when the directory contains it exactly.
//! Otherwise it is scored against every directory name with [`similarity`]
//! and replaced by the single name scoring above [`CORRECTION_THRESHOLD`].
//! When no name, or more than one name, clears the threshold, the raw name
//! is kept unchanged. That fallback is not an error: the failure, if any,
//! surfaces later as `InvalidStation` when the code lookup misses.

use tracing::debug;

use crate::domain::{Station, StationCode};
use crate::provider::ProviderError;
use crate::similarity::similarity;

use super::directory::{StationDirectory, StationProvider};
use super::error::ResolveError;

/// Candidates must score strictly above this to be used as a correction.
pub const CORRECTION_THRESHOLD: f64 = 0.8;

/// Outcome of correcting a name against a directory snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction<'a> {
    /// The name is in the directory as given.
    Exact,
    /// Exactly one directory name cleared the threshold.
    Corrected(&'a str),
    /// Nothing cleared the threshold.
    NoMatch,
    /// This many names cleared the threshold, so none was chosen.
    Ambiguous(usize),
}

/// Correct `raw` against `names`.
///
/// The exact-match check is case-sensitive while the similarity score is
/// not, so a name differing only in case is corrected rather than kept.
pub fn correct_name<'a>(raw: &str, names: &'a [String]) -> Correction<'a> {
    if names.iter().any(|name| name == raw) {
        return Correction::Exact;
    }

    let matches: Vec<&str> = names
        .iter()
        .filter(|name| similarity(raw, name) > CORRECTION_THRESHOLD)
        .map(String::as_str)
        .collect();

    match matches.as_slice() {
        [] => Correction::NoMatch,
        [only] => Correction::Corrected(*only),
        _ => Correction::Ambiguous(matches.len()),
    }
}

/// Resolves user-supplied station names against the live directory.
#[derive(Debug, Clone)]
pub struct StationResolver<P> {
    directory: StationDirectory<P>,
}

impl<P: StationProvider> StationResolver<P> {
    /// Create a resolver over `directory`.
    pub fn new(directory: StationDirectory<P>) -> Self {
        Self { directory }
    }

    /// The directory this resolver queries.
    pub fn directory(&self) -> &StationDirectory<P> {
        &self.directory
    }

    /// Resolve `raw` to a directory name, correcting it if possible.
    ///
    /// Returns `raw` unchanged when it is already a directory name, and
    /// also when no unique correction exists.
    pub async fn resolve(&self, raw: &str) -> Result<String, ProviderError> {
        let names = self.directory.list_names().await?;

        let resolved = match correct_name(raw, &names) {
            Correction::Exact => raw,
            Correction::Corrected(name) => {
                debug!(input = raw, corrected = name, "corrected station name");
                name
            }
            Correction::NoMatch => {
                debug!(input = raw, "no station name close enough to correct");
                raw
            }
            Correction::Ambiguous(count) => {
                debug!(input = raw, candidates = count, "ambiguous station name, not correcting");
                raw
            }
        };

        Ok(resolved.to_string())
    }

    /// Resolve `raw` to a station name and its code.
    ///
    /// Fails with `InvalidStation(raw)` when the resolved name has no code.
    pub async fn resolve_station(&self, raw: &str) -> Result<Station, ResolveError> {
        let name = self.resolve(raw).await?;

        match self.directory.code_for(&name).await? {
            Some(code) => Ok(Station::new(name, code)),
            None => Err(ResolveError::InvalidStation(raw.to_string())),
        }
    }

    /// Resolve `raw` to a station code.
    pub async fn resolve_code(&self, raw: &str) -> Result<StationCode, ResolveError> {
        self.resolve_station(raw).await.map(|station| station.code)
    }
}
