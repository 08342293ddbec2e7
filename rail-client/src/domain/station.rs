//! Station code types.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// An opaque station code, as issued by the station directory.
///
/// Codes carry no structure we rely on; the only guarantee is that a
/// `StationCode` is never empty.
///
/// # Examples
///
/// ```
/// use rail_client::domain::StationCode;
///
/// let code = StationCode::parse("3700").unwrap();
/// assert_eq!(code.as_str(), "3700");
///
/// assert!(StationCode::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if s.is_empty() {
            return Err(InvalidStationCode {
                reason: "must not be empty",
            });
        }

        Ok(StationCode(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station name paired with the code the directory issued for it.
///
/// Only produced by the directory and resolver, so a code is never handed
/// out without the name it was looked up by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    pub name: String,
    pub code: StationCode,
}

impl Station {
    pub(crate) fn new(name: String, code: StationCode) -> Self {
        Self { name, code }
    }
}
