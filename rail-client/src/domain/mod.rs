//! Domain types for the rail client.
//!
//! Station codes are validated at construction time, so code that receives
//! a `StationCode` or `Station` can trust it came from the directory.

mod station;
mod time;

pub use station::{InvalidStationCode, Station, StationCode};
pub use time::{
    CLOCK_TIME_FORMAT, DATE_FORMAT, TimeError, format_clock_time, format_date, format_duration,
    minutes_between, parse_clock_time, parse_date, parse_timestamp,
};
