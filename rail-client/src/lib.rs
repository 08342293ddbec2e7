//! Thin client for a national railway's public JSON endpoints.
//!
//! Fetches the station directory, real-time departures and routes, and
//! reshapes the responses into flat records. Station names supplied by
//! callers are resolved to codes, with fuzzy correction of misspellings.

pub mod api;
pub mod clock;
pub mod config;
pub mod departures;
pub mod domain;
pub mod provider;
pub mod routes;
pub mod similarity;
pub mod stations;
pub mod web;
