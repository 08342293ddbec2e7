//! Routes between two stations.
//!
//! Queries the routes endpoint for one origin/destination pair on a given
//! day and reshapes each record into a flat [`Route`], filling in the
//! duration when the provider leaves it out.

mod client;
mod convert;
mod types;

pub use client::{RouteProvider, RoutesClient};
pub use convert::convert_route;
pub use types::{Route, RouteDto, RouteQuery, RoutesResponse};
