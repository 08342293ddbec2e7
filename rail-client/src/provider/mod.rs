//! Shared plumbing for the rail JSON providers.
//!
//! Every provider is a single JSON endpoint answering GET requests. This
//! module owns the HTTP client setup, status and body handling, and the
//! error type all providers surface.

pub(crate) mod de;
mod error;
mod http;

pub use error::ProviderError;
pub use http::{JsonEndpoint, http_client};
