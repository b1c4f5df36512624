//! Typed client library for the Trakt REST API.
//!
//! Every endpoint is a `const` [`request::Endpoint`] descriptor; a single
//! dispatch routine ([`api::LocalTraktApi::send`]) turns a configured
//! [`request::Request`] into one HTTP call and a typed result.

/// `TraktApi` trait definition.
pub mod api;

/// OAuth decision logic and token management.
pub mod auth;

/// `TraktClient` and its builder.
pub mod client;

/// Error taxonomy.
pub mod error;

/// Resource module façades (movies, shows, sync, ...).
pub mod modules;

/// Query option encoders.
pub mod options;

/// Request descriptors and the endpoint table.
pub mod request;

/// Response entities and request bodies.
pub mod types;

pub use api::{LocalTraktApi, TraktApi};
pub use client::{TraktClient, TraktClientBuilder};
pub use error::{ApiError, ApiErrorKind, ErrorResponse, TraktError};
pub use options::{Extended, OAuthRequirement, Pagination};
pub use request::{Endpoint, Request};
