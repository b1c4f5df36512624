//! `TraktApi` trait definition.
#![allow(clippy::future_not_send)]

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::TraktError;
use crate::request::Request;

/// Trakt API trait.
///
/// A single generic dispatch entry point; resource modules are written
/// against this trait so tests can substitute a mock for the HTTP client.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TraktApi: Send)]
pub trait LocalTraktApi {
    /// Validates, sends and decodes one request.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` when local validation fails (no I/O happens).
    /// - `Configuration` when authentication is needed but no access token
    ///   is set.
    /// - `Api` for non-success status codes.
    /// - `Transport`, `Serialize` or `Decode` for I/O and JSON failures.
    async fn send<B, R>(&self, request: Request<B, R>) -> Result<R, TraktError>
    where
        B: Serialize + Send,
        R: DeserializeOwned + Send;
}
