//! Error taxonomy for Trakt API calls.
//!
//! Local failures (`InvalidRequest`, `Configuration`) are kept apart from
//! remote ones (`Api`) so callers can tell a malformed request from a
//! server rejection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fallback message when the error body carries no description.
const EMPTY_ERROR_MESSAGE: &str = "The Trakt API returned an error with no content. \
     Refer to the status code for an indication of the problem.";

/// Errors returned by the Trakt client.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TraktError {
    /// A request parameter is missing or invalid. Raised before any I/O.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The client or request is misconfigured (auth policy, missing token,
    /// missing credentials).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The API answered with a non-success status code.
    #[error(transparent)]
    Api(Box<ApiError>),

    /// The HTTP call itself failed (connect, TLS, timeout, body read).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request body could not be serialized.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A success response could not be decoded into the declared type.
    #[error("failed to decode JSON response from {url}: {source}")]
    Decode {
        /// Request URL.
        url: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A URL could not be built.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The dispatch was cancelled by the caller.
    #[error("request cancelled")]
    Cancelled,
}

impl TraktError {
    /// Returns `true` for failures raised locally before any network I/O.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest(_) | Self::Configuration(_) | Self::Serialize(_) | Self::Url(_)
        )
    }

    /// Returns the API error when this is a remote failure.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the API error kind when this is a remote failure.
    #[must_use]
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        self.api_error().map(ApiError::kind)
    }
}

impl From<ApiError> for TraktError {
    fn from(err: ApiError) -> Self {
        Self::Api(Box::new(err))
    }
}

/// Error body returned by the Trakt API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct ErrorResponse {
    /// Short error code (e.g. `invalid_grant`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    /// Validation detail, keyed by field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Returns the best available human-readable description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.error_description
            .as_deref()
            .or(self.error.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Kind of remote failure, keyed by HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum ApiErrorKind {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 405
    MethodNotAllowed,
    /// 409
    Conflict,
    /// 429
    RateLimitExceeded,
    /// 500
    ServerError,
    /// 503
    ServiceUnavailable,
    /// Any other non-success status.
    Other,
}

/// Status code to kind lookup table.
const STATUS_KINDS: &[(u16, ApiErrorKind)] = &[
    (400, ApiErrorKind::BadRequest),
    (401, ApiErrorKind::Unauthorized),
    (403, ApiErrorKind::Forbidden),
    (404, ApiErrorKind::NotFound),
    (405, ApiErrorKind::MethodNotAllowed),
    (409, ApiErrorKind::Conflict),
    (429, ApiErrorKind::RateLimitExceeded),
    (500, ApiErrorKind::ServerError),
    (503, ApiErrorKind::ServiceUnavailable),
];

impl ApiErrorKind {
    /// Classifies a status code by exact match against the fixed table.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        STATUS_KINDS
            .iter()
            .find(|(code, _)| *code == status)
            .map_or(Self::Other, |(_, kind)| *kind)
    }

    /// Returns the title used in error messages.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::Conflict => "Conflict",
            Self::RateLimitExceeded => "Rate Limit Exceeded",
            Self::ServerError => "Server Error",
            Self::ServiceUnavailable => "Service Unavailable",
            Self::Other => "API Error",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A non-success response from the Trakt API.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct ApiError {
    kind: ApiErrorKind,
    status: u16,
    error: ErrorResponse,
    request_url: String,
    request_body: Option<String>,
    response_body: Option<String>,
    retry_after: Option<u64>,
}

impl ApiError {
    /// Builds an error from a failed response.
    ///
    /// An unparseable body degrades to an empty [`ErrorResponse`]; the kind
    /// always comes from the status code.
    #[must_use]
    pub fn from_response(
        status: u16,
        response_body: &str,
        request_url: impl Into<String>,
        request_body: Option<String>,
    ) -> Self {
        let error = if response_body.trim().is_empty() {
            ErrorResponse::default()
        } else {
            serde_json::from_str::<ErrorResponse>(response_body).unwrap_or_else(|e| {
                tracing::warn!(
                    status,
                    error = %e,
                    "Unparseable Trakt error body, using empty error response"
                );
                ErrorResponse::default()
            })
        };

        Self {
            kind: ApiErrorKind::from_status(status),
            status,
            error,
            request_url: request_url.into(),
            request_body,
            response_body: (!response_body.is_empty()).then(|| String::from(response_body)),
            retry_after: None,
        }
    }

    /// Attaches the `Retry-After` value in seconds.
    #[must_use]
    pub const fn with_retry_after(mut self, seconds: Option<u64>) -> Self {
        self.retry_after = seconds;
        self
    }

    /// Error kind.
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Parsed error body (empty when the body was missing or malformed).
    #[must_use]
    pub const fn error(&self) -> &ErrorResponse {
        &self.error
    }

    /// URL of the failed request.
    #[must_use]
    pub fn request_url(&self) -> &str {
        &self.request_url
    }

    /// JSON body of the failed request, if any.
    #[must_use]
    pub fn request_body(&self) -> Option<&str> {
        self.request_body.as_deref()
    }

    /// Raw response body, if any.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        self.response_body.as_deref()
    }

    /// Seconds to wait before retrying, when the server sent `Retry-After`.
    #[must_use]
    pub const fn retry_after(&self) -> Option<u64> {
        self.retry_after
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.error.description().unwrap_or(EMPTY_ERROR_MESSAGE)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trakt API error (HTTP {} {}): {} [{}]",
            self.status,
            self.kind,
            self.message(),
            self.request_url
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use tracing::subscriber::with_default;
    use tracing_mock::{expect, subscriber};

    use super::*;

    #[test]
    fn test_status_table() {
        // Arrange
        let cases = [
            (400, ApiErrorKind::BadRequest),
            (401, ApiErrorKind::Unauthorized),
            (403, ApiErrorKind::Forbidden),
            (404, ApiErrorKind::NotFound),
            (405, ApiErrorKind::MethodNotAllowed),
            (409, ApiErrorKind::Conflict),
            (429, ApiErrorKind::RateLimitExceeded),
            (500, ApiErrorKind::ServerError),
            (503, ApiErrorKind::ServiceUnavailable),
        ];

        // Act & Assert
        for (status, kind) in cases {
            assert_eq!(ApiErrorKind::from_status(status), kind, "status {status}");
        }
    }

    #[test]
    fn test_unlisted_status_is_other() {
        // Arrange & Act & Assert
        assert_eq!(ApiErrorKind::from_status(422), ApiErrorKind::Other);
        assert_eq!(ApiErrorKind::from_status(502), ApiErrorKind::Other);
        assert_eq!(ApiErrorKind::from_status(418), ApiErrorKind::Other);
    }

    #[test]
    fn test_from_response_parses_error_body() {
        // Arrange
        let body = r#"{"error":"invalid_grant","error_description":"The provided authorization grant is invalid."}"#;

        // Act
        let err = ApiError::from_response(401, body, "https://api.trakt.tv/oauth/token", None);

        // Assert
        assert_eq!(err.kind(), ApiErrorKind::Unauthorized);
        assert_eq!(err.status(), 401);
        assert_eq!(err.error().error.as_deref(), Some("invalid_grant"));
        assert_eq!(
            err.message(),
            "The provided authorization grant is invalid."
        );
        assert_eq!(err.response_body(), Some(body));
    }

    #[test]
    fn test_from_response_tolerates_malformed_body() {
        // Arrange & Act
        let err = ApiError::from_response(
            503,
            "<html>Service Unavailable</html>",
            "https://api.trakt.tv/movies/popular",
            None,
        );

        // Assert
        assert_eq!(err.kind(), ApiErrorKind::ServiceUnavailable);
        assert_eq!(err.error(), &ErrorResponse::default());
        assert_eq!(err.message(), EMPTY_ERROR_MESSAGE);
    }

    #[test]
    fn test_from_response_keeps_status_for_other_kind() {
        // Arrange & Act
        let err = ApiError::from_response(422, "", "https://api.trakt.tv/sync/ratings", None);

        // Assert
        assert_eq!(err.kind(), ApiErrorKind::Other);
        assert_eq!(err.status(), 422);
        assert!(err.response_body().is_none());
    }

    #[test]
    fn test_malformed_body_logs_warning() {
        // Arrange
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().at_level(tracing::Level::WARN))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            let _ = ApiError::from_response(500, "not json", "https://api.trakt.tv/", None);
        });

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_display_includes_kind_and_url() {
        // Arrange
        let err: TraktError =
            ApiError::from_response(404, "", "https://api.trakt.tv/movies/nope", None).into();

        // Act
        let message = err.to_string();

        // Assert
        assert!(message.contains("Not Found"));
        assert!(message.contains("https://api.trakt.tv/movies/nope"));
        assert_eq!(err.api_kind(), Some(ApiErrorKind::NotFound));
        assert!(!err.is_local());
    }

    #[test]
    fn test_local_errors_are_local() {
        // Arrange & Act & Assert
        assert!(TraktError::InvalidRequest(String::from("Id not set.")).is_local());
        assert!(TraktError::Configuration(String::from("missing token")).is_local());
        assert!(!TraktError::Cancelled.is_local());
    }
}
