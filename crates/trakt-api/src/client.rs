//! `TraktClient` - Trakt API client implementation.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, RETRY_AFTER};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::instrument;
use url::Url;

use crate::api::LocalTraktApi;
use crate::auth::{AccessToken, should_authenticate};
use crate::error::{ApiError, TraktError};
use crate::request::Request;

/// Default base URL for the Trakt API.
const DEFAULT_BASE_URL: &str = "https://api.trakt.tv/";

/// Default base URL for the OAuth authorize page.
const DEFAULT_OAUTH_BASE_URL: &str = "https://trakt.tv/";

/// Value of the `trakt-api-version` header.
const DEFAULT_API_VERSION: u32 = 2;

/// User-Agent sent when none is configured.
const DEFAULT_USER_AGENT: &str = concat!("trakt-api/", env!("CARGO_PKG_VERSION"));

/// Redirect URI for applications without a callback endpoint.
pub const OOB_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

const MISSING_TOKEN_MESSAGE: &str =
    "Authentication is required for this request type, but the current access token is not set";

/// Trakt API client.
#[allow(clippy::module_name_repetitions)]
pub struct TraktClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests (always ends with `/`).
    base_url: Url,
    /// Base URL for the OAuth authorize page.
    oauth_base_url: Url,
    /// Application client id, sent as `trakt-api-key`.
    client_id: String,
    /// Application client secret (OAuth only).
    client_secret: Option<String>,
    /// OAuth redirect URI.
    redirect_uri: Option<String>,
    /// `trakt-api-version` header value.
    api_version: u32,
    /// Authenticate every request that does not forbid it.
    force_authentication: bool,
    /// Current access token.
    access_token: RwLock<Option<AccessToken>>,
}

impl fmt::Debug for TraktClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraktClient")
            .field("base_url", &self.base_url.as_str())
            .field("oauth_base_url", &self.oauth_base_url.as_str())
            .field("api_version", &self.api_version)
            .field("force_authentication", &self.force_authentication)
            .finish_non_exhaustive()
    }
}

/// Builder for `TraktClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TraktClientBuilder {
    base_url: Option<Url>,
    oauth_base_url: Option<Url>,
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_uri: Option<String>,
    api_version: Option<u32>,
    force_authentication: bool,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    access_token: Option<AccessToken>,
}

impl TraktClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            oauth_base_url: None,
            client_id: None,
            client_secret: None,
            redirect_uri: None,
            api_version: None,
            force_authentication: false,
            user_agent: None,
            timeout: None,
            access_token: None,
        }
    }

    /// Overrides the API base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the OAuth authorize base URL.
    #[must_use]
    pub fn oauth_base_url(mut self, url: Url) -> Self {
        self.oauth_base_url = Some(url);
        self
    }

    /// Sets the client id (required).
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Sets the client secret (needed for OAuth token calls).
    #[must_use]
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Sets the OAuth redirect URI.
    #[must_use]
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Sets the API version (default: 2).
    #[must_use]
    pub const fn api_version(mut self, version: u32) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Authenticates every request whose endpoint does not forbid it.
    #[must_use]
    pub const fn force_authentication(mut self, force: bool) -> Self {
        self.force_authentication = force;
        self
    }

    /// Sets the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets a total per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the initial access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `client_id` is not set or blank.
    /// - A default base URL fails to parse.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TraktClient, TraktError> {
        let client_id = self
            .client_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| TraktError::Configuration(String::from("client_id is required")))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let oauth_base_url = match self.oauth_base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_OAUTH_BASE_URL)?,
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));
        let mut http_builder = Client::builder().user_agent(user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }
        let http_client = http_builder.build().map_err(|e| {
            TraktError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(TraktClient {
            http_client,
            base_url: with_trailing_slash(base_url),
            oauth_base_url: with_trailing_slash(oauth_base_url),
            client_id,
            client_secret: self.client_secret,
            redirect_uri: self.redirect_uri,
            api_version: self.api_version.unwrap_or(DEFAULT_API_VERSION),
            force_authentication: self.force_authentication,
            access_token: RwLock::new(self.access_token),
        })
    }
}

/// Appends `/` to the path so relative joins keep the last segment.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Decodes a success body; an empty body reads as JSON `null`.
fn decode<R: DeserializeOwned>(body: &str, url: &Url) -> Result<R, TraktError> {
    let json = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(json).map_err(|source| TraktError::Decode {
        url: url.to_string(),
        source,
    })
}

impl TraktClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TraktClientBuilder {
        TraktClientBuilder::new()
    }

    /// API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// OAuth authorize base URL.
    #[must_use]
    pub const fn oauth_base_url(&self) -> &Url {
        &self.oauth_base_url
    }

    /// Client id.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Client secret, if configured.
    #[must_use]
    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    /// Redirect URI, if configured.
    #[must_use]
    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }

    /// API version.
    #[must_use]
    pub const fn api_version(&self) -> u32 {
        self.api_version
    }

    /// Whether every non-forbidden request is authenticated.
    #[must_use]
    pub const fn force_authentication(&self) -> bool {
        self.force_authentication
    }

    /// Returns a copy of the current access token.
    pub async fn access_token(&self) -> Option<AccessToken> {
        self.access_token.read().await.clone()
    }

    /// Replaces the current access token.
    pub async fn set_access_token(&self, token: Option<AccessToken>) {
        *self.access_token.write().await = token;
    }

    /// Reads the bearer string once, before any I/O.
    async fn bearer(&self) -> Result<String, TraktError> {
        self.access_token
            .read()
            .await
            .as_ref()
            .map(|token| token.access_token.clone())
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| TraktError::Configuration(String::from(MISSING_TOKEN_MESSAGE)))
    }

    /// Like [`LocalTraktApi::send`], but gives up when `cancel` fires.
    ///
    /// # Errors
    ///
    /// `Cancelled` when the token fires first; otherwise as `send`.
    pub async fn send_with_cancel<B, R>(
        &self,
        request: Request<B, R>,
        cancel: &CancellationToken,
    ) -> Result<R, TraktError>
    where
        B: Serialize + Send,
        R: DeserializeOwned + Send,
    {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!("Trakt API request cancelled");
                Err(TraktError::Cancelled)
            }
            result = self.send(request) => result,
        }
    }
}

impl LocalTraktApi for TraktClient {
    #[instrument(skip_all, fields(path = request.endpoint().path()))]
    async fn send<B, R>(&self, request: Request<B, R>) -> Result<R, TraktError>
    where
        B: Serialize + Send,
        R: DeserializeOwned + Send,
    {
        request.validate()?;

        let endpoint = *request.endpoint();
        let url = request.url(&self.base_url)?;
        let authenticate = should_authenticate(
            endpoint.oauth(),
            self.force_authentication,
            request.authenticate_preference(),
        );
        let bearer = if authenticate {
            Some(self.bearer().await?)
        } else {
            None
        };
        let body = request
            .into_body()
            .map(|body| serde_json::to_string(&body))
            .transpose()
            .map_err(TraktError::Serialize)?;

        let mut builder = self
            .http_client
            .request(endpoint.method().to_reqwest(), url.clone())
            .header("trakt-api-key", &self.client_id)
            .header("trakt-api-version", self.api_version.to_string())
            .header(ACCEPT, "application/json");
        if let Some(token) = &bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(json) = &body {
            tracing::trace!(body = %json, "Trakt API request body");
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(json.clone());
        }

        tracing::debug!(
            method = %endpoint.method(),
            url = %url,
            authenticate,
            "Trakt API request"
        );

        let response = builder.send().await?;
        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                url = %url,
                "Trakt API returned an error status"
            );
            let err = ApiError::from_response(status.as_u16(), &text, url.as_str(), body)
                .with_retry_after(retry_after);
            return Err(err.into());
        }

        tracing::trace!(status = status.as_u16(), bytes = text.len(), "Trakt API response");
        decode(&text, &url)
    }
}
