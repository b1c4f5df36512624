//! OAuth token lifecycle: authorize URL, code exchange, refresh, revoke.
//!
//! Successful exchanges and refreshes replace the client's access token;
//! a revoke clears it.

use tracing::instrument;
use url::Url;

use crate::api::LocalTraktApi;
use crate::auth::{AccessToken, TokenExchangeBody, TokenRefreshBody, TokenRevokeBody};
use crate::client::{OOB_REDIRECT_URI, TraktClient};
use crate::error::TraktError;
use crate::request::Request;
use crate::request::endpoints::{OAUTH_TOKEN_EXCHANGE, OAUTH_TOKEN_REFRESH, OAUTH_TOKEN_REVOKE};

/// OAuth calls bound to a concrete client, whose token they update.
#[derive(Debug)]
pub struct OAuthModule<'a> {
    client: &'a TraktClient,
}

impl<'a> OAuthModule<'a> {
    /// Wraps a client.
    pub const fn new(client: &'a TraktClient) -> Self {
        Self { client }
    }

    fn client_secret(&self) -> Result<String, TraktError> {
        self.client
            .client_secret()
            .filter(|s| !s.trim().is_empty())
            .map(String::from)
            .ok_or_else(|| TraktError::Configuration(String::from("client_secret is required")))
    }

    fn redirect_uri(&self) -> String {
        String::from(self.client.redirect_uri().unwrap_or(OOB_REDIRECT_URI))
    }

    /// Builds the page URL where the user authorizes the application.
    ///
    /// # Errors
    ///
    /// `Url` when the OAuth base URL cannot be joined.
    pub fn authorize_url(&self, state: Option<&str>) -> Result<Url, TraktError> {
        let mut url = self.client.oauth_base_url().join("oauth/authorize")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("response_type", "code")
                .append_pair("client_id", self.client.client_id())
                .append_pair("redirect_uri", &self.redirect_uri());
            if let Some(state) = state {
                pairs.append_pair("state", state);
            }
        }
        Ok(url)
    }

    /// Exchanges an authorization code for a token and stores it.
    ///
    /// # Errors
    ///
    /// - `Configuration` when no client secret is configured.
    /// - `InvalidRequest` for a blank code.
    /// - See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn exchange_code(&self, code: &str) -> Result<AccessToken, TraktError> {
        let body = TokenExchangeBody {
            code: String::from(code),
            client_id: String::from(self.client.client_id()),
            client_secret: self.client_secret()?,
            redirect_uri: self.redirect_uri(),
            grant_type: String::from("authorization_code"),
        };
        let token = self
            .client
            .send(Request::new(OAUTH_TOKEN_EXCHANGE).body(body))
            .await?;
        tracing::debug!(expires_at = ?token.expires_at(), "Obtained Trakt access token");
        self.client.set_access_token(Some(token.clone())).await;
        Ok(token)
    }

    /// Refreshes the token and stores the new one.
    ///
    /// Uses `refresh_token` when given, otherwise the stored token's.
    ///
    /// # Errors
    ///
    /// - `Configuration` when no client secret is configured.
    /// - `InvalidRequest` when no refresh token is available.
    /// - See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn refresh(&self, refresh_token: Option<&str>) -> Result<AccessToken, TraktError> {
        let refresh_token = match refresh_token {
            Some(token) => String::from(token),
            None => self
                .client
                .access_token()
                .await
                .and_then(|token| token.refresh_token)
                .unwrap_or_default(),
        };
        let body = TokenRefreshBody {
            refresh_token,
            client_id: String::from(self.client.client_id()),
            client_secret: self.client_secret()?,
            redirect_uri: self.redirect_uri(),
            grant_type: String::from("refresh_token"),
        };
        let token = self
            .client
            .send(Request::new(OAUTH_TOKEN_REFRESH).body(body))
            .await?;
        tracing::debug!(expires_at = ?token.expires_at(), "Refreshed Trakt access token");
        self.client.set_access_token(Some(token.clone())).await;
        Ok(token)
    }

    /// Revokes the stored token and clears it.
    ///
    /// Does nothing when no token is stored.
    ///
    /// # Errors
    ///
    /// - `Configuration` when no client secret is configured.
    /// - `InvalidRequest` when the stored access token is blank.
    /// - See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn revoke(&self) -> Result<(), TraktError> {
        let Some(token) = self.client.access_token().await else {
            tracing::debug!("No Trakt access token to revoke");
            return Ok(());
        };
        let body = TokenRevokeBody {
            token: token.access_token,
            client_id: String::from(self.client.client_id()),
            client_secret: self.client_secret()?,
        };
        self.client
            .send(Request::new(OAUTH_TOKEN_REVOKE).body(body))
            .await?;
        self.client.set_access_token(None).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> TraktClient {
        TraktClient::builder()
            .base_url(server.uri().parse().unwrap())
            .client_id("cid")
            .client_secret("csecret")
            .redirect_uri("http://localhost/callback")
            .build()
            .unwrap()
    }

    #[test]
    fn test_authorize_url() {
        // Arrange
        let client = TraktClient::builder().client_id("cid").build().unwrap();

        // Act
        let url = client.oauth().authorize_url(Some("xyz")).unwrap();

        // Assert
        assert_eq!(
            url.as_str(),
            "https://trakt.tv/oauth/authorize?response_type=code&client_id=cid&redirect_uri=urn%3Aietf%3Awg%3Aoauth%3A2.0%3Aoob&state=xyz"
        );
    }

    #[tokio::test]
    async fn test_exchange_code_stores_token() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(body_json(serde_json::json!({
                "code": "auth-code",
                "client_id": "cid",
                "client_secret": "csecret",
                "redirect_uri": "http://localhost/callback",
                "grant_type": "authorization_code"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(include_str!("../../../../fixtures/trakt/oauth_token.json")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);

        // Act
        let token = client.oauth().exchange_code("auth-code").await.unwrap();

        // Assert
        assert_eq!(client.access_token().await, Some(token));
    }

    #[tokio::test]
    async fn test_refresh_uses_stored_refresh_token() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(body_json(serde_json::json!({
                "refresh_token": "stored-refresh",
                "client_id": "cid",
                "client_secret": "csecret",
                "redirect_uri": "http://localhost/callback",
                "grant_type": "refresh_token"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(include_str!("../../../../fixtures/trakt/oauth_token.json")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);
        client
            .set_access_token(Some(AccessToken {
                refresh_token: Some(String::from("stored-refresh")),
                ..AccessToken::bearer("old")
            }))
            .await;

        // Act
        let token = client.oauth().refresh(None).await.unwrap();

        // Assert
        assert_ne!(token.access_token, "old");
    }

    #[tokio::test]
    async fn test_refresh_without_token_fails_locally() {
        // Arrange
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);

        // Act
        let err = client.oauth().refresh(None).await.unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "invalid request: Refresh token not set.");
    }

    #[tokio::test]
    async fn test_exchange_requires_client_secret() {
        // Arrange
        let client = TraktClient::builder().client_id("cid").build().unwrap();

        // Act
        let err = client.oauth().exchange_code("auth-code").await.unwrap_err();

        // Assert
        assert!(matches!(err, TraktError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_revoke_clears_token() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/revoke"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);
        client
            .set_access_token(Some(AccessToken::bearer("to-revoke")))
            .await;

        // Act
        client.oauth().revoke().await.unwrap();

        // Assert
        assert!(client.access_token().await.is_none());
    }

    #[tokio::test]
    async fn test_revoke_blank_token_fails_locally() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/revoke"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);
        client.set_access_token(Some(AccessToken::bearer(""))).await;

        // Act
        let err = client.oauth().revoke().await.unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "invalid request: Token not set.");
        assert!(client.access_token().await.is_some());
    }
}
