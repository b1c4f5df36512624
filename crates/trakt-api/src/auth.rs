//! Authentication decision and OAuth token types.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TraktError;
use crate::options::OAuthRequirement;

/// Decides whether a request carries the bearer token.
///
/// Precedence: `Forbidden` > `Required` > global force flag > caller preference.
#[must_use]
pub const fn should_authenticate(
    requirement: OAuthRequirement,
    force_authentication: bool,
    preference: bool,
) -> bool {
    match requirement {
        OAuthRequirement::Forbidden => false,
        OAuthRequirement::Required => true,
        OAuthRequirement::NotRequired | OAuthRequirement::Optional => {
            force_authentication || preference
        }
    }
}

/// Checks a caller preference against the endpoint policy.
///
/// # Errors
///
/// Returns `Configuration` when the preference contradicts a `Required`
/// or `Forbidden` policy.
pub fn check_preference(requirement: OAuthRequirement, preference: bool) -> Result<(), TraktError> {
    match (requirement, preference) {
        (OAuthRequirement::Required, false) => Err(TraktError::Configuration(String::from(
            "This request type requires authentication",
        ))),
        (OAuthRequirement::Forbidden, true) => Err(TraktError::Configuration(String::from(
            "This request type does not allow authentication",
        ))),
        _ => Ok(()),
    }
}

/// OAuth access token as returned by `oauth/token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct AccessToken {
    /// Bearer token.
    pub access_token: String,
    /// Token type (always `bearer`).
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Refresh token.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Granted scope.
    #[serde(default)]
    pub scope: Option<String>,
    /// Unix timestamp of issue.
    #[serde(default)]
    pub created_at: Option<i64>,
}

fn default_token_type() -> String {
    String::from("bearer")
}

impl AccessToken {
    /// Creates a token from a bare access token string.
    #[must_use]
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: default_token_type(),
            expires_in: None,
            refresh_token: None,
            scope: None,
            created_at: None,
        }
    }

    /// Returns the expiry instant when both issue time and lifetime are known.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let created = DateTime::<Utc>::from_timestamp(self.created_at?, 0)?;
        created.checked_add_signed(TimeDelta::try_seconds(self.expires_in?)?)
    }

    /// Returns `true` when the token has a known expiry at or before `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|at| at <= now)
    }
}

/// Body of the authorization-code exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenExchangeBody {
    /// Authorization code.
    pub code: String,
    /// Client id.
    pub client_id: String,
    /// Client secret.
    pub client_secret: String,
    /// Redirect URI registered for the application.
    pub redirect_uri: String,
    /// Always `authorization_code`.
    pub grant_type: String,
}

/// Body of the refresh-token grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRefreshBody {
    /// Refresh token.
    pub refresh_token: String,
    /// Client id.
    pub client_id: String,
    /// Client secret.
    pub client_secret: String,
    /// Redirect URI registered for the application.
    pub redirect_uri: String,
    /// Always `refresh_token`.
    pub grant_type: String,
}

/// Body of the token revocation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRevokeBody {
    /// Access token to revoke.
    pub token: String,
    /// Client id.
    pub client_id: String,
    /// Client secret.
    pub client_secret: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_forbidden_never_authenticates() {
        // Arrange & Act & Assert
        assert!(!should_authenticate(OAuthRequirement::Forbidden, true, true));
        assert!(!should_authenticate(OAuthRequirement::Forbidden, false, false));
    }

    #[test]
    fn test_required_always_authenticates() {
        // Arrange & Act & Assert
        assert!(should_authenticate(OAuthRequirement::Required, false, false));
        assert!(should_authenticate(OAuthRequirement::Required, true, false));
    }

    #[test]
    fn test_force_escalates_non_forbidden() {
        // Arrange & Act & Assert
        assert!(should_authenticate(OAuthRequirement::NotRequired, true, false));
        assert!(should_authenticate(OAuthRequirement::Optional, true, false));
    }

    #[test]
    fn test_preference_decides_otherwise() {
        // Arrange & Act & Assert
        assert!(should_authenticate(OAuthRequirement::Optional, false, true));
        assert!(!should_authenticate(OAuthRequirement::NotRequired, false, false));
    }

    #[test]
    fn test_check_preference_rejects_overrides() {
        // Arrange & Act
        let forbidden = check_preference(OAuthRequirement::Forbidden, true);
        let required = check_preference(OAuthRequirement::Required, false);

        // Assert
        assert!(matches!(forbidden, Err(TraktError::Configuration(_))));
        assert!(matches!(required, Err(TraktError::Configuration(_))));
        assert!(check_preference(OAuthRequirement::Forbidden, false).is_ok());
        assert!(check_preference(OAuthRequirement::NotRequired, true).is_ok());
    }

    #[test]
    fn test_parse_token_response() {
        // Arrange
        let json = include_str!("../../../fixtures/trakt/oauth_token.json");

        // Act
        let token: AccessToken = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.expires_in, Some(7_776_000));
        assert_eq!(
            token.expires_at().unwrap().timestamp(),
            1_487_889_741 + 7_776_000
        );
    }

    #[test]
    fn test_is_expired() {
        // Arrange
        let token = AccessToken {
            expires_in: Some(60),
            created_at: Some(1_700_000_000),
            ..AccessToken::bearer("abc")
        };
        let before = DateTime::<Utc>::from_timestamp(1_700_000_030, 0).unwrap();
        let after = DateTime::<Utc>::from_timestamp(1_700_000_061, 0).unwrap();

        // Act & Assert
        assert!(!token.is_expired(before));
        assert!(token.is_expired(after));
        assert!(!AccessToken::bearer("abc").is_expired(after));
    }
}
