//! Endpoint validators.
//!
//! Each validator checks the parameters one endpoint needs and fails with
//! `InvalidRequest` before any network I/O.

use super::{QueryPairs, Request};
use crate::auth::{TokenExchangeBody, TokenRefreshBody, TokenRevokeBody};
use crate::error::TraktError;
use crate::types::SyncItems;

fn invalid(message: &str) -> TraktError {
    TraktError::InvalidRequest(String::from(message))
}

/// Accepts every request.
///
/// # Errors
///
/// Never fails.
pub const fn nothing<B, R>(_request: &Request<B, R>) -> Result<(), TraktError> {
    Ok(())
}

/// Requires a non-blank `{id}`.
///
/// # Errors
///
/// `Id not set.`
pub fn id<B, R>(request: &Request<B, R>) -> Result<(), TraktError> {
    match request.params().id.as_deref() {
        Some(id) if !id.trim().is_empty() => Ok(()),
        _ => Err(invalid("Id not set.")),
    }
}

/// Requires `{id}` and a positive `{season}`.
///
/// # Errors
///
/// `Id not set.` or `Season must be a positive integer.`
pub fn id_season<B, R>(request: &Request<B, R>) -> Result<(), TraktError> {
    id(request)?;
    match request.params().season {
        Some(season) if season > 0 => Ok(()),
        _ => Err(invalid("Season must be a positive integer.")),
    }
}

/// Requires `{id}`, a positive `{season}` and a positive `{episode}`.
///
/// # Errors
///
/// The first failing of the id, season and episode checks.
pub fn id_season_episode<B, R>(request: &Request<B, R>) -> Result<(), TraktError> {
    id_season(request)?;
    match request.params().episode {
        Some(episode) if episode > 0 => Ok(()),
        _ => Err(invalid("Episode must be a positive integer.")),
    }
}

/// Requires non-blank search text.
///
/// # Errors
///
/// `Query not set.`
pub fn search_query<B, R>(request: &Request<B, R>) -> Result<(), TraktError> {
    match request.params().query.as_deref() {
        Some(query) if !query.trim().is_empty() => Ok(()),
        _ => Err(invalid("Query not set.")),
    }
}

/// Requires an id namespace and a non-blank lookup id.
///
/// # Errors
///
/// `Id not set.`
pub fn lookup_id<B, R>(request: &Request<B, R>) -> Result<(), TraktError> {
    let params = request.params();
    match (params.id_type, params.lookup_id.as_deref()) {
        (Some(_), Some(id)) if !id.trim().is_empty() => Ok(()),
        _ => Err(invalid("Id not set.")),
    }
}

/// Requires at least one item in a sync body, each carrying an id.
///
/// # Errors
///
/// - `At least one movie, show, season or episode must be included in the request.`
/// - `Every item must carry at least one id.`
pub fn sync_items<R>(request: &Request<SyncItems, R>) -> Result<(), TraktError> {
    match request.body_ref() {
        Some(items) if items.is_postable() => Ok(()),
        Some(items) if !items.is_empty() => Err(invalid("Every item must carry at least one id.")),
        _ => Err(invalid(
            "At least one movie, show, season or episode must be included in the request.",
        )),
    }
}

/// Requires an authorization code.
///
/// # Errors
///
/// `Code not set.`
pub fn exchange_code<R>(request: &Request<TokenExchangeBody, R>) -> Result<(), TraktError> {
    match request.body_ref() {
        Some(body) if !body.code.trim().is_empty() => Ok(()),
        _ => Err(invalid("Code not set.")),
    }
}

/// Requires a refresh token.
///
/// # Errors
///
/// `Refresh token not set.`
pub fn refresh_token<R>(request: &Request<TokenRefreshBody, R>) -> Result<(), TraktError> {
    match request.body_ref() {
        Some(body) if !body.refresh_token.trim().is_empty() => Ok(()),
        _ => Err(invalid("Refresh token not set.")),
    }
}

/// Requires the token being revoked.
///
/// # Errors
///
/// `Token not set.`
pub fn revoke_token<R>(request: &Request<TokenRevokeBody, R>) -> Result<(), TraktError> {
    match request.body_ref() {
        Some(body) if !body.token.trim().is_empty() => Ok(()),
        _ => Err(invalid("Token not set.")),
    }
}

/// Appends `query` and, when set, `type`.
pub fn search_text_query<B, R>(request: &Request<B, R>, pairs: &mut QueryPairs) {
    let params = request.params();
    if let Some(query) = &params.query {
        pairs.push(("query", query.clone()));
    }
    if let Some(search_type) = params.search_type {
        pairs.push(("type", String::from(search_type.wire_value())));
    }
}

/// Appends `id_type` and `id`.
pub fn search_id_query<B, R>(request: &Request<B, R>, pairs: &mut QueryPairs) {
    let params = request.params();
    if let Some(id_type) = params.id_type {
        pairs.push(("id_type", String::from(id_type.wire_value())));
    }
    if let Some(id) = &params.lookup_id {
        pairs.push(("id", id.clone()));
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::super::endpoints::{
        OAUTH_TOKEN_EXCHANGE, OAUTH_TOKEN_REFRESH, OAUTH_TOKEN_REVOKE, SEARCH_ID, SEARCH_TEXT,
        SEASONS_EPISODES, SYNC_HISTORY_ADD, SYNC_RATINGS_ADD,
    };
    use super::*;
    use crate::options::IdType;
    use crate::types::{Ids, SyncItem};

    fn message(err: TraktError) -> String {
        match err {
            TraktError::InvalidRequest(msg) => msg,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_id_is_rejected() {
        // Arrange
        let request = Request::new(SEASONS_EPISODES).id("   ").season(1);

        // Act & Assert
        assert_eq!(message(request.validate().unwrap_err()), "Id not set.");
    }

    #[test]
    fn test_missing_season_is_rejected() {
        // Arrange
        let request = Request::new(SEASONS_EPISODES).id("game-of-thrones");

        // Act & Assert
        assert_eq!(
            message(request.validate().unwrap_err()),
            "Season must be a positive integer."
        );
    }

    #[test]
    fn test_search_requires_query() {
        // Arrange
        let request = Request::new(SEARCH_TEXT);

        // Act & Assert
        assert_eq!(message(request.validate().unwrap_err()), "Query not set.");
    }

    #[test]
    fn test_search_id_query_pairs() {
        // Arrange
        let request = Request::new(SEARCH_ID).lookup(IdType::Imdb, "tt0848228");

        // Act
        let pairs = request.query_pairs();

        // Assert
        assert!(request.validate().is_ok());
        assert_eq!(
            pairs,
            vec![("id_type", String::from("imdb")), ("id", String::from("tt0848228"))]
        );
    }

    #[test]
    fn test_empty_sync_body_is_rejected() {
        // Arrange
        let missing = Request::new(SYNC_RATINGS_ADD);
        let empty = Request::new(SYNC_RATINGS_ADD).body(SyncItems::default());

        // Act & Assert
        for request in [missing, empty] {
            assert_eq!(
                message(request.validate().unwrap_err()),
                "At least one movie, show, season or episode must be included in the request."
            );
        }
    }

    #[test]
    fn test_oauth_bodies_are_checked() {
        // Arrange
        let exchange = Request::new(OAUTH_TOKEN_EXCHANGE).body(TokenExchangeBody {
            code: String::new(),
            client_id: String::from("id"),
            client_secret: String::from("secret"),
            redirect_uri: String::from("urn:ietf:wg:oauth:2.0:oob"),
            grant_type: String::from("authorization_code"),
        });
        let refresh = Request::new(OAUTH_TOKEN_REFRESH);

        // Act & Assert
        assert_eq!(message(exchange.validate().unwrap_err()), "Code not set.");
        assert_eq!(
            message(refresh.validate().unwrap_err()),
            "Refresh token not set."
        );
    }

    #[test]
    fn test_revoke_requires_token() {
        // Arrange
        let missing = Request::new(OAUTH_TOKEN_REVOKE);
        let blank = Request::new(OAUTH_TOKEN_REVOKE).body(TokenRevokeBody {
            token: String::from("  "),
            client_id: String::from("id"),
            client_secret: String::from("secret"),
        });
        let present = Request::new(OAUTH_TOKEN_REVOKE).body(TokenRevokeBody {
            token: String::from("access"),
            client_id: String::from("id"),
            client_secret: String::from("secret"),
        });

        // Act & Assert
        for request in [missing, blank] {
            assert_eq!(message(request.validate().unwrap_err()), "Token not set.");
        }
        assert!(present.validate().is_ok());
    }

    #[test]
    fn test_sync_items_without_ids_are_rejected() {
        // Arrange
        let request = Request::new(SYNC_HISTORY_ADD).body(SyncItems {
            movies: vec![SyncItem::from_ids(Ids::default())],
            ..SyncItems::default()
        });

        // Act & Assert
        assert_eq!(
            message(request.validate().unwrap_err()),
            "Every item must carry at least one id."
        );
    }
}
