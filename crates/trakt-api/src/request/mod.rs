//! Request descriptors.
//!
//! An [`Endpoint`] is a `const` description of one API operation; a
//! [`Request`] pairs it with the per-call parameters. Dispatch lives in
//! [`crate::api::LocalTraktApi::send`].

pub mod endpoints;
pub mod validate;

use std::fmt;
use std::marker::PhantomData;

use chrono::NaiveDate;
use url::Url;

use crate::auth::check_preference;
use crate::error::TraktError;
use crate::options::{Extended, HttpMethod, IdType, OAuthRequirement, Pagination, Rating, SearchType};

/// Ordered query pairs. Endpoint query functions only append.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Local validation run before any I/O.
pub type Validator<B, R> = fn(&Request<B, R>) -> Result<(), TraktError>;

/// Appends endpoint-specific query pairs.
pub type QueryAppender<B, R> = fn(&Request<B, R>, &mut QueryPairs);

/// Static description of one API operation.
///
/// `B` is the request body type (`()` for bodyless calls) and `R` the
/// decoded response type.
pub struct Endpoint<B, R> {
    method: HttpMethod,
    path: &'static str,
    oauth: OAuthRequirement,
    paginated: bool,
    validate: Validator<B, R>,
    query: QueryAppender<B, R>,
    _types: PhantomData<fn() -> (B, R)>,
}

impl<B, R> Endpoint<B, R> {
    /// Creates an endpoint with no validator, no extra query and no pagination.
    #[must_use]
    pub const fn new(method: HttpMethod, path: &'static str, oauth: OAuthRequirement) -> Self {
        Self {
            method,
            path,
            oauth,
            paginated: false,
            validate: validate::nothing,
            query: no_query,
            _types: PhantomData,
        }
    }

    /// Shorthand for a `GET` endpoint.
    #[must_use]
    pub const fn get(path: &'static str, oauth: OAuthRequirement) -> Self {
        Self::new(HttpMethod::Get, path, oauth)
    }

    /// Shorthand for a `POST` endpoint.
    #[must_use]
    pub const fn post(path: &'static str, oauth: OAuthRequirement) -> Self {
        Self::new(HttpMethod::Post, path, oauth)
    }

    /// Shorthand for a `DELETE` endpoint.
    #[must_use]
    pub const fn delete(path: &'static str, oauth: OAuthRequirement) -> Self {
        Self::new(HttpMethod::Delete, path, oauth)
    }

    /// Marks the endpoint as accepting `page` / `limit`.
    #[must_use]
    pub const fn paginated(mut self) -> Self {
        self.paginated = true;
        self
    }

    /// Sets the validator.
    #[must_use]
    pub const fn validated_by(mut self, validate: Validator<B, R>) -> Self {
        self.validate = validate;
        self
    }

    /// Sets the query appender.
    #[must_use]
    pub const fn with_query(mut self, query: QueryAppender<B, R>) -> Self {
        self.query = query;
        self
    }

    /// HTTP verb.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Path template.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Authentication policy.
    #[must_use]
    pub const fn oauth(&self) -> OAuthRequirement {
        self.oauth
    }

    /// Whether `page` / `limit` are sent.
    #[must_use]
    pub const fn is_paginated(&self) -> bool {
        self.paginated
    }
}

impl<B, R> Clone for Endpoint<B, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B, R> Copy for Endpoint<B, R> {}

impl<B, R> fmt::Debug for Endpoint<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("oauth", &self.oauth)
            .field("paginated", &self.paginated)
            .finish_non_exhaustive()
    }
}

fn no_query<B, R>(_request: &Request<B, R>, _pairs: &mut QueryPairs) {}

/// Per-call parameters.
///
/// Path parameters are derived from the fields in a fixed order; the rest
/// feed endpoint query appenders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    /// `{id}`: Trakt id, slug or IMDB id.
    pub id: Option<String>,
    /// `{season}`.
    pub season: Option<u32>,
    /// `{episode}`.
    pub episode: Option<u32>,
    /// `{language}`: two-letter code (optional trailing segment).
    pub language: Option<String>,
    /// `{start_date}` (optional trailing segment).
    pub start_date: Option<NaiveDate>,
    /// `{rating}` filter (optional trailing segment).
    pub rating: Option<Rating>,
    /// Search text.
    pub query: Option<String>,
    /// Search type filter.
    pub search_type: Option<SearchType>,
    /// Id namespace for id lookups.
    pub id_type: Option<IdType>,
    /// Id value for id lookups.
    pub lookup_id: Option<String>,
}

impl RequestParams {
    /// Returns the path parameter mapping.
    ///
    /// `id`, `season` and `episode` appear only when set, so a missing
    /// required value leaves its token untouched. Optional trailing segments
    /// always resolve, to an empty string when unset.
    #[must_use]
    pub fn path_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(6);
        if let Some(id) = &self.id {
            params.push(("id", id.clone()));
        }
        if let Some(season) = self.season {
            params.push(("season", season.to_string()));
        }
        if let Some(episode) = self.episode {
            params.push(("episode", episode.to_string()));
        }
        params.push(("language", self.language.clone().unwrap_or_default()));
        params.push((
            "start_date",
            self.start_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ));
        params.push((
            "rating",
            self.rating.map(|r| r.to_string()).unwrap_or_default(),
        ));
        params
    }
}

/// A configured call of one [`Endpoint`].
#[derive(Debug, Clone)]
pub struct Request<B, R> {
    endpoint: Endpoint<B, R>,
    params: RequestParams,
    extended: Extended,
    pagination: Pagination,
    authenticate: bool,
    body: Option<B>,
}

impl<B, R> Request<B, R> {
    /// Creates a request with default options.
    #[must_use]
    pub fn new(endpoint: Endpoint<B, R>) -> Self {
        Self {
            endpoint,
            params: RequestParams::default(),
            extended: Extended::Unspecified,
            pagination: Pagination::default(),
            authenticate: false,
            body: None,
        }
    }

    /// Sets `{id}`.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.params.id = Some(id.into());
        self
    }

    /// Sets `{season}`.
    #[must_use]
    pub const fn season(mut self, season: u32) -> Self {
        self.params.season = Some(season);
        self
    }

    /// Sets `{episode}`.
    #[must_use]
    pub const fn episode(mut self, episode: u32) -> Self {
        self.params.episode = Some(episode);
        self
    }

    /// Sets `{language}`.
    #[must_use]
    pub fn language(mut self, language: Option<String>) -> Self {
        self.params.language = language;
        self
    }

    /// Sets `{start_date}`.
    #[must_use]
    pub const fn start_date(mut self, start_date: Option<NaiveDate>) -> Self {
        self.params.start_date = start_date;
        self
    }

    /// Sets the `{rating}` filter.
    #[must_use]
    pub const fn rating(mut self, rating: Option<Rating>) -> Self {
        self.params.rating = rating;
        self
    }

    /// Sets the search text.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.params.query = Some(query.into());
        self
    }

    /// Sets the search type filter.
    #[must_use]
    pub const fn search_type(mut self, search_type: Option<SearchType>) -> Self {
        self.params.search_type = search_type;
        self
    }

    /// Sets the id namespace and value for an id lookup.
    #[must_use]
    pub fn lookup(mut self, id_type: IdType, id: impl Into<String>) -> Self {
        self.params.id_type = Some(id_type);
        self.params.lookup_id = Some(id.into());
        self
    }

    /// Sets the extended-data option.
    #[must_use]
    pub const fn extended(mut self, extended: Extended) -> Self {
        self.extended = extended;
        self
    }

    /// Sets the pagination option.
    #[must_use]
    pub const fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the caller's authentication preference.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` when `authenticate` contradicts a `Required`
    /// or `Forbidden` endpoint.
    pub fn authenticate(mut self, authenticate: bool) -> Result<Self, TraktError> {
        check_preference(self.endpoint.oauth, authenticate)?;
        self.authenticate = authenticate;
        Ok(self)
    }

    /// The endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint<B, R> {
        &self.endpoint
    }

    /// The parameters.
    #[must_use]
    pub const fn params(&self) -> &RequestParams {
        &self.params
    }

    /// The extended-data option.
    #[must_use]
    pub const fn extended_option(&self) -> Extended {
        self.extended
    }

    /// The pagination option.
    #[must_use]
    pub const fn pagination_option(&self) -> Pagination {
        self.pagination
    }

    /// The caller's authentication preference.
    #[must_use]
    pub const fn authenticate_preference(&self) -> bool {
        self.authenticate
    }

    /// The body, if set.
    #[must_use]
    pub const fn body_ref(&self) -> Option<&B> {
        self.body.as_ref()
    }

    /// Runs the endpoint validator.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` naming the first missing or invalid parameter.
    pub fn validate(&self) -> Result<(), TraktError> {
        (self.endpoint.validate)(self)
    }

    /// Resolves the path template.
    ///
    /// The template and the resolved values are lower-cased and a trailing
    /// `/` is trimmed.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = self.endpoint.path.to_lowercase();
        for (key, value) in self.params.path_params() {
            let token = format!("{{{key}}}");
            if path.contains(&token) {
                path = path.replace(&token, &value.to_lowercase());
            }
        }
        while path.ends_with('/') {
            path.pop();
        }
        path
    }

    /// Returns the query pairs in emission order: `extended`, then
    /// `page` / `limit` for paginated endpoints, then endpoint pairs.
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(extended) = self.extended.wire_value() {
            pairs.push(("extended", String::from(extended)));
        }
        if self.endpoint.paginated {
            if let Some(page) = self.pagination.page {
                pairs.push(("page", page.to_string()));
            }
            if let Some(limit) = self.pagination.limit {
                pairs.push(("limit", limit.to_string()));
            }
        }
        (self.endpoint.query)(self, &mut pairs);
        pairs
    }

    /// Builds the absolute URL against `base`.
    ///
    /// # Errors
    ///
    /// Returns `Url` when the joined path is not a valid URL.
    pub fn url(&self, base: &Url) -> Result<Url, TraktError> {
        let mut url = base.join(&self.path())?;
        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    /// Consumes the request and returns its body.
    pub(crate) fn into_body(self) -> Option<B> {
        self.body
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::endpoints::{
        EPISODES_COMMENTS, MOVIES_POPULAR, MOVIES_RELEASES, MOVIES_SUMMARY, OAUTH_TOKEN_REVOKE,
        SEARCH_TEXT, SHOWS_PROGRESS_WATCHED, SYNC_RATINGS_MOVIES,
    };
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.trakt.tv/").unwrap()
    }

    #[test]
    fn test_episode_comments_path() {
        // Arrange
        let request = Request::new(EPISODES_COMMENTS)
            .id("game-of-thrones")
            .season(1)
            .episode(5);

        // Act
        let path = request.path();

        // Assert
        assert!(request.validate().is_ok());
        assert_eq!(path, "shows/game-of-thrones/seasons/1/episodes/5/comments");
    }

    #[test]
    fn test_season_zero_fails_validation() {
        // Arrange
        let request = Request::new(EPISODES_COMMENTS)
            .id("game-of-thrones")
            .season(0)
            .episode(5);

        // Act
        let err = request.validate().unwrap_err();

        // Assert
        assert!(matches!(
            err,
            TraktError::InvalidRequest(ref msg) if msg == "Season must be a positive integer."
        ));
    }

    #[test]
    fn test_missing_id_fails_validation() {
        // Arrange
        let request = Request::new(MOVIES_SUMMARY);

        // Act
        let err = request.validate().unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "invalid request: Id not set.");
        assert_eq!(request.path(), "movies/{id}");
    }

    #[test]
    fn test_values_are_lowercased() {
        // Arrange
        let request = Request::new(MOVIES_SUMMARY).id("TRON-Legacy-2010");

        // Act & Assert
        assert_eq!(request.path(), "movies/tron-legacy-2010");
    }

    #[test]
    fn test_optional_trailing_segment_is_trimmed() {
        // Arrange
        let without = Request::new(MOVIES_RELEASES).id("tron-legacy-2010");
        let with = Request::new(MOVIES_RELEASES)
            .id("tron-legacy-2010")
            .language(Some(String::from("US")));
        let ratings = Request::new(SYNC_RATINGS_MOVIES);

        // Act & Assert
        assert_eq!(without.path(), "movies/tron-legacy-2010/releases");
        assert_eq!(with.path(), "movies/tron-legacy-2010/releases/us");
        assert_eq!(ratings.path(), "sync/ratings/movies");
    }

    #[test]
    fn test_resolved_paths_have_no_tokens() {
        // Arrange
        let paths = [
            Request::new(EPISODES_COMMENTS).id("x").season(2).episode(3).path(),
            Request::new(MOVIES_SUMMARY).id("x").path(),
            Request::new(SHOWS_PROGRESS_WATCHED).id("x").path(),
            Request::new(SYNC_RATINGS_MOVIES)
                .rating(Some(Rating::new(9).unwrap()))
                .path(),
        ];

        // Act & Assert
        for path in paths {
            assert!(!path.contains('{'), "{path}");
            assert!(!path.ends_with('/'), "{path}");
        }
    }

    #[test]
    fn test_paginated_endpoint_emits_page_and_limit() {
        // Arrange
        let request = Request::new(MOVIES_POPULAR).pagination(Pagination::new(Some(2), Some(10)));

        // Act
        let url = request.url(&base()).unwrap();

        // Assert
        assert_eq!(url.as_str(), "https://api.trakt.tv/movies/popular?page=2&limit=10");
    }

    #[test]
    fn test_non_paginated_endpoint_drops_page_and_limit() {
        // Arrange
        let request = Request::new(MOVIES_SUMMARY)
            .id("tron-legacy-2010")
            .pagination(Pagination::new(Some(2), Some(10)));

        // Act
        let url = request.url(&base()).unwrap();

        // Assert
        assert_eq!(url.as_str(), "https://api.trakt.tv/movies/tron-legacy-2010");
    }

    #[test]
    fn test_extended_comes_first() {
        // Arrange
        let request = Request::new(SEARCH_TEXT)
            .query("tron legacy")
            .search_type(Some(SearchType::Movie))
            .extended(Extended::Full)
            .pagination(Pagination::new(Some(1), None));

        // Act
        let url = request.url(&base()).unwrap();

        // Assert
        assert_eq!(
            url.as_str(),
            "https://api.trakt.tv/search?extended=full&page=1&query=tron+legacy&type=movie"
        );
    }

    #[test]
    fn test_base_with_path_prefix_is_kept() {
        // Arrange
        let base = Url::parse("http://127.0.0.1:8080/trakt/").unwrap();
        let request = Request::new(MOVIES_POPULAR);

        // Act
        let url = request.url(&base).unwrap();

        // Assert
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/trakt/movies/popular");
    }

    #[test]
    fn test_authenticate_override_rules() {
        // Arrange & Act
        let forbidden = Request::new(OAUTH_TOKEN_REVOKE).authenticate(true);
        let required = Request::new(SHOWS_PROGRESS_WATCHED).authenticate(false);
        let optional = Request::new(MOVIES_POPULAR).authenticate(true);

        // Assert
        assert!(matches!(forbidden, Err(TraktError::Configuration(_))));
        assert!(matches!(required, Err(TraktError::Configuration(_))));
        assert!(optional.unwrap().authenticate_preference());
    }

    #[test]
    fn test_endpoint_debug_is_readable() {
        // Arrange & Act
        let debug = format!("{MOVIES_POPULAR:?}");

        // Assert
        assert!(debug.contains("movies/popular"));
        assert!(debug.contains("paginated: true"));
    }
}
