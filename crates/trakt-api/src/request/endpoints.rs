//! Endpoint table.
//!
//! One `const` per API operation. Adding an operation means adding a row
//! here and, if it needs one, a validator in [`super::validate`].

use super::Endpoint;
use super::validate::{
    exchange_code, id, id_season, id_season_episode, lookup_id, refresh_token, search_id_query,
    revoke_token, search_query, search_text_query, sync_items,
};
use crate::auth::{AccessToken, TokenExchangeBody, TokenRefreshBody, TokenRevokeBody};
use crate::options::OAuthRequirement::{Forbidden, NotRequired, Required};
use crate::types::{
    Alias, CollectedMovie, CollectedShow, Comment, Episode, LastActivities, Movie, People,
    PlaybackItem, RatedEpisode, RatedMovie, RatedSeason, RatedShow, Ratings, Release,
    SearchResult, Season, Show, ShowProgress, SyncItems, SyncResult, Translation, TrendingMovie,
    TrendingShow, UpdatedMovie, UpdatedShow, User, WatchedMovie, WatchedShow, WatchlistedEpisode,
    WatchlistedMovie, WatchlistedSeason, WatchlistedShow,
};

// - movies -----------------------------------------------------------------------------------

/// `GET movies/popular`
pub const MOVIES_POPULAR: Endpoint<(), Vec<Movie>> =
    Endpoint::get("movies/popular", NotRequired).paginated();

/// `GET movies/trending`
pub const MOVIES_TRENDING: Endpoint<(), Vec<TrendingMovie>> =
    Endpoint::get("movies/trending", NotRequired).paginated();

/// `GET movies/updates/{start_date}`
pub const MOVIES_UPDATES: Endpoint<(), Vec<UpdatedMovie>> =
    Endpoint::get("movies/updates/{start_date}", NotRequired).paginated();

/// `GET movies/{id}`
pub const MOVIES_SUMMARY: Endpoint<(), Movie> =
    Endpoint::get("movies/{id}", NotRequired).validated_by(id);

/// `GET movies/{id}/aliases`
pub const MOVIES_ALIASES: Endpoint<(), Vec<Alias>> =
    Endpoint::get("movies/{id}/aliases", NotRequired).validated_by(id);

/// `GET movies/{id}/releases/{language}`
pub const MOVIES_RELEASES: Endpoint<(), Vec<Release>> =
    Endpoint::get("movies/{id}/releases/{language}", NotRequired).validated_by(id);

/// `GET movies/{id}/translations/{language}`
pub const MOVIES_TRANSLATIONS: Endpoint<(), Vec<Translation>> =
    Endpoint::get("movies/{id}/translations/{language}", NotRequired).validated_by(id);

/// `GET movies/{id}/comments`
pub const MOVIES_COMMENTS: Endpoint<(), Vec<Comment>> =
    Endpoint::get("movies/{id}/comments", NotRequired)
        .paginated()
        .validated_by(id);

/// `GET movies/{id}/people`
pub const MOVIES_PEOPLE: Endpoint<(), People> =
    Endpoint::get("movies/{id}/people", NotRequired).validated_by(id);

/// `GET movies/{id}/ratings`
pub const MOVIES_RATINGS: Endpoint<(), Ratings> =
    Endpoint::get("movies/{id}/ratings", NotRequired).validated_by(id);

/// `GET movies/{id}/related`
pub const MOVIES_RELATED: Endpoint<(), Vec<Movie>> =
    Endpoint::get("movies/{id}/related", NotRequired)
        .paginated()
        .validated_by(id);

/// `GET movies/{id}/watching`
pub const MOVIES_WATCHING: Endpoint<(), Vec<User>> =
    Endpoint::get("movies/{id}/watching", NotRequired).validated_by(id);

// - shows ------------------------------------------------------------------------------------

/// `GET shows/popular`
pub const SHOWS_POPULAR: Endpoint<(), Vec<Show>> =
    Endpoint::get("shows/popular", NotRequired).paginated();

/// `GET shows/trending`
pub const SHOWS_TRENDING: Endpoint<(), Vec<TrendingShow>> =
    Endpoint::get("shows/trending", NotRequired).paginated();

/// `GET shows/updates/{start_date}`
pub const SHOWS_UPDATES: Endpoint<(), Vec<UpdatedShow>> =
    Endpoint::get("shows/updates/{start_date}", NotRequired).paginated();

/// `GET shows/{id}`
pub const SHOWS_SUMMARY: Endpoint<(), Show> =
    Endpoint::get("shows/{id}", NotRequired).validated_by(id);

/// `GET shows/{id}/aliases`
pub const SHOWS_ALIASES: Endpoint<(), Vec<Alias>> =
    Endpoint::get("shows/{id}/aliases", NotRequired).validated_by(id);

/// `GET shows/{id}/translations/{language}`
pub const SHOWS_TRANSLATIONS: Endpoint<(), Vec<Translation>> =
    Endpoint::get("shows/{id}/translations/{language}", NotRequired).validated_by(id);

/// `GET shows/{id}/comments`
pub const SHOWS_COMMENTS: Endpoint<(), Vec<Comment>> =
    Endpoint::get("shows/{id}/comments", NotRequired)
        .paginated()
        .validated_by(id);

/// `GET shows/{id}/people`
pub const SHOWS_PEOPLE: Endpoint<(), People> =
    Endpoint::get("shows/{id}/people", NotRequired).validated_by(id);

/// `GET shows/{id}/ratings`
pub const SHOWS_RATINGS: Endpoint<(), Ratings> =
    Endpoint::get("shows/{id}/ratings", NotRequired).validated_by(id);

/// `GET shows/{id}/related`
pub const SHOWS_RELATED: Endpoint<(), Vec<Show>> =
    Endpoint::get("shows/{id}/related", NotRequired)
        .paginated()
        .validated_by(id);

/// `GET shows/{id}/watching`
pub const SHOWS_WATCHING: Endpoint<(), Vec<User>> =
    Endpoint::get("shows/{id}/watching", NotRequired).validated_by(id);

/// `GET shows/{id}/progress/collection`
pub const SHOWS_PROGRESS_COLLECTION: Endpoint<(), ShowProgress> =
    Endpoint::get("shows/{id}/progress/collection", Required).validated_by(id);

/// `GET shows/{id}/progress/watched`
pub const SHOWS_PROGRESS_WATCHED: Endpoint<(), ShowProgress> =
    Endpoint::get("shows/{id}/progress/watched", Required).validated_by(id);

// - seasons ----------------------------------------------------------------------------------

/// `GET shows/{id}/seasons`
pub const SEASONS_SUMMARY: Endpoint<(), Vec<Season>> =
    Endpoint::get("shows/{id}/seasons", NotRequired).validated_by(id);

/// `GET shows/{id}/seasons/{season}`
pub const SEASONS_EPISODES: Endpoint<(), Vec<Episode>> =
    Endpoint::get("shows/{id}/seasons/{season}", NotRequired).validated_by(id_season);

/// `GET shows/{id}/seasons/{season}/comments`
pub const SEASONS_COMMENTS: Endpoint<(), Vec<Comment>> =
    Endpoint::get("shows/{id}/seasons/{season}/comments", NotRequired).validated_by(id_season);

/// `GET shows/{id}/seasons/{season}/ratings`
pub const SEASONS_RATINGS: Endpoint<(), Ratings> =
    Endpoint::get("shows/{id}/seasons/{season}/ratings", NotRequired).validated_by(id_season);

/// `GET shows/{id}/seasons/{season}/watching`
pub const SEASONS_WATCHING: Endpoint<(), Vec<User>> =
    Endpoint::get("shows/{id}/seasons/{season}/watching", NotRequired).validated_by(id_season);

// - episodes ---------------------------------------------------------------------------------

/// `GET shows/{id}/seasons/{season}/episodes/{episode}`
pub const EPISODES_SUMMARY: Endpoint<(), Episode> = Endpoint::get(
    "shows/{id}/seasons/{season}/episodes/{episode}",
    NotRequired,
)
.validated_by(id_season_episode);

/// `GET shows/{id}/seasons/{season}/episodes/{episode}/comments`
pub const EPISODES_COMMENTS: Endpoint<(), Vec<Comment>> = Endpoint::get(
    "shows/{id}/seasons/{season}/episodes/{episode}/comments",
    NotRequired,
)
.paginated()
.validated_by(id_season_episode);

/// `GET shows/{id}/seasons/{season}/episodes/{episode}/ratings`
pub const EPISODES_RATINGS: Endpoint<(), Ratings> = Endpoint::get(
    "shows/{id}/seasons/{season}/episodes/{episode}/ratings",
    NotRequired,
)
.validated_by(id_season_episode);

/// `GET shows/{id}/seasons/{season}/episodes/{episode}/watching`
pub const EPISODES_WATCHING: Endpoint<(), Vec<User>> = Endpoint::get(
    "shows/{id}/seasons/{season}/episodes/{episode}/watching",
    NotRequired,
)
.validated_by(id_season_episode);

// - search -----------------------------------------------------------------------------------

/// `GET search?query=...&type=...`
pub const SEARCH_TEXT: Endpoint<(), Vec<SearchResult>> = Endpoint::get("search", NotRequired)
    .paginated()
    .validated_by(search_query)
    .with_query(search_text_query);

/// `GET search?id_type=...&id=...`
pub const SEARCH_ID: Endpoint<(), Vec<SearchResult>> = Endpoint::get("search", NotRequired)
    .paginated()
    .validated_by(lookup_id)
    .with_query(search_id_query);

// - sync -------------------------------------------------------------------------------------

/// `GET sync/last_activities`
pub const SYNC_LAST_ACTIVITIES: Endpoint<(), LastActivities> =
    Endpoint::get("sync/last_activities", Required);

/// `GET sync/playback`
pub const SYNC_PLAYBACK: Endpoint<(), Vec<PlaybackItem>> = Endpoint::get("sync/playback", Required);

/// `DELETE sync/playback/{id}`
pub const SYNC_PLAYBACK_REMOVE: Endpoint<(), ()> =
    Endpoint::delete("sync/playback/{id}", Required).validated_by(id);

/// `GET sync/collection/movies`
pub const SYNC_COLLECTION_MOVIES: Endpoint<(), Vec<CollectedMovie>> =
    Endpoint::get("sync/collection/movies", Required);

/// `GET sync/collection/shows`
pub const SYNC_COLLECTION_SHOWS: Endpoint<(), Vec<CollectedShow>> =
    Endpoint::get("sync/collection/shows", Required);

/// `POST sync/collection`
pub const SYNC_COLLECTION_ADD: Endpoint<SyncItems, SyncResult> =
    Endpoint::post("sync/collection", Required).validated_by(sync_items);

/// `POST sync/collection/remove`
pub const SYNC_COLLECTION_REMOVE: Endpoint<SyncItems, SyncResult> =
    Endpoint::post("sync/collection/remove", Required).validated_by(sync_items);

/// `GET sync/watched/movies`
pub const SYNC_WATCHED_MOVIES: Endpoint<(), Vec<WatchedMovie>> =
    Endpoint::get("sync/watched/movies", Required);

/// `GET sync/watched/shows`
pub const SYNC_WATCHED_SHOWS: Endpoint<(), Vec<WatchedShow>> =
    Endpoint::get("sync/watched/shows", Required);

/// `POST sync/history`
pub const SYNC_HISTORY_ADD: Endpoint<SyncItems, SyncResult> =
    Endpoint::post("sync/history", Required).validated_by(sync_items);

/// `POST sync/history/remove`
pub const SYNC_HISTORY_REMOVE: Endpoint<SyncItems, SyncResult> =
    Endpoint::post("sync/history/remove", Required).validated_by(sync_items);

/// `GET sync/ratings/movies/{rating}`
pub const SYNC_RATINGS_MOVIES: Endpoint<(), Vec<RatedMovie>> =
    Endpoint::get("sync/ratings/movies/{rating}", Required);

/// `GET sync/ratings/shows/{rating}`
pub const SYNC_RATINGS_SHOWS: Endpoint<(), Vec<RatedShow>> =
    Endpoint::get("sync/ratings/shows/{rating}", Required);

/// `GET sync/ratings/seasons/{rating}`
pub const SYNC_RATINGS_SEASONS: Endpoint<(), Vec<RatedSeason>> =
    Endpoint::get("sync/ratings/seasons/{rating}", Required);

/// `GET sync/ratings/episodes/{rating}`
pub const SYNC_RATINGS_EPISODES: Endpoint<(), Vec<RatedEpisode>> =
    Endpoint::get("sync/ratings/episodes/{rating}", Required);

/// `POST sync/ratings`
pub const SYNC_RATINGS_ADD: Endpoint<SyncItems, SyncResult> =
    Endpoint::post("sync/ratings", Required).validated_by(sync_items);

/// `POST sync/ratings/remove`
pub const SYNC_RATINGS_REMOVE: Endpoint<SyncItems, SyncResult> =
    Endpoint::post("sync/ratings/remove", Required).validated_by(sync_items);

/// `GET sync/watchlist/movies`
pub const SYNC_WATCHLIST_MOVIES: Endpoint<(), Vec<WatchlistedMovie>> =
    Endpoint::get("sync/watchlist/movies", Required);

/// `GET sync/watchlist/shows`
pub const SYNC_WATCHLIST_SHOWS: Endpoint<(), Vec<WatchlistedShow>> =
    Endpoint::get("sync/watchlist/shows", Required);

/// `GET sync/watchlist/seasons`
pub const SYNC_WATCHLIST_SEASONS: Endpoint<(), Vec<WatchlistedSeason>> =
    Endpoint::get("sync/watchlist/seasons", Required);

/// `GET sync/watchlist/episodes`
pub const SYNC_WATCHLIST_EPISODES: Endpoint<(), Vec<WatchlistedEpisode>> =
    Endpoint::get("sync/watchlist/episodes", Required);

/// `POST sync/watchlist`
pub const SYNC_WATCHLIST_ADD: Endpoint<SyncItems, SyncResult> =
    Endpoint::post("sync/watchlist", Required).validated_by(sync_items);

/// `POST sync/watchlist/remove`
pub const SYNC_WATCHLIST_REMOVE: Endpoint<SyncItems, SyncResult> =
    Endpoint::post("sync/watchlist/remove", Required).validated_by(sync_items);

// - oauth ------------------------------------------------------------------------------------

/// `POST oauth/token` (authorization code grant)
pub const OAUTH_TOKEN_EXCHANGE: Endpoint<TokenExchangeBody, AccessToken> =
    Endpoint::post("oauth/token", Forbidden).validated_by(exchange_code);

/// `POST oauth/token` (refresh token grant)
pub const OAUTH_TOKEN_REFRESH: Endpoint<TokenRefreshBody, AccessToken> =
    Endpoint::post("oauth/token", Forbidden).validated_by(refresh_token);

/// `POST oauth/revoke`
pub const OAUTH_TOKEN_REVOKE: Endpoint<TokenRevokeBody, ()> =
    Endpoint::post("oauth/revoke", Forbidden).validated_by(revoke_token);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{HttpMethod, OAuthRequirement};

    #[test]
    fn test_sync_reads_require_auth() {
        // Arrange
        let policies = [
            SYNC_LAST_ACTIVITIES.oauth(),
            SYNC_PLAYBACK.oauth(),
            SYNC_COLLECTION_MOVIES.oauth(),
            SYNC_WATCHED_SHOWS.oauth(),
            SYNC_RATINGS_EPISODES.oauth(),
            SYNC_WATCHLIST_SEASONS.oauth(),
        ];

        // Act & Assert
        for policy in policies {
            assert_eq!(policy, OAuthRequirement::Required);
        }
    }

    #[test]
    fn test_oauth_endpoints_forbid_auth() {
        // Arrange & Act & Assert
        assert_eq!(OAUTH_TOKEN_EXCHANGE.oauth(), OAuthRequirement::Forbidden);
        assert_eq!(OAUTH_TOKEN_REFRESH.oauth(), OAuthRequirement::Forbidden);
        assert_eq!(OAUTH_TOKEN_REVOKE.oauth(), OAuthRequirement::Forbidden);
    }

    #[test]
    fn test_verbs() {
        // Arrange & Act & Assert
        assert_eq!(MOVIES_POPULAR.method(), HttpMethod::Get);
        assert_eq!(SYNC_WATCHLIST_ADD.method(), HttpMethod::Post);
        assert_eq!(SYNC_PLAYBACK_REMOVE.method(), HttpMethod::Delete);
    }

    #[test]
    fn test_pagination_flags() {
        // Arrange & Act & Assert
        assert!(MOVIES_TRENDING.is_paginated());
        assert!(EPISODES_COMMENTS.is_paginated());
        assert!(SEARCH_TEXT.is_paginated());
        assert!(!MOVIES_SUMMARY.is_paginated());
        assert!(!SEASONS_COMMENTS.is_paginated());
        assert!(!SYNC_WATCHLIST_MOVIES.is_paginated());
    }

    #[test]
    fn test_templates_are_lowercase_without_trailing_slash() {
        // Arrange
        let paths = [
            MOVIES_RELEASES.path(),
            SHOWS_PROGRESS_COLLECTION.path(),
            EPISODES_WATCHING.path(),
            SYNC_RATINGS_SEASONS.path(),
            OAUTH_TOKEN_REVOKE.path(),
        ];

        // Act & Assert
        for path in paths {
            assert_eq!(path, path.to_lowercase());
            assert!(!path.ends_with('/'));
            assert!(!path.starts_with('/'));
        }
    }
}
