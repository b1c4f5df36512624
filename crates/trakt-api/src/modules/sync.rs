//! Sync resource: the authenticated user's collection, history, ratings,
//! watchlist and playback state.
#![allow(clippy::future_not_send)]

use tracing::instrument;

use crate::api::LocalTraktApi;
use crate::error::TraktError;
use crate::options::{Extended, Rating};
use crate::request::endpoints::{
    SYNC_COLLECTION_ADD, SYNC_COLLECTION_MOVIES, SYNC_COLLECTION_REMOVE, SYNC_COLLECTION_SHOWS,
    SYNC_HISTORY_ADD, SYNC_HISTORY_REMOVE, SYNC_LAST_ACTIVITIES, SYNC_PLAYBACK,
    SYNC_PLAYBACK_REMOVE, SYNC_RATINGS_ADD, SYNC_RATINGS_EPISODES, SYNC_RATINGS_MOVIES,
    SYNC_RATINGS_REMOVE, SYNC_RATINGS_SEASONS, SYNC_RATINGS_SHOWS, SYNC_WATCHED_MOVIES,
    SYNC_WATCHED_SHOWS, SYNC_WATCHLIST_ADD, SYNC_WATCHLIST_EPISODES, SYNC_WATCHLIST_MOVIES,
    SYNC_WATCHLIST_REMOVE, SYNC_WATCHLIST_SEASONS, SYNC_WATCHLIST_SHOWS,
};
use crate::request::{Endpoint, Request};
use crate::types::{
    CollectedMovie, CollectedShow, LastActivities, PlaybackItem, RatedEpisode, RatedMovie,
    RatedSeason, RatedShow, SyncItems, SyncResult, WatchedMovie, WatchedShow, WatchlistedEpisode,
    WatchlistedMovie, WatchlistedSeason, WatchlistedShow,
};

/// Sync endpoints. Every call requires an access token.
#[derive(Debug)]
pub struct SyncModule<'a, C> {
    client: &'a C,
}

impl<'a, C: LocalTraktApi> SyncModule<'a, C> {
    /// Wraps an API implementation.
    pub const fn new(client: &'a C) -> Self {
        Self { client }
    }

    async fn write(
        &self,
        endpoint: Endpoint<SyncItems, SyncResult>,
        items: SyncItems,
    ) -> Result<SyncResult, TraktError> {
        self.client.send(Request::new(endpoint).body(items)).await
    }

    /// Timestamps of the user's latest activity per category.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn last_activities(&self) -> Result<LastActivities, TraktError> {
        self.client.send(Request::new(SYNC_LAST_ACTIVITIES)).await
    }

    /// Paused playback entries.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn playback(&self) -> Result<Vec<PlaybackItem>, TraktError> {
        self.client.send(Request::new(SYNC_PLAYBACK)).await
    }

    /// Removes a paused playback entry.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn remove_playback(&self, playback_id: u64) -> Result<(), TraktError> {
        let request = Request::new(SYNC_PLAYBACK_REMOVE).id(playback_id.to_string());
        self.client.send(request).await
    }

    /// Collected movies.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn collection_movies(
        &self,
        extended: Extended,
    ) -> Result<Vec<CollectedMovie>, TraktError> {
        let request = Request::new(SYNC_COLLECTION_MOVIES).extended(extended);
        self.client.send(request).await
    }

    /// Collected shows.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn collection_shows(
        &self,
        extended: Extended,
    ) -> Result<Vec<CollectedShow>, TraktError> {
        let request = Request::new(SYNC_COLLECTION_SHOWS).extended(extended);
        self.client.send(request).await
    }

    /// Adds items to the collection.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` when `items` is empty; otherwise see
    /// [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn add_to_collection(&self, items: SyncItems) -> Result<SyncResult, TraktError> {
        self.write(SYNC_COLLECTION_ADD, items).await
    }

    /// Removes items from the collection.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` when `items` is empty; otherwise see
    /// [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn remove_from_collection(&self, items: SyncItems) -> Result<SyncResult, TraktError> {
        self.write(SYNC_COLLECTION_REMOVE, items).await
    }

    /// Watched movies.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn watched_movies(&self, extended: Extended) -> Result<Vec<WatchedMovie>, TraktError> {
        let request = Request::new(SYNC_WATCHED_MOVIES).extended(extended);
        self.client.send(request).await
    }

    /// Watched shows.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn watched_shows(&self, extended: Extended) -> Result<Vec<WatchedShow>, TraktError> {
        let request = Request::new(SYNC_WATCHED_SHOWS).extended(extended);
        self.client.send(request).await
    }

    /// Marks items as watched.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` when `items` is empty; otherwise see
    /// [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn add_to_history(&self, items: SyncItems) -> Result<SyncResult, TraktError> {
        self.write(SYNC_HISTORY_ADD, items).await
    }

    /// Removes plays from the history.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` when `items` is empty; otherwise see
    /// [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn remove_from_history(&self, items: SyncItems) -> Result<SyncResult, TraktError> {
        self.write(SYNC_HISTORY_REMOVE, items).await
    }

    /// Rated movies, optionally only those with `rating`.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn rated_movies(
        &self,
        rating: Option<Rating>,
        extended: Extended,
    ) -> Result<Vec<RatedMovie>, TraktError> {
        let request = Request::new(SYNC_RATINGS_MOVIES)
            .rating(rating)
            .extended(extended);
        self.client.send(request).await
    }

    /// Rated shows, optionally only those with `rating`.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn rated_shows(
        &self,
        rating: Option<Rating>,
        extended: Extended,
    ) -> Result<Vec<RatedShow>, TraktError> {
        let request = Request::new(SYNC_RATINGS_SHOWS)
            .rating(rating)
            .extended(extended);
        self.client.send(request).await
    }

    /// Rated seasons, optionally only those with `rating`.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn rated_seasons(
        &self,
        rating: Option<Rating>,
        extended: Extended,
    ) -> Result<Vec<RatedSeason>, TraktError> {
        let request = Request::new(SYNC_RATINGS_SEASONS)
            .rating(rating)
            .extended(extended);
        self.client.send(request).await
    }

    /// Rated episodes, optionally only those with `rating`.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn rated_episodes(
        &self,
        rating: Option<Rating>,
        extended: Extended,
    ) -> Result<Vec<RatedEpisode>, TraktError> {
        let request = Request::new(SYNC_RATINGS_EPISODES)
            .rating(rating)
            .extended(extended);
        self.client.send(request).await
    }

    /// Adds ratings. Each item carries its own `rating`.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` when `items` is empty; otherwise see
    /// [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn add_ratings(&self, items: SyncItems) -> Result<SyncResult, TraktError> {
        self.write(SYNC_RATINGS_ADD, items).await
    }

    /// Removes ratings.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` when `items` is empty; otherwise see
    /// [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn remove_ratings(&self, items: SyncItems) -> Result<SyncResult, TraktError> {
        self.write(SYNC_RATINGS_REMOVE, items).await
    }

    /// Watchlisted movies.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn watchlist_movies(
        &self,
        extended: Extended,
    ) -> Result<Vec<WatchlistedMovie>, TraktError> {
        let request = Request::new(SYNC_WATCHLIST_MOVIES).extended(extended);
        self.client.send(request).await
    }

    /// Watchlisted shows.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn watchlist_shows(
        &self,
        extended: Extended,
    ) -> Result<Vec<WatchlistedShow>, TraktError> {
        let request = Request::new(SYNC_WATCHLIST_SHOWS).extended(extended);
        self.client.send(request).await
    }

    /// Watchlisted seasons.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn watchlist_seasons(
        &self,
        extended: Extended,
    ) -> Result<Vec<WatchlistedSeason>, TraktError> {
        let request = Request::new(SYNC_WATCHLIST_SEASONS).extended(extended);
        self.client.send(request).await
    }

    /// Watchlisted episodes.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn watchlist_episodes(
        &self,
        extended: Extended,
    ) -> Result<Vec<WatchlistedEpisode>, TraktError> {
        let request = Request::new(SYNC_WATCHLIST_EPISODES).extended(extended);
        self.client.send(request).await
    }

    /// Adds items to the watchlist.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` when `items` is empty; otherwise see
    /// [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn add_to_watchlist(&self, items: SyncItems) -> Result<SyncResult, TraktError> {
        self.write(SYNC_WATCHLIST_ADD, items).await
    }

    /// Removes items from the watchlist.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` when `items` is empty; otherwise see
    /// [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn remove_from_watchlist(&self, items: SyncItems) -> Result<SyncResult, TraktError> {
        self.write(SYNC_WATCHLIST_REMOVE, items).await
    }
}
