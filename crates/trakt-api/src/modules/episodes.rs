//! Episodes resource.
#![allow(clippy::future_not_send)]

use tracing::instrument;

use crate::api::LocalTraktApi;
use crate::error::TraktError;
use crate::options::{Extended, Pagination};
use crate::request::Request;
use crate::request::endpoints::{
    EPISODES_COMMENTS, EPISODES_RATINGS, EPISODES_SUMMARY, EPISODES_WATCHING,
};
use crate::types::{Comment, Episode, Ratings, User};

/// Single episodes of a show.
#[derive(Debug)]
pub struct EpisodesModule<'a, C> {
    client: &'a C,
}

impl<'a, C: LocalTraktApi> EpisodesModule<'a, C> {
    /// Wraps an API implementation.
    pub const fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// A single episode.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn summary(
        &self,
        id: &str,
        season: u32,
        episode: u32,
        extended: Extended,
    ) -> Result<Episode, TraktError> {
        let request = Request::new(EPISODES_SUMMARY)
            .id(id)
            .season(season)
            .episode(episode)
            .extended(extended);
        self.client.send(request).await
    }

    /// Top-level comments on an episode.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn comments(
        &self,
        id: &str,
        season: u32,
        episode: u32,
        pagination: Pagination,
    ) -> Result<Vec<Comment>, TraktError> {
        let request = Request::new(EPISODES_COMMENTS)
            .id(id)
            .season(season)
            .episode(episode)
            .pagination(pagination);
        self.client.send(request).await
    }

    /// Rating distribution of an episode.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn ratings(&self, id: &str, season: u32, episode: u32) -> Result<Ratings, TraktError> {
        let request = Request::new(EPISODES_RATINGS)
            .id(id)
            .season(season)
            .episode(episode);
        self.client.send(request).await
    }

    /// Users watching an episode right now.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn watching(
        &self,
        id: &str,
        season: u32,
        episode: u32,
        extended: Extended,
    ) -> Result<Vec<User>, TraktError> {
        let request = Request::new(EPISODES_WATCHING)
            .id(id)
            .season(season)
            .episode(episode)
            .extended(extended);
        self.client.send(request).await
    }
}
