//! Movies resource.
#![allow(clippy::future_not_send)]

use chrono::NaiveDate;
use tracing::instrument;

use super::entity_id;
use crate::api::LocalTraktApi;
use crate::error::TraktError;
use crate::options::{Extended, Pagination};
use crate::request::Request;
use crate::request::endpoints::{
    MOVIES_ALIASES, MOVIES_COMMENTS, MOVIES_PEOPLE, MOVIES_POPULAR, MOVIES_RATINGS,
    MOVIES_RELATED, MOVIES_RELEASES, MOVIES_SUMMARY, MOVIES_TRANSLATIONS, MOVIES_TRENDING,
    MOVIES_UPDATES, MOVIES_WATCHING,
};
use crate::types::{
    Alias, Comment, Movie, People, Ratings, Release, Translation, TrendingMovie, UpdatedMovie,
    User,
};

/// Movie lists, summaries and per-movie data.
#[derive(Debug)]
pub struct MoviesModule<'a, C> {
    client: &'a C,
}

impl<'a, C: LocalTraktApi> MoviesModule<'a, C> {
    /// Wraps an API implementation.
    pub const fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Most popular movies.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn popular(
        &self,
        extended: Extended,
        pagination: Pagination,
    ) -> Result<Vec<Movie>, TraktError> {
        let request = Request::new(MOVIES_POPULAR)
            .extended(extended)
            .pagination(pagination);
        self.client.send(request).await
    }

    /// Movies being watched right now.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn trending(
        &self,
        extended: Extended,
        pagination: Pagination,
    ) -> Result<Vec<TrendingMovie>, TraktError> {
        let request = Request::new(MOVIES_TRENDING)
            .extended(extended)
            .pagination(pagination);
        self.client.send(request).await
    }

    /// Movies updated since `start_date` (API default: 30 days ago).
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn updates(
        &self,
        start_date: Option<NaiveDate>,
        extended: Extended,
        pagination: Pagination,
    ) -> Result<Vec<UpdatedMovie>, TraktError> {
        let request = Request::new(MOVIES_UPDATES)
            .start_date(start_date)
            .extended(extended)
            .pagination(pagination);
        self.client.send(request).await
    }

    /// A single movie.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn summary(&self, id: &str, extended: Extended) -> Result<Movie, TraktError> {
        let request = Request::new(MOVIES_SUMMARY).id(id).extended(extended);
        self.client.send(request).await
    }

    /// Re-fetches `movie`, typically with a richer `extended` level.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` when the movie carries no id; otherwise see
    /// [`LocalTraktApi::send`].
    pub async fn summary_of(&self, movie: &Movie, extended: Extended) -> Result<Movie, TraktError> {
        let id = entity_id(&movie.ids)?;
        self.summary(&id, extended).await
    }

    /// Alternative titles.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn aliases(&self, id: &str) -> Result<Vec<Alias>, TraktError> {
        self.client.send(Request::new(MOVIES_ALIASES).id(id)).await
    }

    /// Releases, optionally for one country.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn releases(
        &self,
        id: &str,
        country: Option<&str>,
    ) -> Result<Vec<Release>, TraktError> {
        let request = Request::new(MOVIES_RELEASES)
            .id(id)
            .language(country.map(String::from));
        self.client.send(request).await
    }

    /// Translations, optionally for one language.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn translations(
        &self,
        id: &str,
        language: Option<&str>,
    ) -> Result<Vec<Translation>, TraktError> {
        let request = Request::new(MOVIES_TRANSLATIONS)
            .id(id)
            .language(language.map(String::from));
        self.client.send(request).await
    }

    /// Top-level comments.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn comments(
        &self,
        id: &str,
        pagination: Pagination,
    ) -> Result<Vec<Comment>, TraktError> {
        let request = Request::new(MOVIES_COMMENTS).id(id).pagination(pagination);
        self.client.send(request).await
    }

    /// Cast and crew.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn people(&self, id: &str, extended: Extended) -> Result<People, TraktError> {
        let request = Request::new(MOVIES_PEOPLE).id(id).extended(extended);
        self.client.send(request).await
    }

    /// Rating distribution.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn ratings(&self, id: &str) -> Result<Ratings, TraktError> {
        self.client.send(Request::new(MOVIES_RATINGS).id(id)).await
    }

    /// Related movies.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn related(
        &self,
        id: &str,
        extended: Extended,
        pagination: Pagination,
    ) -> Result<Vec<Movie>, TraktError> {
        let request = Request::new(MOVIES_RELATED)
            .id(id)
            .extended(extended)
            .pagination(pagination);
        self.client.send(request).await
    }

    /// Users watching right now.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn watching(&self, id: &str, extended: Extended) -> Result<Vec<User>, TraktError> {
        let request = Request::new(MOVIES_WATCHING).id(id).extended(extended);
        self.client.send(request).await
    }
}
