//! Shows resource.
#![allow(clippy::future_not_send)]

use chrono::NaiveDate;
use tracing::instrument;

use super::entity_id;
use crate::api::LocalTraktApi;
use crate::error::TraktError;
use crate::options::{Extended, Pagination};
use crate::request::Request;
use crate::request::endpoints::{
    SHOWS_ALIASES, SHOWS_COMMENTS, SHOWS_PEOPLE, SHOWS_POPULAR, SHOWS_PROGRESS_COLLECTION,
    SHOWS_PROGRESS_WATCHED, SHOWS_RATINGS, SHOWS_RELATED, SHOWS_SUMMARY, SHOWS_TRANSLATIONS,
    SHOWS_TRENDING, SHOWS_UPDATES, SHOWS_WATCHING,
};
use crate::types::{
    Alias, Comment, People, Ratings, Show, ShowProgress, Translation, TrendingShow, UpdatedShow,
    User,
};

/// Show lists, summaries, per-show data and progress.
#[derive(Debug)]
pub struct ShowsModule<'a, C> {
    client: &'a C,
}

impl<'a, C: LocalTraktApi> ShowsModule<'a, C> {
    /// Wraps an API implementation.
    pub const fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Most popular shows.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn popular(
        &self,
        extended: Extended,
        pagination: Pagination,
    ) -> Result<Vec<Show>, TraktError> {
        let request = Request::new(SHOWS_POPULAR)
            .extended(extended)
            .pagination(pagination);
        self.client.send(request).await
    }

    /// Shows being watched right now.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn trending(
        &self,
        extended: Extended,
        pagination: Pagination,
    ) -> Result<Vec<TrendingShow>, TraktError> {
        let request = Request::new(SHOWS_TRENDING)
            .extended(extended)
            .pagination(pagination);
        self.client.send(request).await
    }

    /// Shows updated since `start_date`.
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
    ) -> Result<Vec<UpdatedShow>, TraktError> {
        let request = Request::new(SHOWS_UPDATES)
            .start_date(start_date)
            .extended(extended)
            .pagination(pagination);
        self.client.send(request).await
    }

    /// A single show.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn summary(&self, id: &str, extended: Extended) -> Result<Show, TraktError> {
        let request = Request::new(SHOWS_SUMMARY).id(id).extended(extended);
        self.client.send(request).await
    }

    /// Re-fetches `show`.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` when the show carries no id; otherwise see
    /// [`LocalTraktApi::send`].
    pub async fn summary_of(&self, show: &Show, extended: Extended) -> Result<Show, TraktError> {
        let id = entity_id(&show.ids)?;
        self.summary(&id, extended).await
    }

    /// Alternative titles.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn aliases(&self, id: &str) -> Result<Vec<Alias>, TraktError> {
        self.client.send(Request::new(SHOWS_ALIASES).id(id)).await
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
        let request = Request::new(SHOWS_TRANSLATIONS)
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
        let request = Request::new(SHOWS_COMMENTS).id(id).pagination(pagination);
        self.client.send(request).await
    }

    /// Cast and crew.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn people(&self, id: &str, extended: Extended) -> Result<People, TraktError> {
        let request = Request::new(SHOWS_PEOPLE).id(id).extended(extended);
        self.client.send(request).await
    }

    /// Rating distribution.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn ratings(&self, id: &str) -> Result<Ratings, TraktError> {
        self.client.send(Request::new(SHOWS_RATINGS).id(id)).await
    }

    /// Related shows.
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
    ) -> Result<Vec<Show>, TraktError> {
        let request = Request::new(SHOWS_RELATED)
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
        let request = Request::new(SHOWS_WATCHING).id(id).extended(extended);
        self.client.send(request).await
    }

    /// Collection progress of the authenticated user.
    ///
    /// # Errors
    ///
    /// `Configuration` without an access token; otherwise see
    /// [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn collection_progress(
        &self,
        id: &str,
        extended: Extended,
    ) -> Result<ShowProgress, TraktError> {
        let request = Request::new(SHOWS_PROGRESS_COLLECTION)
            .id(id)
            .extended(extended);
        self.client.send(request).await
    }

    /// Watched progress of the authenticated user.
    ///
    /// # Errors
    ///
    /// `Configuration` without an access token; otherwise see
    /// [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn watched_progress(
        &self,
        id: &str,
        extended: Extended,
    ) -> Result<ShowProgress, TraktError> {
        let request = Request::new(SHOWS_PROGRESS_WATCHED)
            .id(id)
            .extended(extended);
        self.client.send(request).await
    }
}
