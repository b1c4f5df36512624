//! Seasons resource.
#![allow(clippy::future_not_send)]

use tracing::instrument;

use crate::api::LocalTraktApi;
use crate::error::TraktError;
use crate::options::Extended;
use crate::request::Request;
use crate::request::endpoints::{
    SEASONS_COMMENTS, SEASONS_EPISODES, SEASONS_RATINGS, SEASONS_SUMMARY, SEASONS_WATCHING,
};
use crate::types::{Comment, Episode, Ratings, Season, User};

/// Seasons of a show.
#[derive(Debug)]
pub struct SeasonsModule<'a, C> {
    client: &'a C,
}

impl<'a, C: LocalTraktApi> SeasonsModule<'a, C> {
    /// Wraps an API implementation.
    pub const fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// All seasons of a show. `Extended::Episodes` includes episodes.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn summary(&self, id: &str, extended: Extended) -> Result<Vec<Season>, TraktError> {
        let request = Request::new(SEASONS_SUMMARY).id(id).extended(extended);
        self.client.send(request).await
    }

    /// Episodes of one season.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn episodes(
        &self,
        id: &str,
        season: u32,
        extended: Extended,
    ) -> Result<Vec<Episode>, TraktError> {
        let request = Request::new(SEASONS_EPISODES)
            .id(id)
            .season(season)
            .extended(extended);
        self.client.send(request).await
    }

    /// Comments on one season.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn comments(&self, id: &str, season: u32) -> Result<Vec<Comment>, TraktError> {
        let request = Request::new(SEASONS_COMMENTS).id(id).season(season);
        self.client.send(request).await
    }

    /// Rating distribution of one season.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn ratings(&self, id: &str, season: u32) -> Result<Ratings, TraktError> {
        let request = Request::new(SEASONS_RATINGS).id(id).season(season);
        self.client.send(request).await
    }

    /// Users watching one season right now.
    ///
    /// # Errors
    ///
    /// See [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn watching(
        &self,
        id: &str,
        season: u32,
        extended: Extended,
    ) -> Result<Vec<User>, TraktError> {
        let request = Request::new(SEASONS_WATCHING)
            .id(id)
            .season(season)
            .extended(extended);
        self.client.send(request).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::modules::mock::RecordingApi;

    #[tokio::test]
    async fn test_episodes_path() {
        // Arrange
        let api = RecordingApi::new(r#"[{"season":1,"number":1,"title":"Winter Is Coming","ids":{"trakt":73640}}]"#);
        let seasons = SeasonsModule::new(&api);

        // Act
        let episodes = seasons
            .episodes("game-of-thrones", 1, Extended::Full)
            .await
            .unwrap();

        // Assert
        assert_eq!(episodes.len(), 1);
        assert_eq!(
            api.last(),
            "GET https://api.trakt.tv/shows/game-of-thrones/seasons/1?extended=full"
        );
    }

    #[tokio::test]
    async fn test_season_zero_is_rejected() {
        // Arrange
        let api = RecordingApi::new("{}");
        let seasons = SeasonsModule::new(&api);

        // Act
        let err = seasons.ratings("game-of-thrones", 0).await.unwrap_err();

        // Assert
        assert!(matches!(err, TraktError::InvalidRequest(_)));
        assert!(api.seen.lock().unwrap().is_empty());
    }
}
