//! Search resource.
#![allow(clippy::future_not_send)]

use tracing::instrument;

use crate::api::LocalTraktApi;
use crate::error::TraktError;
use crate::options::{Extended, IdType, Pagination, SearchType};
use crate::request::Request;
use crate::request::endpoints::{SEARCH_ID, SEARCH_TEXT};
use crate::types::SearchResult;

/// Text and id search.
#[derive(Debug)]
pub struct SearchModule<'a, C> {
    client: &'a C,
}

impl<'a, C: LocalTraktApi> SearchModule<'a, C> {
    /// Wraps an API implementation.
    pub const fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Searches titles, names and descriptions.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` for blank `query`; otherwise see
    /// [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn text(
        &self,
        query: &str,
        search_type: Option<SearchType>,
        extended: Extended,
        pagination: Pagination,
    ) -> Result<Vec<SearchResult>, TraktError> {
        let request = Request::new(SEARCH_TEXT)
            .query(query)
            .search_type(search_type)
            .extended(extended)
            .pagination(pagination);
        self.client.send(request).await
    }

    /// Looks an item up by an external id.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` for blank `id`; otherwise see
    /// [`LocalTraktApi::send`].
    #[instrument(skip_all)]
    pub async fn by_id(
        &self,
        id_type: IdType,
        id: &str,
        extended: Extended,
        pagination: Pagination,
    ) -> Result<Vec<SearchResult>, TraktError> {
        let request = Request::new(SEARCH_ID)
            .lookup(id_type, id)
            .extended(extended)
            .pagination(pagination);
        self.client.send(request).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::modules::mock::RecordingApi;

    #[tokio::test]
    async fn test_text_search() {
        // Arrange
        let api = RecordingApi::new(include_str!("../../../../fixtures/trakt/search_text.json"));
        let search = SearchModule::new(&api);

        // Act
        let results = search
            .text("tron", Some(SearchType::Show), Extended::Unspecified, Pagination::default())
            .await
            .unwrap();

        // Assert
        assert_eq!(results.len(), 3);
        assert_eq!(api.last(), "GET https://api.trakt.tv/search?query=tron&type=show");
    }

    #[tokio::test]
    async fn test_id_lookup() {
        // Arrange
        let api = RecordingApi::new("[]");
        let search = SearchModule::new(&api);

        // Act
        search
            .by_id(IdType::Tvdb, "121361", Extended::Unspecified, Pagination::default())
            .await
            .unwrap();

        // Assert
        assert_eq!(api.last(), "GET https://api.trakt.tv/search?id_type=tvdb&id=121361");
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected() {
        // Arrange
        let api = RecordingApi::new("[]");
        let search = SearchModule::new(&api);

        // Act
        let err = search
            .text(" ", None, Extended::Unspecified, Pagination::default())
            .await
            .unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "invalid request: Query not set.");
    }
}
