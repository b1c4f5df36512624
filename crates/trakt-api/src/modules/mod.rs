//! Resource module façades.
//!
//! Each module borrows an API implementation and turns one method call into
//! one request from the endpoint table.

mod episodes;
mod movies;
mod oauth;
mod search;
mod seasons;
mod shows;
mod sync;

pub use episodes::EpisodesModule;
pub use movies::MoviesModule;
pub use oauth::OAuthModule;
pub use search::SearchModule;
pub use seasons::SeasonsModule;
pub use shows::ShowsModule;
pub use sync::SyncModule;

use crate::client::TraktClient;
use crate::error::TraktError;
use crate::types::Ids;

/// Picks the path id of an entity.
fn entity_id(ids: &Ids) -> Result<String, TraktError> {
    ids.best_id()
        .ok_or_else(|| TraktError::InvalidRequest(String::from("Id not set.")))
}

impl TraktClient {
    /// Movies resource.
    #[must_use]
    pub const fn movies(&self) -> MoviesModule<'_, Self> {
        MoviesModule::new(self)
    }

    /// Shows resource.
    #[must_use]
    pub const fn shows(&self) -> ShowsModule<'_, Self> {
        ShowsModule::new(self)
    }

    /// Seasons resource.
    #[must_use]
    pub const fn seasons(&self) -> SeasonsModule<'_, Self> {
        SeasonsModule::new(self)
    }

    /// Episodes resource.
    #[must_use]
    pub const fn episodes(&self) -> EpisodesModule<'_, Self> {
        EpisodesModule::new(self)
    }

    /// Sync resource.
    #[must_use]
    pub const fn sync(&self) -> SyncModule<'_, Self> {
        SyncModule::new(self)
    }

    /// Search resource.
    #[must_use]
    pub const fn search(&self) -> SearchModule<'_, Self> {
        SearchModule::new(self)
    }

    /// OAuth token lifecycle.
    #[must_use]
    pub const fn oauth(&self) -> OAuthModule<'_> {
        OAuthModule::new(self)
    }
}
