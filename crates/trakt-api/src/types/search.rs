//! Search results.

use serde::{Deserialize, Serialize};

use super::media::{Episode, Ids, Movie, Person, Show, User};

/// A custom user list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Privacy setting.
    #[serde(default)]
    pub privacy: Option<String>,
    /// Number of items.
    #[serde(default)]
    pub item_count: Option<u32>,
    /// Number of likes.
    #[serde(default)]
    pub likes: Option<u32>,
    /// Identifiers.
    #[serde(default)]
    pub ids: Ids,
    /// Owner.
    #[serde(default)]
    pub user: Option<User>,
}

/// One hit of a text or id search.
///
/// Exactly one of the media fields is set, matching `result_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// `movie`, `show`, `episode`, `person` or `list`.
    #[serde(rename = "type")]
    pub result_type: String,
    /// Relevance score (text search only).
    #[serde(default)]
    pub score: Option<f64>,
    /// Movie hit.
    #[serde(default)]
    pub movie: Option<Movie>,
    /// Show hit, or the show of an episode hit.
    #[serde(default)]
    pub show: Option<Show>,
    /// Episode hit.
    #[serde(default)]
    pub episode: Option<Episode>,
    /// Person hit.
    #[serde(default)]
    pub person: Option<Person>,
    /// List hit.
    #[serde(default)]
    pub list: Option<List>,
}

impl SearchResult {
    /// Returns a short display title for the hit.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self.result_type.as_str() {
            "movie" => self.movie.as_ref().map(|m| m.title.as_str()),
            "show" => self.show.as_ref().map(|s| s.title.as_str()),
            "episode" => self.episode.as_ref().and_then(|e| e.title.as_deref()),
            "person" => self.person.as_ref().map(|p| p.name.as_str()),
            "list" => self.list.as_ref().map(|l| l.name.as_str()),
            _ => None,
        }
    }
}
