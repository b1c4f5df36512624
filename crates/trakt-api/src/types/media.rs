//! Standard media objects shared by every resource.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// External identifiers of a media object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ids {
    /// Trakt numeric id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trakt: Option<u64>,
    /// Trakt slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// IMDB id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    /// TMDB id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u64>,
    /// TVDB id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvdb: Option<u64>,
    /// `TVRage` id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvrage: Option<u64>,
}

impl Ids {
    /// Returns the id best suited for path parameters.
    ///
    /// Order: Trakt id, slug, IMDB id, TMDB id, TVDB id.
    #[must_use]
    pub fn best_id(&self) -> Option<String> {
        self.trakt
            .map(|id| id.to_string())
            .or_else(|| self.slug.clone().filter(|s| !s.is_empty()))
            .or_else(|| self.imdb.clone().filter(|s| !s.is_empty()))
            .or_else(|| self.tmdb.map(|id| id.to_string()))
            .or_else(|| self.tvdb.map(|id| id.to_string()))
    }
}

/// A movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Release year.
    #[serde(default)]
    pub year: Option<u32>,
    /// Identifiers.
    #[serde(default)]
    pub ids: Ids,
    /// Tagline (`extended=full`).
    #[serde(default)]
    pub tagline: Option<String>,
    /// Overview (`extended=full`).
    #[serde(default)]
    pub overview: Option<String>,
    /// Release date (`extended=full`).
    #[serde(default)]
    pub released: Option<NaiveDate>,
    /// Runtime in minutes (`extended=full`).
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Trailer URL (`extended=full`).
    #[serde(default)]
    pub trailer: Option<String>,
    /// Homepage URL (`extended=full`).
    #[serde(default)]
    pub homepage: Option<String>,
    /// Average rating (`extended=full`).
    #[serde(default)]
    pub rating: Option<f64>,
    /// Vote count (`extended=full`).
    #[serde(default)]
    pub votes: Option<u64>,
    /// Last update (`extended=full`).
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Primary language (`extended=full`).
    #[serde(default)]
    pub language: Option<String>,
    /// Available translation languages (`extended=full`).
    #[serde(default)]
    pub available_translations: Option<Vec<String>>,
    /// Genre slugs (`extended=full`).
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    /// Certification (`extended=full`).
    #[serde(default)]
    pub certification: Option<String>,
}

/// Air schedule of a show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airs {
    /// Day of week.
    #[serde(default)]
    pub day: Option<String>,
    /// Local air time (`HH:MM`).
    #[serde(default)]
    pub time: Option<String>,
    /// IANA time zone.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// A TV show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Title.
    #[serde(default)]
    pub title: String,
    /// First aired year.
    #[serde(default)]
    pub year: Option<u32>,
    /// Identifiers.
    #[serde(default)]
    pub ids: Ids,
    /// Overview (`extended=full`).
    #[serde(default)]
    pub overview: Option<String>,
    /// First aired (`extended=full`).
    #[serde(default)]
    pub first_aired: Option<DateTime<Utc>>,
    /// Air schedule (`extended=full`).
    #[serde(default)]
    pub airs: Option<Airs>,
    /// Runtime in minutes (`extended=full`).
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Certification (`extended=full`).
    #[serde(default)]
    pub certification: Option<String>,
    /// Network (`extended=full`).
    #[serde(default)]
    pub network: Option<String>,
    /// Country code (`extended=full`).
    #[serde(default)]
    pub country: Option<String>,
    /// Trailer URL (`extended=full`).
    #[serde(default)]
    pub trailer: Option<String>,
    /// Homepage URL (`extended=full`).
    #[serde(default)]
    pub homepage: Option<String>,
    /// Status such as `returning series` or `ended` (`extended=full`).
    #[serde(default)]
    pub status: Option<String>,
    /// Average rating (`extended=full`).
    #[serde(default)]
    pub rating: Option<f64>,
    /// Vote count (`extended=full`).
    #[serde(default)]
    pub votes: Option<u64>,
    /// Last update (`extended=full`).
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Primary language (`extended=full`).
    #[serde(default)]
    pub language: Option<String>,
    /// Available translation languages (`extended=full`).
    #[serde(default)]
    pub available_translations: Option<Vec<String>>,
    /// Genre slugs (`extended=full`).
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    /// Number of aired episodes (`extended=full`).
    #[serde(default)]
    pub aired_episodes: Option<u32>,
}

/// A season of a show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Season {
    /// Season number (0 = specials).
    #[serde(default)]
    pub number: Option<u32>,
    /// Identifiers.
    #[serde(default)]
    pub ids: Ids,
    /// Average rating (`extended=full`).
    #[serde(default)]
    pub rating: Option<f64>,
    /// Vote count (`extended=full`).
    #[serde(default)]
    pub votes: Option<u64>,
    /// Total episodes (`extended=full`).
    #[serde(default)]
    pub episode_count: Option<u32>,
    /// Aired episodes (`extended=full`).
    #[serde(default)]
    pub aired_episodes: Option<u32>,
    /// Title (`extended=full`).
    #[serde(default)]
    pub title: Option<String>,
    /// Overview (`extended=full`).
    #[serde(default)]
    pub overview: Option<String>,
    /// First aired (`extended=full`).
    #[serde(default)]
    pub first_aired: Option<DateTime<Utc>>,
    /// Episodes (`extended=episodes`).
    #[serde(default)]
    pub episodes: Option<Vec<Episode>>,
}

/// An episode of a show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Season number.
    #[serde(default)]
    pub season: Option<u32>,
    /// Episode number within the season.
    #[serde(default)]
    pub number: Option<u32>,
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
    /// Identifiers.
    #[serde(default)]
    pub ids: Ids,
    /// Absolute episode number (`extended=full`).
    #[serde(default)]
    pub number_abs: Option<u32>,
    /// Overview (`extended=full`).
    #[serde(default)]
    pub overview: Option<String>,
    /// Average rating (`extended=full`).
    #[serde(default)]
    pub rating: Option<f64>,
    /// Vote count (`extended=full`).
    #[serde(default)]
    pub votes: Option<u64>,
    /// First aired (`extended=full`).
    #[serde(default)]
    pub first_aired: Option<DateTime<Utc>>,
    /// Last update (`extended=full`).
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Available translation languages (`extended=full`).
    #[serde(default)]
    pub available_translations: Option<Vec<String>>,
    /// Runtime in minutes (`extended=full`).
    #[serde(default)]
    pub runtime: Option<u32>,
}

/// A person (cast or crew).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Name.
    #[serde(default)]
    pub name: String,
    /// Identifiers.
    #[serde(default)]
    pub ids: Ids,
}

/// A Trakt user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Username.
    #[serde(default)]
    pub username: String,
    /// Whether the profile is private.
    #[serde(default)]
    pub private: bool,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// VIP flag.
    #[serde(default)]
    pub vip: Option<bool>,
    /// VIP executive producer flag.
    #[serde(default)]
    pub vip_ep: Option<bool>,
    /// Identifiers.
    #[serde(default)]
    pub ids: Ids,
}

/// A comment or review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment id.
    pub id: u64,
    /// Parent comment id (0 for top level).
    #[serde(default)]
    pub parent_id: Option<u64>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last edit.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Text.
    #[serde(default)]
    pub comment: String,
    /// Whether the comment contains spoilers.
    #[serde(default)]
    pub spoiler: bool,
    /// Whether this is a review.
    #[serde(default)]
    pub review: bool,
    /// Number of replies.
    #[serde(default)]
    pub replies: u32,
    /// Number of likes.
    #[serde(default)]
    pub likes: u32,
    /// Author's rating of the item, if any.
    #[serde(default)]
    pub user_rating: Option<u8>,
    /// Author.
    #[serde(default)]
    pub user: Option<User>,
}

/// Aggregate ratings of an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    /// Average rating.
    #[serde(default)]
    pub rating: f64,
    /// Vote count.
    #[serde(default)]
    pub votes: u64,
    /// Votes per rating value (`"1"` .. `"10"`).
    #[serde(default)]
    pub distribution: BTreeMap<String, u64>,
}

/// A cast credit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    /// Character played.
    #[serde(default)]
    pub character: Option<String>,
    /// Characters played (newer API shape).
    #[serde(default)]
    pub characters: Option<Vec<String>>,
    /// The person.
    pub person: Person,
}

/// A crew credit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    /// Job title.
    #[serde(default)]
    pub job: Option<String>,
    /// Job titles (newer API shape).
    #[serde(default)]
    pub jobs: Option<Vec<String>>,
    /// The person.
    pub person: Person,
}

/// Crew grouped by department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crew {
    /// Production.
    #[serde(default)]
    pub production: Vec<CrewMember>,
    /// Art.
    #[serde(default)]
    pub art: Vec<CrewMember>,
    /// Crew.
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    /// Costume & make-up.
    #[serde(default, rename = "costume & make-up")]
    pub costume_and_make_up: Vec<CrewMember>,
    /// Directing.
    #[serde(default)]
    pub directing: Vec<CrewMember>,
    /// Writing.
    #[serde(default)]
    pub writing: Vec<CrewMember>,
    /// Sound.
    #[serde(default)]
    pub sound: Vec<CrewMember>,
    /// Camera.
    #[serde(default)]
    pub camera: Vec<CrewMember>,
}

/// Cast and crew of an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct People {
    /// Cast.
    #[serde(default)]
    pub cast: Vec<CastMember>,
    /// Crew.
    #[serde(default)]
    pub crew: Crew,
}

/// An alternative title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    /// Title.
    pub title: String,
    /// Country code.
    pub country: String,
}

/// A regional release of a movie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Country code.
    pub country: String,
    /// Certification.
    #[serde(default)]
    pub certification: Option<String>,
    /// Release date.
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    /// Release type (`theatrical`, `digital`, ...).
    #[serde(default)]
    pub release_type: Option<String>,
    /// Free-form note.
    #[serde(default)]
    pub note: Option<String>,
}

/// A translation of an item's text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Translated title.
    #[serde(default)]
    pub title: Option<String>,
    /// Translated overview.
    #[serde(default)]
    pub overview: Option<String>,
    /// Translated tagline.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Language code.
    pub language: String,
}

/// A movie with its current watcher count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingMovie {
    /// Users watching right now.
    pub watchers: u64,
    /// The movie.
    pub movie: Movie,
}

/// A show with its current watcher count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingShow {
    /// Users watching right now.
    pub watchers: u64,
    /// The show.
    pub show: Show,
}

/// A movie updated since a given date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatedMovie {
    /// Update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// The movie.
    pub movie: Movie,
}

/// A show updated since a given date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatedShow {
    /// Update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// The show.
    pub show: Show,
}

/// Per-episode progress entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeProgress {
    /// Episode number.
    pub number: u32,
    /// Whether the episode is watched or collected.
    #[serde(default)]
    pub completed: bool,
    /// When the episode was last watched.
    #[serde(default)]
    pub last_watched_at: Option<DateTime<Utc>>,
    /// When the episode was collected.
    #[serde(default)]
    pub collected_at: Option<DateTime<Utc>>,
}

/// Per-season progress entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonProgress {
    /// Season number.
    pub number: u32,
    /// Aired episodes.
    #[serde(default)]
    pub aired: u32,
    /// Completed episodes.
    #[serde(default)]
    pub completed: u32,
    /// Episode entries.
    #[serde(default)]
    pub episodes: Vec<EpisodeProgress>,
}

/// Watched or collected progress of a show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowProgress {
    /// Aired episodes.
    #[serde(default)]
    pub aired: u32,
    /// Completed episodes.
    #[serde(default)]
    pub completed: u32,
    /// Last watch (watched progress).
    #[serde(default)]
    pub last_watched_at: Option<DateTime<Utc>>,
    /// Last collection (collection progress).
    #[serde(default)]
    pub last_collected_at: Option<DateTime<Utc>>,
    /// Season entries.
    #[serde(default)]
    pub seasons: Vec<SeasonProgress>,
    /// Next episode to watch or collect.
    #[serde(default)]
    pub next_episode: Option<Episode>,
    /// Last episode watched or collected.
    #[serde(default)]
    pub last_episode: Option<Episode>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_best_id_prefers_trakt() {
        // Arrange
        let ids = Ids {
            trakt: Some(1390),
            slug: Some(String::from("game-of-thrones")),
            ..Ids::default()
        };

        // Act & Assert
        assert_eq!(ids.best_id().as_deref(), Some("1390"));
    }

    #[test]
    fn test_best_id_falls_back_to_slug_then_imdb() {
        // Arrange
        let slug_only = Ids {
            slug: Some(String::from("tron-legacy-2010")),
            imdb: Some(String::from("tt1104001")),
            ..Ids::default()
        };
        let imdb_only = Ids {
            slug: Some(String::new()),
            imdb: Some(String::from("tt1104001")),
            ..Ids::default()
        };

        // Act & Assert
        assert_eq!(slug_only.best_id().as_deref(), Some("tron-legacy-2010"));
        assert_eq!(imdb_only.best_id().as_deref(), Some("tt1104001"));
        assert_eq!(Ids::default().best_id(), None);
    }

    #[test]
    fn test_parse_popular_movies_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/trakt/movies_popular.json");

        // Act
        let movies: Vec<Movie> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "The Dark Knight");
        assert_eq!(movies[0].year, Some(2008));
        assert_eq!(movies[0].ids.slug.as_deref(), Some("the-dark-knight-2008"));
    }

    #[test]
    fn test_parse_people_crew_department() {
        // Arrange
        let json = r#"{
            "cast": [{"character": "Joe Brody", "person": {"name": "Bryan Cranston", "ids": {"trakt": 1, "slug": "bryan-cranston"}}}],
            "crew": {"costume & make-up": [{"job": "Makeup Artist", "person": {"name": "Jane Doe", "ids": {"trakt": 2}}}]}
        }"#;

        // Act
        let people: People = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(people.cast[0].person.name, "Bryan Cranston");
        assert_eq!(people.crew.costume_and_make_up.len(), 1);
        assert!(people.crew.directing.is_empty());
    }

    #[test]
    fn test_parse_show_progress_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/trakt/shows_progress_watched.json");

        // Act
        let progress: ShowProgress = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(progress.aired, 8);
        assert_eq!(progress.completed, 6);
        assert_eq!(progress.seasons[0].episodes.len(), 2);
        assert_eq!(progress.next_episode.unwrap().number, Some(7));
    }
}
