//! Sync resource payloads: collection, watchlist, ratings, history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::media::{Episode, Ids, Movie, Season, Show};
use crate::options::Rating;

/// Physical or digital medium of a collected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Digital file or stream.
    Digital,
    /// Blu-ray disc.
    Bluray,
    /// HD DVD.
    Hddvd,
    /// DVD.
    Dvd,
    /// Video CD.
    Vcd,
    /// VHS tape.
    Vhs,
    /// Betamax tape.
    Betamax,
    /// Laserdisc.
    Laserdisc,
}

/// Video resolution of a collected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// 4K UHD.
    #[serde(rename = "uhd_4k")]
    Uhd4k,
    /// 1080p.
    #[serde(rename = "hd_1080p")]
    Hd1080p,
    /// 1080i.
    #[serde(rename = "hd_1080i")]
    Hd1080i,
    /// 720p.
    #[serde(rename = "hd_720p")]
    Hd720p,
    /// 480p.
    #[serde(rename = "sd_480p")]
    Sd480p,
    /// 480i.
    #[serde(rename = "sd_480i")]
    Sd480i,
    /// 576p.
    #[serde(rename = "sd_576p")]
    Sd576p,
    /// 576i.
    #[serde(rename = "sd_576i")]
    Sd576i,
}

/// Audio codec of a collected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    /// Dolby Digital (AC-3).
    DolbyDigital,
    /// Dolby Digital Plus.
    DolbyDigitalPlus,
    /// Dolby `TrueHD`.
    DolbyTruehd,
    /// Dolby Atmos.
    DolbyAtmos,
    /// DTS.
    Dts,
    /// DTS-HD Master Audio.
    DtsMa,
    /// DTS:X.
    DtsX,
    /// Uncompressed PCM.
    Lpcm,
    /// MP3.
    Mp3,
    /// AAC.
    Aac,
    /// Ogg Vorbis.
    Ogg,
    /// FLAC.
    Flac,
}

/// Audio channel layout of a collected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioChannels {
    /// 1.0
    #[serde(rename = "1.0")]
    Mono,
    /// 2.0
    #[serde(rename = "2.0")]
    Stereo,
    /// 2.1
    #[serde(rename = "2.1")]
    Stereo21,
    /// 5.1
    #[serde(rename = "5.1")]
    Surround51,
    /// 6.1
    #[serde(rename = "6.1")]
    Surround61,
    /// 7.1
    #[serde(rename = "7.1")]
    Surround71,
    /// 9.1
    #[serde(rename = "9.1")]
    Surround91,
}

/// Collection metadata attached to a collected item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionMetadata {
    /// Medium.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    /// Resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    /// Audio codec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioFormat>,
    /// Audio channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_channels: Option<AudioChannels>,
    /// 3D flag.
    #[serde(default, rename = "3d", skip_serializing_if = "Option::is_none")]
    pub is_3d: Option<bool>,
}

/// One item in a sync write body.
///
/// Only `ids` is required; the optional fields carry the per-item data each
/// sync endpoint accepts (ratings, collection dates, metadata).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncItem {
    /// Identifiers.
    pub ids: Ids,
    /// Title, used for matching when ids are sparse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Year, used for matching when ids are sparse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    /// Rating (`sync/ratings`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    /// When the rating was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rated_at: Option<DateTime<Utc>>,
    /// When the item was collected (`sync/collection`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_at: Option<DateTime<Utc>>,
    /// When the item was listed (`sync/watchlist`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listed_at: Option<DateTime<Utc>>,
    /// Collection metadata (`sync/collection`).
    #[serde(flatten)]
    pub metadata: CollectionMetadata,
}

impl SyncItem {
    /// Creates an item identified only by `ids`.
    #[must_use]
    pub fn from_ids(ids: Ids) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    /// Sets the rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// Body of the sync write endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncItems {
    /// Movies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub movies: Vec<SyncItem>,
    /// Shows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shows: Vec<SyncItem>,
    /// Seasons.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seasons: Vec<SyncItem>,
    /// Episodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episodes: Vec<SyncItem>,
}

impl SyncItems {
    /// Iterates over all items regardless of type.
    pub fn items(&self) -> impl Iterator<Item = &SyncItem> {
        self.movies
            .iter()
            .chain(&self.shows)
            .chain(&self.seasons)
            .chain(&self.episodes)
    }

    /// Returns `true` when no item is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }

    /// Returns `true` when at least one item is present and every item
    /// carries an id.
    #[must_use]
    pub fn is_postable(&self) -> bool {
        !self.is_empty() && self.items().all(|item| item.ids.best_id().is_some())
    }
}

/// Per-type counts in a sync result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncCounts {
    /// Movies.
    #[serde(default)]
    pub movies: u32,
    /// Shows.
    #[serde(default)]
    pub shows: u32,
    /// Seasons.
    #[serde(default)]
    pub seasons: u32,
    /// Episodes.
    #[serde(default)]
    pub episodes: u32,
}

/// Result of a sync write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResult {
    /// Newly added items.
    #[serde(default)]
    pub added: Option<SyncCounts>,
    /// Items already present.
    #[serde(default)]
    pub existing: Option<SyncCounts>,
    /// Removed items.
    #[serde(default)]
    pub deleted: Option<SyncCounts>,
    /// Items that could not be matched.
    #[serde(default)]
    pub not_found: SyncItems,
}

/// Timestamps of the last activity per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTimes {
    /// Last watch.
    #[serde(default)]
    pub watched_at: Option<DateTime<Utc>>,
    /// Last collection change.
    #[serde(default)]
    pub collected_at: Option<DateTime<Utc>>,
    /// Last rating change.
    #[serde(default)]
    pub rated_at: Option<DateTime<Utc>>,
    /// Last watchlist change.
    #[serde(default)]
    pub watchlisted_at: Option<DateTime<Utc>>,
    /// Last comment.
    #[serde(default)]
    pub commented_at: Option<DateTime<Utc>>,
    /// Last playback progress change.
    #[serde(default)]
    pub paused_at: Option<DateTime<Utc>>,
    /// Last hide.
    #[serde(default)]
    pub hidden_at: Option<DateTime<Utc>>,
}

/// Response of `sync/last_activities`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastActivities {
    /// Overall last activity.
    #[serde(default)]
    pub all: Option<DateTime<Utc>>,
    /// Movies.
    #[serde(default)]
    pub movies: ActivityTimes,
    /// Shows.
    #[serde(default)]
    pub shows: ActivityTimes,
    /// Seasons.
    #[serde(default)]
    pub seasons: ActivityTimes,
    /// Episodes.
    #[serde(default)]
    pub episodes: ActivityTimes,
}

/// A paused playback entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackItem {
    /// Playback id (used to remove the entry).
    pub id: u64,
    /// Progress percentage.
    #[serde(default)]
    pub progress: f64,
    /// When playback was paused.
    #[serde(default)]
    pub paused_at: Option<DateTime<Utc>>,
    /// `movie` or `episode`.
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    /// Movie, for movie entries.
    #[serde(default)]
    pub movie: Option<Movie>,
    /// Episode, for episode entries.
    #[serde(default)]
    pub episode: Option<Episode>,
    /// Show, for episode entries.
    #[serde(default)]
    pub show: Option<Show>,
}

/// A movie in the user's collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectedMovie {
    /// When it was collected.
    #[serde(default)]
    pub collected_at: Option<DateTime<Utc>>,
    /// The movie.
    pub movie: Movie,
    /// Metadata (`extended=metadata`).
    #[serde(default)]
    pub metadata: Option<CollectionMetadata>,
}

/// A collected episode inside a collected season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedEpisode {
    /// Episode number.
    pub number: u32,
    /// When it was collected.
    #[serde(default)]
    pub collected_at: Option<DateTime<Utc>>,
    /// Metadata (`extended=metadata`).
    #[serde(default)]
    pub metadata: Option<CollectionMetadata>,
}

/// A collected season inside a collected show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedSeason {
    /// Season number.
    pub number: u32,
    /// Episodes.
    #[serde(default)]
    pub episodes: Vec<CollectedEpisode>,
}

/// A show in the user's collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectedShow {
    /// Last collection change.
    #[serde(default)]
    pub last_collected_at: Option<DateTime<Utc>>,
    /// The show.
    pub show: Show,
    /// Seasons.
    #[serde(default)]
    pub seasons: Vec<CollectedSeason>,
}

/// A movie in the user's watched history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchedMovie {
    /// Number of plays.
    #[serde(default)]
    pub plays: u32,
    /// Last watch.
    #[serde(default)]
    pub last_watched_at: Option<DateTime<Utc>>,
    /// The movie.
    pub movie: Movie,
}

/// A watched episode inside a watched season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedEpisode {
    /// Episode number.
    pub number: u32,
    /// Number of plays.
    #[serde(default)]
    pub plays: u32,
    /// Last watch.
    #[serde(default)]
    pub last_watched_at: Option<DateTime<Utc>>,
}

/// A watched season inside a watched show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedSeason {
    /// Season number.
    pub number: u32,
    /// Episodes.
    #[serde(default)]
    pub episodes: Vec<WatchedEpisode>,
}

/// A show in the user's watched history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchedShow {
    /// Number of plays.
    #[serde(default)]
    pub plays: u32,
    /// Last watch.
    #[serde(default)]
    pub last_watched_at: Option<DateTime<Utc>>,
    /// The show.
    pub show: Show,
    /// Seasons (omitted with `extended=noseasons`).
    #[serde(default)]
    pub seasons: Vec<WatchedSeason>,
}

/// A rated movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatedMovie {
    /// When it was rated.
    #[serde(default)]
    pub rated_at: Option<DateTime<Utc>>,
    /// Rating value.
    pub rating: u8,
    /// The movie.
    pub movie: Movie,
}

/// A rated show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatedShow {
    /// When it was rated.
    #[serde(default)]
    pub rated_at: Option<DateTime<Utc>>,
    /// Rating value.
    pub rating: u8,
    /// The show.
    pub show: Show,
}

/// A rated season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatedSeason {
    /// When it was rated.
    #[serde(default)]
    pub rated_at: Option<DateTime<Utc>>,
    /// Rating value.
    pub rating: u8,
    /// The season.
    pub season: Season,
    /// Its show.
    #[serde(default)]
    pub show: Option<Show>,
}

/// A rated episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatedEpisode {
    /// When it was rated.
    #[serde(default)]
    pub rated_at: Option<DateTime<Utc>>,
    /// Rating value.
    pub rating: u8,
    /// The episode.
    pub episode: Episode,
    /// Its show.
    #[serde(default)]
    pub show: Option<Show>,
}

/// A watchlisted movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchlistedMovie {
    /// When it was listed.
    #[serde(default)]
    pub listed_at: Option<DateTime<Utc>>,
    /// The movie.
    pub movie: Movie,
}

/// A watchlisted show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchlistedShow {
    /// When it was listed.
    #[serde(default)]
    pub listed_at: Option<DateTime<Utc>>,
    /// The show.
    pub show: Show,
}

/// A watchlisted season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchlistedSeason {
    /// When it was listed.
    #[serde(default)]
    pub listed_at: Option<DateTime<Utc>>,
    /// The season.
    pub season: Season,
    /// Its show.
    #[serde(default)]
    pub show: Option<Show>,
}

/// A watchlisted episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchlistedEpisode {
    /// When it was listed.
    #[serde(default)]
    pub listed_at: Option<DateTime<Utc>>,
    /// The episode.
    pub episode: Episode,
    /// Its show.
    #[serde(default)]
    pub show: Option<Show>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_empty_sync_items_is_not_postable() {
        // Arrange
        let empty = SyncItems::default();
        let one = SyncItems {
            episodes: vec![SyncItem::from_ids(Ids {
                trakt: Some(73640),
                ..Ids::default()
            })],
            ..SyncItems::default()
        };

        let unidentified = SyncItems {
            movies: vec![SyncItem::from_ids(Ids::default())],
            ..one.clone()
        };

        // Act & Assert
        assert!(!empty.is_postable());
        assert!(one.is_postable());
        assert!(!unidentified.is_empty());
        assert!(!unidentified.is_postable());
    }

    #[test]
    fn test_sync_items_skip_empty_lists() {
        // Arrange
        let items = SyncItems {
            movies: vec![
                SyncItem::from_ids(Ids {
                    imdb: Some(String::from("tt0372784")),
                    ..Ids::default()
                })
                .with_rating(Rating::new(9).unwrap()),
            ],
            ..SyncItems::default()
        };

        // Act
        let json = serde_json::to_value(&items).unwrap();

        // Assert
        assert_eq!(
            json,
            serde_json::json!({"movies": [{"ids": {"imdb": "tt0372784"}, "rating": 9}]})
        );
    }

    #[test]
    fn test_collection_metadata_wire_names() {
        // Arrange
        let item = SyncItem {
            metadata: CollectionMetadata {
                media_type: Some(MediaType::Bluray),
                resolution: Some(Resolution::Uhd4k),
                audio: Some(AudioFormat::DolbyTruehd),
                audio_channels: Some(AudioChannels::Surround71),
                is_3d: Some(false),
            },
            ..SyncItem::from_ids(Ids {
                trakt: Some(28),
                ..Ids::default()
            })
        };

        // Act
        let json = serde_json::to_value(&item).unwrap();
        let back: SyncItem = serde_json::from_value(json.clone()).unwrap();

        // Assert
        assert_eq!(json["media_type"], "bluray");
        assert_eq!(json["resolution"], "uhd_4k");
        assert_eq!(json["audio"], "dolby_truehd");
        assert_eq!(json["audio_channels"], "7.1");
        assert_eq!(json["3d"], false);
        assert_eq!(back, item);
    }

    #[test]
    fn test_parse_sync_result_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/trakt/sync_ratings_add.json");

        // Act
        let result: SyncResult = serde_json::from_str(json).unwrap();

        // Assert
        let added = result.added.unwrap();
        assert_eq!(added.movies, 1);
        assert_eq!(added.episodes, 2);
        assert_eq!(result.not_found.movies.len(), 1);
        assert_eq!(
            result.not_found.movies[0].ids.imdb.as_deref(),
            Some("tt0000111")
        );
    }

    #[test]
    fn test_parse_last_activities_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/trakt/sync_last_activities.json");

        // Act
        let activities: LastActivities = serde_json::from_str(json).unwrap();

        // Assert
        assert!(activities.all.is_some());
        assert!(activities.movies.watched_at.is_some());
        assert!(activities.seasons.watched_at.is_none());
    }
}
