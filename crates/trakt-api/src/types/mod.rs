//! Response entities and request bodies.
//!
//! Passive serde structs; fields the API omits in its minimal payload are
//! `Option` or defaulted.

mod media;
mod search;
mod sync;

pub use media::{
    Airs, Alias, CastMember, Comment, Crew, CrewMember, Episode, EpisodeProgress, Ids, Movie,
    People, Person, Ratings, Release, Season, SeasonProgress, Show, ShowProgress, Translation,
    TrendingMovie, TrendingShow, UpdatedMovie, UpdatedShow, User,
};
pub use search::{List, SearchResult};
pub use sync::{
    ActivityTimes, AudioChannels, AudioFormat, CollectedEpisode, CollectedMovie, CollectedSeason,
    CollectedShow, CollectionMetadata, LastActivities, MediaType, PlaybackItem, RatedEpisode,
    RatedMovie, RatedSeason, RatedShow, Resolution, SyncCounts, SyncItem, SyncItems, SyncResult,
    WatchedEpisode, WatchedMovie, WatchedSeason, WatchedShow, WatchlistedEpisode,
    WatchlistedMovie, WatchlistedSeason, WatchlistedShow,
};
