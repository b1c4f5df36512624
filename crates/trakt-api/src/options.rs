//! Query option encoders.
//!
//! Each enumeration maps a semantic option to the string the Trakt API
//! expects on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TraktError;

/// HTTP verb of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Converts to the `reqwest` method type.
    #[must_use]
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Per-endpoint policy over bearer-token authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthRequirement {
    /// Authentication is only sent when the caller asks for it.
    NotRequired,
    /// Same as `NotRequired`; the endpoint returns extra data when authenticated.
    Optional,
    /// Authentication is always sent.
    Required,
    /// Authentication is never sent.
    Forbidden,
}

/// Controls how much detail the API returns for media objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Extended {
    /// Not sent; the API returns its default (minimal) payload.
    #[default]
    Unspecified,
    /// `min`
    Minimal,
    /// `full`
    Full,
    /// `images`
    Images,
    /// `full,images`
    FullAndImages,
    /// `metadata` (collection metadata)
    Metadata,
    /// `episodes` (include episodes in season lists)
    Episodes,
    /// `noseasons` (omit seasons from show lists)
    NoSeasons,
}

impl Extended {
    /// Returns the wire value, or `None` for [`Extended::Unspecified`].
    #[must_use]
    pub const fn wire_value(self) -> Option<&'static str> {
        match self {
            Self::Unspecified => None,
            Self::Minimal => Some("min"),
            Self::Full => Some("full"),
            Self::Images => Some("images"),
            Self::FullAndImages => Some("full,images"),
            Self::Metadata => Some("metadata"),
            Self::Episodes => Some("episodes"),
            Self::NoSeasons => Some("noseasons"),
        }
    }
}

impl std::str::FromStr for Extended {
    type Err = TraktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Unspecified),
            "min" => Ok(Self::Minimal),
            "full" => Ok(Self::Full),
            "images" => Ok(Self::Images),
            "full,images" => Ok(Self::FullAndImages),
            "metadata" => Ok(Self::Metadata),
            "episodes" => Ok(Self::Episodes),
            "noseasons" => Ok(Self::NoSeasons),
            other => Err(TraktError::InvalidRequest(format!(
                "unknown extended option: {other}"
            ))),
        }
    }
}

/// Page number and page size for list endpoints that support pagination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Items per page.
    pub limit: Option<u32>,
}

impl Pagination {
    /// Creates pagination options.
    #[must_use]
    pub const fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self { page, limit }
    }
}

/// A user rating between 1 and 10.
///
/// Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Creates a rating.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` when `value` is outside `1..=10`.
    pub fn new(value: u8) -> Result<Self, TraktError> {
        if (1..=10).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TraktError::InvalidRequest(format!(
                "Rating must be between 1 and 10, got {value}."
            )))
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = TraktError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Item type filter for text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Movies.
    Movie,
    /// Shows.
    Show,
    /// Episodes.
    Episode,
    /// People.
    Person,
    /// Custom lists.
    List,
}

impl SearchType {
    /// Returns the wire value.
    #[must_use]
    pub const fn wire_value(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Show => "show",
            Self::Episode => "episode",
            Self::Person => "person",
            Self::List => "list",
        }
    }
}

/// External id namespace for id lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdType {
    /// Trakt movie id.
    TraktMovie,
    /// Trakt show id.
    TraktShow,
    /// Trakt episode id.
    TraktEpisode,
    /// IMDB id (`tt...`).
    Imdb,
    /// TMDB id.
    Tmdb,
    /// TVDB id.
    Tvdb,
    /// `TVRage` id.
    TvRage,
}

impl IdType {
    /// Returns the wire value.
    #[must_use]
    pub const fn wire_value(self) -> &'static str {
        match self {
            Self::TraktMovie => "trakt-movie",
            Self::TraktShow => "trakt-show",
            Self::TraktEpisode => "trakt-episode",
            Self::Imdb => "imdb",
            Self::Tmdb => "tmdb",
            Self::Tvdb => "tvdb",
            Self::TvRage => "tvrage",
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_extended_unspecified_has_no_wire_value() {
        // Arrange & Act & Assert
        assert_eq!(Extended::Unspecified.wire_value(), None);
        assert_eq!(Extended::FullAndImages.wire_value(), Some("full,images"));
    }

    #[test]
    fn test_extended_parses_wire_values() {
        // Arrange & Act
        let parsed: Extended = "full".parse().unwrap();

        // Assert
        assert_eq!(parsed, Extended::Full);
        assert!("everything".parse::<Extended>().is_err());
    }

    #[test]
    fn test_rating_bounds() {
        // Arrange & Act & Assert
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(11).is_err());
        assert_eq!(Rating::new(10).unwrap().value(), 10);
    }

    #[test]
    fn test_rating_serializes_as_integer() {
        // Arrange
        let rating = Rating::new(8).unwrap();

        // Act
        let json = serde_json::to_string(&rating).unwrap();
        let back: Rating = serde_json::from_str(&json).unwrap();

        // Assert
        assert_eq!(json, "8");
        assert_eq!(back, rating);
        assert!(serde_json::from_str::<Rating>("42").is_err());
    }

    #[test]
    fn test_http_method_display() {
        // Arrange & Act & Assert
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(HttpMethod::Post.to_reqwest(), reqwest::Method::POST);
    }
}
