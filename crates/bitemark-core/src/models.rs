//! Data models for Bitemark
//!
//! Defines the core data structures: RestaurantId, BookmarkRecord,
//! Restaurant and CardDisplayModel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a catalog entry
///
/// The catalog that hands these out owns their shape; Bitemark only
/// compares them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(String);

impl RestaurantId {
    /// Create an identifier from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RestaurantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RestaurantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Marks a restaurant as bookmarked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRecord {
    pub restaurant_id: RestaurantId,
}

impl BookmarkRecord {
    pub fn new(restaurant_id: RestaurantId) -> Self {
        Self { restaurant_id }
    }
}

/// Image keys attached to a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantImages {
    /// Key handed to the poster resolver
    pub poster: String,
}

/// A restaurant as supplied by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Unique identifier
    pub id: RestaurantId,
    /// Display name
    pub name: String,
    /// Image keys
    pub images: RestaurantImages,
    /// Cuisine tags, absent in the catalog means none
    #[serde(default, deserialize_with = "nullable_tags")]
    pub tags: Vec<String>,
    /// Pre-formatted distance ("1.2 km")
    pub distance: String,
    /// Pre-formatted delivery time ("25 min")
    pub time: String,
    /// Average rating
    pub rating: f32,
    /// Number of reviews behind the rating
    pub review_count: u32,
}

impl Restaurant {
    /// Create a restaurant with empty tags and no reviews
    pub fn new(
        id: impl Into<RestaurantId>,
        name: impl Into<String>,
        poster: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            images: RestaurantImages {
                poster: poster.into(),
            },
            tags: Vec::new(),
            distance: String::new(),
            time: String::new(),
            rating: 0.0,
            review_count: 0,
        }
    }

    /// Set all tags (replacing existing)
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the pre-formatted distance and time
    pub fn with_eta(mut self, distance: impl Into<String>, time: impl Into<String>) -> Self {
        self.distance = distance.into();
        self.time = time.into();
        self
    }

    /// Set the rating and its review count
    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }
}

/// Treat `"tags": null` like a missing field
fn nullable_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Render-ready view of one restaurant card
///
/// Recomputed on every render; never a source of truth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDisplayModel {
    pub id: RestaurantId,
    pub name: String,
    pub tags: Vec<String>,
    /// Tags joined for display
    pub tag_line: String,
    pub distance: String,
    pub time: String,
    pub rating: f32,
    pub review_count: u32,
    pub is_bookmarked: bool,
    pub poster_url: String,
}
