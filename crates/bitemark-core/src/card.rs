//! Restaurant card view model
//!
//! Composes a restaurant's catalog data with its live bookmark status.
//! Image URLs and navigation are supplied by the caller through the
//! [`PosterResolver`] and [`Navigator`] capabilities.

use tracing::debug;

use crate::models::{CardDisplayModel, Restaurant, RestaurantId};
use crate::store::BookmarkStore;

/// Separator placed between tags on a card
pub const TAG_SEPARATOR: &str = " • ";

/// Maps an image key to a fully-qualified URL
pub trait PosterResolver {
    fn resolve(&self, key: &str) -> String;
}

impl<F> PosterResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, key: &str) -> String {
        self(key)
    }
}

/// Opens the detail view of a restaurant
pub trait Navigator {
    fn navigate(&self, id: &RestaurantId);
}

impl<F> Navigator for F
where
    F: Fn(&RestaurantId),
{
    fn navigate(&self, id: &RestaurantId) {
        self(id)
    }
}

/// Join tags for display
///
/// An empty tag list formats to an empty string.
pub fn format_tags(tags: &[String]) -> String {
    tags.join(TAG_SEPARATOR)
}

/// View model behind one restaurant card
#[derive(Debug, Clone, PartialEq)]
pub struct CardViewModel {
    restaurant: Restaurant,
}

impl CardViewModel {
    pub fn new(restaurant: Restaurant) -> Self {
        Self { restaurant }
    }

    pub fn id(&self) -> &RestaurantId {
        &self.restaurant.id
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    /// Query the store for this card's bookmark status
    pub fn is_bookmarked(&self, store: &BookmarkStore) -> bool {
        store.is_bookmarked(self.id())
    }

    /// Flip this card's bookmark and return the new status
    pub fn toggle_bookmark(&self, store: &mut BookmarkStore) -> bool {
        let id = self.id();
        let bookmarked = if store.is_bookmarked(id) {
            store.remove_bookmark(id);
            false
        } else {
            store.add_bookmark(id);
            true
        };
        debug!(restaurant_id = %id, bookmarked, "bookmark toggled");
        bookmarked
    }

    /// Resolve the poster image URL
    pub fn resolve_poster<R>(&self, resolver: &R) -> String
    where
        R: PosterResolver + ?Sized,
    {
        resolver.resolve(&self.restaurant.images.poster)
    }

    /// Hand this card's restaurant to the navigator
    pub fn on_activate<N>(&self, navigator: &N)
    where
        N: Navigator + ?Sized,
    {
        navigator.navigate(self.id());
    }

    /// Tags joined with [`TAG_SEPARATOR`]
    pub fn tag_line(&self) -> String {
        format_tags(&self.restaurant.tags)
    }

    /// Build the render-ready model from current store state
    pub fn display_model<R>(&self, store: &BookmarkStore, resolver: &R) -> CardDisplayModel
    where
        R: PosterResolver + ?Sized,
    {
        let restaurant = &self.restaurant;
        CardDisplayModel {
            id: restaurant.id.clone(),
            name: restaurant.name.clone(),
            tags: restaurant.tags.clone(),
            tag_line: self.tag_line(),
            distance: restaurant.distance.clone(),
            time: restaurant.time.clone(),
            rating: restaurant.rating,
            review_count: restaurant.review_count,
            is_bookmarked: self.is_bookmarked(store),
            poster_url: self.resolve_poster(resolver),
        }
    }
}

impl From<Restaurant> for CardViewModel {
    fn from(restaurant: Restaurant) -> Self {
        Self::new(restaurant)
    }
}
