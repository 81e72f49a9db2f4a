//! Restaurant catalog
//!
//! Loads the restaurants a session renders cards for. The catalog is a JSON
//! array of restaurant objects:
//!
//! ```json
//! [
//!   {
//!     "id": "r1",
//!     "name": "Luigi's",
//!     "images": { "poster": "luigi" },
//!     "tags": ["Italian", "Pizza"],
//!     "distance": "1.2 km",
//!     "time": "25 min",
//!     "rating": 4.5,
//!     "reviewCount": 87
//!   }
//! ]
//! ```

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::card::CardViewModel;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Restaurant, RestaurantId};

/// Restaurants with unique, non-empty identifiers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate ids
    pub fn new(restaurants: Vec<Restaurant>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(restaurants.len());
        for (index, restaurant) in restaurants.iter().enumerate() {
            if restaurant.id.as_str().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(&restaurant.id) {
                return Err(CatalogError::DuplicateId(restaurant.id.clone()));
            }
        }
        Ok(Self { restaurants })
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let restaurants: Vec<Restaurant> = serde_json::from_str(json)?;
        Self::new(restaurants)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&content)?;
        debug!(path = %path.display(), restaurants = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Get all restaurants in catalog order
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Get a restaurant by ID
    pub fn get(&self, id: &RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| &r.id == id)
    }

    /// Card view model for one restaurant
    pub fn card(&self, id: &RestaurantId) -> Option<CardViewModel> {
        self.get(id).cloned().map(CardViewModel::new)
    }

    /// Card view models for every restaurant, in catalog order
    pub fn cards(&self) -> Vec<CardViewModel> {
        self.restaurants
            .iter()
            .cloned()
            .map(CardViewModel::new)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
